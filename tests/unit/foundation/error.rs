use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StaggerError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        StaggerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StaggerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unsupported_alignment_line_names_the_line() {
    let err = StaggerError::UnsupportedAlignmentLine(AlignmentLine::FirstBaseline);
    assert_eq!(err.to_string(), "unsupported alignment line: first_baseline");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StaggerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
