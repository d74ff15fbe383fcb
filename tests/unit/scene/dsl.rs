use super::*;
use crate::StaggerError;

#[test]
fn builder_validates_on_build() {
    let err = SceneBuilder::staggered_grid(0)
        .child(leaf(1, 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, StaggerError::InvalidArgument(_)));

    let err = SceneBuilder::column()
        .density(0.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, StaggerError::Validation(_)));

    let err = SceneBuilder::column()
        .child(leaf(-3, 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, StaggerError::Validation(_)));
}

#[test]
fn modifiers_are_recorded_outermost_first() {
    let node = text(40, 20, 14)
        .padding(Edges::all(Dp(2.0)))
        .first_baseline_to_top(Dp(24.0));
    assert_eq!(
        node.modifiers,
        vec![
            ModifierSpec::Padding(Edges::all(Dp(2.0))),
            ModifierSpec::FirstBaselineToTop {
                distance: Dp(24.0)
            },
        ]
    );
}

#[test]
fn built_scene_measures() {
    let scene = SceneBuilder::staggered_grid(2)
        .children([leaf(5, 10), leaf(5, 20), leaf(5, 30), leaf(5, 40)])
        .build()
        .unwrap();
    let r = scene.measure().unwrap();
    assert_eq!((r.width, r.height), (10, 70));
}
