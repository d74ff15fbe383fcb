use super::*;
use crate::scene::dsl::{SceneBuilder, container, leaf, text};

#[test]
fn json_defaults_fill_in() {
    let scene = Scene::from_json_str(r#"{ "layout": { "staggered_grid": {} } }"#).unwrap();
    assert_eq!(scene.density, 1.0);
    assert_eq!(scene.direction, LayoutDirection::Ltr);
    assert_eq!(scene.constraints, Constraints::unbounded());
    assert_eq!(scene.layout, LayoutSpec::StaggeredGrid { rows: 3 });
    assert!(scene.children.is_empty());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Scene::from_json_str(r#"{ "layout": "diagonal" }"#).unwrap_err();
    assert!(matches!(err, StaggerError::Serde(_)));
}

#[test]
fn negative_rows_surface_as_invalid_argument() {
    let scene =
        Scene::from_json_str(r#"{ "layout": { "staggered_grid": { "rows": -2 } } }"#).unwrap();
    let err = scene.measure().unwrap_err();
    assert!(matches!(err, StaggerError::InvalidArgument(_)));
}

#[test]
fn modifiers_resolve_through_scene_density() {
    let scene = SceneBuilder::column()
        .density(2.0)
        .child(text(60, 30, 20).first_baseline_to_top(Dp(16.0)))
        .child(leaf(10, 10).padding(Edges::symmetric(Dp(5.0), Dp(0.0))))
        .build()
        .unwrap();
    let r = scene.measure().unwrap();
    // 32px baseline distance pushes the text down by 12
    assert_eq!(r.children[0].size, IntSize::new(60, 42));
    assert_eq!(r.children[1].offset, IntOffset::new(0, 42));
    assert_eq!(r.children[1].size, IntSize::new(30, 10));
    assert_eq!((r.width, r.height), (60, 52));
}

#[test]
fn missing_baseline_in_scene_fails() {
    let scene = SceneBuilder::column()
        .child(leaf(10, 10).first_baseline_to_top(Dp(8.0)))
        .build()
        .unwrap();
    assert!(matches!(
        scene.measure().unwrap_err(),
        StaggerError::UnsupportedAlignmentLine(_)
    ));
}

#[test]
fn nested_containers_measure_recursively() {
    let scene = SceneBuilder::column()
        .child(container(
            LayoutSpec::StaggeredGrid { rows: 2 },
            vec![leaf(4, 4), leaf(4, 6), leaf(4, 4)],
        ))
        .child(leaf(2, 2))
        .build()
        .unwrap();
    let r = scene.measure().unwrap();
    assert_eq!(r.children[0].size, IntSize::new(8, 10));
    assert_eq!(r.children[1].offset, IntOffset::new(0, 10));
}

#[test]
fn rtl_report_mirrors_x() {
    let scene = SceneBuilder::staggered_grid(1)
        .direction(LayoutDirection::Rtl)
        .children([leaf(10, 5), leaf(20, 5)])
        .build()
        .unwrap();
    let report = scene.report().unwrap();
    assert_eq!(report.width, 30);
    assert_eq!(
        report.children,
        vec![
            ChildReport {
                x: 20,
                y: 0,
                width: 10,
                height: 5
            },
            ChildReport {
                x: 0,
                y: 0,
                width: 20,
                height: 5
            },
        ]
    );
}

#[test]
fn scene_json_survives_a_rewrite() {
    let scene = SceneBuilder::staggered_grid(2)
        .child(text(30, 12, 9).padding(Edges::all(Dp(1.0))))
        .build()
        .unwrap();
    let again = Scene::from_json_str(&scene.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again.children, scene.children);
    assert_eq!(again.measure().unwrap(), scene.measure().unwrap());
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = Scene::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
