use super::*;
use crate::{AlignmentLine, Column, Container, IntOffset, IntSize, Leaf, StaggeredGrid};

#[test]
fn modifiers_chain_outward() {
    // padding outside, baseline-to-top inside
    let text = Leaf::new(60, 20)
        .with_first_baseline(14)
        .first_baseline_to_top(FirstBaselineToTop::from_px(24))
        .padding(Padding::all(3).unwrap());

    let r = text
        .measure_with_placement(Constraints::unbounded())
        .unwrap();
    assert_eq!(r.size(), IntSize::new(66, 36));
    assert_eq!(r.children[0].offset, IntOffset::new(3, 3));

    let p = text.measure(Constraints::unbounded()).unwrap();
    assert_eq!(p.get(AlignmentLine::FirstBaseline), Some(27));
}

#[test]
fn modified_children_lay_out_in_a_grid() {
    let children: Vec<Box<dyn Measurable>> = vec![
        Box::new(Leaf::new(10, 10).padding(Padding::all(1).unwrap())),
        Box::new(Leaf::new(20, 5)),
        Box::new(Leaf::new(5, 5).padding(Padding::from_px(0, 0, 5, 0).unwrap())),
    ];
    let grid = Container::new(StaggeredGrid::new(2).unwrap(), children);
    let r = grid.measure_children(Constraints::unbounded()).unwrap();

    assert_eq!(r.size(), IntSize::new(22, 17));
    assert_eq!(r.children[1].offset, IntOffset::new(0, 12));
    assert_eq!(r.children[2].offset, IntOffset::new(12, 0));
}

#[test]
fn containers_nest_as_children() {
    let cells: Vec<Box<dyn Measurable>> = vec![Box::new(Leaf::new(4, 4)), Box::new(Leaf::new(4, 6))];
    let inner = Container::new(StaggeredGrid::new(2).unwrap(), cells);
    let rows: Vec<Box<dyn Measurable>> = vec![Box::new(inner), Box::new(Leaf::new(30, 2))];
    let outer = Container::new(Column, rows);
    let r = outer.measure_children(Constraints::unbounded()).unwrap();
    assert_eq!(r.children[0].size, IntSize::new(4, 10));
    assert_eq!(r.children[1].offset, IntOffset::new(0, 10));
    assert_eq!(r.size(), IntSize::new(30, 12));
}
