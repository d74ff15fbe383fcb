use crate::{
    foundation::core::Constraints,
    foundation::error::StaggerResult,
    layout::{MeasurePolicy, staggered::StaggeredGrid},
    measure::{Measurable, MeasureResult},
};

/// Stacks children top to bottom at `x = 0`, in input order.
///
/// This is the staggered grid with every child in a row of its own: the container is as
/// wide as the widest child and as tall as all children together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Column;

impl Column {
    pub fn layout<M: Measurable>(
        &self,
        children: &[M],
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        StaggeredGrid::one_per_row(children.len()).layout(children, constraints)
    }
}

impl MeasurePolicy for Column {
    fn measure(
        &self,
        children: &[&dyn Measurable],
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        self.layout(children, constraints)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/column.rs"]
mod tests;
