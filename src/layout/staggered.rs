use crate::{
    foundation::core::{Constraints, IntOffset},
    foundation::error::{StaggerError, StaggerResult},
    layout::MeasurePolicy,
    measure::{Measurable, MeasureResult, PlacedChild},
};

/// Row count used when none is given.
pub const DEFAULT_ROWS: usize = 3;

/// Lays children out across a fixed number of horizontal rows.
///
/// Child `i` always goes to row `i % rows`, whatever its size. Each row grows to the right
/// in input order; rows stack top to bottom, each as tall as its tallest child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredGrid {
    rows: usize, // >= 1
}

impl Default for StaggeredGrid {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

impl StaggeredGrid {
    pub fn new(rows: i64) -> StaggerResult<Self> {
        if rows <= 0 {
            return Err(StaggerError::invalid_argument(format!(
                "StaggeredGrid rows must be >= 1, got {rows}"
            )));
        }
        let rows = usize::try_from(rows).map_err(|_| {
            StaggerError::invalid_argument(format!("StaggeredGrid rows {rows} is too large"))
        })?;
        Ok(Self { rows })
    }

    /// One child per row: a plain vertical stack.
    pub(crate) fn one_per_row(children: usize) -> Self {
        Self {
            rows: children.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn row_for_index(&self, index: usize) -> usize {
        index % self.rows
    }

    /// Measure every child with `constraints` unchanged, then place them row by row.
    ///
    /// The container is as wide as its widest row and as tall as all row heights summed,
    /// both coerced into `constraints`. Offsets are returned in input order.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(rows = self.rows, children = children.len())
    )]
    pub fn layout<M: Measurable>(
        &self,
        children: &[M],
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        // rows at or past the child count stay empty and add no height
        let tracks = self.rows.min(children.len()).max(1);
        let mut row_widths = vec![0i32; tracks];
        let mut row_heights = vec![0i32; tracks];

        let mut placeables = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            let placeable = child.measure(constraints)?;
            let row = self.row_for_index(index);
            row_widths[row] = row_widths[row].saturating_add(placeable.width);
            row_heights[row] = row_heights[row].max(placeable.height);
            placeables.push(placeable);
        }

        let widest = row_widths.iter().copied().max().unwrap_or(0);
        let width = constraints.constrain_width(widest);
        let height = constraints
            .constrain_height(row_heights.iter().fold(0i32, |acc, h| acc.saturating_add(*h)));

        let mut row_y = vec![0i32; tracks];
        for r in 1..tracks {
            row_y[r] = row_y[r - 1].saturating_add(row_heights[r - 1]);
        }

        let mut row_x = vec![0i32; tracks];
        let mut placed = Vec::with_capacity(placeables.len());
        for (index, placeable) in placeables.iter().enumerate() {
            let row = self.row_for_index(index);
            placed.push(PlacedChild {
                offset: IntOffset::new(row_x[row], row_y[row]),
                size: placeable.size(),
            });
            row_x[row] = row_x[row].saturating_add(placeable.width);
        }

        tracing::debug!(width, height, "staggered grid measured");
        Ok(MeasureResult::new(width, height, placed))
    }
}

impl MeasurePolicy for StaggeredGrid {
    fn measure(
        &self,
        children: &[&dyn Measurable],
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        self.layout(children, constraints)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/staggered.rs"]
mod tests;
