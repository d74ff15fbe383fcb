use crate::{
    foundation::core::{Constraints, Density, Dp, IntOffset},
    foundation::error::StaggerResult,
    layout::modifier::LayoutModifier,
    measure::{AlignmentLine, Measurable, MeasureResult},
};

/// Y position that puts a child's baseline `desired_distance` pixels below the container top.
pub fn baseline_offset(measured_baseline: i32, desired_distance: i32) -> i32 {
    desired_distance.saturating_sub(measured_baseline)
}

/// Positions a child so its first baseline sits a fixed distance from the top.
///
/// Unlike top padding, the distance is measured to the text baseline, so it stays the
/// same whatever the font ascent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstBaselineToTop {
    distance_px: i32,
}

impl FirstBaselineToTop {
    pub fn new(distance: Dp, density: Density) -> Self {
        Self::from_px(density.round_to_px(distance))
    }

    pub fn from_px(distance_px: i32) -> Self {
        Self { distance_px }
    }

    pub fn distance_px(&self) -> i32 {
        self.distance_px
    }
}

impl LayoutModifier for FirstBaselineToTop {
    #[tracing::instrument(level = "debug", skip_all, fields(distance_px = self.distance_px))]
    fn measure(
        &self,
        child: &dyn Measurable,
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        let placeable = child.measure(constraints)?;
        let first_baseline = placeable.require(AlignmentLine::FirstBaseline)?;

        let y = baseline_offset(first_baseline, self.distance_px);
        let height = placeable.height.saturating_add(y).max(0);
        Ok(MeasureResult::wrapping(
            &placeable,
            placeable.width,
            height,
            IntOffset::new(0, y),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/baseline.rs"]
mod tests;
