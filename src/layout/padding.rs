use crate::{
    foundation::core::{Constraints, Density, Edges, IntOffset},
    foundation::error::{StaggerError, StaggerResult},
    layout::modifier::LayoutModifier,
    measure::{Measurable, MeasureResult},
};

/// Insets a child by whole-pixel amounts on each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Padding {
    pub fn from_px(left: i32, top: i32, right: i32, bottom: i32) -> StaggerResult<Self> {
        if left < 0 || top < 0 || right < 0 || bottom < 0 {
            return Err(StaggerError::validation(format!(
                "Padding must be >= 0, got ({left}, {top}, {right}, {bottom})"
            )));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn all(px: i32) -> StaggerResult<Self> {
        Self::from_px(px, px, px, px)
    }

    pub fn from_edges(edges: Edges, density: Density) -> StaggerResult<Self> {
        Self::from_px(
            density.round_to_px(edges.left),
            density.round_to_px(edges.top),
            density.round_to_px(edges.right),
            density.round_to_px(edges.bottom),
        )
    }

    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl LayoutModifier for Padding {
    fn measure(
        &self,
        child: &dyn Measurable,
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        let horizontal = self.horizontal();
        let vertical = self.vertical();
        let placeable = child.measure(constraints.deflate(horizontal, vertical))?;

        let width = constraints.constrain_width(placeable.width.saturating_add(horizontal));
        let height = constraints.constrain_height(placeable.height.saturating_add(vertical));
        Ok(MeasureResult::wrapping(
            &placeable,
            width,
            height,
            IntOffset::new(self.left, self.top),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/padding.rs"]
mod tests;
