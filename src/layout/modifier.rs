use crate::{
    foundation::core::Constraints,
    foundation::error::StaggerResult,
    layout::{baseline::FirstBaselineToTop, padding::Padding},
    measure::{Measurable, MeasureResult, Placeable},
};

/// Changes how a single wrapped child is measured and placed.
///
/// The returned result must hold exactly one placed child.
pub trait LayoutModifier {
    fn measure(
        &self,
        child: &dyn Measurable,
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult>;
}

/// A measurable wrapped in a [`LayoutModifier`]. Chains nest outward: the last modifier
/// applied is the first to see the incoming constraints.
pub struct Modified<M, L> {
    inner: M,
    modifier: L,
}

impl<M: Measurable, L: LayoutModifier> Modified<M, L> {
    pub fn new(inner: M, modifier: L) -> Self {
        Self { inner, modifier }
    }

    pub fn modifier(&self) -> &L {
        &self.modifier
    }

    pub fn measure_with_placement(&self, constraints: Constraints) -> StaggerResult<MeasureResult> {
        self.modifier.measure(&self.inner, constraints)
    }
}

impl<M: Measurable, L: LayoutModifier> Measurable for Modified<M, L> {
    fn measure(&self, constraints: Constraints) -> StaggerResult<Placeable> {
        Ok(self.measure_with_placement(constraints)?.into_placeable())
    }
}

/// Chaining helpers for any [`Measurable`].
pub trait MeasurableExt: Measurable + Sized {
    fn with_modifier<L: LayoutModifier>(self, modifier: L) -> Modified<Self, L> {
        Modified::new(self, modifier)
    }

    fn padding(self, padding: Padding) -> Modified<Self, Padding> {
        self.with_modifier(padding)
    }

    fn first_baseline_to_top(
        self,
        modifier: FirstBaselineToTop,
    ) -> Modified<Self, FirstBaselineToTop> {
        self.with_modifier(modifier)
    }
}

impl<M: Measurable> MeasurableExt for M {}

#[cfg(test)]
#[path = "../../tests/unit/layout/modifier.rs"]
mod tests;
