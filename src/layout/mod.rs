pub(crate) mod baseline;
pub(crate) mod column;
pub(crate) mod modifier;
pub(crate) mod padding;
pub(crate) mod staggered;

use crate::{
    foundation::core::Constraints,
    foundation::error::StaggerResult,
    measure::{Measurable, MeasureResult, Placeable},
};

/// How a container measures and positions its children.
pub trait MeasurePolicy {
    fn measure(
        &self,
        children: &[&dyn Measurable],
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult>;
}

impl<P: MeasurePolicy + ?Sized> MeasurePolicy for Box<P> {
    fn measure(
        &self,
        children: &[&dyn Measurable],
        constraints: Constraints,
    ) -> StaggerResult<MeasureResult> {
        (**self).measure(children, constraints)
    }
}

/// A policy bound to its children, usable as a child of another container.
pub struct Container<P> {
    policy: P,
    children: Vec<Box<dyn Measurable>>,
}

impl<P: MeasurePolicy> Container<P> {
    pub fn new(policy: P, children: Vec<Box<dyn Measurable>>) -> Self {
        Self { policy, children }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Measure the children and keep the per-child placements.
    pub fn measure_children(&self, constraints: Constraints) -> StaggerResult<MeasureResult> {
        let refs: Vec<&dyn Measurable> = self.children.iter().map(|c| c.as_ref()).collect();
        self.policy.measure(&refs, constraints)
    }
}

impl<P: MeasurePolicy> Measurable for Container<P> {
    fn measure(&self, constraints: Constraints) -> StaggerResult<Placeable> {
        Ok(self.measure_children(constraints)?.into_placeable())
    }
}
