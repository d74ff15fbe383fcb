use crate::{
    foundation::core::{Constraints, IntSize},
    foundation::error::StaggerResult,
    measure::{AlignmentLine, Measurable, Placeable},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A fixed-size element, optionally carrying text baselines.
///
/// Measuring coerces the intrinsic size into the incoming constraints; baselines are
/// reported as given.
pub struct Leaf {
    pub size: IntSize,
    pub first_baseline: Option<i32>,
    pub last_baseline: Option<i32>,
}

impl Leaf {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: IntSize::new(width, height),
            first_baseline: None,
            last_baseline: None,
        }
    }

    pub fn with_first_baseline(mut self, baseline: i32) -> Self {
        self.first_baseline = Some(baseline);
        self
    }

    pub fn with_last_baseline(mut self, baseline: i32) -> Self {
        self.last_baseline = Some(baseline);
        self
    }
}

impl Measurable for Leaf {
    fn measure(&self, constraints: Constraints) -> StaggerResult<Placeable> {
        let size = constraints.constrain(self.size);
        let mut placeable = Placeable::new(size.width, size.height);
        if let Some(b) = self.first_baseline {
            placeable = placeable.with_alignment_line(AlignmentLine::FirstBaseline, b);
        }
        if let Some(b) = self.last_baseline {
            placeable = placeable.with_alignment_line(AlignmentLine::LastBaseline, b);
        }
        Ok(placeable)
    }
}
