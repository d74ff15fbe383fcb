//! Measurement contracts shared by every layout: an unplaced [`Measurable`] reports a
//! [`Placeable`] once measured, and a layout turns placeables into a [`MeasureResult`].

pub(crate) mod leaf;
pub(crate) mod placeable;

use std::fmt;

use crate::foundation::{core::Constraints, error::StaggerResult};

pub use leaf::Leaf;
pub use placeable::{MeasureResult, PlacedChild, Placeable};

/// Named horizontal reference offsets a measured element may expose.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentLine {
    /// Baseline of the first line of text.
    FirstBaseline,
    /// Baseline of the last line of text.
    LastBaseline,
}

impl fmt::Display for AlignmentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstBaseline => "first_baseline",
            Self::LastBaseline => "last_baseline",
        })
    }
}

/// An unplaced element that can report its size once measured under [`Constraints`].
///
/// Implementations must return a placeable whose size lies within `constraints`.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> StaggerResult<Placeable>;
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self, constraints: Constraints) -> StaggerResult<Placeable> {
        (**self).measure(constraints)
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measure(&self, constraints: Constraints) -> StaggerResult<Placeable> {
        (**self).measure(constraints)
    }
}
