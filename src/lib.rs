//! Stagger is a small constraint-driven layout engine in the measure/place style of
//! declarative UI toolkits.
//!
//! Every layout runs in two passes over its children:
//!
//! 1. **Measure**: each [`Measurable`] child is measured under [`Constraints`] and reports a
//!    [`Placeable`] (size plus optional alignment lines such as text baselines).
//! 2. **Place**: the layout picks its own size inside the constraints and assigns each child
//!    an offset, returned in input order as a [`MeasureResult`].
//!
//! Provided layouts:
//!
//! - [`StaggeredGrid`]: child `i` goes to row `i % rows`; rows grow rightwards and stack
//!   downwards.
//! - [`Column`]: a vertical stack, one child per row.
//!
//! Provided modifiers (see [`LayoutModifier`]):
//!
//! - [`FirstBaselineToTop`]: place a child so its first baseline sits a fixed distance from
//!   the top.
//! - [`Padding`]: inset a child.
//!
//! Layouts can also be described as JSON [`Scene`] documents and measured with the `stagger`
//! binary.
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod measure;
mod scene;

pub use foundation::core::{Constraints, Density, Dp, Edges, IntOffset, IntSize, LayoutDirection};
pub use foundation::error::{StaggerError, StaggerResult};
pub use layout::baseline::{FirstBaselineToTop, baseline_offset};
pub use layout::column::Column;
pub use layout::modifier::{LayoutModifier, MeasurableExt, Modified};
pub use layout::padding::Padding;
pub use layout::staggered::{DEFAULT_ROWS, StaggeredGrid};
pub use layout::{Container, MeasurePolicy};
pub use measure::{AlignmentLine, Leaf, Measurable, MeasureResult, PlacedChild, Placeable};
pub use scene::dsl::{SceneBuilder, container, leaf, text};
pub use scene::model::{
    ChildReport, LayoutReport, LayoutSpec, ModifierSpec, NodeKind, NodeSpec, Scene,
};
