use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Constraints, Density, Dp, Edges, IntOffset, IntSize, LayoutDirection},
    foundation::error::{StaggerError, StaggerResult},
    layout::{
        Container, MeasurePolicy, baseline::FirstBaselineToTop, column::Column,
        modifier::Modified, padding::Padding, staggered::StaggeredGrid,
    },
    measure::{Leaf, Measurable, MeasureResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A serializable layout document: one root container and its child tree.
///
/// A scene is a pure data model that can be:
/// - built programmatically (see [`crate::SceneBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// [`Scene::measure`] turns it into a [`MeasureResult`] for the root container.
pub struct Scene {
    /// Pixels per dp used to resolve every dp length in the scene.
    #[serde(default = "default_density")]
    pub density: f32,
    /// Direction used when reporting absolute placements.
    #[serde(default)]
    pub direction: LayoutDirection,
    /// Constraints handed to the root container.
    #[serde(default)]
    pub constraints: Constraints,
    /// Root layout policy.
    pub layout: LayoutSpec,
    /// Root children, in placement order.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_density() -> f32 {
    1.0
}

fn default_rows() -> i64 {
    StaggeredGrid::default().rows() as i64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Container measure policy.
pub enum LayoutSpec {
    /// Round-robin rows (see [`StaggeredGrid`]).
    StaggeredGrid {
        /// Number of rows; must be >= 1.
        #[serde(default = "default_rows")]
        rows: i64,
    },
    /// Vertical stack (see [`Column`]).
    Column,
}

impl LayoutSpec {
    pub fn policy(&self) -> StaggerResult<Box<dyn MeasurePolicy>> {
        let policy: Box<dyn MeasurePolicy> = match *self {
            LayoutSpec::StaggeredGrid { rows } => Box::new(StaggeredGrid::new(rows)?),
            LayoutSpec::Column => Box::new(Column),
        };
        Ok(policy)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One element of the scene tree plus the modifiers wrapped around it.
pub struct NodeSpec {
    pub kind: NodeKind,
    /// Outermost first.
    #[serde(default)]
    pub modifiers: Vec<ModifierSpec>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Leaf {
        width: i32,
        height: i32,
        #[serde(default)]
        first_baseline: Option<i32>,
        #[serde(default)]
        last_baseline: Option<i32>,
    },
    Container {
        layout: LayoutSpec,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSpec {
    Padding(Edges),
    FirstBaselineToTop { distance: Dp },
}

impl NodeSpec {
    pub fn validate(&self) -> StaggerResult<()> {
        match &self.kind {
            NodeKind::Leaf { width, height, .. } => {
                if *width < 0 || *height < 0 {
                    return Err(StaggerError::validation(format!(
                        "leaf size must be >= 0, got {width}x{height}"
                    )));
                }
            }
            NodeKind::Container { layout, children } => {
                layout.policy()?;
                for child in children {
                    child.validate()?;
                }
            }
        }
        for m in &self.modifiers {
            if let ModifierSpec::Padding(edges) = m {
                for v in [edges.left, edges.top, edges.right, edges.bottom] {
                    if !v.0.is_finite() || v.0 < 0.0 {
                        return Err(StaggerError::validation(format!(
                            "padding must be finite and >= 0, got {}",
                            v.0
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Build the measurable tree for this node, modifiers applied innermost last.
    pub fn build(&self, density: Density) -> StaggerResult<Box<dyn Measurable>> {
        let mut node: Box<dyn Measurable> = match &self.kind {
            NodeKind::Leaf {
                width,
                height,
                first_baseline,
                last_baseline,
            } => Box::new(Leaf {
                size: IntSize::new(*width, *height),
                first_baseline: *first_baseline,
                last_baseline: *last_baseline,
            }),
            NodeKind::Container { layout, children } => {
                Box::new(Container::new(layout.policy()?, build_all(children, density)?))
            }
        };
        for m in self.modifiers.iter().rev() {
            let wrapped: Box<dyn Measurable> = match *m {
                ModifierSpec::Padding(edges) => {
                    Box::new(Modified::new(node, Padding::from_edges(edges, density)?))
                }
                ModifierSpec::FirstBaselineToTop { distance } => {
                    Box::new(Modified::new(node, FirstBaselineToTop::new(distance, density)))
                }
            };
            node = wrapped;
        }
        Ok(node)
    }
}

fn build_all(nodes: &[NodeSpec], density: Density) -> StaggerResult<Vec<Box<dyn Measurable>>> {
    nodes.iter().map(|n| n.build(density)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Measured root container with placements resolved for the scene direction.
pub struct LayoutReport {
    pub width: i32,
    pub height: i32,
    pub direction: LayoutDirection,
    pub children: Vec<ChildReport>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChildReport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Scene {
    pub fn from_json_str(s: &str) -> StaggerResult<Self> {
        serde_json::from_str(s).map_err(|e| StaggerError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> StaggerResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> StaggerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StaggerError::serde(e.to_string()))
    }

    pub fn density(&self) -> StaggerResult<Density> {
        Density::new(self.density)
    }

    pub fn validate(&self) -> StaggerResult<()> {
        self.density()?;
        self.constraints.validate()?;
        self.layout.policy()?;
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self), fields(children = self.children.len()))]
    pub fn measure(&self) -> StaggerResult<MeasureResult> {
        self.validate()?;
        let density = self.density()?;
        let root = Container::new(self.layout.policy()?, build_all(&self.children, density)?);
        root.measure_children(self.constraints)
    }

    pub fn report(&self) -> StaggerResult<LayoutReport> {
        let measured = self.measure()?;
        let children = measured
            .placements(self.direction)
            .into_iter()
            .zip(&measured.children)
            .map(|(IntOffset { x, y }, c)| ChildReport {
                x,
                y,
                width: c.size.width,
                height: c.size.height,
            })
            .collect();
        Ok(LayoutReport {
            width: measured.width,
            height: measured.height,
            direction: self.direction,
            children,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
