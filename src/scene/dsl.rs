use crate::{
    foundation::core::{Constraints, Dp, Edges, LayoutDirection},
    foundation::error::StaggerResult,
    scene::model::{LayoutSpec, ModifierSpec, NodeKind, NodeSpec, Scene},
};

pub struct SceneBuilder {
    density: f32,
    direction: LayoutDirection,
    constraints: Constraints,
    layout: LayoutSpec,
    children: Vec<NodeSpec>,
}

impl SceneBuilder {
    pub fn new(layout: LayoutSpec) -> Self {
        Self {
            density: 1.0,
            direction: LayoutDirection::Ltr,
            constraints: Constraints::unbounded(),
            layout,
            children: Vec::new(),
        }
    }

    pub fn staggered_grid(rows: i64) -> Self {
        Self::new(LayoutSpec::StaggeredGrid { rows })
    }

    pub fn column() -> Self {
        Self::new(LayoutSpec::Column)
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn child(mut self, node: NodeSpec) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn build(self) -> StaggerResult<Scene> {
        let scene = Scene {
            density: self.density,
            direction: self.direction,
            constraints: self.constraints,
            layout: self.layout,
            children: self.children,
        };
        scene.validate()?;
        Ok(scene)
    }
}

pub fn leaf(width: i32, height: i32) -> NodeSpec {
    NodeSpec {
        kind: NodeKind::Leaf {
            width,
            height,
            first_baseline: None,
            last_baseline: None,
        },
        modifiers: Vec::new(),
    }
}

/// A leaf that stands in for a line of text with the given first baseline.
pub fn text(width: i32, height: i32, first_baseline: i32) -> NodeSpec {
    NodeSpec {
        kind: NodeKind::Leaf {
            width,
            height,
            first_baseline: Some(first_baseline),
            last_baseline: Some(first_baseline),
        },
        modifiers: Vec::new(),
    }
}

pub fn container(layout: LayoutSpec, children: Vec<NodeSpec>) -> NodeSpec {
    NodeSpec {
        kind: NodeKind::Container { layout, children },
        modifiers: Vec::new(),
    }
}

impl NodeSpec {
    /// Wrap this node in padding. Each call adds a modifier inside the previous ones.
    pub fn padding(mut self, edges: Edges) -> Self {
        self.modifiers.push(ModifierSpec::Padding(edges));
        self
    }

    pub fn first_baseline_to_top(mut self, distance: Dp) -> Self {
        self.modifiers.push(ModifierSpec::FirstBaselineToTop { distance });
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
