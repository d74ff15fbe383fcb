use std::collections::BTreeMap;

use crate::{
    foundation::core::{IntOffset, IntSize, LayoutDirection},
    foundation::error::{StaggerError, StaggerResult},
    measure::AlignmentLine,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// A measured element: its final size plus any alignment lines it computed.
pub struct Placeable {
    pub width: i32,
    pub height: i32,
    alignment_lines: BTreeMap<AlignmentLine, i32>,
}

impl Placeable {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            alignment_lines: BTreeMap::new(),
        }
    }

    pub fn with_alignment_line(mut self, line: AlignmentLine, position: i32) -> Self {
        self.alignment_lines.insert(line, position);
        self
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }

    /// Position of `line` measured from the top edge, if the element reported it.
    pub fn get(&self, line: AlignmentLine) -> Option<i32> {
        self.alignment_lines.get(&line).copied()
    }

    /// Like [`Placeable::get`], but a missing line is an error.
    pub fn require(&self, line: AlignmentLine) -> StaggerResult<i32> {
        self.get(line).ok_or(StaggerError::UnsupportedAlignmentLine(line))
    }

    pub fn alignment_lines(&self) -> impl Iterator<Item = (AlignmentLine, i32)> + '_ {
        self.alignment_lines.iter().map(|(k, v)| (*k, *v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// One child's slot inside a measured container.
pub struct PlacedChild {
    /// Top-left corner relative to the container, left-to-right.
    pub offset: IntOffset,
    /// Size the child reported when measured.
    pub size: IntSize,
}

impl PlacedChild {
    pub fn rect(&self) -> kurbo::Rect {
        kurbo::Rect::from_origin_size(
            kurbo::Point::from(self.offset),
            kurbo::Size::from(self.size),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Output of one measure pass: the container size and where each child goes, in input order.
pub struct MeasureResult {
    pub width: i32,
    pub height: i32,
    pub children: Vec<PlacedChild>,
    alignment_lines: BTreeMap<AlignmentLine, i32>,
}

impl MeasureResult {
    pub fn new(width: i32, height: i32, children: Vec<PlacedChild>) -> Self {
        Self {
            width,
            height,
            children,
            alignment_lines: BTreeMap::new(),
        }
    }

    /// A single-child result that re-exports the child's alignment lines shifted by `offset.y`.
    pub fn wrapping(child: &Placeable, width: i32, height: i32, offset: IntOffset) -> Self {
        let alignment_lines = child
            .alignment_lines()
            .map(|(line, pos)| (line, pos.saturating_add(offset.y)))
            .collect();
        Self {
            width,
            height,
            children: vec![PlacedChild {
                offset,
                size: child.size(),
            }],
            alignment_lines,
        }
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }

    pub fn bounds(&self) -> kurbo::Rect {
        kurbo::Rect::from_origin_size(kurbo::Point::ORIGIN, kurbo::Size::from(self.size()))
    }

    /// Child offsets resolved for `direction`. Right-to-left mirrors each child horizontally
    /// inside the container; vertical positions are unchanged.
    pub fn placements(&self, direction: LayoutDirection) -> Vec<IntOffset> {
        self.children
            .iter()
            .map(|c| match direction {
                LayoutDirection::Ltr => c.offset,
                LayoutDirection::Rtl => IntOffset::new(
                    self.width
                        .saturating_sub(c.size.width)
                        .saturating_sub(c.offset.x),
                    c.offset.y,
                ),
            })
            .collect()
    }

    pub fn into_placeable(self) -> Placeable {
        Placeable {
            width: self.width,
            height: self.height,
            alignment_lines: self.alignment_lines,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/measure/placeable.rs"]
mod tests;
