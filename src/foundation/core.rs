use crate::foundation::error::{StaggerError, StaggerResult};

/// Min/max bounds on width and height, in whole pixels.
///
/// A maximum of [`Constraints::INFINITY`] means "unbounded" along that axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    /// Sentinel for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    pub fn new(
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    ) -> StaggerResult<Self> {
        let c = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        c.validate()?;
        Ok(c)
    }

    pub const fn unbounded() -> Self {
        Self {
            min_width: 0,
            max_width: Self::INFINITY,
            min_height: 0,
            max_height: Self::INFINITY,
        }
    }

    /// Constraints that admit exactly one size.
    pub fn fixed(width: i32, height: i32) -> StaggerResult<Self> {
        Self::new(width, width, height, height)
    }

    pub fn validate(&self) -> StaggerResult<()> {
        if self.min_width < 0 || self.min_height < 0 {
            return Err(StaggerError::validation(
                "Constraints minimums must be >= 0",
            ));
        }
        if self.min_width > self.max_width {
            return Err(StaggerError::validation(format!(
                "Constraints min_width ({}) must be <= max_width ({})",
                self.min_width, self.max_width
            )));
        }
        if self.min_height > self.max_height {
            return Err(StaggerError::validation(format!(
                "Constraints min_height ({}) must be <= max_height ({})",
                self.min_height, self.max_height
            )));
        }
        Ok(())
    }

    pub fn has_bounded_width(self) -> bool {
        self.max_width != Self::INFINITY
    }

    pub fn has_bounded_height(self) -> bool {
        self.max_height != Self::INFINITY
    }

    // min/max rather than `clamp` so hand-built inverted bounds never panic.
    pub fn constrain_width(self, width: i32) -> i32 {
        width.max(self.min_width).min(self.max_width)
    }

    pub fn constrain_height(self, height: i32) -> i32 {
        height.max(self.min_height).min(self.max_height)
    }

    pub fn constrain(self, size: IntSize) -> IntSize {
        IntSize::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    /// Shrink both bounds by the given insets, never below zero. Unbounded maxima stay unbounded.
    pub fn deflate(self, horizontal: i32, vertical: i32) -> Self {
        fn shrink(v: i32, by: i32) -> i32 {
            if v == Constraints::INFINITY {
                v
            } else {
                v.saturating_sub(by).max(0)
            }
        }

        Self {
            min_width: self.min_width.saturating_sub(horizontal).max(0),
            max_width: shrink(self.max_width, horizontal),
            min_height: self.min_height.saturating_sub(vertical).max(0),
            max_height: shrink(self.max_height, vertical),
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<IntSize> for kurbo::Size {
    fn from(value: IntSize) -> Self {
        kurbo::Size::new(f64::from(value.width), f64::from(value.height))
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntOffset {
    pub x: i32,
    pub y: i32,
}

impl IntOffset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<IntOffset> for kurbo::Point {
    fn from(value: IntOffset) -> Self {
        kurbo::Point::new(f64::from(value.x), f64::from(value.y))
    }
}

/// Density-independent length.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

/// Pixels per [`Dp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    density: f32, // must be finite and > 0
}

impl Default for Density {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl Density {
    pub fn new(density: f32) -> StaggerResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(StaggerError::validation(format!(
                "Density must be finite and > 0, got {density}"
            )));
        }
        Ok(Self { density })
    }

    pub fn get(self) -> f32 {
        self.density
    }

    pub fn to_px(self, dp: Dp) -> f32 {
        dp.0 * self.density
    }

    /// Round half up to whole pixels; an infinite length maps to [`Constraints::INFINITY`].
    pub fn round_to_px(self, dp: Dp) -> i32 {
        let px = self.to_px(dp);
        if px.is_infinite() {
            return Constraints::INFINITY;
        }
        (px + 0.5).floor() as i32
    }
}

/// Insets in [`Dp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    #[serde(default)]
    pub left: Dp,
    #[serde(default)]
    pub top: Dp,
    #[serde(default)]
    pub right: Dp,
    #[serde(default)]
    pub bottom: Dp,
}

impl Edges {
    pub fn all(v: Dp) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    pub fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}
