// File: crates/border-core/src/side.rs
// Summary: Single-edge paint spec (color, width, style) and its merge/lerp rules.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::color::Color;
use crate::lerp::Lerp;

/// How one edge is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// Skip the edge entirely.
    #[default]
    None,
    /// A solid stroke of the side's color and width.
    Solid,
}

/// Validation failure for a side built from untrusted input.
#[derive(Debug, Error, PartialEq)]
pub enum SideError {
    #[error("side width must be finite, got {0}")]
    NonFiniteWidth(f32),
    #[error("side width must be non-negative, got {0}")]
    NegativeWidth(f32),
}

/// One edge's paint spec.
///
/// Immutable value; every transform returns a fresh side. Widths are finite
/// and non-negative, which keeps `Eq` and bitwise hashing sound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSide {
    pub color: Color,
    pub width: f32,
    pub style: BorderStyle,
}

impl BorderSide {
    /// A side that paints nothing and merges with anything.
    pub const NONE: Self = Self {
        color: Color::TRANSPARENT,
        width: 0.0,
        style: BorderStyle::None,
    };

    /// Solid side of `color` and `width`.
    pub fn new(color: Color, width: f32) -> Self {
        debug_assert!(width.is_finite() && width >= 0.0, "side width out of contract: {width}");
        Self { color, width, style: BorderStyle::Solid }
    }

    /// Validated constructor for widths coming from config or user input.
    pub fn try_new(color: Color, width: f32, style: BorderStyle) -> Result<Self, SideError> {
        if !width.is_finite() {
            return Err(SideError::NonFiniteWidth(width));
        }
        if width < 0.0 {
            return Err(SideError::NegativeWidth(width));
        }
        Ok(Self { color, width, style })
    }

    pub fn with_style(self, style: BorderStyle) -> Self {
        Self { style, ..self }
    }

    /// True when the side paints nothing at all.
    pub fn is_none(&self) -> bool {
        self.style == BorderStyle::None && self.width == 0.0
    }

    /// Whether `merge` can fold `a` and `b` into a single equivalent side:
    /// at least one paints nothing, or both share color and style.
    pub fn can_merge(a: &Self, b: &Self) -> bool {
        if a.is_none() || b.is_none() {
            return true;
        }
        a.style == b.style && a.color == b.color
    }

    /// Combine two sides into one, summing widths.
    /// Precondition: `can_merge(a, b)`.
    pub fn merge(a: &Self, b: &Self) -> Self {
        debug_assert!(Self::can_merge(a, b), "merge on unmergeable sides: {a} vs {b}");
        if a.is_none() {
            return *b;
        }
        if b.is_none() {
            return *a;
        }
        Self { color: a.color, width: a.width + b.width, style: a.style }
    }

    /// This side with its width multiplied by `t`; `t <= 0` removes the side.
    pub fn scale(&self, t: f32) -> Self {
        Self {
            color: self.color,
            width: (self.width * t).max(0.0),
            style: if t <= 0.0 { BorderStyle::None } else { self.style },
        }
    }

    /// Interpolate between two sides; exact at `t == 0` and `t == 1`.
    ///
    /// A none side fades in or out through its own color at zero alpha, so a
    /// vanishing edge dims rather than snapping to the other side's hue.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }
        let width = a.width.lerp(&b.width, t);
        if width < 0.0 {
            // extrapolation past either endpoint collapsed the stroke
            return Self::NONE;
        }
        if a.style == b.style {
            return Self { color: a.color.lerp(&b.color, t), width, style: a.style };
        }
        let color_a = match a.style {
            BorderStyle::Solid => a.color,
            BorderStyle::None => a.color.with_alpha(0),
        };
        let color_b = match b.style {
            BorderStyle::Solid => b.color,
            BorderStyle::None => b.color.with_alpha(0),
        };
        Self { color: color_a.lerp(&color_b, t), width, style: BorderStyle::Solid }
    }
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::NONE
    }
}

// Widths are finite by construction, so total equality holds.
impl Eq for BorderSide {}

impl Hash for BorderSide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.width.to_bits().hash(state);
        self.style.hash(state);
    }
}

impl fmt::Display for BorderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.style {
            BorderStyle::None => "none",
            BorderStyle::Solid => "solid",
        };
        write!(f, "{} {:.1} {}", self.color, self.width, style)
    }
}
