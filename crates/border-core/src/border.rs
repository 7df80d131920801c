// File: crates/border-core/src/border.rs
// Summary: Axis-fixed border (top/right/bottom/left) and its value algebra.

use std::fmt;

use crate::box_border::{BoxBorder, BoxBorderOps};
use crate::insets::{EdgeInsets, Insets};
use crate::side::BorderSide;

/// Four sides keyed by absolute geometry.
///
/// Constructed once and only read afterwards; `merge`, `scale`, and `lerp`
/// all return fresh values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Border {
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
}

impl Border {
    pub const fn new(top: BorderSide, right: BorderSide, bottom: BorderSide, left: BorderSide) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides identical.
    pub const fn all(side: BorderSide) -> Self {
        Self { top: side, right: side, bottom: side, left: side }
    }

    /// `vertical` paints left and right, `horizontal` paints top and bottom.
    pub const fn symmetric(vertical: BorderSide, horizontal: BorderSide) -> Self {
        Self { top: horizontal, right: vertical, bottom: horizontal, left: vertical }
    }

    /// Edge thicknesses as axis-fixed insets.
    pub fn dimensions(&self) -> Insets {
        Insets::new(self.left.width, self.top.width, self.right.width, self.bottom.width)
    }

    /// True when all four sides share color, width, and style; paint code
    /// uses this to take the single-stroke fast path.
    pub fn is_uniform(&self) -> bool {
        self.right == self.top && self.bottom == self.top && self.left == self.top
    }

    /// Merge with `other` when every side pair is mergeable. `None` means
    /// "not combinable"; callers may try the reverse order or fall back to
    /// painting both borders layered.
    pub fn add(&self, other: &BoxBorder) -> Option<BoxBorder> {
        match other {
            BoxBorder::Axis(other)
                if BorderSide::can_merge(&self.top, &other.top)
                    && BorderSide::can_merge(&self.right, &other.right)
                    && BorderSide::can_merge(&self.bottom, &other.bottom)
                    && BorderSide::can_merge(&self.left, &other.left) =>
            {
                Some(BoxBorder::Axis(Self::merge(self, other)))
            }
            _ => None,
        }
    }

    /// Side-wise merge. Precondition: every side pair is mergeable.
    pub fn merge(a: &Self, b: &Self) -> Self {
        Self {
            top: BorderSide::merge(&a.top, &b.top),
            right: BorderSide::merge(&a.right, &b.right),
            bottom: BorderSide::merge(&a.bottom, &b.bottom),
            left: BorderSide::merge(&a.left, &b.left),
        }
    }

    /// All four sides scaled by `t`.
    pub fn scale(&self, t: f32) -> Self {
        Self {
            top: self.top.scale(t),
            right: self.right.scale(t),
            bottom: self.bottom.scale(t),
            left: self.left.scale(t),
        }
    }

    /// Interpolate between two borders; `None` operands read as "no border".
    /// Exact at the endpoints.
    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Option<Self> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a.scale(1.0 - t)),
            (None, Some(b)) => Some(b.scale(t)),
            (Some(a), Some(b)) => Some(Self {
                top: BorderSide::lerp(&a.top, &b.top, t),
                right: BorderSide::lerp(&a.right, &b.right, t),
                bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
                left: BorderSide::lerp(&a.left, &b.left, t),
            }),
        }
    }
}

impl BoxBorderOps for Border {
    fn dimensions(&self) -> EdgeInsets {
        EdgeInsets::Axis(Border::dimensions(self))
    }

    fn is_uniform(&self) -> bool {
        Border::is_uniform(self)
    }

    fn add(&self, other: &BoxBorder) -> Option<BoxBorder> {
        Border::add(self, other)
    }

    fn scale(&self, t: f32) -> Self {
        Border::scale(self, t)
    }
}

impl fmt::Display for Border {
    /// Uniform borders render as a single-side summary; otherwise only the
    /// non-none sides are listed, always in top, right, bottom, left order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uniform() {
            return write!(f, "Border.all({})", self.top);
        }
        let mut parts = Vec::new();
        if !self.top.is_none() {
            parts.push(format!("top: {}", self.top));
        }
        if !self.right.is_none() {
            parts.push(format!("right: {}", self.right));
        }
        if !self.bottom.is_none() {
            parts.push(format!("bottom: {}", self.bottom));
        }
        if !self.left.is_none() {
            parts.push(format!("left: {}", self.left));
        }
        write!(f, "Border({})", parts.join(", "))
    }
}
