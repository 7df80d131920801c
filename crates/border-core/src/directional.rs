// File: crates/border-core/src/directional.rs
// Summary: Reading-direction-relative border (top/start/end/bottom).

use std::fmt;

use crate::border::Border;
use crate::box_border::{BoxBorder, BoxBorderOps};
use crate::insets::{EdgeInsets, InsetsDirectional};
use crate::side::BorderSide;

/// Four sides keyed relative to text flow: `start` leads, `end` trails.
///
/// Which physical edge `start` lands on depends on a reading direction this
/// crate never sees; the insets stay direction-relative and the layout
/// collaborator resolves them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderDirectional {
    pub top: BorderSide,
    pub start: BorderSide,
    pub end: BorderSide,
    pub bottom: BorderSide,
}

impl BorderDirectional {
    pub const fn new(top: BorderSide, start: BorderSide, end: BorderSide, bottom: BorderSide) -> Self {
        Self { top, start, end, bottom }
    }

    /// All four sides identical.
    pub const fn all(side: BorderSide) -> Self {
        Self { top: side, start: side, end: side, bottom: side }
    }

    /// Edge thicknesses, still keyed by reading direction.
    pub fn dimensions(&self) -> InsetsDirectional {
        InsetsDirectional::new(self.start.width, self.top.width, self.end.width, self.bottom.width)
    }

    /// True when all four sides share color, width, and style.
    pub fn is_uniform(&self) -> bool {
        self.start == self.top && self.end == self.top && self.bottom == self.top
    }

    /// Merge with `other` when the affected side pairs are mergeable.
    ///
    /// Another direction-relative border merges side-wise. An axis-fixed
    /// border combines only when at most one operand carries lateral content:
    /// without a reading direction there is no correct way to fold left/right
    /// into start/end, so that case is rejected rather than guessed.
    pub fn add(&self, other: &BoxBorder) -> Option<BoxBorder> {
        match other {
            BoxBorder::Directional(other)
                if BorderSide::can_merge(&self.top, &other.top)
                    && BorderSide::can_merge(&self.start, &other.start)
                    && BorderSide::can_merge(&self.end, &other.end)
                    && BorderSide::can_merge(&self.bottom, &other.bottom) =>
            {
                Some(BoxBorder::Directional(Self::merge(self, other)))
            }
            BoxBorder::Directional(_) => None,
            BoxBorder::Axis(other) => {
                if !BorderSide::can_merge(&self.top, &other.top)
                    || !BorderSide::can_merge(&self.bottom, &other.bottom)
                {
                    return None;
                }
                if !self.start.is_none() || !self.end.is_none() {
                    if !other.left.is_none() || !other.right.is_none() {
                        return None;
                    }
                    return Some(BoxBorder::Directional(Self {
                        top: BorderSide::merge(&self.top, &other.top),
                        start: self.start,
                        end: self.end,
                        bottom: BorderSide::merge(&self.bottom, &other.bottom),
                    }));
                }
                Some(BoxBorder::Axis(Border {
                    top: BorderSide::merge(&self.top, &other.top),
                    right: other.right,
                    bottom: BorderSide::merge(&self.bottom, &other.bottom),
                    left: other.left,
                }))
            }
        }
    }

    /// Side-wise merge. Precondition: every side pair is mergeable.
    pub fn merge(a: &Self, b: &Self) -> Self {
        Self {
            top: BorderSide::merge(&a.top, &b.top),
            start: BorderSide::merge(&a.start, &b.start),
            end: BorderSide::merge(&a.end, &b.end),
            bottom: BorderSide::merge(&a.bottom, &b.bottom),
        }
    }

    /// All four sides scaled by `t`.
    pub fn scale(&self, t: f32) -> Self {
        Self {
            top: self.top.scale(t),
            start: self.start.scale(t),
            end: self.end.scale(t),
            bottom: self.bottom.scale(t),
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
                start: BorderSide::lerp(&a.start, &b.start, t),
                end: BorderSide::lerp(&a.end, &b.end, t),
                bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
            }),
        }
    }
}

impl BoxBorderOps for BorderDirectional {
    fn dimensions(&self) -> EdgeInsets {
        EdgeInsets::Directional(BorderDirectional::dimensions(self))
    }

    fn is_uniform(&self) -> bool {
        BorderDirectional::is_uniform(self)
    }

    fn add(&self, other: &BoxBorder) -> Option<BoxBorder> {
        BorderDirectional::add(self, other)
    }

    fn scale(&self, t: f32) -> Self {
        BorderDirectional::scale(self, t)
    }
}

impl fmt::Display for BorderDirectional {
    /// Uniform borders render as a single-side summary; otherwise only the
    /// non-none sides are listed, always in top, start, end, bottom order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uniform() {
            return write!(f, "BorderDirectional.all({})", self.top);
        }
        let mut parts = Vec::new();
        if !self.top.is_none() {
            parts.push(format!("top: {}", self.top));
        }
        if !self.start.is_none() {
            parts.push(format!("start: {}", self.start));
        }
        if !self.end.is_none() {
            parts.push(format!("end: {}", self.end));
        }
        if !self.bottom.is_none() {
            parts.push(format!("bottom: {}", self.bottom));
        }
        write!(f, "BorderDirectional({})", parts.join(", "))
    }
}
