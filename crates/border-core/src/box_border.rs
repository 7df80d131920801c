// File: crates/border-core/src/box_border.rs
// Summary: Closed union over both border representations and the cross-representation lerp dispatcher.

use std::fmt;

use crate::border::Border;
use crate::directional::BorderDirectional;
use crate::insets::EdgeInsets;
use crate::side::BorderSide;

/// Capability set shared by both border representations.
pub trait BoxBorderOps {
    /// Edge thicknesses, still in the representation's own keying.
    fn dimensions(&self) -> EdgeInsets;

    /// True when all four sides share color, width, and style.
    fn is_uniform(&self) -> bool;

    /// Merge with `other` when every affected side pair is mergeable.
    /// `None` means "not combinable"; callers may retry with the operands
    /// swapped or fall back to painting both borders layered.
    fn add(&self, other: &BoxBorder) -> Option<BoxBorder>;

    /// Scale the border's visual weight by `t`.
    fn scale(&self, t: f32) -> Self
    where
        Self: Sized;
}

/// A box border in either representation.
///
/// Exactly these two variants exist; the exhaustive matches below are the
/// compile-time proof that cross-representation dispatch covers every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxBorder {
    Axis(Border),
    Directional(BorderDirectional),
}

impl BoxBorder {
    pub fn dimensions(&self) -> EdgeInsets {
        match self {
            Self::Axis(b) => EdgeInsets::Axis(b.dimensions()),
            Self::Directional(b) => EdgeInsets::Directional(b.dimensions()),
        }
    }

    pub fn is_uniform(&self) -> bool {
        match self {
            Self::Axis(b) => b.is_uniform(),
            Self::Directional(b) => b.is_uniform(),
        }
    }

    pub fn add(&self, other: &BoxBorder) -> Option<BoxBorder> {
        match self {
            Self::Axis(b) => b.add(other),
            Self::Directional(b) => b.add(other),
        }
    }

    /// Scale, preserving the representation.
    pub fn scale(&self, t: f32) -> Self {
        match self {
            Self::Axis(b) => Self::Axis(b.scale(t)),
            Self::Directional(b) => Self::Directional(b.scale(t)),
        }
    }

    /// Interpolate between two borders of possibly different representations.
    ///
    /// `None` operands read as "no border". Like-for-like endpoints delegate
    /// to the variant's own `lerp`. Mixed endpoints normalize to
    /// (axis, directional) by swapping with `t <- 1 - t`, then interpolate so
    /// that no frame ever carries both left/right and start/end content.
    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Option<Self> {
        use BoxBorder::{Axis, Directional};
        match (a, b) {
            (None, None) => None,
            (Some(Axis(a)), Some(Axis(b))) => Border::lerp(Some(a), Some(b), t).map(Axis),
            (Some(Axis(a)), None) => Border::lerp(Some(a), None, t).map(Axis),
            (None, Some(Axis(b))) => Border::lerp(None, Some(b), t).map(Axis),
            (Some(Directional(a)), Some(Directional(b))) => {
                BorderDirectional::lerp(Some(a), Some(b), t).map(Directional)
            }
            (Some(Directional(a)), None) => BorderDirectional::lerp(Some(a), None, t).map(Directional),
            (None, Some(Directional(b))) => BorderDirectional::lerp(None, Some(b), t).map(Directional),
            (Some(Axis(a)), Some(Directional(b))) => Some(lerp_across(a, b, t)),
            (Some(Directional(a)), Some(Axis(b))) => Some(lerp_across(b, a, 1.0 - t)),
        }
    }
}

/// Axis-to-directional interpolation.
///
/// When only one endpoint carries lateral content, the result stays in the
/// representation that can express it and the missing laterals fade through
/// none over the full range. When both endpoints carry laterals the timeline
/// splits at `t = 0.5`: the axis laterals collapse to none with local
/// parameter `t * 2`, the directional laterals grow from none with
/// `(t - 0.5) * 2`, and top/bottom interpolate with the un-accelerated `t`
/// throughout. The laterals are exactly none at the crossover instant, so no
/// frame mixes left/right with start/end; top and bottom never seam.
fn lerp_across(a: &Border, b: &BorderDirectional, t: f32) -> BoxBorder {
    if b.start.is_none() && b.end.is_none() {
        return BoxBorder::Axis(Border {
            top: BorderSide::lerp(&a.top, &b.top, t),
            right: BorderSide::lerp(&a.right, &BorderSide::NONE, t),
            bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
            left: BorderSide::lerp(&a.left, &BorderSide::NONE, t),
        });
    }
    if a.left.is_none() && a.right.is_none() {
        return BoxBorder::Directional(BorderDirectional {
            top: BorderSide::lerp(&a.top, &b.top, t),
            start: BorderSide::lerp(&BorderSide::NONE, &b.start, t),
            end: BorderSide::lerp(&BorderSide::NONE, &b.end, t),
            bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
        });
    }
    if t < 0.5 {
        BoxBorder::Axis(Border {
            top: BorderSide::lerp(&a.top, &b.top, t),
            right: BorderSide::lerp(&a.right, &BorderSide::NONE, t * 2.0),
            bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
            left: BorderSide::lerp(&a.left, &BorderSide::NONE, t * 2.0),
        })
    } else {
        BoxBorder::Directional(BorderDirectional {
            top: BorderSide::lerp(&a.top, &b.top, t),
            start: BorderSide::lerp(&BorderSide::NONE, &b.start, (t - 0.5) * 2.0),
            end: BorderSide::lerp(&BorderSide::NONE, &b.end, (t - 0.5) * 2.0),
            bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
        })
    }
}

impl BoxBorderOps for BoxBorder {
    fn dimensions(&self) -> EdgeInsets {
        BoxBorder::dimensions(self)
    }

    fn is_uniform(&self) -> bool {
        BoxBorder::is_uniform(self)
    }

    fn add(&self, other: &BoxBorder) -> Option<BoxBorder> {
        BoxBorder::add(self, other)
    }

    fn scale(&self, t: f32) -> Self {
        BoxBorder::scale(self, t)
    }
}

impl From<Border> for BoxBorder {
    fn from(border: Border) -> Self {
        Self::Axis(border)
    }
}

impl From<BorderDirectional> for BoxBorder {
    fn from(border: BorderDirectional) -> Self {
        Self::Directional(border)
    }
}

impl fmt::Display for BoxBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axis(b) => b.fmt(f),
            Self::Directional(b) => b.fmt(f),
        }
    }
}
