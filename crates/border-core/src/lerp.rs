// File: crates/border-core/src/lerp.rs
// Summary: Linear interpolation over scalars and color channels.

use crate::color::Color;

/// Pairwise linear interpolation parameterized by `t`.
///
/// `t` values outside [0, 1] extrapolate; callers that need exactness at the
/// endpoints short-circuit before interpolating.
pub trait Lerp {
    #[must_use]
    fn lerp(&self, end: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, end: &Self, t: f32) -> Self {
        self * (1.0 - t) + end * t
    }
}

impl Lerp for Color {
    fn lerp(&self, end: &Self, t: f32) -> Self {
        fn channel(a: u8, b: u8, t: f32) -> u8 {
            f32::from(a).lerp(&f32::from(b), t).round() as u8
        }
        Self {
            r: channel(self.r, end.r, t),
            g: channel(self.g, end.g, t),
            b: channel(self.b, end.b, t),
            a: channel(self.a, end.a, t),
        }
    }
}
