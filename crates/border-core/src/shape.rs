// File: crates/border-core/src/shape.rs
// Summary: Outline shape hint consumed by paint code.

/// Which outline family a box's border should be painted with.
///
/// Path construction for either shape lives in the paint layer; this crate
/// only carries the choice alongside the border values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxShape {
    /// An axis-aligned rectangle, optionally rounded by the paint layer.
    #[default]
    Rectangle,
    /// An ellipse inscribed in the box's bounds.
    Circle,
}
