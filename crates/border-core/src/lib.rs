// File: crates/border-core/src/lib.rs
// Summary: Core library entry point; exports the box border value algebra.

pub mod border;
pub mod box_border;
pub mod color;
pub mod directional;
pub mod insets;
pub mod lerp;
pub mod shape;
pub mod side;

pub use border::Border;
pub use box_border::{BoxBorder, BoxBorderOps};
pub use color::Color;
pub use directional::BorderDirectional;
pub use insets::{EdgeInsets, Insets, InsetsDirectional};
pub use lerp::Lerp;
pub use shape::BoxShape;
pub use side::{BorderSide, BorderStyle, SideError};
