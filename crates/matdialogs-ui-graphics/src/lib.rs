//! Pure data for dialog widgets: units, geometry, colors and text styles.
//!
//! Nothing in this crate measures or draws; hosts convert these values
//! into whatever their renderer understands.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::typography::{FontWeight, TextStyle};
    pub use crate::unit::Dp;
}
