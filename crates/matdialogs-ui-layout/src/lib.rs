//! Layout contracts for matdialogs.
//!
//! Widgets are laid out in two explicit phases: every child is measured
//! against [`Constraints`] and returns a [`Placeable`], then the parent's
//! [`MeasurePolicy`] places each placeable at absolute coordinates.

mod alignment;
mod arrangement;
mod constraints;
mod core;

pub use alignment::*;
pub use arrangement::*;
pub use constraints::*;
pub use core::*;

pub mod prelude {
    pub use crate::alignment::{HorizontalAlignment, VerticalAlignment};
    pub use crate::arrangement::{Arrangement, LinearArrangement};
    pub use crate::constraints::Constraints;
    pub use crate::core::{
        Density, LayoutId, Measurable, MeasurePolicy, MeasureResult, MeasureScope, NodeId,
        Placeable, Placement,
    };
}
