//! Material dialog buttons for matdialogs.
//!
//! A dialog declares its buttons through [`DialogButtons`], tagging each one
//! with a [`ButtonRole`]. The resulting [`DialogButtonsNode`] lays them out
//! with [`DialogButtonsMeasurePolicy`]: a right-aligned row while they fit,
//! a right-aligned column once they take more than 80% of the width, and a
//! single accessibility icon pinned bottom-left. Clicks go through the
//! owning [`MaterialDialog`], which gates the positive action and handles
//! auto-dismissal.

#![allow(non_snake_case)]

mod buttons;
mod host;
mod layout;
mod role;
mod state;
mod text;

pub use buttons::*;
pub use host::*;
pub use layout::*;
pub use role::*;
pub use state::*;
pub use text::*;

pub mod prelude {
    pub use crate::buttons::{DialogButton, DialogButtons, DialogButtonsNode, DialogButtonsScope};
    pub use crate::host::{DialogEnvironment, DialogTheme, FocusOwner, StringRes, StringResolver};
    pub use crate::layout::{DialogButtonsSpec, LayoutMode};
    pub use crate::role::ButtonRole;
    pub use crate::state::{DialogActionState, MaterialDialog};
    pub use crate::text::DialogText;
    pub use matdialogs_ui_layout::Constraints;
}
