//! Dialog buttons: declaration scope, layout node and click dispatch.

mod node;
mod scope;

pub use node::*;
pub use scope::*;

use crate::host::ImageRes;
use crate::role::ButtonRole;
use crate::state::MaterialDialog;
use matdialogs_ui_graphics::{Color, Point, TextStyle};
use matdialogs_ui_layout::NodeId;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// What a button shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonContent {
    Label { text: String, style: TextStyle },
    Icon { icon: ImageRes, tint: Color },
}

/// A declared dialog button.
#[derive(Clone)]
pub struct DialogButton {
    id: NodeId,
    role: ButtonRole,
    content: ButtonContent,
    disable_dismiss: bool,
    on_click: Rc<RefCell<dyn FnMut()>>,
    position: Rc<Cell<Option<Point>>>,
}

impl DialogButton {
    pub(crate) fn new(
        id: NodeId,
        role: ButtonRole,
        content: ButtonContent,
        disable_dismiss: bool,
        on_click: impl FnMut() + 'static,
    ) -> Self {
        Self {
            id,
            role,
            content,
            disable_dismiss,
            on_click: Rc::new(RefCell::new(on_click)),
            position: Rc::new(Cell::new(None)),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    pub fn content(&self) -> &ButtonContent {
        &self.content
    }

    /// Label text, or `None` for icon buttons.
    pub fn label(&self) -> Option<&str> {
        match &self.content {
            ButtonContent::Label { text, .. } => Some(text),
            ButtonContent::Icon { .. } => None,
        }
    }

    pub fn disable_dismiss(&self) -> bool {
        self.disable_dismiss
    }

    /// Only the positive button can be disabled, by its dialog's gates.
    pub fn is_enabled(&self, dialog: &MaterialDialog) -> bool {
        match self.role {
            ButtonRole::Positive => dialog.actions().is_positive_enabled(),
            _ => true,
        }
    }

    /// Where the last layout pass placed this button.
    pub fn position(&self) -> Option<Point> {
        self.position.get()
    }

    fn invoke(&self) {
        (self.on_click.borrow_mut())();
    }
}

impl fmt::Debug for DialogButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogButton")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("content", &self.content)
            .field("disable_dismiss", &self.disable_dismiss)
            .field("position", &self.position.get())
            .finish_non_exhaustive()
    }
}
