//! Declaration scope for the buttons of a dialog.

#![allow(non_snake_case)]

use super::{ButtonContent, DialogButton, DialogButtonsNode};
use crate::host::{DialogEnvironment, ImageRes};
use crate::layout::DialogButtonsSpec;
use crate::role::ButtonRole;
use crate::state::MaterialDialog;
use crate::text::DialogText;
use matdialogs_ui_graphics::{Color, TextStyle};
use matdialogs_ui_layout::NodeId;

/// Receiver of button declarations, handed to the content block of
/// [`DialogButtons`].
pub struct DialogButtonsScope<'a> {
    env: &'a DialogEnvironment,
    dialog: &'a mut MaterialDialog,
    buttons: Vec<DialogButton>,
}

impl<'a> DialogButtonsScope<'a> {
    fn new(env: &'a DialogEnvironment, dialog: &'a mut MaterialDialog) -> Self {
        Self {
            env,
            dialog,
            buttons: Vec::new(),
        }
    }

    /// The dialog the buttons belong to.
    pub fn dialog(&mut self) -> &mut MaterialDialog {
        self.dialog
    }

    /// Plain text button. It never dismisses and is never gated.
    pub fn button(
        &mut self,
        text: impl Into<DialogText>,
        text_style: Option<TextStyle>,
        on_click: impl FnMut() + 'static,
    ) -> NodeId {
        self.push_label(ButtonRole::Text, text.into(), text_style, false, on_click)
    }

    /// Confirming button. Enabled only while the dialog's gates allow it.
    pub fn positive_button(
        &mut self,
        text: impl Into<DialogText>,
        text_style: Option<TextStyle>,
        disable_dismiss: bool,
        on_click: impl FnMut() + 'static,
    ) -> NodeId {
        self.push_label(
            ButtonRole::Positive,
            text.into(),
            text_style,
            disable_dismiss,
            on_click,
        )
    }

    pub fn negative_button(
        &mut self,
        text: impl Into<DialogText>,
        text_style: Option<TextStyle>,
        disable_dismiss: bool,
        on_click: impl FnMut() + 'static,
    ) -> NodeId {
        self.push_label(
            ButtonRole::Negative,
            text.into(),
            text_style,
            disable_dismiss,
            on_click,
        )
    }

    /// Icon button pinned bottom-left. Only the first one declared is shown.
    pub fn accessibility_button(
        &mut self,
        icon: ImageRes,
        tint: Option<Color>,
        on_click: impl FnMut() + 'static,
    ) -> NodeId {
        let content = ButtonContent::Icon {
            icon,
            tint: tint.unwrap_or(self.env.theme.icon_tint),
        };
        self.push(ButtonRole::Accessibility, content, false, on_click)
    }

    /// Registers or updates a condition the positive button waits for.
    pub fn positive_gate(&mut self, name: impl Into<String>, value: bool) {
        self.dialog.actions_mut().set_gate(name, value);
    }

    /// Registers a callback run each time the positive action fires.
    pub fn positive_callback(&mut self, callback: impl FnMut() + 'static) {
        self.dialog.actions_mut().add_callback(callback);
    }

    fn push_label(
        &mut self,
        role: ButtonRole,
        text: DialogText,
        text_style: Option<TextStyle>,
        disable_dismiss: bool,
        on_click: impl FnMut() + 'static,
    ) -> NodeId {
        let content = ButtonContent::Label {
            text: text.resolve(&*self.env.strings),
            style: text_style.unwrap_or_else(|| self.env.theme.button_text_style.clone()),
        };
        self.push(role, content, disable_dismiss, on_click)
    }

    fn push(
        &mut self,
        role: ButtonRole,
        content: ButtonContent,
        disable_dismiss: bool,
        on_click: impl FnMut() + 'static,
    ) -> NodeId {
        let id = self.buttons.len();
        log::trace!("declared {role:?} dialog button #{id}");
        self.buttons
            .push(DialogButton::new(id, role, content, disable_dismiss, on_click));
        id
    }
}

/// Declares the button bar of `dialog`.
///
/// `content` registers buttons (and optionally gates and callbacks) on the
/// scope; the returned node measures, places and dispatches clicks to them.
pub fn DialogButtons<F>(
    env: &DialogEnvironment,
    dialog: &mut MaterialDialog,
    spec: DialogButtonsSpec,
    content: F,
) -> DialogButtonsNode
where
    F: FnOnce(&mut DialogButtonsScope<'_>),
{
    let mut scope = DialogButtonsScope::new(env, dialog);
    content(&mut scope);
    DialogButtonsNode::new(env, spec, scope.buttons)
}
