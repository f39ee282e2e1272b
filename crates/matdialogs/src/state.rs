//! Dialog visibility and positive-action coordination.
//!
//! A [`MaterialDialog`] owns everything the button bar mutates: whether the
//! dialog is showing, whether buttons dismiss it automatically, and the
//! [`DialogActionState`] gating the positive action. It is passed by `&mut`
//! into button declaration and click handling; nothing here is shared
//! across threads.

use crate::host::FocusOwner;
use indexmap::IndexMap;
use std::fmt;

#[cfg(not(feature = "std-hash"))]
type GateHasher = rustc_hash::FxBuildHasher;

#[cfg(feature = "std-hash")]
type GateHasher = std::collections::hash_map::RandomState;

/// Callback run whenever the positive action fires.
pub type PositiveCallback = Box<dyn FnMut()>;

/// Gating conditions, override flag and callbacks of the positive action.
pub struct DialogActionState {
    gates: IndexMap<String, bool, GateHasher>,
    positive_override: bool,
    callbacks: Vec<PositiveCallback>,
}

impl DialogActionState {
    pub fn new() -> Self {
        Self {
            gates: IndexMap::with_hasher(GateHasher::default()),
            positive_override: true,
            callbacks: Vec::new(),
        }
    }

    /// Registers `name` or updates its value.
    pub fn set_gate(&mut self, name: impl Into<String>, value: bool) {
        self.gates.insert(name.into(), value);
    }

    pub fn remove_gate(&mut self, name: &str) -> Option<bool> {
        self.gates.shift_remove(name)
    }

    pub fn gate(&self, name: &str) -> Option<bool> {
        self.gates.get(name).copied()
    }

    /// Names of the gates currently holding the positive action back.
    pub fn blocking_gates(&self) -> impl Iterator<Item = &str> {
        self.gates
            .iter()
            .filter(|(_, value)| !**value)
            .map(|(name, _)| name.as_str())
    }

    pub fn set_positive_override(&mut self, enabled: bool) {
        self.positive_override = enabled;
    }

    pub fn positive_override(&self) -> bool {
        self.positive_override
    }

    /// True when the override is set and every gate holds.
    pub fn is_positive_enabled(&self) -> bool {
        self.positive_override && self.gates.values().all(|value| *value)
    }

    pub fn add_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn run_callbacks(&mut self) {
        for callback in &mut self.callbacks {
            callback();
        }
    }

    /// Drops all gates and callbacks and restores the override.
    pub fn reset(&mut self) {
        self.gates.clear();
        self.callbacks.clear();
        self.positive_override = true;
    }
}

impl Default for DialogActionState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DialogActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogActionState")
            .field("gates", &self.gates)
            .field("positive_override", &self.positive_override)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// Visibility of a dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    showing: bool,
}

impl DialogState {
    pub fn new(showing: bool) -> Self {
        Self { showing }
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn show(&mut self) {
        self.showing = true;
    }

    /// Releases focus, then hides the dialog.
    pub fn hide(&mut self, focus: &mut dyn FocusOwner) {
        focus.clear_focus();
        self.showing = false;
    }
}

/// Per-dialog state shared by the button bar and its click handlers.
#[derive(Debug)]
pub struct MaterialDialog {
    state: DialogState,
    auto_dismiss: bool,
    actions: DialogActionState,
}

impl MaterialDialog {
    pub fn new() -> Self {
        Self {
            state: DialogState::default(),
            auto_dismiss: true,
            actions: DialogActionState::new(),
        }
    }

    pub fn auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    pub fn is_auto_dismiss(&self) -> bool {
        self.auto_dismiss
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state.is_showing()
    }

    pub fn actions(&self) -> &DialogActionState {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut DialogActionState {
        &mut self.actions
    }

    /// Shows the dialog. Gates and callbacks registered beforehand stay.
    pub fn show(&mut self) {
        self.state.show();
    }

    /// Hides the dialog and discards its action state.
    pub fn dismiss(&mut self, focus: &mut dyn FocusOwner) {
        self.hide(focus);
        self.actions.reset();
    }

    fn hide(&mut self, focus: &mut dyn FocusOwner) {
        log::debug!("dismissing dialog");
        self.state.hide(focus);
    }

    /// Fires the positive action.
    ///
    /// Returns `false` without side effects while the action is disabled.
    /// Otherwise hides the dialog (unless suppressed or auto-dismiss is off),
    /// runs the registered callbacks in order, then `on_click`. The action
    /// state is discarded last, once the callbacks have run.
    pub fn on_positive_click(
        &mut self,
        focus: &mut dyn FocusOwner,
        disable_dismiss: bool,
        on_click: impl FnOnce(),
    ) -> bool {
        if !self.actions.is_positive_enabled() {
            log::debug!(
                "positive action blocked (override: {}, gates: {:?})",
                self.actions.positive_override(),
                self.actions.blocking_gates().collect::<Vec<_>>()
            );
            return false;
        }
        let dismissing = self.auto_dismiss && !disable_dismiss;
        if dismissing {
            self.hide(focus);
        }
        self.actions.run_callbacks();
        on_click();
        if dismissing {
            self.actions.reset();
        }
        true
    }

    /// Fires the negative action. Gates never apply here.
    pub fn on_negative_click(
        &mut self,
        focus: &mut dyn FocusOwner,
        disable_dismiss: bool,
        on_click: impl FnOnce(),
    ) {
        if self.auto_dismiss && !disable_dismiss {
            self.dismiss(focus);
        }
        on_click();
    }
}

impl Default for MaterialDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
