use super::*;
use crate::host::NoFocus;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct CountingFocus {
    cleared: usize,
}

impl FocusOwner for CountingFocus {
    fn clear_focus(&mut self) {
        self.cleared += 1;
    }
}

fn shown_dialog() -> MaterialDialog {
    let mut dialog = MaterialDialog::new();
    dialog.show();
    dialog
}

#[test]
fn positive_enabled_by_default() {
    let actions = DialogActionState::new();
    assert!(actions.positive_override());
    assert!(actions.is_positive_enabled());
}

#[test]
fn any_false_gate_disables_positive() {
    let mut actions = DialogActionState::new();
    actions.set_gate("name", true);
    actions.set_gate("email", true);
    assert!(actions.is_positive_enabled());

    actions.set_gate("email", false);
    assert!(!actions.is_positive_enabled());
    assert_eq!(actions.blocking_gates().collect::<Vec<_>>(), vec!["email"]);

    actions.set_gate("email", true);
    assert!(actions.is_positive_enabled());
}

#[test]
fn override_disables_even_with_all_gates_true() {
    let mut actions = DialogActionState::new();
    actions.set_gate("name", true);
    actions.set_positive_override(false);
    assert!(!actions.is_positive_enabled());
}

#[test]
fn removing_a_gate_releases_it() {
    let mut actions = DialogActionState::new();
    actions.set_gate("agree", false);
    assert_eq!(actions.remove_gate("agree"), Some(false));
    assert_eq!(actions.gate("agree"), None);
    assert!(actions.is_positive_enabled());
}

#[test]
fn positive_click_dismisses_then_runs_callbacks_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dialog = shown_dialog();
    let mut focus = CountingFocus::default();

    for name in ["first", "second"] {
        let log = Rc::clone(&log);
        dialog
            .actions_mut()
            .add_callback(move || log.borrow_mut().push(name));
    }

    let click_log = Rc::clone(&log);
    let fired = dialog.on_positive_click(&mut focus, false, move || {
        click_log.borrow_mut().push("click")
    });

    assert!(fired);
    assert!(!dialog.is_showing());
    assert_eq!(focus.cleared, 1);
    assert_eq!(*log.borrow(), vec!["first", "second", "click"]);
}

#[test]
fn blocked_positive_click_has_no_effect() {
    let calls = Rc::new(RefCell::new(0));
    let mut dialog = shown_dialog();
    let mut focus = CountingFocus::default();
    dialog.actions_mut().set_gate("valid", true);
    dialog.actions_mut().set_gate("agreed", false);
    let counter = Rc::clone(&calls);
    dialog
        .actions_mut()
        .add_callback(move || *counter.borrow_mut() += 1);

    let counter = Rc::clone(&calls);
    let fired = dialog.on_positive_click(&mut focus, false, move || *counter.borrow_mut() += 1);

    assert!(!fired);
    assert!(dialog.is_showing());
    assert_eq!(focus.cleared, 0);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn disable_dismiss_keeps_dialog_open() {
    let mut dialog = shown_dialog();
    let mut focus = CountingFocus::default();

    assert!(dialog.on_positive_click(&mut focus, true, || {}));
    assert!(dialog.is_showing());
    assert_eq!(focus.cleared, 0);
}

#[test]
fn without_auto_dismiss_clicks_never_hide() {
    let mut dialog = MaterialDialog::new().auto_dismiss(false);
    dialog.show();
    let mut focus = CountingFocus::default();

    dialog.on_positive_click(&mut focus, false, || {});
    dialog.on_negative_click(&mut focus, false, || {});
    assert!(dialog.is_showing());
}

#[test]
fn negative_click_ignores_gates() {
    let clicked = Rc::new(RefCell::new(false));
    let mut dialog = shown_dialog();
    let mut focus = CountingFocus::default();
    dialog.actions_mut().set_gate("valid", false);
    dialog.actions_mut().add_callback(|| panic!("positive callback ran"));

    let flag = Rc::clone(&clicked);
    dialog.on_negative_click(&mut focus, false, move || *flag.borrow_mut() = true);

    assert!(*clicked.borrow());
    assert!(!dialog.is_showing());
    assert_eq!(focus.cleared, 1);
}

#[test]
fn gates_declared_before_show_are_kept() {
    let mut dialog = MaterialDialog::new();
    dialog.actions_mut().set_gate("terms", false);
    dialog.actions_mut().add_callback(|| panic!("positive callback ran"));

    dialog.show();

    assert_eq!(dialog.actions().gate("terms"), Some(false));
    assert_eq!(dialog.actions().callback_count(), 1);
    assert!(!dialog.on_positive_click(&mut NoFocus, false, || {}));
    assert!(dialog.is_showing());
}

#[test]
fn dismissing_discards_actions() {
    let mut dialog = shown_dialog();
    dialog.actions_mut().set_gate("valid", false);
    dialog.actions_mut().set_positive_override(false);
    dialog.actions_mut().add_callback(|| {});

    dialog.show();
    assert_eq!(dialog.actions().callback_count(), 1);

    dialog.dismiss(&mut NoFocus);
    assert_eq!(dialog.actions().callback_count(), 0);
    assert!(dialog.actions().is_positive_enabled());

    dialog.show();
    assert!(dialog.actions().is_positive_enabled());
}

#[test]
fn positive_dismissal_discards_actions_after_callbacks() {
    let calls = Rc::new(RefCell::new(0));
    let mut dialog = shown_dialog();
    let counter = Rc::clone(&calls);
    dialog
        .actions_mut()
        .add_callback(move || *counter.borrow_mut() += 1);

    assert!(dialog.on_positive_click(&mut NoFocus, false, || {}));

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(dialog.actions().callback_count(), 0);
}

#[test]
fn suppressed_dismissal_keeps_actions() {
    let mut dialog = shown_dialog();
    dialog.actions_mut().add_callback(|| {});

    assert!(dialog.on_positive_click(&mut NoFocus, true, || {}));
    dialog.on_negative_click(&mut NoFocus, true, || {});

    assert_eq!(dialog.actions().callback_count(), 1);
}
