//! Button roles and the layout ids that carry them.

use matdialogs_ui_layout::LayoutId;

/// Placement group of a dialog button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Plain action that neither dismisses nor is gated.
    Text,
    /// Confirming action, subject to gating conditions.
    Positive,
    /// Cancelling action.
    Negative,
    /// Icon pinned to the bottom-left corner.
    Accessibility,
}

impl ButtonRole {
    pub const COUNT: usize = 4;

    pub const ALL: [ButtonRole; Self::COUNT] = [
        ButtonRole::Text,
        ButtonRole::Positive,
        ButtonRole::Negative,
        ButtonRole::Accessibility,
    ];

    /// Order in which the primary group is laid out.
    pub const PRIMARY_ORDER: [ButtonRole; 3] =
        [ButtonRole::Positive, ButtonRole::Text, ButtonRole::Negative];

    pub const fn layout_id(self) -> LayoutId {
        match self {
            ButtonRole::Text => LayoutId("dialog_button_text"),
            ButtonRole::Positive => LayoutId("dialog_button_positive"),
            ButtonRole::Negative => LayoutId("dialog_button_negative"),
            ButtonRole::Accessibility => LayoutId("dialog_button_accessibility"),
        }
    }

    pub fn from_layout_id(id: LayoutId) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.layout_id() == id)
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            ButtonRole::Text => 0,
            ButtonRole::Positive => 1,
            ButtonRole::Negative => 2,
            ButtonRole::Accessibility => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_ids_round_trip_every_role() {
        for role in ButtonRole::ALL {
            assert_eq!(ButtonRole::from_layout_id(role.layout_id()), Some(role));
            assert_eq!(ButtonRole::ALL[role.index()], role);
        }
        assert_eq!(ButtonRole::from_layout_id(LayoutId("title")), None);
    }
}
