//! Services a dialog borrows from its host.

use crate::text::{MonospacedTextMeasurer, TextMeasurer};
use matdialogs_ui_graphics::{Color, TextStyle};
use matdialogs_ui_layout::Density;
use std::rc::Rc;

/// Identifier of a localized string owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StringRes(pub u32);

/// Identifier of an icon owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageRes(pub u32);

/// Resolves string resources to display text.
pub trait StringResolver {
    fn resolve(&self, res: StringRes) -> String;
}

/// Resolver for hosts without string resources; everything is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStrings;

impl StringResolver for NoStrings {
    fn resolve(&self, res: StringRes) -> String {
        log::debug!("no string resolver installed, {res:?} resolves to empty text");
        String::new()
    }
}

/// Owner of keyboard focus; cleared before a dialog goes away.
pub trait FocusOwner {
    fn clear_focus(&mut self);
}

/// Focus owner for hosts that do not track focus.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFocus;

impl FocusOwner for NoFocus {
    fn clear_focus(&mut self) {}
}

/// Styling defaults for dialog buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogTheme {
    pub button_text_style: TextStyle,
    pub icon_tint: Color,
}

impl Default for DialogTheme {
    fn default() -> Self {
        Self {
            button_text_style: TextStyle::button().with_color(Color::from_rgb_u8(0x62, 0x00, 0xEE)),
            icon_tint: Color::BLACK,
        }
    }
}

/// Everything a button bar needs from its host to declare and measure buttons.
#[derive(Clone)]
pub struct DialogEnvironment {
    pub strings: Rc<dyn StringResolver>,
    pub text_measurer: Rc<dyn TextMeasurer>,
    pub theme: DialogTheme,
    pub density: Density,
}

impl DialogEnvironment {
    pub fn with_strings(mut self, strings: impl StringResolver + 'static) -> Self {
        self.strings = Rc::new(strings);
        self
    }

    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.text_measurer = Rc::new(measurer);
        self
    }

    pub fn with_theme(mut self, theme: DialogTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }
}

impl Default for DialogEnvironment {
    fn default() -> Self {
        Self {
            strings: Rc::new(NoStrings),
            text_measurer: Rc::new(MonospacedTextMeasurer),
            theme: DialogTheme::default(),
            density: Density::default(),
        }
    }
}

impl std::fmt::Debug for DialogEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogEnvironment")
            .field("theme", &self.theme)
            .field("density", &self.density)
            .finish_non_exhaustive()
    }
}
