//! Text style data for button labels

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Text style (data only, no rendering)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub letter_spacing: Option<f32>,
    pub color: Option<crate::Color>,
}

impl TextStyle {
    /// Material "button" typography: 14sp medium with slight tracking.
    pub fn button() -> Self {
        Self {
            font_size: Some(14.0),
            font_weight: Some(FontWeight::MEDIUM),
            letter_spacing: Some(1.25),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: crate::Color) -> Self {
        self.color = Some(color);
        self
    }
}
