//! Button labels: literal-or-resource text and its measurement.

use crate::host::{StringRes, StringResolver};

/// Text given either literally or as a string resource.
///
/// The literal wins when both are present. With neither, the text is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogText {
    pub text: Option<String>,
    pub res: Option<StringRes>,
}

impl DialogText {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            res: None,
        }
    }

    pub fn res(res: StringRes) -> Self {
        Self {
            text: None,
            res: Some(res),
        }
    }

    pub fn with_res(mut self, res: StringRes) -> Self {
        self.res = Some(res);
        self
    }

    pub fn resolve(&self, strings: &dyn StringResolver) -> String {
        match (&self.text, self.res) {
            (Some(text), _) => text.clone(),
            (None, Some(res)) => strings.resolve(res),
            (None, None) => String::new(),
        }
    }
}

impl From<&str> for DialogText {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for DialogText {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl From<StringRes> for DialogText {
    fn from(res: StringRes) -> Self {
        Self::res(res)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Measures label text in pixels.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> TextMetrics;
}

/// Fixed-advance measurer used when the host has no font stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    pub const CHAR_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 20.0;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str) -> TextMetrics {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);

        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * Self::CHAR_WIDTH)
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: line_count as f32 * Self::LINE_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Strings;

    impl StringResolver for Strings {
        fn resolve(&self, res: StringRes) -> String {
            format!("res#{}", res.0)
        }
    }

    #[test]
    fn literal_wins_over_resource() {
        let text = DialogText::literal("Ok").with_res(StringRes(7));
        assert_eq!(text.resolve(&Strings), "Ok");
    }

    #[test]
    fn resource_is_resolved_by_the_host() {
        assert_eq!(DialogText::from(StringRes(3)).resolve(&Strings), "res#3");
    }

    #[test]
    fn missing_text_is_empty() {
        assert_eq!(DialogText::default().resolve(&Strings), "");
    }

    #[test]
    fn monospaced_measures_the_longest_line() {
        let metrics = MonospacedTextMeasurer.measure("Cancel\nOk");
        assert_eq!(metrics.width, 48.0);
        assert_eq!(metrics.height, 40.0);
        assert_eq!(MonospacedTextMeasurer.measure("").height, 20.0);
    }
}
