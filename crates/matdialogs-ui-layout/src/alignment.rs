//! Alignment utilities for positioning content

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the horizontal offset for alignment.
    ///
    /// `End` is not clamped at zero: a child wider than its parent is
    /// pushed past the leading edge instead of overflowing the trailing one.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::End => available - child,
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Align children to the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// Computes the vertical offset for alignment.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Bottom => available - child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_and_bottom_align_to_trailing_edges() {
        assert_eq!(HorizontalAlignment::End.align(300.0, 80.0), 220.0);
        assert_eq!(HorizontalAlignment::End.align(100.0, 140.0), -40.0);
        assert_eq!(VerticalAlignment::Bottom.align(36.0, 48.0), -12.0);
    }
}
