//! Color values used for icon tints and label text

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Opaque color from 8-bit channels, e.g. a theme primary like `0x6200EE`.
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn byte_channels_scale_to_unit_range() {
        assert_eq!(Color::from_rgb_u8(255, 0, 0), Color(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::from_rgba_u8(0, 0, 0, 0).3, 0.0);
        assert_eq!(Color::from_rgb_u8(255, 255, 255), Color::WHITE);
    }
}
