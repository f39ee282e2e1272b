//! Density-independent units

/// Density-independent pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

#[cfg(test)]
mod tests {
    use super::Dp;

    #[test]
    fn converts_with_density() {
        assert_eq!(Dp(12.0).to_px(2.0), 24.0);
        assert_eq!(Dp(36.0).to_px(1.5), 54.0);
    }
}
