//! Layout constraints system

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }

    /// Returns true if the width is bounded (max_width is finite).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Constraints;

    #[test]
    fn constrain_clamps_into_bounds() {
        let constraints = Constraints {
            min_width: 10.0,
            max_width: 100.0,
            min_height: 0.0,
            max_height: 40.0,
        };
        assert_eq!(constraints.constrain(200.0, 50.0), (100.0, 40.0));
        assert_eq!(constraints.constrain(5.0, 20.0), (10.0, 20.0));
    }

    #[test]
    fn loosen_drops_minimums() {
        let loosened = Constraints::tight(80.0, 36.0).loosen();
        assert_eq!(loosened, Constraints::loose(80.0, 36.0));
        assert!(loosened.has_bounded_width());
        assert!(!Constraints::loose(f32::INFINITY, 10.0).has_bounded_width());
    }
}
