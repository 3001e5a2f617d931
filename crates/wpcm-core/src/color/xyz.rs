//! CIE 1931 XYZ tristimulus values

/// Tristimulus triple; white points carry Y = 1
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// From chromaticity `(x, y)` and luminance `Y`; a zero `y` yields black
    pub fn from_xyy(x: f64, y: f64, luminance: f64) -> Self {
        if y <= 0.0 {
            return Self::default();
        }
        let k = luminance / y;
        Self::new(x * k, luminance, (1.0 - x - y) * k)
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xyy() {
        let d65 = Xyz::from_xyy(0.3127, 0.3290, 1.0);
        assert!(d65.approx_eq(&Xyz::new(0.950_456, 1.0, 1.089_058), 1e-5), "{d65:?}");

        let half = Xyz::from_xyy(0.3127, 0.3290, 0.5);
        assert!(half.approx_eq(&Xyz::new(d65.x / 2.0, 0.5, d65.z / 2.0), 1e-12));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(Xyz::from_xyy(0.3, 0.0, 1.0), Xyz::default());
        assert_eq!(Xyz::from_xyy(0.3, -0.1, 1.0), Xyz::default());
    }
}
