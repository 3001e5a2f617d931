//! 3x3 matrices for linear RGB and XYZ conversions
//!
//! Everything is built in f64; transforms narrow to f32 once, at
//! construction.

/// Row-major 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub rows: [[f64; 3]; 3],
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl Matrix3x3 {
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Matrix whose columns are `c0`, `c1`, `c2`
    pub const fn from_columns(c0: [f64; 3], c1: [f64; 3], c2: [f64; 3]) -> Self {
        Self::new([
            [c0[0], c1[0], c2[0]],
            [c0[1], c1[1], c2[1]],
            [c0[2], c1[2], c2[2]],
        ])
    }

    pub const fn identity() -> Self {
        Self::diagonal([1.0, 1.0, 1.0])
    }

    pub const fn diagonal(d: [f64; 3]) -> Self {
        Self::new([[d[0], 0.0, 0.0], [0.0, d[1], 0.0], [0.0, 0.0, d[2]]])
    }

    fn column(&self, j: usize) -> [f64; 3] {
        [self.rows[0][j], self.rows[1][j], self.rows[2][j]]
    }

    /// `self × v`
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        self.rows.map(|row| dot(row, v))
    }

    /// `self × rhs`: applies `rhs` first, then `self`
    pub fn compose(&self, rhs: &Self) -> Self {
        let cols = [rhs.column(0), rhs.column(1), rhs.column(2)];
        Self::new(self.rows.map(|row| cols.map(|col| dot(row, col))))
    }

    pub fn determinant(&self) -> f64 {
        let [r0, r1, r2] = self.rows;
        dot(r0, cross(r1, r2))
    }

    /// Inverse, or None when the matrix is singular
    pub fn inverse(&self) -> Option<Self> {
        let [r0, r1, r2] = self.rows;
        let det = self.determinant();
        if det.abs() < 1e-14 {
            return None;
        }

        // Column j of the inverse is the cross product of the other two rows
        let scale = |v: [f64; 3]| v.map(|x| x / det);
        Some(Self::from_columns(
            scale(cross(r1, r2)),
            scale(cross(r2, r0)),
            scale(cross(r0, r1)),
        ))
    }

    /// Single-precision copy for the per-pixel stage
    pub fn to_f32(&self) -> [[f32; 3]; 3] {
        self.rows.map(|row| row.map(|v| v as f32))
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Matrix3x3 = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    #[test]
    fn test_compose_with_identity() {
        let id = Matrix3x3::identity();
        assert_eq!(A.compose(&id), A);
        assert_eq!(id.compose(&A), A);
    }

    #[test]
    fn test_compose_order() {
        let swap = Matrix3x3::new([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let scale = Matrix3x3::diagonal([2.0, 3.0, 4.0]);
        let v = [1.0, 10.0, 100.0];
        assert_eq!(swap.compose(&scale).apply(v), swap.apply(scale.apply(v)));
        assert_eq!(swap.compose(&scale).apply(v), [30.0, 2.0, 400.0]);
    }

    #[test]
    fn test_from_columns() {
        let m = Matrix3x3::from_columns([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]);
        assert_eq!(m.rows[0], [1.0, 4.0, 7.0]);
        assert_eq!(m.apply([0.0, 1.0, 0.0]), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(A.determinant(), 1.0);
        let inv = A.inverse().unwrap();
        assert!(A.compose(&inv).is_identity(1e-9));
        assert!(inv.compose(&A).is_identity(1e-9));
    }

    #[test]
    fn test_singular() {
        // Third row is the sum of the first two
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_to_f32() {
        let m = Matrix3x3::diagonal([0.5, 0.25, 2.0]).to_f32();
        assert_eq!(m, [[0.5, 0.0, 0.0], [0.0, 0.25, 0.0], [0.0, 0.0, 2.0]]);
    }
}
