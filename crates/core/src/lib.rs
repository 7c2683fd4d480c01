//! Core units, constants, and shared primitives for the ballistic aim workspace.

/// Tunables and tolerances shared across crates.
pub mod constants {
    /// Default resolution of the intercept search (seconds between candidate times).
    pub const DEFAULT_TIME_STEP_S: f64 = 0.01;
    /// Default intercept search horizon (seconds).
    pub const DEFAULT_MAX_TIME_S: f64 = 5.0;
    /// `cos(angle)` below this magnitude is treated as a vertical shot.
    pub const VERTICAL_COS_EPSILON: f64 = 1e-12;
}

/// Minimal vector helpers over fixed-size arrays.
///
/// The last component of every point is the vertical axis: `[horizontal, up]`
/// in the plane and `[x, y, up]` in space.
pub mod vector {
    /// Point or vector inside the firing plane.
    pub type Vector2 = [f64; 2];
    /// Point or vector in world space, z up.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    /// Vector addition.
    #[inline]
    pub fn add<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| a[i] + b[i])
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| a[i] - b[i])
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale<const N: usize>(v: &[f64; N], s: f64) -> [f64; N] {
        std::array::from_fn(|i| v[i] * s)
    }

    /// Index of the vertical axis for an `N`-dimensional point.
    #[inline]
    pub const fn up_axis<const N: usize>() -> usize {
        N - 1
    }
}
