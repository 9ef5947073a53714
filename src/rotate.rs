//! Rigid 2D rotation about the origin.

use crate::errors::ShapeError;
use crate::float_types::{FRAC_PI_2, Real};
use nalgebra::DMatrix;

/// Rotate an `(n, 2)` point set rigidly about the origin.
///
/// The angle convention treats "up" as neutral: an `angle` of π/2 returns
/// the points unchanged, so the effective rotation is `angle - π/2`. Adding
/// a full turn to `angle` is a no-op. Each row is converted to polar form,
/// shifted by the offset angle, and converted back, which preserves radii
/// and the angular spacing between points.
///
/// Returns [`ShapeError::DimensionMismatch`] when `data` does not have
/// exactly two columns.
pub fn rotate2d(data: &DMatrix<Real>, angle: Real) -> Result<DMatrix<Real>, ShapeError> {
    if data.ncols() != 2 {
        return Err(ShapeError::DimensionMismatch { expected: 2, found: data.ncols() });
    }

    let rot = angle - FRAC_PI_2;
    let mut out = DMatrix::zeros(data.nrows(), 2);
    for i in 0..data.nrows() {
        let x = data[(i, 0)];
        let y = data[(i, 1)];
        let r = x.hypot(y);
        let phi = y.atan2(x) + rot;
        out[(i, 0)] = r * phi.cos();
        out[(i, 1)] = r * phi.sin();
    }
    Ok(out)
}
