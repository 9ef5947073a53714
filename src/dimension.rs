//! Embedding point clouds in higher-dimensional space.

use crate::errors::ShapeError;
use crate::float_types::Real;
use nalgebra::DMatrix;
use rand::Rng;

/// Embed `data` in `ambient` dimensions, regardless of the dimensionality
/// of `data`.
///
/// Each row is zero-padded from `d` to `ambient` columns and the result is
/// multiplied by a random `ambient`×`ambient` orthogonal matrix (the Q
/// factor of the QR decomposition of a matrix of uniform random entries).
/// The map is an isometry: pairwise Euclidean distances between rows are
/// preserved up to floating-point error.
///
/// Returns [`ShapeError::AmbientTooSmall`] unless `ambient` is strictly
/// greater than the column count of `data`.
pub fn embed(data: &DMatrix<Real>, ambient: usize) -> Result<DMatrix<Real>, ShapeError> {
    embed_with_rng(data, ambient, &mut rand::thread_rng())
}

/// [`embed`] with a caller-supplied generator, for deterministic lifts.
pub fn embed_with_rng<R: Rng>(
    data: &DMatrix<Real>,
    ambient: usize,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    let (n, d) = data.shape();
    if ambient <= d {
        return Err(ShapeError::AmbientTooSmall { ambient, data_dim: d });
    }

    let mut base = DMatrix::zeros(n, ambient);
    base.view_mut((0, 0), (n, d)).copy_from(data);

    // Orthogonalizing a uniform random matrix gives a random rotation of
    // the ambient space; only the Q factor is used.
    let random = DMatrix::from_fn(ambient, ambient, |_, _| rng.r#gen::<Real>());
    let q = random.qr().q();

    Ok(base * q)
}
