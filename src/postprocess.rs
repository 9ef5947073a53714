//! Final transformations shared by the shape samplers.

use crate::dimension;
use crate::errors::ShapeError;
use crate::float_types::Real;
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::StandardNormal;

/// Add isotropic Gaussian jitter with standard deviation `sd` to every
/// coordinate of `data`, in place.
pub fn perturb<R: Rng>(data: &mut DMatrix<Real>, sd: Real, rng: &mut R) {
    for value in data.iter_mut() {
        let gauss: Real = rng.sample(StandardNormal);
        *value += sd * gauss;
    }
}

/// The optional closing steps of a shape sampler: jitter first, then the
/// isometric lift into `ambient` dimensions.
pub(crate) fn finalize<R: Rng>(
    mut data: DMatrix<Real>,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    if let Some(sd) = noise {
        perturb(&mut data, sd, rng);
    }
    match ambient {
        Some(target) => dimension::embed_with_rng(&data, target, rng),
        None => Ok(data),
    }
}
