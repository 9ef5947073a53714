//! Closed-form samplers for surfaces embedded in 3D.

use crate::errors::ShapeError;
use crate::float_types::{PI, Real, TAU};
use crate::postprocess::finalize;
use crate::rng::seeded_rng;
use nalgebra::DMatrix;
use rand::Rng;

/// Sample `n` points on a sphere of radius `r` centered at the origin.
///
/// Both angles are drawn uniformly, so the cloud is uniform in the angular
/// parametrization, *not* by surface area: the poles come out denser. Use
/// [`sphere_by_area`] when an area-uniform cloud is needed.
pub fn sphere(
    n: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    sphere_with_rng(n, r, noise, ambient, &mut seeded_rng(seed))
}

/// [`sphere`] with a caller-supplied generator.
pub fn sphere_with_rng<R: Rng>(
    n: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    let mut data = DMatrix::zeros(n, 3);
    for i in 0..n {
        let theta = rng.r#gen::<Real>() * TAU;
        let phi = rng.r#gen::<Real>() * PI;
        data[(i, 0)] = r * theta.cos() * phi.cos();
        data[(i, 1)] = r * theta.cos() * phi.sin();
        data[(i, 2)] = r * theta.sin();
    }
    finalize(data, noise, ambient, rng)
}

/// Sample `n` points on a sphere of radius `r`, uniformly by surface area.
///
/// Delegates to the normalized-Gaussian method (the 2-sphere case of
/// [`crate::shapesnd::dsphere`]), which has no angular bias.
pub fn sphere_by_area(
    n: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    sphere_by_area_with_rng(n, r, noise, ambient, &mut seeded_rng(seed))
}

/// [`sphere_by_area`] with a caller-supplied generator.
pub fn sphere_by_area_with_rng<R: Rng>(
    n: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    crate::shapesnd::dsphere_with_rng(n, 2, r, noise, ambient, rng)
}

/// Sample `n` points on a torus in the xy-plane, with tube-center radius
/// `c` and tube radius `a`.
///
/// Both angles are drawn uniformly, so the inner side of the tube comes out
/// denser than area-uniform; see [`torus_by_area`] for the unbiased
/// variant. Requires `a <= c`, otherwise [`ShapeError::NotATorus`].
pub fn torus(
    n: usize,
    c: Real,
    a: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    torus_with_rng(n, c, a, noise, ambient, &mut seeded_rng(seed))
}

/// [`torus`] with a caller-supplied generator.
pub fn torus_with_rng<R: Rng>(
    n: usize,
    c: Real,
    a: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    if a > c {
        return Err(ShapeError::NotATorus { tube: a, center: c });
    }

    let mut data = DMatrix::zeros(n, 3);
    for i in 0..n {
        let theta = rng.r#gen::<Real>() * TAU;
        let phi = rng.r#gen::<Real>() * TAU;
        write_torus_row(&mut data, i, c, a, theta, phi);
    }
    finalize(data, noise, ambient, rng)
}

/// Sample `n` points on a torus, uniformly by surface area.
///
/// The tube angle θ is accepted with probability `(c + a cos θ) / (c + a)`,
/// which weights the draw by the surface element and removes the bias of
/// [`torus`]. Requires `a <= c`, otherwise [`ShapeError::NotATorus`].
pub fn torus_by_area(
    n: usize,
    c: Real,
    a: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    torus_by_area_with_rng(n, c, a, noise, ambient, &mut seeded_rng(seed))
}

/// [`torus_by_area`] with a caller-supplied generator.
pub fn torus_by_area_with_rng<R: Rng>(
    n: usize,
    c: Real,
    a: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    if a > c {
        return Err(ShapeError::NotATorus { tube: a, center: c });
    }

    let mut data = DMatrix::zeros(n, 3);
    for i in 0..n {
        let theta = loop {
            let candidate = rng.r#gen::<Real>() * TAU;
            if rng.r#gen::<Real>() * (c + a) <= c + a * candidate.cos() {
                break candidate;
            }
        };
        let phi = rng.r#gen::<Real>() * TAU;
        write_torus_row(&mut data, i, c, a, theta, phi);
    }
    finalize(data, noise, ambient, rng)
}

fn write_torus_row(data: &mut DMatrix<Real>, row: usize, c: Real, a: Real, theta: Real, phi: Real) {
    data[(row, 0)] = (c + a * theta.cos()) * phi.cos();
    data[(row, 1)] = (c + a * theta.cos()) * phi.sin();
    data[(row, 2)] = a * theta.sin();
}

/// Sample `n` points on a swiss roll: an Archimedean-spiral cross section
/// extruded along the z-axis, with heights uniform in `[0, r)`.
pub fn swiss_roll(
    n: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    swiss_roll_with_rng(n, r, noise, ambient, &mut seeded_rng(seed))
}

/// [`swiss_roll`] with a caller-supplied generator.
pub fn swiss_roll_with_rng<R: Rng>(
    n: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    let mut data = DMatrix::zeros(n, 3);
    for i in 0..n {
        // One and a half turns of the spiral, starting away from the center.
        let phi = rng.r#gen::<Real>() * 3.0 * PI + 1.5 * PI;
        let psi = rng.r#gen::<Real>() * r;
        data[(i, 0)] = phi * phi.cos();
        data[(i, 1)] = phi * phi.sin();
        data[(i, 2)] = psi;
    }
    finalize(data, noise, ambient, rng)
}
