//! Samplers for manifolds of arbitrary dimension.

use crate::errors::ShapeError;
use crate::float_types::{EPSILON, Real};
use crate::holes::HoleSet;
use crate::postprocess::{finalize, perturb};
use crate::rng::seeded_rng;
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::StandardNormal;

/// Sample `n` points uniformly on the d-sphere of radius `r`: the set of
/// points at distance `r` from the origin in `(d + 1)`-dimensional space.
///
/// Each row is a vector of `d + 1` independent standard normals,
/// normalized to unit length and scaled by `r` — uniform by surface area
/// in every dimension.
pub fn dsphere(
    n: usize,
    d: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    dsphere_with_rng(n, d, r, noise, ambient, &mut seeded_rng(seed))
}

/// [`dsphere`] with a caller-supplied generator.
pub fn dsphere_with_rng<R: Rng>(
    n: usize,
    d: usize,
    r: Real,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    let cols = d + 1;
    let mut data = DMatrix::zeros(n, cols);
    for i in 0..n {
        // Redraw the row in the measure-zero event that it collapses.
        let norm = loop {
            let mut norm_sq = 0.0;
            for j in 0..cols {
                let gauss: Real = rng.sample(StandardNormal);
                data[(i, j)] = gauss;
                norm_sq += gauss * gauss;
            }
            let norm = norm_sq.sqrt();
            if norm > EPSILON {
                break norm;
            }
        };
        for j in 0..cols {
            data[(i, j)] *= r / norm;
        }
    }
    finalize(data, noise, ambient, rng)
}

/// Sample exactly `n_points` points uniformly over the hypercube
/// `[-1, 1]^d` with `n_holes` ball-shaped holes removed.
///
/// Points are drawn in batches sized to the remaining deficit and filtered
/// against the holes until the target count is reached. When
/// `non_overlapping` is set, intersecting holes are eliminated (keeping the
/// smaller member of each overlapping pair, or the larger one when
/// `prioritize_bigger_balls` is set) and fresh holes are generated until
/// `n_holes` disjoint holes remain.
///
/// The holes must leave free measure in the cube: with holes covering the
/// whole domain the rejection loop cannot terminate. Likewise the
/// non-overlapping top-up assumes `n_holes` disjoint balls fit in the cube
/// at all. Neither condition is checked; both are preconditions.
pub fn swiss_cheese(
    n_points: usize,
    n_holes: usize,
    d: usize,
    noise: Option<Real>,
    seed: Option<u64>,
    non_overlapping: bool,
    prioritize_bigger_balls: bool,
) -> Result<DMatrix<Real>, ShapeError> {
    swiss_cheese_with_rng(
        n_points,
        n_holes,
        d,
        noise,
        non_overlapping,
        prioritize_bigger_balls,
        &mut seeded_rng(seed),
    )
    .map(|(data, _)| data)
}

/// [`swiss_cheese`], additionally returning the retained holes so callers
/// can verify or visualize the punched-out region.
pub fn swiss_cheese_with_holes(
    n_points: usize,
    n_holes: usize,
    d: usize,
    noise: Option<Real>,
    seed: Option<u64>,
    non_overlapping: bool,
    prioritize_bigger_balls: bool,
) -> Result<(DMatrix<Real>, HoleSet), ShapeError> {
    swiss_cheese_with_rng(
        n_points,
        n_holes,
        d,
        noise,
        non_overlapping,
        prioritize_bigger_balls,
        &mut seeded_rng(seed),
    )
}

/// [`swiss_cheese`] with a caller-supplied generator. Returns the sampled
/// points together with the retained holes.
pub fn swiss_cheese_with_rng<R: Rng>(
    n_points: usize,
    n_holes: usize,
    d: usize,
    noise: Option<Real>,
    non_overlapping: bool,
    prioritize_bigger_balls: bool,
    rng: &mut R,
) -> Result<(DMatrix<Real>, HoleSet), ShapeError> {
    let mut holes = HoleSet::generate(n_holes, d, rng);
    if non_overlapping {
        holes = holes.eliminate_overlaps(prioritize_bigger_balls);
        while holes.len() < n_holes {
            let deficit = n_holes - holes.len();
            log::debug!(
                "overlap elimination kept {} of {} holes, regenerating {}",
                holes.len(),
                n_holes,
                deficit
            );
            let extra = HoleSet::generate(deficit, d, rng);
            holes = holes.merge(extra).eliminate_overlaps(prioritize_bigger_balls);
        }
    }

    let mut data = DMatrix::zeros(n_points, d);
    let mut candidate = vec![0.0 as Real; d];
    let mut filled = 0usize;
    while filled < n_points {
        let deficit = n_points - filled;
        log::trace!("drawing a batch of {} candidates, {} retained so far", deficit, filled);
        for _ in 0..deficit {
            for coord in candidate.iter_mut() {
                *coord = rng.gen_range(-1.0..1.0);
            }
            if !holes.contains(&candidate) {
                for (col, &coord) in candidate.iter().enumerate() {
                    data[(filled, col)] = coord;
                }
                filled += 1;
            }
        }
    }

    if let Some(sd) = noise {
        perturb(&mut data, sd, rng);
    }
    Ok((data, holes))
}
