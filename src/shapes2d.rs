//! Closed-form samplers for curves in the plane.

use crate::errors::ShapeError;
use crate::float_types::{PI, Real, TAU};
use crate::postprocess::finalize;
use crate::rng::seeded_rng;
use crate::rotate::rotate2d;
use nalgebra::DMatrix;
use rand::Rng;

/// Smallest rotation angle [`infty_sign`] accepts.
const ANGLE_MIN: Real = -PI;
/// Largest rotation angle [`infty_sign`] accepts.
const ANGLE_MAX: Real = TAU;

/// Sample `n` points on a figure-eight Lissajous curve, `(cos t, sin 2t)`
/// with `t` evenly spaced over one full turn.
///
/// An optional `angle` rotates the curve about the origin via
/// [`rotate2d`]; angles outside `[-π, 2π]` are rejected with
/// [`ShapeError::AngleOutOfRange`].
pub fn infty_sign(
    n: usize,
    noise: Option<Real>,
    angle: Option<Real>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    infty_sign_with_rng(n, noise, angle, &mut seeded_rng(seed))
}

/// [`infty_sign`] with a caller-supplied generator.
pub fn infty_sign_with_rng<R: Rng>(
    n: usize,
    noise: Option<Real>,
    angle: Option<Real>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    if let Some(angle) = angle {
        if !(ANGLE_MIN..=ANGLE_MAX).contains(&angle) {
            return Err(ShapeError::AngleOutOfRange {
                angle,
                min: ANGLE_MIN,
                max: ANGLE_MAX,
            });
        }
    }

    let mut data = DMatrix::zeros(n, 2);
    for i in 0..n {
        let t = i as Real * TAU / n as Real;
        data[(i, 0)] = t.cos();
        data[(i, 1)] = (2.0 * t).sin();
    }

    if let Some(sd) = noise {
        crate::postprocess::perturb(&mut data, sd, rng);
    }
    match angle {
        Some(angle) => rotate2d(&data, angle),
        None => Ok(data),
    }
}

/// Sample `n` points on an eyeglasses curve: two lens circles of radii
/// `r1` and `r2` joined by two bridge arcs that leave a vertical opening
/// of `neck_size` at the waist (x = 0).
///
/// `r2` defaults to `r1` and `neck_size` to half the smaller lens radius.
/// The points are split across the four arcs proportionally to arc length,
/// so density is uniform along the whole composite curve.
///
/// Returns [`ShapeError::NeckTooWide`] when `neck_size` is at least the
/// smaller lens diameter, which leaves no room for the lens centers.
pub fn eyeglasses(
    n: usize,
    r1: Real,
    r2: Option<Real>,
    neck_size: Option<Real>,
    noise: Option<Real>,
    ambient: Option<usize>,
    seed: Option<u64>,
) -> Result<DMatrix<Real>, ShapeError> {
    eyeglasses_with_rng(n, r1, r2, neck_size, noise, ambient, &mut seeded_rng(seed))
}

/// [`eyeglasses`] with a caller-supplied generator.
pub fn eyeglasses_with_rng<R: Rng>(
    n: usize,
    r1: Real,
    r2: Option<Real>,
    neck_size: Option<Real>,
    noise: Option<Real>,
    ambient: Option<usize>,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    let r2 = r2.unwrap_or(r1);
    let neck_size = neck_size.unwrap_or(0.5 * r1.min(r2));
    let limit = 2.0 * r1.min(r2);
    if neck_size >= limit {
        return Err(ShapeError::NeckTooWide { neck_size, limit });
    }

    // Bridge arcs of radius r3 centered on the y-axis at ±attach, curving
    // away from the waist so the opening at x = 0 is exactly neck_size.
    let r3 = 0.5 * neck_size;
    let attach = 0.5 * neck_size + r3;

    // External tangency with each lens fixes the lens centers at ±d1/±d2
    // and the attachment angles measured at the lens centers.
    let d1 = ((r1 + r3) * (r1 + r3) - attach * attach).sqrt();
    let d2 = ((r2 + r3) * (r2 + r3) - attach * attach).sqrt();
    let theta1 = (attach / (r1 + r3)).asin();
    let theta2 = (attach / (r2 + r3)).asin();

    // Angular spans: each lens keeps the arc facing away from the neck;
    // each bridge arc runs between its two tangency points.
    let lens1_span = TAU - 2.0 * theta1;
    let lens2_span = TAU - 2.0 * theta2;
    let bridge_span = PI - theta1 - theta2;

    let lengths = [
        r1 * lens1_span,
        r2 * lens2_span,
        r3 * bridge_span,
        r3 * bridge_span,
    ];
    let counts = apportion(n, &lengths);

    let mut data = DMatrix::zeros(n, 2);
    let mut row = 0usize;

    // Left lens, through its far (leftmost) point.
    for _ in 0..counts[0] {
        let u = rng.gen_range(theta1..(TAU - theta1));
        data[(row, 0)] = -d1 + r1 * u.cos();
        data[(row, 1)] = r1 * u.sin();
        row += 1;
    }
    // Right lens, through its far (rightmost) point.
    for _ in 0..counts[1] {
        let u = rng.gen_range((theta2 - PI)..(PI - theta2));
        data[(row, 0)] = d2 + r2 * u.cos();
        data[(row, 1)] = r2 * u.sin();
        row += 1;
    }
    // Top bridge arc, sweeping through its lowest point at (0, attach - r3).
    for _ in 0..counts[2] {
        let v = rng.gen_range((PI + theta1)..(TAU - theta2));
        data[(row, 0)] = r3 * v.cos();
        data[(row, 1)] = attach + r3 * v.sin();
        row += 1;
    }
    // Bottom bridge arc, the mirror image of the top one.
    for _ in 0..counts[3] {
        let v = rng.gen_range((PI + theta1)..(TAU - theta2));
        data[(row, 0)] = r3 * v.cos();
        data[(row, 1)] = -(attach + r3 * v.sin());
        row += 1;
    }

    finalize(data, noise, ambient, rng)
}

/// Split `n` across the arcs proportionally to their lengths, handing the
/// rounding remainder to the arcs with the largest fractional quotas.
fn apportion(n: usize, lengths: &[Real; 4]) -> [usize; 4] {
    let total: Real = lengths.iter().sum();
    let mut counts = [0usize; 4];
    let mut fractions: [(usize, Real); 4] = [(0, 0.0); 4];
    let mut assigned = 0usize;
    for (arc, &length) in lengths.iter().enumerate() {
        let quota = n as Real * length / total;
        counts[arc] = quota.floor() as usize;
        fractions[arc] = (arc, quota - quota.floor());
        assigned += counts[arc];
    }
    fractions.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut index = 0usize;
    for _ in 0..(n - assigned) {
        counts[fractions[index].0] += 1;
        index = (index + 1) % fractions.len();
    }
    counts
}
