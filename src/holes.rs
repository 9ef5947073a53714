//! Ball-shaped holes for swiss-cheese sampling.

use crate::float_types::Real;
use nalgebra::{DMatrix, DVector};
use rand::Rng;

/// Smallest radius a generated hole can take.
const RADIUS_MIN: Real = 0.2;
/// Largest radius a generated hole can take.
const RADIUS_MAX: Real = 0.5;

/// A set of open balls in d-dimensional space, kept as paired center rows
/// and radii. Every radius is positive. A hole set is never mutated after
/// generation; [`HoleSet::eliminate_overlaps`] builds a filtered copy.
#[derive(Clone, Debug)]
pub struct HoleSet {
    /// One center per row, `(holes, d)`.
    pub centers: DMatrix<Real>,
    /// One radius per hole, `(holes,)`.
    pub radii: DVector<Real>,
}

impl HoleSet {
    /// Draw `n_holes` balls with centers uniform in `[-1, 1]^d` and radii
    /// log-uniform over `[0.2, 0.5]`, so hole sizes vary across scales.
    pub fn generate<R: Rng>(n_holes: usize, d: usize, rng: &mut R) -> Self {
        let centers = DMatrix::from_fn(n_holes, d, |_, _| rng.gen_range(-1.0..1.0));
        let radii = DVector::from_fn(n_holes, |_, _| {
            rng.gen_range(RADIUS_MIN.ln()..RADIUS_MAX.ln()).exp()
        });
        Self { centers, radii }
    }

    /// Number of holes in the set.
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// True when the set holds no holes.
    pub fn is_empty(&self) -> bool {
        self.radii.len() == 0
    }

    /// True when `point` lies inside (or on the boundary of) any ball.
    /// The swiss-cheese sampler keeps exactly the points for which this
    /// returns false.
    pub fn contains(&self, point: &[Real]) -> bool {
        for hole in 0..self.len() {
            let mut dist_sq = 0.0;
            for (col, &coord) in point.iter().enumerate() {
                let delta = coord - self.centers[(hole, col)];
                dist_sq += delta * delta;
            }
            if dist_sq.sqrt() <= self.radii[hole] {
                return true;
            }
        }
        false
    }

    /// Drop every ball that intersects an earlier-visited ball.
    ///
    /// Holes are visited sorted by radius ascending, and for each sorted
    /// pair the later-visited member is marked for removal when the center
    /// distance is at most the radius sum — so the smaller member of an
    /// overlapping pair survives. `prioritize_bigger_balls` reverses the
    /// visit order and keeps the larger member instead. The returned set
    /// lists the survivors in visit order.
    pub fn eliminate_overlaps(self, prioritize_bigger_balls: bool) -> Self {
        let count = self.len();
        let d = self.centers.ncols();

        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by(|&a, &b| self.radii[a].total_cmp(&self.radii[b]));
        if prioritize_bigger_balls {
            order.reverse();
        }

        let mut removed = vec![false; count];
        for a in 0..count {
            for b in (a + 1)..count {
                let (i, j) = (order[a], order[b]);
                let mut dist_sq = 0.0;
                for col in 0..d {
                    let delta = self.centers[(i, col)] - self.centers[(j, col)];
                    dist_sq += delta * delta;
                }
                if dist_sq.sqrt() <= self.radii[i] + self.radii[j] {
                    removed[b] = true;
                }
            }
        }

        let kept: Vec<usize> = (0..count).filter(|&a| !removed[a]).map(|a| order[a]).collect();
        let centers = DMatrix::from_fn(kept.len(), d, |row, col| self.centers[(kept[row], col)]);
        let radii = DVector::from_fn(kept.len(), |row, _| self.radii[kept[row]]);
        Self { centers, radii }
    }

    /// Concatenate two hole sets over the same dimension.
    pub fn merge(self, other: Self) -> Self {
        debug_assert_eq!(self.centers.ncols(), other.centers.ncols());
        let d = self.centers.ncols();
        let split = self.len();
        let count = split + other.len();
        let centers = DMatrix::from_fn(count, d, |row, col| {
            if row < split {
                self.centers[(row, col)]
            } else {
                other.centers[(row - split, col)]
            }
        });
        let radii = DVector::from_fn(count, |row, _| {
            if row < split {
                self.radii[row]
            } else {
                other.radii[row - split]
            }
        });
        Self { centers, radii }
    }
}
