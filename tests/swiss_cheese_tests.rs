use nalgebra::{DMatrix, DVector};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tdasets::float_types::Real;
use tdasets::{HoleSet, swiss_cheese, swiss_cheese_with_holes};

#[test]
fn returns_exactly_the_requested_count() {
    for (n_points, n_holes, d) in [(500, 3, 3), (200, 2, 2), (50, 0, 4)] {
        let cloud = swiss_cheese(n_points, n_holes, d, None, Some(5), true, false).unwrap();
        assert_eq!(cloud.shape(), (n_points, d));
        for value in cloud.iter() {
            assert!((-1.0..=1.0).contains(value), "coordinate {} left the cube", value);
        }
    }
}

#[test]
fn no_sample_lands_inside_a_retained_hole() {
    let (cloud, holes) =
        swiss_cheese_with_holes(400, 3, 3, None, Some(41), true, false).unwrap();
    assert_eq!(cloud.nrows(), 400);
    for i in 0..cloud.nrows() {
        let point: Vec<Real> = cloud.row(i).iter().copied().collect();
        assert!(!holes.contains(&point), "row {} fell into a hole", i);
    }
}

#[test]
fn non_overlapping_mode_delivers_the_requested_holes() {
    let (_, holes) = swiss_cheese_with_holes(10, 3, 3, None, Some(23), true, false).unwrap();
    assert_eq!(holes.len(), 3);
    for i in 0..holes.len() {
        for j in (i + 1)..holes.len() {
            let mut dist_sq = 0.0;
            for col in 0..holes.centers.ncols() {
                let delta = holes.centers[(i, col)] - holes.centers[(j, col)];
                dist_sq += delta * delta;
            }
            assert!(
                dist_sq.sqrt() > holes.radii[i] + holes.radii[j],
                "holes {} and {} overlap",
                i,
                j
            );
        }
    }
}

#[test]
fn generated_holes_respect_the_documented_ranges() {
    let mut rng = SmallRng::seed_from_u64(3);
    let holes = HoleSet::generate(64, 3, &mut rng);
    assert_eq!(holes.len(), 64);
    for i in 0..holes.len() {
        let radius = holes.radii[i];
        assert!((0.2..=0.5).contains(&radius), "radius {} out of range", radius);
        for col in 0..3 {
            let center = holes.centers[(i, col)];
            assert!((-1.0..=1.0).contains(&center), "center {} out of range", center);
        }
    }
}

#[test]
fn overlap_elimination_keeps_the_smaller_ball() {
    let holes = HoleSet {
        centers: DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 0.1, 0.0]),
        radii: DVector::from_vec(vec![0.3, 0.4]),
    };
    let kept = holes.eliminate_overlaps(false);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept.radii[0], 0.3);
}

#[test]
fn overlap_elimination_can_prioritize_the_bigger_ball() {
    let holes = HoleSet {
        centers: DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 0.1, 0.0]),
        radii: DVector::from_vec(vec![0.3, 0.4]),
    };
    let kept = holes.eliminate_overlaps(true);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept.radii[0], 0.4);
}

#[test]
fn disjoint_holes_all_survive_elimination() {
    let holes = HoleSet {
        centers: DMatrix::from_row_slice(3, 2, &[-0.8, -0.8, 0.8, 0.8, -0.8, 0.8]),
        radii: DVector::from_vec(vec![0.25, 0.3, 0.2]),
    };
    let kept = holes.eliminate_overlaps(false);
    assert_eq!(kept.len(), 3);
}

#[test]
fn membership_counts_the_boundary_as_inside() {
    let holes = HoleSet {
        centers: DMatrix::from_row_slice(1, 2, &[0.0, 0.0]),
        radii: DVector::from_vec(vec![0.5]),
    };
    assert!(holes.contains(&[0.1, 0.0]));
    assert!(holes.contains(&[0.5, 0.0]));
    assert!(!holes.contains(&[0.9, 0.0]));
}

#[test]
fn noise_is_applied_after_the_rejection_filter() {
    let clean = swiss_cheese(300, 2, 2, None, Some(9), true, false).unwrap();
    let noisy = swiss_cheese(300, 2, 2, Some(0.01), Some(9), true, false).unwrap();
    assert_eq!(clean.shape(), noisy.shape());
    assert_ne!(clean, noisy);
}
