use nalgebra::DMatrix;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tdasets::float_types::Real;
use tdasets::{ShapeError, embed, embed_with_rng};

fn pairwise_distance(data: &DMatrix<Real>, i: usize, j: usize) -> Real {
    let mut sum = 0.0;
    for col in 0..data.ncols() {
        let delta = data[(i, col)] - data[(j, col)];
        sum += delta * delta;
    }
    sum.sqrt()
}

fn sample_cloud() -> DMatrix<Real> {
    DMatrix::from_row_slice(
        5,
        3,
        &[
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 2.0, 0.0, //
            -1.0, 0.5, 3.0, //
            0.25, -0.75, 1.5,
        ],
    )
}

#[test]
fn output_shape_is_n_by_ambient() {
    let data = sample_cloud();
    let lifted = embed(&data, 12).unwrap();
    assert_eq!(lifted.shape(), (5, 12));
}

#[test]
fn rejects_ambient_not_strictly_larger() {
    let data = sample_cloud();
    for ambient in [0, 1, 3] {
        match embed(&data, ambient) {
            Err(ShapeError::AmbientTooSmall { ambient: got, data_dim }) => {
                assert_eq!(got, ambient);
                assert_eq!(data_dim, 3);
            },
            other => panic!("ambient {} should be rejected, got {:?}", ambient, other),
        }
    }
}

#[test]
fn preserves_pairwise_distances() {
    let data = sample_cloud();
    let lifted = embed(&data, 20).unwrap();
    for i in 0..data.nrows() {
        for j in (i + 1)..data.nrows() {
            let before = pairwise_distance(&data, i, j);
            let after = pairwise_distance(&lifted, i, j);
            assert!(
                (before - after).abs() <= 1e-8,
                "distance between rows {} and {} changed from {} to {}",
                i,
                j,
                before,
                after
            );
        }
    }
}

#[test]
fn rotation_reaches_the_padded_columns() {
    // A degenerate draw could leave the padded subspace fixed, but with a
    // random orthogonal factor that never happens in practice.
    let data = sample_cloud();
    let mut rng = SmallRng::seed_from_u64(11);
    let lifted = embed_with_rng(&data, 10, &mut rng).unwrap();
    let mut beyond = 0.0 as Real;
    for i in 0..lifted.nrows() {
        for col in 3..lifted.ncols() {
            beyond = beyond.max(lifted[(i, col)].abs());
        }
    }
    assert!(beyond > 1e-6, "padded columns stayed at zero, max |value| = {}", beyond);
}

#[test]
fn same_generator_seed_gives_the_same_lift() {
    let data = sample_cloud();
    let first = embed_with_rng(&data, 8, &mut SmallRng::seed_from_u64(4)).unwrap();
    let second = embed_with_rng(&data, 8, &mut SmallRng::seed_from_u64(4)).unwrap();
    assert_eq!(first, second);
}
