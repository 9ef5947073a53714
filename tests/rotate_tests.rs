use nalgebra::DMatrix;
use tdasets::ShapeError;
use tdasets::float_types::{FRAC_PI_2, PI, Real, TAU};
use tdasets::rotate2d;

fn sample_points() -> DMatrix<Real> {
    DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 0.0, 1.0, -2.0, 0.5, 0.25, -3.0])
}

fn assert_close(actual: &DMatrix<Real>, expected: &DMatrix<Real>, tol: Real) {
    assert_eq!(actual.shape(), expected.shape());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() <= tol,
            "value {} drifted from {} by more than {}",
            a,
            e,
            tol
        );
    }
}

#[test]
fn rejects_three_columns() {
    let data = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    match rotate2d(&data, 0.0) {
        Err(ShapeError::DimensionMismatch { expected, found }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        },
        other => panic!("expected a dimension mismatch, got {:?}", other),
    }
}

#[test]
fn neutral_angle_is_identity() {
    let data = sample_points();
    let rotated = rotate2d(&data, FRAC_PI_2).unwrap();
    assert_close(&rotated, &data, 1e-12);
}

#[test]
fn full_turn_added_to_angle_is_a_noop() {
    let data = sample_points();
    let once = rotate2d(&data, 0.7).unwrap();
    let again = rotate2d(&data, 0.7 + TAU).unwrap();
    assert_close(&again, &once, 1e-9);
}

#[test]
fn four_quarter_turns_restore_the_input() {
    // angle = π is an effective quarter turn under the π/2-neutral
    // convention; four of them compose to a full 2π rotation.
    let data = sample_points();
    let mut rotated = data.clone();
    for _ in 0..4 {
        rotated = rotate2d(&rotated, PI).unwrap();
    }
    assert_close(&rotated, &data, 1e-9);
}

#[test]
fn radii_are_preserved() {
    let data = sample_points();
    let rotated = rotate2d(&data, 1.234).unwrap();
    for i in 0..data.nrows() {
        let before = data[(i, 0)].hypot(data[(i, 1)]);
        let after = rotated[(i, 0)].hypot(rotated[(i, 1)]);
        assert!((before - after).abs() <= 1e-12, "radius changed on row {}", i);
    }
}

#[test]
fn pairwise_distances_are_preserved() {
    let data = sample_points();
    let rotated = rotate2d(&data, -2.5).unwrap();
    for i in 0..data.nrows() {
        for j in (i + 1)..data.nrows() {
            let before =
                (data[(i, 0)] - data[(j, 0)]).hypot(data[(i, 1)] - data[(j, 1)]);
            let after = (rotated[(i, 0)] - rotated[(j, 0)])
                .hypot(rotated[(i, 1)] - rotated[(j, 1)]);
            assert!(
                (before - after).abs() <= 1e-12,
                "distance between rows {} and {} changed",
                i,
                j
            );
        }
    }
}
