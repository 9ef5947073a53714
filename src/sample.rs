//! Constructing point clouds from triangle meshes.

use crate::errors::ShapeError;
use crate::float_types::{Real, tolerance};
use nalgebra::{DMatrix, Point3, Vector3};
use rand::Rng;

/// A sampleable face: base vertex, two spanning edge vectors, the unit
/// diagonal direction used for fold-back, and the face area.
struct Face {
    p0: Point3<Real>,
    p1: Point3<Real>,
    v1: Vector3<Real>,
    v2: Vector3<Real>,
    diagonal: Vector3<Real>,
    area: Real,
}

/// Randomly sample `n` points by area on a triangle mesh.
///
/// The probability that a sample lands on a given triangle is proportional
/// to that triangle's area; triangles with zero area are excluded before
/// sampling. The output is a flat `(n, 3)` matrix, not grouped by triangle.
///
/// Returns [`ShapeError::IndexOutOfRange`] when a triangle references a
/// missing vertex and [`ShapeError::DegenerateMesh`] when no triangle has
/// positive area.
pub fn sample_from_mesh(
    vertices: &[Point3<Real>],
    triangles: &[[usize; 3]],
    n: usize,
) -> Result<DMatrix<Real>, ShapeError> {
    sample_from_mesh_with_rng(vertices, triangles, n, &mut rand::thread_rng())
}

/// [`sample_from_mesh`] with a caller-supplied generator, for
/// deterministic sampling.
pub fn sample_from_mesh_with_rng<R: Rng>(
    vertices: &[Point3<Real>],
    triangles: &[[usize; 3]],
    n: usize,
    rng: &mut R,
) -> Result<DMatrix<Real>, ShapeError> {
    let faces = collect_faces(vertices, triangles)?;
    if faces.is_empty() {
        return Err(ShapeError::DegenerateMesh);
    }

    // Cumulative area distribution over the retained faces.
    let total: Real = faces.iter().map(|face| face.area).sum();
    let mut cumulative = Vec::with_capacity(faces.len());
    let mut acc = 0.0;
    for face in &faces {
        acc += face.area / total;
        cumulative.push(acc);
    }

    // Sorted uniform draws against the cumulative thresholds: one linear
    // scan assigns every sample to exactly one face, with no gaps and no
    // double counting.
    let mut draws: Vec<Real> = (0..n).map(|_| rng.r#gen::<Real>()).collect();
    draws.sort_by(Real::total_cmp);
    let mut face_of_sample = Vec::with_capacity(n);
    let mut fidx = 0usize;
    for draw in &draws {
        while fidx + 1 < cumulative.len() && *draw > cumulative[fidx] {
            fidx += 1;
        }
        face_of_sample.push(fidx);
    }

    let mut out = DMatrix::zeros(n, 3);
    for (row, &fi) in face_of_sample.iter().enumerate() {
        let face = &faces[fi];
        let point = sample_on_face(face, rng);
        out[(row, 0)] = point.x;
        out[(row, 1)] = point.y;
        out[(row, 2)] = point.z;
    }
    Ok(out)
}

/// Validate triangle indices, compute cross-product areas, and drop
/// degenerate faces.
fn collect_faces(
    vertices: &[Point3<Real>],
    triangles: &[[usize; 3]],
) -> Result<Vec<Face>, ShapeError> {
    let mut faces = Vec::with_capacity(triangles.len());
    let mut dropped = 0usize;
    for tri in triangles {
        for &index in tri {
            if index >= vertices.len() {
                return Err(ShapeError::IndexOutOfRange { index, len: vertices.len() });
            }
        }
        let p0 = vertices[tri[0]];
        let p1 = vertices[tri[1]];
        let p2 = vertices[tri[2]];
        let v1 = p1 - p0;
        let v2 = p2 - p0;
        let area = 0.5 * v1.cross(&v2).norm();
        if area <= tolerance() {
            dropped += 1;
            continue;
        }
        let v3 = p2 - p1;
        faces.push(Face {
            p0,
            p1,
            v1,
            v2,
            diagonal: v3 / v3.norm(),
            area,
        });
    }
    if dropped > 0 {
        log::debug!("dropped {} zero-area triangles before sampling", dropped);
    }
    Ok(faces)
}

/// Draw one uniform point on `face`: sample the spanning parallelogram and
/// fold points landing past the shared diagonal back into the triangle.
fn sample_on_face<R: Rng>(face: &Face, rng: &mut R) -> Point3<Real> {
    let mut u = rng.r#gen::<Real>();
    let mut v = rng.r#gen::<Real>();
    let point = face.p0 + face.v1 * u + face.v2 * v;

    // Perpendicular-project onto the diagonal through p1 and p2; if the
    // projection is closer to p0 than the sample, the sample lies on the
    // far side of the diagonal and gets reflected across it.
    let dp = point - face.p1;
    let perp = dp - face.diagonal * dp.dot(&face.diagonal);
    let projected = point - perp;
    if (projected - face.p0).norm_squared() < (point - face.p0).norm_squared() {
        u = 1.0 - u;
        v = 1.0 - v;
        return face.p0 + face.v1 * u + face.v2 * v;
    }
    point
}
