//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a sampling request can be rejected before any points are drawn
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// (DimensionMismatch) An operation restricted to 2-column data received another width
    DimensionMismatch { expected: usize, found: usize },
    /// (AmbientTooSmall) The embedding space is not strictly larger than the data
    AmbientTooSmall { ambient: usize, data_dim: usize },
    /// (NotATorus) The tube radius exceeds the center radius
    NotATorus { tube: Real, center: Real },
    /// (NeckTooWide) The eyeglasses neck does not fit between the lenses
    NeckTooWide { neck_size: Real, limit: Real },
    /// (AngleOutOfRange) A rotation angle fell outside the accepted interval
    AngleOutOfRange { angle: Real, min: Real, max: Real },
    /// (IndexOutOfRange) A triangle references a vertex that does not exist
    IndexOutOfRange { index: usize, len: usize },
    /// (DegenerateMesh) Every triangle in the mesh has zero area
    DegenerateMesh,
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::DimensionMismatch { expected, found } => write!(
                f,
                "(DimensionMismatch) data has {} columns, but should have exactly {}",
                found, expected
            ),
            ShapeError::AmbientTooSmall { ambient, data_dim } => write!(
                f,
                "(AmbientTooSmall) dimensionality of ambient space ({}) must be greater than dimensionality of data ({})",
                ambient, data_dim
            ),
            ShapeError::NotATorus { tube, center } => write!(
                f,
                "(NotATorus) tube radius {} exceeds center radius {}: that's not a torus",
                tube, center
            ),
            ShapeError::NeckTooWide { neck_size, limit } => write!(
                f,
                "(NeckTooWide) neck size {} must be smaller than the lens diameter {}",
                neck_size, limit
            ),
            ShapeError::AngleOutOfRange { angle, min, max } => write!(
                f,
                "(AngleOutOfRange) angle {} not in range: angle should satisfy {} <= angle <= {}",
                angle, min, max
            ),
            ShapeError::IndexOutOfRange { index, len } => write!(
                f,
                "(IndexOutOfRange) vertex index {} is out of range (vertices.len = {})",
                index, len
            ),
            ShapeError::DegenerateMesh => {
                write!(f, "(DegenerateMesh) no triangle with positive area to sample from")
            },
        }
    }
}
