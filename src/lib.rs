//! Synthetic point-cloud datasets sampled from parametric geometric
//! manifolds — spheres, tori, swiss rolls, figure-eight and eyeglass
//! curves, triangulated surfaces, and hole-punctured "swiss cheese"
//! domains — for use as test inputs in topological data analysis.
//!
//! Every sampler returns a freshly allocated [`nalgebra::DMatrix`] with
//! one observation per row, and comes in two forms: a wrapper taking
//! `seed: Option<u64>` (seeded calls are reproducible) and a `*_with_rng`
//! core generic over [`rand::Rng`]. Most samplers accept optional additive
//! Gaussian noise and an optional ambient dimension; the latter lifts the
//! cloud isometrically into a higher-dimensional space via [`embed`].
//!
//! ```
//! use tdasets::{embed, torus};
//!
//! let cloud = torus(500, 2.0, 1.0, None, None, Some(42)).unwrap();
//! assert_eq!(cloud.shape(), (500, 3));
//!
//! let lifted = embed(&cloud, 10).unwrap();
//! assert_eq!(lifted.shape(), (500, 10));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod dimension;
pub mod errors;
pub mod float_types;
pub mod holes;
pub mod postprocess;
pub mod rng;
pub mod rotate;
pub mod sample;
pub mod shapes2d;
pub mod shapes3d;
pub mod shapesnd;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use dimension::{embed, embed_with_rng};
pub use errors::ShapeError;
pub use holes::HoleSet;
pub use rotate::rotate2d;
pub use sample::{sample_from_mesh, sample_from_mesh_with_rng};
pub use shapes2d::{eyeglasses, eyeglasses_with_rng, infty_sign, infty_sign_with_rng};
pub use shapes3d::{
    sphere, sphere_by_area, sphere_by_area_with_rng, sphere_with_rng, swiss_roll,
    swiss_roll_with_rng, torus, torus_by_area, torus_by_area_with_rng, torus_with_rng,
};
pub use shapesnd::{
    dsphere, dsphere_with_rng, swiss_cheese, swiss_cheese_with_holes, swiss_cheese_with_rng,
};
