//! SH rotation for offline lighting bakes.
//!
//! Reorients batches of real spherical harmonics coefficient vectors so that
//! each vector's dominant light direction lands on +Z, using the rotated
//! zonal harmonics basis.
//!
//! ```
//! use ndarray::arr2;
//! use sh_rotate::{rotate_all, BandOrder};
//!
//! let batch = arr2(&[[0.5f32, 0.2, -0.3, 0.4], [1.0, 0.0, 0.0, 0.0]]);
//! let band = BandOrder::new(2).unwrap();
//! let rotated = rotate_all(&batch.view(), band).unwrap();
//! assert_eq!(rotated.dim(), batch.dim());
//! ```
#![allow(clippy::excessive_precision)]

pub mod error;
pub mod ops;
pub mod sh;

pub use error::{Result, ShError};
pub use ops::{
    rotate_all, rotate_all_with, rotate_buffer, rotate_flat, Coefficient, RotationConfig,
};
pub use sh::{BandOrder, RotationPlan, MAX_BAND_ORDER};
