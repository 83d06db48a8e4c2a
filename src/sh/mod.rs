//! # Spherical harmonics rotation
//!
//! Rotation of real SH coefficient vectors through the rotated zonal
//! harmonics basis. A band-`N` vector is projected onto `N²` zonal lobes
//! with `A_hat = Y⁻¹`, the lobes are rotated, and the vector is re-expanded
//! with the rotated basis `Y_R`.
//!
//! Layering, leaf first: [`lobes`] → [`legendre`] → [`basis`] → [`matrix`]
//! → [`zonal`] / [`frame`] → [`rotate`].
pub mod band;
pub mod basis;
pub mod format;
pub mod frame;
pub mod legendre;
pub mod lobes;
pub mod matrix;
pub mod rotate;
pub mod zonal;

pub use self::band::{BandOrder, MAX_BAND_ORDER};
pub use self::basis::{sh_index, sph_harm, zonal_scale};
pub use self::frame::{build_rotation, optimal_direction};
pub use self::matrix::{build_y, build_y_band, build_y_rotated};
pub use self::rotate::{rotate, RotationPlan};
pub use self::zonal::{zonal_projection, zonal_projection_band};
