use log::{debug, log_enabled, trace, Level};
use nalgebra::Matrix3;
use ndarray::{Array1, Array2, ArrayView1};

use super::band::BandOrder;
use super::format::{format_band_matrix, format_coefficients};
use super::frame::{build_rotation, optimal_direction};
use super::matrix::{build_y, build_y_rotated};
use super::zonal::invert_basis;
use crate::error::{Result, ShError};

/// Rotation-independent state of one band order.
///
/// Holds the zonal projector `A_hat`, so a batch pays for the inverse once
/// and every row only builds its rotated basis.
#[derive(Debug, Clone)]
pub struct RotationPlan {
    band: BandOrder,
    a_hat: Array2<f64>,
    condition: f64,
}

impl RotationPlan {
    pub fn new(band: BandOrder) -> Result<Self> {
        let y = build_y(band);
        let (a_hat, condition) = invert_basis(&y, band.get())?;
        debug!(
            "built rotation plan for band order {} ({}x{}, condition {:.3e})",
            band,
            a_hat.nrows(),
            a_hat.ncols(),
            condition
        );
        if log_enabled!(Level::Trace) {
            trace!("lobe basis:\n{}", format_band_matrix(&y, band));
        }
        Ok(Self {
            band,
            a_hat,
            condition,
        })
    }

    pub fn band(&self) -> BandOrder {
        self.band
    }

    pub fn zonal_projection(&self) -> &Array2<f64> {
        &self.a_hat
    }

    pub fn condition(&self) -> f64 {
        self.condition
    }

    /// Rotates `coeffs` so that its optimal direction lands on +Z.
    pub fn rotate(&self, coeffs: ArrayView1<f64>) -> Result<Array1<f64>> {
        self.check_len(coeffs.len())?;
        let direction = match coeffs.as_slice() {
            Some(slice) => optimal_direction(slice),
            None => optimal_direction(&coeffs.to_vec()),
        };
        let rotated = self.rotate_by(coeffs, &build_rotation(&direction));
        if log_enabled!(Level::Trace) {
            trace!(
                "coefficients in:\n{}coefficients out:\n{}",
                format_coefficients(&coeffs.to_vec(), self.band),
                format_coefficients(&rotated.to_vec(), self.band)
            );
        }
        Ok(rotated)
    }

    /// Rotates `coeffs` by an explicit frame.
    pub fn rotate_with(
        &self,
        coeffs: ArrayView1<f64>,
        rotation: &Matrix3<f64>,
    ) -> Result<Array1<f64>> {
        self.check_len(coeffs.len())?;
        Ok(self.rotate_by(coeffs, rotation))
    }

    fn rotate_by(&self, coeffs: ArrayView1<f64>, rotation: &Matrix3<f64>) -> Array1<f64> {
        // project into the rotated zonal basis
        let z = self.a_hat.t().dot(&coeffs);
        let y_r = build_y_rotated(self.band, rotation);
        y_r.t().dot(&z)
    }

    fn check_len(&self, found: usize) -> Result<()> {
        let expected = self.band.coeff_count();
        if found != expected {
            return Err(ShError::ShapeMismatch {
                band: self.band.get(),
                expected,
                found,
            });
        }
        Ok(())
    }
}

/// Rotates a single coefficient vector. Builds a fresh plan; batches should
/// go through [`crate::ops::batch::rotate_all`].
pub fn rotate(coeffs: &[f64], band: BandOrder) -> Result<Vec<f64>> {
    let plan = RotationPlan::new(band)?;
    plan.rotate(ArrayView1::from(coeffs)).map(Array1::into_raw_vec)
}
