use log::warn;
use nalgebra::DMatrix;
use ndarray::{Array2, Axis};

use super::band::BandOrder;
use super::matrix::{build_y, build_y_band};
use crate::error::{Result, ShError};

/// Largest 1-norm condition number accepted for a lobe basis.
pub const MAX_CONDITION: f64 = 1e10;

/// Zonal projector `A_hat(N) = Y(N)⁻¹`, mapping SH coefficients into the
/// rotated zonal harmonics basis as `z = A_hatᵀ · c`.
pub fn zonal_projection(band: BandOrder) -> Result<Array2<f64>> {
    invert_basis(&build_y(band), band.get()).map(|(inverse, _)| inverse)
}

/// Inverse of the single-band basis of band `l`.
pub fn zonal_projection_band(l: usize) -> Result<Array2<f64>> {
    invert_basis(&build_y_band(l)?, l + 1).map(|(inverse, _)| inverse)
}

/// Inverts a lobe basis, returning the inverse and its condition number.
///
/// Fails with [`ShError::SingularBasis`] when the LU factorisation breaks
/// down or the condition number exceeds [`MAX_CONDITION`].
pub fn invert_basis(y: &Array2<f64>, band: usize) -> Result<(Array2<f64>, f64)> {
    let (rows, cols) = y.dim();
    let matrix = DMatrix::from_row_iterator(rows, cols, y.iter().copied());

    let Some(inverse) = matrix.try_inverse() else {
        warn!("lobe basis for band order {} has no inverse", band);
        return Err(ShError::SingularBasis {
            band,
            condition: f64::INFINITY,
        });
    };
    let inverse = Array2::from_shape_fn((rows, cols), |(i, j)| inverse[(i, j)]);

    let condition = norm_1(y) * norm_1(&inverse);
    if !condition.is_finite() || condition > MAX_CONDITION {
        warn!(
            "lobe basis for band order {} is ill-conditioned ({:e})",
            band, condition
        );
        return Err(ShError::SingularBasis { band, condition });
    }
    Ok((inverse, condition))
}

/// Maximum absolute column sum.
fn norm_1(m: &Array2<f64>) -> f64 {
    m.map_axis(Axis(0), |col| col.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, |acc: f64, &v| acc.max(v))
}
