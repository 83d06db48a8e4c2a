use log::debug;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use num_traits::{AsPrimitive, Float};
use rayon::prelude::*;

use crate::error::{Result, ShError};
use crate::ops::config::RotationConfig;
use crate::sh::{BandOrder, RotationPlan};

/// Storage type of coefficient batches. Rotation runs in `f64` internally.
pub trait Coefficient: Float + AsPrimitive<f64> + Send + Sync {
    fn from_f64(v: f64) -> Self;
}

impl Coefficient for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v.as_()
    }
}

impl Coefficient for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

/// Rotates every row of `batch` (shape `[items, band²]`) with the default
/// configuration.
pub fn rotate_all<T: Coefficient>(batch: &ArrayView2<T>, band: BandOrder) -> Result<Array2<T>> {
    rotate_all_with(batch, band, &RotationConfig::default())
}

/// Rotates every row of `batch` independently.
///
/// The row width is checked and the zonal projector is built before any
/// worker starts; on error no output is returned.
pub fn rotate_all_with<T: Coefficient>(
    batch: &ArrayView2<T>,
    band: BandOrder,
    config: &RotationConfig,
) -> Result<Array2<T>> {
    let expected = band.coeff_count();
    if batch.ncols() != expected {
        return Err(ShError::ShapeMismatch {
            band: band.get(),
            expected,
            found: batch.ncols(),
        });
    }
    let plan = RotationPlan::new(band)?;

    debug!(
        "rotating {} items at band order {} (chunk size {})",
        batch.nrows(),
        band,
        config.min_len()
    );

    match config.num_threads {
        Some(num_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?;
            pool.install(|| rotate_rows(batch, &plan, config.min_len()))
        }
        None => rotate_rows(batch, &plan, config.min_len()),
    }
}

/// Rotates a contiguous row-major buffer holding `items` vectors.
pub fn rotate_buffer<T: Coefficient>(data: &[T], items: usize, band: usize) -> Result<Vec<T>> {
    let band = BandOrder::new(band)?;
    let stride = band.coeff_count();
    // usize::MAX stands in for an item count whose length does not fit
    let expected = items.checked_mul(stride).unwrap_or(usize::MAX);
    let length_error = || ShError::BufferLength {
        items,
        band: band.get(),
        expected,
        found: data.len(),
    };
    if items.checked_mul(stride) != Some(data.len()) {
        return Err(length_error());
    }
    let view = ArrayView2::from_shape((items, stride), data).map_err(|_| length_error())?;
    rotate_all(&view, band).map(Array2::into_raw_vec)
}

/// Rotates a contiguous row-major buffer whose item count follows from its
/// length.
pub fn rotate_flat<T: Coefficient>(data: &[T], band: usize) -> Result<Vec<T>> {
    let order = BandOrder::new(band)?;
    let stride = order.coeff_count();
    if data.len() % stride != 0 {
        return Err(ShError::NotMultiple {
            band,
            stride,
            found: data.len(),
        });
    }
    rotate_buffer(data, data.len() / stride, band)
}

fn rotate_rows<T: Coefficient>(
    batch: &ArrayView2<T>,
    plan: &RotationPlan,
    min_len: usize,
) -> Result<Array2<T>> {
    let mut result = Array2::zeros(batch.dim());

    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .with_min_len(min_len)
        .enumerate()
        .try_for_each(|(i, mut row)| {
            let coeffs: Array1<f64> = batch.row(i).mapv(|c| c.as_());
            let rotated = plan.rotate(coeffs.view())?;
            if rotated.iter().any(|v| !v.is_finite()) {
                return Err(ShError::NonFinite { index: i });
            }
            row.zip_mut_with(&rotated, |out, &v| *out = T::from_f64(v));
            Ok(())
        })?;

    Ok(result)
}
