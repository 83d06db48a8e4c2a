use nalgebra::Matrix3;
use ndarray::{s, Array2, ArrayViewMut2};

use super::band::BandOrder;
use super::basis::{sph_harm, spherical_coord, spherical_dir};
use super::lobes::{band_lobes, shared_lobes, LOBE_BANDS};
use crate::error::{Result, ShError};

/// Lobe basis `Y(N)`.
///
/// Block-diagonal with one `(2l+1)²` block per band at offset `l²`. Every
/// block samples the lobes of the highest band `N - 1`, so low bands reuse
/// the first `2l + 1` of those directions.
pub fn build_y(band: BandOrder) -> Array2<f64> {
    fill_shared(band, |theta, phi| (theta, phi))
}

/// Lobe basis `Y_R(N, R)` sampled at the shared lobes after rotating each by
/// `rotation`.
pub fn build_y_rotated(band: BandOrder, rotation: &Matrix3<f64>) -> Array2<f64> {
    fill_shared(band, |theta, phi| {
        spherical_coord(&(rotation * spherical_dir(theta, phi)))
    })
}

/// Single-band basis sampled at band `l`'s own canonical lobes.
pub fn build_y_band(l: usize) -> Result<Array2<f64>> {
    let lobes = band_lobes(l).ok_or(ShError::UnsupportedBand {
        band: l + 1,
        max: LOBE_BANDS,
    })?;
    let size = 2 * l + 1;
    let mut y = Array2::zeros((size, size));
    fill_block(y.view_mut(), l, lobes, &|theta, phi| (theta, phi));
    Ok(y)
}

fn fill_shared<F>(band: BandOrder, sample_at: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let size = band.coeff_count();
    let mut y = Array2::zeros((size, size));
    let Some(lobes) = shared_lobes(band.get()) else {
        // BandOrder guarantees a slice for every accepted order.
        return y;
    };

    for l in 0..band.get() {
        let offset = l * l;
        let width = 2 * l + 1;
        let block = y.slice_mut(s![offset..offset + width, offset..offset + width]);
        fill_block(block, l, lobes, &sample_at);
    }
    y
}

fn fill_block<F>(mut block: ArrayViewMut2<f64>, l: usize, lobes: &[[f64; 2]], sample_at: &F)
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let width = 2 * l + 1;
    for row in 0..width {
        let [theta, phi] = lobes[row];
        let (theta, phi) = sample_at(theta, phi);
        for col in 0..width {
            let m = col as i32 - l as i32;
            block[[row, col]] = sph_harm(m, l as u32, theta, phi);
        }
    }
}
