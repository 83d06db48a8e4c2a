use nalgebra::Vector3;
use std::f64::consts::{PI, SQRT_2};

use super::legendre::legendre;

/// Flat coefficient index of `(l, m)`, `l(l + 1) + m`.
#[inline]
pub fn sh_index(m: i32, l: u32) -> usize {
    let l = l as i64;
    (l * (l + 1) + m as i64) as usize
}

/// `n!` as an iterative `f64` product. Exact up to `n = 22`.
pub fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Normalisation constant `K(l, m)` of the real SH basis.
pub fn sh_normalization(l: u32, m: u32) -> f64 {
    let num = (2.0 * l as f64 + 1.0) * factorial(l - m);
    let den = 4.0 * PI * factorial(l + m);
    (num / den).sqrt()
}

/// Real SH basis function `y(l, m)` sampled at `(theta, phi)`.
///
/// `theta` is the polar angle from +Z in `[0, π]`, `phi` the azimuth.
pub fn sph_harm(m: i32, l: u32, theta: f64, phi: f64) -> f64 {
    let cos_theta = theta.cos();
    if m == 0 {
        sh_normalization(l, 0) * legendre(l, 0, cos_theta)
    } else if m > 0 {
        let m = m as u32;
        SQRT_2 * sh_normalization(l, m) * (m as f64 * phi).cos() * legendre(l, m, cos_theta)
    } else {
        let m = m.unsigned_abs();
        SQRT_2 * sh_normalization(l, m) * (m as f64 * phi).sin() * legendre(l, m, cos_theta)
    }
}

/// ZH lobe scale for band `l`, `sqrt(4π / (2l + 1))`.
pub fn zonal_scale(l: u32) -> f64 {
    (4.0 * PI / (2.0 * l as f64 + 1.0)).sqrt()
}

/// Unit vector of the spherical direction `(theta, phi)`.
#[inline]
pub fn spherical_dir(theta: f64, phi: f64) -> Vector3<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
}

/// `(theta, phi)` of a non-zero vector. The vector need not be unit length.
#[inline]
pub fn spherical_coord(v: &Vector3<f64>) -> (f64, f64) {
    let norm = v.norm();
    let theta = (v.z / norm).clamp(-1.0, 1.0).acos();
    let phi = v.y.atan2(v.x);
    (theta, phi)
}
