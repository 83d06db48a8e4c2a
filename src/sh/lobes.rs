//! Lobe direction table.
//!
//! Band `l` owns `2l + 1` sample directions stored back to back, so the slice
//! for band `l` starts at `l²`. Each entry is `[theta, phi]` in radians.

/// Number of bands the table covers.
pub const LOBE_BANDS: usize = 8;

/// Total entries, `LOBE_BANDS²`.
pub const LOBE_COUNT: usize = LOBE_BANDS * LOBE_BANDS;

#[rustfmt::skip]
pub const LOBE_DIRECTIONS: [[f64; 2]; LOBE_COUNT] = [
    // l = 0
    [0.0000, 0.0000],
    // l = 1
    [1.5708, 1.5708], [0.0000, 0.0000], [1.5708, 0.0000],
    // l = 2
    [1.5708, 1.5708], [0.9553, -2.3562], [3.1416, 2.3562], [0.9553, 0.7854], [2.1863, 2.3562],
    // l = 3
    [3.1416, 2.6180], [1.5708, -2.6180], [1.5708, 1.5708], [2.0344, -3.1416], [2.0344, -1.5708],
    [2.0344, -0.5236], [2.0344, 1.5708],
    // l = 4
    [1.5708, 0.7854], [1.1832, 0.0000], [1.5708, -3.1416], [1.1832, 0.7854], [3.1416, 0.0000],
    [1.5708, 1.5708], [1.5708, 0.3927], [2.2845, -1.5708], [0.8571, -3.1416],
    // l = 5
    [0.0000, 0.0000], [1.5708, 1.5708], [2.1863, 1.5708], [2.1863, -2.7489], [1.5708, -2.3562],
    [1.5708, -2.7489], [1.5708, -0.7854], [0.6997, 1.5708], [0.6997, -2.3562], [0.9553, 1.5708],
    [1.5708, 0.0000],
    // l = 6
    [1.5708, 0.7854], [1.0213, -2.6180], [2.1203, -1.5708], [1.5708, -1.5708], [3.1416, 1.5708],
    [1.5708, 0.5236], [2.1203, 1.5708], [1.8241, 1.5708], [0.5913, -0.3142], [1.8241, -1.5708],
    [2.1203, -3.1416], [1.5708, 0.3927], [2.3389, -1.5708],
    // l = 7
    [1.5708, -0.5236], [2.0719, 2.6180], [0.6928, 1.5708], [1.5708, -1.5708], [3.1416, -0.3927],
    [0.6928, -1.5708], [1.7989, -3.1416], [2.0053, 1.5708], [1.8518, -3.1416], [2.0053, -1.5708],
    [0.6928, -2.3562], [2.2040, -1.5708], [0.8755, 0.0000], [2.2040, 1.5708], [0.6928, 2.6180],
];

/// The `2l + 1` canonical lobes of band `l`, or `None` past the table.
#[inline]
pub fn band_lobes(l: usize) -> Option<&'static [[f64; 2]]> {
    if l >= LOBE_BANDS {
        return None;
    }
    Some(&LOBE_DIRECTIONS[l * l..(l + 1) * (l + 1)])
}

/// Lobes shared by every band of an `order`-band system: the slice of the
/// highest band `order - 1`.
#[inline]
pub fn shared_lobes(order: usize) -> Option<&'static [[f64; 2]]> {
    order.checked_sub(1).and_then(band_lobes)
}
