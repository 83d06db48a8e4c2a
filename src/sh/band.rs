use std::fmt;

use super::lobes::LOBE_BANDS;
use crate::error::{Result, ShError};

/// Largest band order with a lobe slice in the direction table.
pub const MAX_BAND_ORDER: usize = LOBE_BANDS;

/// Number of SH bands in use. Order `N` covers bands `0..N` and `N²`
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BandOrder(usize);

impl BandOrder {
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 || order > MAX_BAND_ORDER {
            return Err(ShError::UnsupportedBand {
                band: order,
                max: MAX_BAND_ORDER,
            });
        }
        Ok(Self(order))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Coefficients per vector, `N²`.
    #[inline]
    pub fn coeff_count(self) -> usize {
        self.0 * self.0
    }

    /// Highest band, `N - 1`.
    #[inline]
    pub fn max_band(self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for BandOrder {
    type Error = ShError;

    fn try_from(order: usize) -> Result<Self> {
        Self::new(order)
    }
}

impl fmt::Display for BandOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_table_range() {
        for order in 1..=MAX_BAND_ORDER {
            let band = BandOrder::new(order).unwrap();
            assert_eq!(band.get(), order);
            assert_eq!(band.coeff_count(), order * order);
            assert_eq!(band.max_band(), order - 1);
        }
    }

    #[test]
    fn test_rejects_zero_and_past_table() {
        for order in [0, MAX_BAND_ORDER + 1, 64] {
            match BandOrder::new(order) {
                Err(ShError::UnsupportedBand { band, max }) => {
                    assert_eq!(band, order);
                    assert_eq!(max, MAX_BAND_ORDER);
                }
                other => panic!("expected UnsupportedBand, got {:?}", other),
            }
        }
    }
}
