use std::fmt::Write;

use ndarray::Array2;

use super::band::BandOrder;
use super::basis::sh_index;

/// Renders the diagonal blocks of a band-diagonal matrix, one block after
/// another, one row per line.
pub fn format_band_matrix(m: &Array2<f64>, band: BandOrder) -> String {
    let mut out = String::new();
    for l in 0..band.get() {
        let offset = l * l;
        for row in 0..2 * l + 1 {
            for col in 0..2 * l + 1 {
                let _ = write!(out, "{:10.6} ", m[[offset + row, offset + col]]);
            }
            out.push('\n');
        }
    }
    out
}

/// Renders a coefficient vector one band per line, `m` ascending.
pub fn format_coefficients(coeffs: &[f64], band: BandOrder) -> String {
    let mut out = String::new();
    for l in 0..band.get() as u32 {
        for m in -(l as i32)..=l as i32 {
            match coeffs.get(sh_index(m, l)) {
                Some(c) => {
                    let _ = write!(out, "{:10.6} ", c);
                }
                None => return out,
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_coefficients_one_band_per_line() {
        let band = BandOrder::new(2).unwrap();
        let text = format_coefficients(&[1.0, -0.5, 0.25, 2.0], band);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["1.000000"]);
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["-0.500000", "0.250000", "2.000000"]
        );
    }

    #[test]
    fn test_matrix_skips_off_block_entries() {
        let band = BandOrder::new(2).unwrap();
        let m = arr2(&[
            [1.0, 9.0, 9.0, 9.0],
            [9.0, 2.0, 3.0, 4.0],
            [9.0, 5.0, 6.0, 7.0],
            [9.0, 8.0, 0.5, 1.5],
        ]);
        let text = format_band_matrix(&m, band);
        assert!(!text.contains("9.000000"));
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().nth(3).unwrap().split_whitespace().count(), 3);
    }

    #[test]
    fn test_short_vector_stops_early() {
        let band = BandOrder::new(3).unwrap();
        let text = format_coefficients(&[1.0, 2.0], band);
        assert_eq!(text.split_whitespace().count(), 2);
    }
}
