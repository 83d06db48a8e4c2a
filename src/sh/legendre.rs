/// Drift past `[-1, 1]` that is still treated as rounding and clamped.
pub const LEGENDRE_DOMAIN_EPS: f64 = 1e-6;

/// Associated Legendre polynomial `P(l, m, x)` for `0 <= m <= l`.
///
/// Uses the three-term recurrence in `l`, seeded from the closed form of
/// `P(m, m, x)`. Includes the Condon-Shortley phase.
///
/// # Panics
///
/// Panics if `x` lies further than [`LEGENDRE_DOMAIN_EPS`] outside
/// `[-1, 1]` (including NaN); smaller drift is clamped.
pub fn legendre(l: u32, m: u32, x: f64) -> f64 {
    debug_assert!(m <= l, "legendre order {} exceeds band {}", m, l);
    assert!(
        x.abs() <= 1.0 + LEGENDRE_DOMAIN_EPS,
        "legendre argument {} outside [-1, 1]",
        x
    );
    let x = x.clamp(-1.0, 1.0);

    let mut pmm = 1.0;
    if m > 0 {
        let somx2 = ((1.0 - x) * (1.0 + x)).sqrt();
        let mut fact = 1.0;
        for _ in 0..m {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == m {
        return pmm;
    }

    let mut pmmp1 = x * (2.0 * m as f64 + 1.0) * pmm;
    if l == m + 1 {
        return pmmp1;
    }

    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        let llf = ll as f64;
        let mf = m as f64;
        pll = ((2.0 * llf - 1.0) * x * pmmp1 - (llf + mf - 1.0) * pmm) / (llf - mf);
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}
