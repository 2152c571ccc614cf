//! Student's t distribution and the special functions behind it.
//!
//! Provides the cumulative distribution function of Student's t through
//! the regularized incomplete beta function, evaluated with Lentz's
//! continued fraction over a Lanczos log-gamma. Accuracy is driven by
//! the two-tailed p-values in [`crate::hypothesis`]: relative error
//! stays below 1e-10 for df >= 1 and |x| <= 50.
//!
//! References:
//! - Student (1908) "The Probable Error of a Mean"
//! - Abramowitz & Stegun (1964), 6.1.41 (log-gamma), 26.5 (incomplete
//!   beta), 26.7 (Student's t)
//! - Lentz (1976) "Generating Bessel functions in Mie scattering
//!   calculations using continued fractions"

use std::f64::consts::PI;

// Lentz continued fraction controls (Numerical Recipes betacf).
const MAX_ITERS: usize = 500;
const EPS: f64 = 1e-15;
const FPMIN: f64 = 1e-30;

/// Cumulative distribution function of Student's t with `df` degrees of
/// freedom.
///
/// Uses the incomplete-beta identity
/// `P(T <= x) = 1 - I_r(df/2, 1/2) / 2` with `r = df/(df + x²)` for
/// positive `x`, and the symmetric form for negative `x`. Requires
/// `df > 0`; NaN inputs propagate.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::students_t_cdf;
///
/// // df = 1 is the Cauchy distribution, whose CDF at 1 is 3/4 exactly.
/// assert!((students_t_cdf(1.0, 1.0) - 0.75).abs() < 1e-12);
/// assert!((students_t_cdf(0.0, 7.0) - 0.5).abs() < 1e-15);
/// ```
#[must_use]
pub fn students_t_cdf(x: f64, df: f64) -> f64 {
    if x == 0.0 {
        return 0.5;
    }

    let tail = 0.5 * regularized_incomplete_beta(0.5 * df, 0.5, df / (df + x * x));
    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Two-tailed p-value for a t-statistic with `df` degrees of freedom.
///
/// Computes `2 * (1 - CDF(|t|))` through the algebraically identical
/// form `I_r(df/2, 1/2)` with `r = df/(df + t²)`, which keeps full
/// precision when |t| is large and the tail mass is tiny.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::students_t_two_tailed_p;
///
/// // t = 0 carries no evidence against equal means.
/// assert!((students_t_two_tailed_p(0.0, 6.0) - 1.0).abs() < 1e-15);
/// ```
#[must_use]
pub fn students_t_two_tailed_p(t: f64, df: f64) -> f64 {
    regularized_incomplete_beta(0.5 * df, 0.5, df / (df + t * t))
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// Numerical Recipes formulation: the beta prefactor times Lentz's
/// continued fraction, taken on whichever of `I_x(a, b)` and
/// `1 - I_{1-x}(b, a)` converges fastest. The result is clamped to
/// [0, 1].
///
/// Requires `a > 0` and `b > 0`. Out-of-range `x` saturates: `x <= 0`
/// gives 0, `x >= 1` gives 1. NaN propagates.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::regularized_incomplete_beta;
///
/// // I_x(1, 1) is the uniform CDF.
/// assert!((regularized_incomplete_beta(1.0, 1.0, 0.3) - 0.3).abs() < 1e-12);
/// ```
#[must_use]
pub fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // ln of the prefactor x^a (1-x)^b / B(a, b)
    let ln_bt = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let bt = ln_bt.exp();

    let result = if x < (a + 1.0) / (a + b + 2.0) {
        bt * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - bt * beta_continued_fraction(b, a, 1.0 - x) / b
    };
    result.clamp(0.0, 1.0)
}

/// Natural log of the gamma function, Lanczos approximation (g = 7).
///
/// Uses the reflection formula for arguments below 0.5. Returns
/// infinity for non-positive arguments.
///
/// # Examples
///
/// ```
/// use contrastar::distribution::ln_gamma;
///
/// assert!(ln_gamma(1.0).abs() < 1e-12);
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::INFINITY;
    }
    if x < 0.5 {
        // Reflection: Γ(x)Γ(1-x) = π / sin(πx)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let g = 7.0;
    let c = [
        0.999_999_999_999_81,
        676.520_368_121_885,
        -1_259.139_216_722_403,
        771.323_428_777_653,
        -176.615_029_162_141,
        12.507_343_278_687,
        -0.138_571_095_265_72,
        9.984_369_578_02e-6,
        1.505_632_735_15e-7,
    ];

    let x = x - 1.0;
    let mut sum = c[0];
    for (i, &coef) in c.iter().enumerate().skip(1) {
        sum += coef / (x + i as f64);
    }

    let t = x + g + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Continued fraction for the incomplete beta (Lentz's algorithm).
#[allow(clippy::many_single_char_names)] // Standard math notation for beta function
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < FPMIN {
        d = FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITERS {
        let m_f = m as f64;
        let m2 = 2.0 * m_f;

        // Even step
        let aa = m_f * (b - m_f) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step
        let aa = -(a + m_f) * (qab + m_f) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;

        if (del - 1.0).abs() < EPS {
            break;
        }
    }

    h
}
