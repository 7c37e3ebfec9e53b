pub mod bs;

/// Shared numeric helpers for the closed-form models
pub mod utils {
    use std::f64::consts::{PI, SQRT_2};

    /// Floor applied to spot and strike before taking logs or dividing.
    pub const PRICE_FLOOR: f64 = 1e-12;

    /// Threshold below which time or volatility is treated as zero.
    pub const DEGENERATE_EPS: f64 = 1e-12;

    /// Standard normal cumulative distribution function: 0.5 * [1 + erf(x / sqrt(2))].
    ///
    /// Evaluated as 0.5 * erfc(-x / sqrt(2)), which is the same identity but keeps
    /// full relative precision in the left tail.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// Intrinsic values `(call, put)` on immediate exercise.
    pub fn intrinsic(spot: f64, strike: f64) -> (f64, f64) {
        ((spot - strike).max(0.0), (strike - spot).max(0.0))
    }

}
