//! Closed-form Black-Scholes pricing for a European call/put pair
//!
//! [`price_black_scholes`] maps one set of [`PricingInputs`] to prices, P&L and
//! the first-order Greeks of both options. It is a pure function: the same
//! inputs always give the same [`PricingResult`].
//!
//! At expiry or with zero volatility the model collapses to intrinsic value.
//! That branch reports delta as 1/0 (0.5 at the money) and every other Greek
//! as exactly zero, since the regular formulas are singular there.

pub mod types;

pub use types::{OptionGreeks, OptionSide, PricingInputs, PricingResult, DAYS_PER_YEAR};

use crate::models::utils::{intrinsic, norm_cdf, norm_pdf, DEGENERATE_EPS, PRICE_FLOOR};

/// Price a call/put pair and compute their Greeks.
///
/// Spot and strike are floored at `1e-12`; negative volatility or maturity
/// is treated as zero.
#[allow(non_snake_case)]
pub fn price_black_scholes(inputs: &PricingInputs) -> PricingResult {
    let S = inputs.current_price.max(PRICE_FLOOR);
    let K = inputs.strike.max(PRICE_FLOOR);
    let r = inputs.interest_rate;
    let sigma = inputs.volatility.max(0.0);
    let T = inputs.time_to_maturity.max(0.0);

    if T < DEGENERATE_EPS || sigma < DEGENERATE_EPS {
        return intrinsic_result(inputs, S, K);
    }

    let sqrt_t = T.sqrt();
    let den = sigma * sqrt_t;
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / den;
    let d2 = d1 - den;

    let nd1 = norm_cdf(d1);
    let nd2 = norm_cdf(d2);
    let nmd1 = norm_cdf(-d1);
    let nmd2 = norm_cdf(-d2);
    let pdf_d1 = norm_pdf(d1);
    let disc = (-r * T).exp();

    let call_price = S * nd1 - K * disc * nd2;
    let put_price = K * disc * nmd2 - S * nmd1;

    let gamma = pdf_d1 / (S * den);
    let vega = S * pdf_d1 * sqrt_t;
    let theta_common = -(S * pdf_d1 * sigma) / (2.0 * sqrt_t);

    let call = OptionGreeks {
        delta: nd1,
        gamma,
        theta: theta_common - r * K * disc * nd2,
        vega,
        rho: 0.01 * (K * T * disc * nd2),
    };
    let put = OptionGreeks {
        delta: nd1 - 1.0,
        gamma,
        theta: theta_common + r * K * disc * nmd2,
        vega,
        rho: 0.01 * (-K * T * disc * nmd2),
    };

    PricingResult {
        call_price,
        put_price,
        call_pnl: call_price - inputs.call_purchase_price,
        put_pnl: put_price - inputs.put_purchase_price,
        call,
        put,
    }
}

#[allow(non_snake_case)]
fn intrinsic_result(inputs: &PricingInputs, S: f64, K: f64) -> PricingResult {
    let (call_price, put_price) = intrinsic(S, K);

    let (call_delta, put_delta) = if S > K {
        (1.0, -1.0)
    } else if S < K {
        (0.0, 0.0)
    } else {
        (0.5, -0.5)
    };

    PricingResult {
        call_price,
        put_price,
        call_pnl: call_price - inputs.call_purchase_price,
        put_pnl: put_price - inputs.put_purchase_price,
        call: OptionGreeks {
            delta: call_delta,
            ..OptionGreeks::default()
        },
        put: OptionGreeks {
            delta: put_delta,
            ..OptionGreeks::default()
        },
    }
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, sigma: f64, T: f64) -> f64 {
    price_black_scholes(&PricingInputs::new(S, K, T, sigma, r)).call_price
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, sigma: f64, T: f64) -> f64 {
    price_black_scholes(&PricingInputs::new(S, K, T, sigma, r)).put_price
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_inputs() -> PricingInputs {
        PricingInputs::new(
            100.0, // spot
            100.0, // strike
            1.0,   // one year
            0.20,  // 20% vol
            0.05,  // 5% rate
        )
    }

    #[test]
    fn test_regular_branch_reference_values() {
        let result = price_black_scholes(&atm_inputs());

        // Hull-style reference: S=K=100, r=5%, σ=20%, T=1
        assert!((result.call_price - 10.450583572185565).abs() < 1e-7);
        assert!((result.put_price - 5.573526022256971).abs() < 1e-7);
        assert!((result.call.delta - 0.6368306511756191).abs() < 1e-9);
        assert!((result.put.delta - (0.6368306511756191 - 1.0)).abs() < 1e-9);
        assert!((result.call.gamma - 0.018762017345846895).abs() < 1e-9);
        assert!((result.call.vega - 37.52403469169379).abs() < 1e-6);
    }

    #[test]
    fn test_shared_greeks_match_between_call_and_put() {
        let result = price_black_scholes(&atm_inputs());
        assert_eq!(result.call.gamma, result.put.gamma);
        assert_eq!(result.call.vega, result.put.vega);
    }

    #[test]
    fn test_rho_is_scaled_per_percentage_point() {
        let base = atm_inputs();
        let h = 1e-5;
        let up = price_black_scholes(&PricingInputs {
            interest_rate: base.interest_rate + h,
            ..base
        });
        let down = price_black_scholes(&PricingInputs {
            interest_rate: base.interest_rate - h,
            ..base
        });
        let mid = price_black_scholes(&base);

        // Central difference per unit rate, rescaled to 1pp
        let fd_call = (up.call_price - down.call_price) / (2.0 * h) * 0.01;
        let fd_put = (up.put_price - down.put_price) / (2.0 * h) * 0.01;
        assert!((fd_call - mid.call.rho).abs() < 1e-6, "call rho {}", mid.call.rho);
        assert!((fd_put - mid.put.rho).abs() < 1e-6, "put rho {}", mid.put.rho);
    }

    #[test]
    fn test_theta_is_annualized() {
        let base = PricingInputs::new(95.0, 100.0, 1.0, 0.25, 0.05);
        let dt = 1e-5;
        let longer = price_black_scholes(&PricingInputs {
            time_to_maturity: base.time_to_maturity + dt,
            ..base
        });
        let shorter = price_black_scholes(&PricingInputs {
            time_to_maturity: base.time_to_maturity - dt,
            ..base
        });
        let mid = price_black_scholes(&base);

        // theta = -dV/dT
        let fd_call = -(longer.call_price - shorter.call_price) / (2.0 * dt);
        let fd_put = -(longer.put_price - shorter.put_price) / (2.0 * dt);
        assert!((fd_call - mid.call.theta).abs() < 1e-4, "call theta {}", mid.call.theta);
        assert!((fd_put - mid.put.theta).abs() < 1e-4, "put theta {}", mid.put.theta);
        assert!(mid.put.theta > mid.call.theta);
        assert!((mid.call.theta_per_day() * DAYS_PER_YEAR - mid.call.theta).abs() < 1e-12);
        assert!((mid.put.theta_per_day() * DAYS_PER_YEAR - mid.put.theta).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_branch_zeroes_higher_greeks() {
        let itm = price_black_scholes(&PricingInputs::new(110.0, 100.0, 0.0, 0.2, 0.05));
        assert_eq!(itm.call_price, 10.0);
        assert_eq!(itm.put_price, 0.0);
        assert_eq!(itm.call.delta, 1.0);
        assert_eq!(itm.put.delta, -1.0);
        for g in [itm.call, itm.put] {
            assert_eq!(g.gamma, 0.0);
            assert_eq!(g.theta, 0.0);
            assert_eq!(g.vega, 0.0);
            assert_eq!(g.rho, 0.0);
        }

        let otm = price_black_scholes(&PricingInputs::new(90.0, 100.0, 1.0, 0.0, 0.05));
        assert_eq!(otm.call_price, 0.0);
        assert_eq!(otm.put_price, 10.0);
        assert_eq!(otm.call.delta, 0.0);
        assert_eq!(otm.put.delta, 0.0);
    }

    #[test]
    fn test_negative_vol_and_maturity_are_clamped() {
        let neg_vol = price_black_scholes(&PricingInputs::new(105.0, 100.0, 1.0, -0.3, 0.05));
        assert_eq!(neg_vol.call_price, 5.0);

        let neg_t = price_black_scholes(&PricingInputs::new(95.0, 100.0, -2.0, 0.3, 0.05));
        assert_eq!(neg_t.put_price, 5.0);
    }

    #[test]
    fn test_non_positive_spot_is_floored() {
        let result = price_black_scholes(&PricingInputs::new(0.0, 100.0, 1.0, 0.2, 0.05));
        assert!(result.call_price.is_finite());
        assert!(result.call_price.abs() < 1e-12);
        assert!((result.put_price - 100.0 * (-0.05f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn test_function_helpers_match_engine() {
        let result = price_black_scholes(&atm_inputs());
        assert_eq!(bs_call_price(100.0, 100.0, 0.05, 0.2, 1.0), result.call_price);
        assert_eq!(bs_put_price(100.0, 100.0, 0.05, 0.2, 1.0), result.put_price);
    }
}
