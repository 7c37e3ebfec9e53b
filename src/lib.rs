//! # bs-surface: Black-Scholes Pricing and Spot/Volatility Surfaces
//!
//! `bs-surface` prices European call/put pairs with the closed-form
//! Black-Scholes model, reports their first-order Greeks, and evaluates price
//! or P&L surfaces over a grid of spot prices and volatilities.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: pure, deterministic pricing of a call/put pair with delta,
//!   gamma, theta, vega and rho
//! - **Grid Evaluation**: fair-value or P&L surfaces over volatility × spot, sequential
//!   or on the rayon thread pool
//! - **Heatmap Configuration**: TOML-loadable market, purchase and axis settings
//! - **Export**: CSV tables and SVG heatmaps of evaluated grids
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_surface::{evaluate_grid, price, GridMode, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.20, 0.05)
//!     .with_purchase_prices(9.0, 6.0);
//!
//! let result = price(&inputs);
//! println!("call {:.4} (P&L {:+.4})", result.call_price, result.call_pnl);
//!
//! let spots = [90.0, 100.0, 110.0];
//! let vols = [0.1, 0.2];
//! let grid = evaluate_grid(&inputs, &spots, &vols, GridMode::PnL)?;
//! assert_eq!(grid.shape(), (2, 3));
//! # Ok::<(), bs_surface::GridError>(())
//! ```
//!
//! ## Conventions
//!
//! - Theta is **annualized** (value change per year); use
//!   [`OptionGreeks::theta_per_day`] for a per-calendar-day figure.
//! - Vega is per 1.0 change in volatility; use [`OptionGreeks::vega_per_vol_point`]
//!   for a 1% move.
//! - Rho is per 1 percentage point change in the risk-free rate.
//! - Negative volatility or maturity is treated as zero, and spot/strike are floored
//!   at `1e-12`. None of these are reported as errors.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod export;
pub mod grid;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::GridError;

// Engine types
pub use models::bs::{
    bs_call_price, bs_put_price, OptionGreeks, OptionSide, PricingInputs, PricingResult,
    DAYS_PER_YEAR,
};

// Grid types and configuration
pub use grid::{
    config::{AxesConfig, HeatmapAxes, HeatmapConfig, MarketConfig, PurchaseConfig, RenderConfig},
    evaluator::{evaluate_grid_parallel, linspace},
    types::{Grid, GridMode},
};

pub use export::HeatmapOptions;

use tracing::info;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured heatmap settings.
///
/// All presets price the same default market (S = K = 100, T = 1, σ = 20%, r = 5%)
/// and differ in resolution and rendering.
///
/// - [`standard()`]: 25 points per axis
/// - [`coarse()`]: 10 points per axis
/// - [`fine()`]: 60 points per axis, parallel evaluation
/// - [`preview()`]: 10 points per axis with cell values printed
pub mod default_configs {
    use crate::grid::config::HeatmapConfig;

    /// Default heatmap settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_surface::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.grid_points(), 25);
    /// ```
    pub fn standard() -> HeatmapConfig {
        HeatmapConfig::standard()
    }

    /// Lowest resolution, for quick checks and tests.
    pub fn coarse() -> HeatmapConfig {
        HeatmapConfig::coarse()
    }

    /// Highest resolution, rows evaluated in parallel.
    pub fn fine() -> HeatmapConfig {
        HeatmapConfig::fine()
    }

    /// Coarse grid with each cell's value drawn on the heatmap.
    pub fn preview() -> HeatmapConfig {
        HeatmapConfig::preview()
    }
}

/// Price a European call/put pair under Black-Scholes.
///
/// Returns prices, P&L against the purchase prices in `inputs`, and the Greeks of
/// both options. The function is pure: identical inputs give identical results.
///
/// # Pricing Methodology
///
/// 1. **Clamping**: `S, K ≥ 1e-12`, `σ, T ≥ 0`
/// 2. **Degenerate case** (`T` or `σ` below `1e-12`): intrinsic value, delta of
///    1/0 (0.5 at the money), all other Greeks zero
/// 3. **Regular case**: closed-form prices with `N(x) = ½(1 + erf(x/√2))`
///
/// # Example
///
/// ```rust
/// use bs_surface::{price, PricingInputs};
///
/// let result = price(&PricingInputs::new(100.0, 100.0, 1.0, 0.20, 0.0));
/// assert!(result.call_price > 7.9 && result.call_price < 8.1);
///
/// // At expiry the at-the-money delta is split evenly
/// let expired = price(&PricingInputs::new(100.0, 100.0, 0.0, 0.20, 0.0));
/// assert_eq!(expired.call.delta, 0.5);
/// assert_eq!(expired.put.delta, -0.5);
/// ```
pub fn price(inputs: &PricingInputs) -> PricingResult {
    models::bs::price_black_scholes(inputs)
}

/// Evaluate call and put surfaces over a volatility × spot grid.
///
/// Cell `(i, j)` holds the price (or P&L, per `mode`) of `base` with its current
/// price replaced by `spot_axis[j]` and its volatility by `vol_axis[i]`. Strike,
/// maturity, rate and purchase prices are carried through unchanged.
///
/// # Errors
///
/// * [`GridError::EmptyAxis`] if either axis is empty
/// * [`GridError::NonFiniteAxisValue`] if an axis contains NaN or infinity
///
/// Both are raised before any cell is priced.
///
/// # Performance Notes
///
/// - Cost is `spot_axis.len() × vol_axis.len()` independent evaluations
/// - For large grids use [`evaluate_grid_parallel`], which returns the same grid
pub fn evaluate_grid(
    base: &PricingInputs,
    spot_axis: &[f64],
    vol_axis: &[f64],
    mode: GridMode,
) -> Result<Grid, GridError> {
    grid::evaluator::evaluate_grid(base, spot_axis, vol_axis, mode)
}

/// Evaluate the surfaces described by a heatmap configuration.
///
/// Resolves the axes from `config` (deriving missing bounds and widening
/// inverted ranges) and runs the sequential or parallel evaluator according to
/// `config.parallel`.
///
/// # Example
///
/// ```rust
/// use bs_surface::{compute_grids, default_configs, GridMode};
///
/// let config = default_configs::coarse();
/// let grid = compute_grids(&config, GridMode::FairValue)?;
/// assert_eq!(grid.shape(), (10, 10));
/// # Ok::<(), bs_surface::GridError>(())
/// ```
pub fn compute_grids(config: &HeatmapConfig, mode: GridMode) -> Result<Grid, GridError> {
    let axes = config.axes();
    let base = config.base_inputs();

    info!(
        points = axes.spot.len(),
        parallel = config.parallel,
        mode = mode.label(),
        "computing heatmap grids"
    );

    if config.parallel {
        evaluate_grid_parallel(&base, &axes.spot, &axes.vol, mode)
    } else {
        evaluate_grid(&base, &axes.spot, &axes.vol, mode)
    }
}
