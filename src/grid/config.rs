use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grid::evaluator::linspace;
use crate::models::bs::PricingInputs;

/// Bounds on the number of points per heatmap axis
pub const MIN_GRID_POINTS: usize = 10;
pub const MAX_GRID_POINTS: usize = 60;

/// Market parameters at the point of interest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_current_price")]
    pub current_price: f64,
    #[serde(default = "default_strike")]
    pub strike: f64,
    #[serde(default = "default_time_to_maturity")]
    pub time_to_maturity: f64,
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            current_price: default_current_price(),
            strike: default_strike(),
            time_to_maturity: default_time_to_maturity(),
            volatility: default_volatility(),
            interest_rate: default_interest_rate(),
        }
    }
}

/// Premiums paid, used for P&L surfaces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseConfig {
    #[serde(default)]
    pub call_price: f64,
    #[serde(default)]
    pub put_price: f64,
}

/// Heatmap axis bounds and resolution.
///
/// Missing bounds are derived from the market parameters: spot spans ±20%
/// around the current price, volatility spans 0.5x to 1.5x the current
/// volatility within [0.01, 1.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesConfig {
    pub spot_min: Option<f64>,
    pub spot_max: Option<f64>,
    pub vol_min: Option<f64>,
    pub vol_max: Option<f64>,
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            spot_min: None,
            spot_max: None,
            vol_min: None,
            vol_max: None,
            grid_points: default_grid_points(),
        }
    }
}

/// Heatmap rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Print the value inside each heatmap cell
    #[serde(default)]
    pub show_values: bool,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_values: false,
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Main configuration struct for price and P&L heatmaps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Evaluate grid rows on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub purchase: PurchaseConfig,
    #[serde(default)]
    pub axes: AxesConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Resolved axis values, ready for the grid evaluator
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapAxes {
    pub spot: Vec<f64>,
    pub vol: Vec<f64>,
}

impl HeatmapConfig {
    /// Default resolution (25 points per axis)
    pub fn standard() -> Self {
        Self::default()
    }

    /// Lowest resolution allowed, for quick checks
    pub fn coarse() -> Self {
        Self {
            axes: AxesConfig {
                grid_points: MIN_GRID_POINTS,
                ..AxesConfig::default()
            },
            ..Self::default()
        }
    }

    /// Highest resolution allowed, evaluated in parallel
    pub fn fine() -> Self {
        Self {
            axes: AxesConfig {
                grid_points: MAX_GRID_POINTS,
                ..AxesConfig::default()
            },
            parallel: true,
            ..Self::default()
        }
    }

    /// Coarse grid with the value printed in every cell
    pub fn preview() -> Self {
        Self {
            render: RenderConfig {
                show_values: true,
                ..RenderConfig::default()
            },
            ..Self::coarse()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse heatmap config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize heatmap config")
    }

    /// Engine inputs at the configured market point, purchase prices included.
    pub fn base_inputs(&self) -> PricingInputs {
        let m = &self.market;
        PricingInputs::new(
            m.current_price,
            m.strike,
            m.time_to_maturity,
            m.volatility,
            m.interest_rate,
        )
        .with_purchase_prices(self.purchase.call_price, self.purchase.put_price)
    }

    /// Grid points per axis, clamped to [`MIN_GRID_POINTS`, `MAX_GRID_POINTS`].
    pub fn grid_points(&self) -> usize {
        let n = self.axes.grid_points;
        let clamped = n.clamp(MIN_GRID_POINTS, MAX_GRID_POINTS);
        if clamped != n {
            warn!(
                requested = n,
                used = clamped,
                "grid resolution out of range, clamping"
            );
        }
        clamped
    }

    /// `(min, max)` spot bounds; an empty or inverted range is widened so
    /// that max = min * 1.01.
    pub fn spot_bounds(&self) -> (f64, f64) {
        let spot = self.market.current_price;
        let lo = self.axes.spot_min.unwrap_or(spot * 0.80);
        let hi = self.axes.spot_max.unwrap_or(spot * 1.20);
        if lo >= hi {
            let adjusted = lo * 1.01;
            warn!(
                spot_min = lo,
                spot_max = hi,
                adjusted,
                "max spot must be greater than min spot, adjusting"
            );
            return (lo, adjusted);
        }
        (lo, hi)
    }

    /// `(min, max)` volatility bounds; an empty or inverted range is widened
    /// to max = min(min + 0.01, 1.0).
    pub fn vol_bounds(&self) -> (f64, f64) {
        let vol = self.market.volatility;
        let lo = self.axes.vol_min.unwrap_or_else(|| (vol * 0.50).max(0.01));
        let hi = self.axes.vol_max.unwrap_or_else(|| (vol * 1.50).min(1.00));
        if lo >= hi {
            let adjusted = (lo + 0.01).min(1.00);
            warn!(
                vol_min = lo,
                vol_max = hi,
                adjusted,
                "max volatility must be greater than min volatility, adjusting"
            );
            return (lo, adjusted);
        }
        (lo, hi)
    }

    pub fn axes(&self) -> HeatmapAxes {
        let n = self.grid_points();
        let (spot_lo, spot_hi) = self.spot_bounds();
        let (vol_lo, vol_hi) = self.vol_bounds();
        HeatmapAxes {
            spot: linspace(spot_lo, spot_hi, n),
            vol: linspace(vol_lo, vol_hi, n),
        }
    }
}

fn default_current_price() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_time_to_maturity() -> f64 {
    1.0
}

fn default_volatility() -> f64 {
    0.20
}

fn default_interest_rate() -> f64 {
    0.05
}

fn default_grid_points() -> usize {
    25
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}
