use serde::{Deserialize, Serialize};

use crate::models::bs::{OptionSide, PricingResult};

/// Which output of the engine a grid cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridMode {
    /// Raw theoretical price
    #[default]
    FairValue,
    /// Price minus the purchase price
    PnL,
}

impl GridMode {
    /// Value of `side` selected by this mode from one pricing result.
    pub fn select(&self, result: &PricingResult, side: OptionSide) -> f64 {
        match self {
            GridMode::FairValue => result.price(side),
            GridMode::PnL => result.pnl(side),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GridMode::FairValue => "Fair Value",
            GridMode::PnL => "P&L",
        }
    }
}

/// Call and put surfaces over a volatility × spot grid.
///
/// Row `i` corresponds to `vol_axis[i]`, column `j` to `spot_axis[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub mode: GridMode,
    pub spot_axis: Vec<f64>,
    pub vol_axis: Vec<f64>,
    pub call: Vec<Vec<f64>>,
    pub put: Vec<Vec<f64>>,
}

impl Grid {
    /// `(rows, columns)`, i.e. `(vol_axis.len(), spot_axis.len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.vol_axis.len(), self.spot_axis.len())
    }

    pub fn matrix(&self, side: OptionSide) -> &[Vec<f64>] {
        match side {
            OptionSide::Call => &self.call,
            OptionSide::Put => &self.put,
        }
    }

    /// Cell at volatility row `row` and spot column `col`
    pub fn value(&self, side: OptionSide, row: usize, col: usize) -> Option<f64> {
        self.matrix(side).get(row)?.get(col).copied()
    }

    /// Smallest and largest cell of one matrix.
    pub fn value_range(&self, side: OptionSide) -> (f64, f64) {
        self.matrix(side)
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
