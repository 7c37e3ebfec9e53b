use rayon::prelude::*;
use tracing::debug;

use crate::error::GridError;
use crate::grid::types::{Grid, GridMode};
use crate::models::bs::{price_black_scholes, OptionSide, PricingInputs};

/// `n` evenly spaced points from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

fn validate_axis(name: &'static str, axis: &[f64]) -> Result<(), GridError> {
    if axis.is_empty() {
        return Err(GridError::EmptyAxis { axis: name });
    }
    if let Some((index, &value)) = axis.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(GridError::NonFiniteAxisValue {
            axis: name,
            index,
            value,
        });
    }
    Ok(())
}

/// One volatility row: `(call, put)` values across the spot axis.
fn evaluate_row(
    base: &PricingInputs,
    vol: f64,
    spot_axis: &[f64],
    mode: GridMode,
) -> (Vec<f64>, Vec<f64>) {
    spot_axis
        .iter()
        .map(|&spot| {
            let result = price_black_scholes(&base.with_spot_and_vol(spot, vol));
            (
                mode.select(&result, OptionSide::Call),
                mode.select(&result, OptionSide::Put),
            )
        })
        .unzip()
}

fn assemble(
    mode: GridMode,
    spot_axis: &[f64],
    vol_axis: &[f64],
    rows: Vec<(Vec<f64>, Vec<f64>)>,
) -> Grid {
    let (call, put): (Vec<Vec<f64>>, Vec<Vec<f64>>) = rows.into_iter().unzip();
    Grid {
        mode,
        spot_axis: spot_axis.to_vec(),
        vol_axis: vol_axis.to_vec(),
        call,
        put,
    }
}

/// Price every (volatility, spot) pair and collect call/put surfaces.
///
/// Only spot and volatility are taken from the axes; strike, maturity, rate
/// and purchase prices come from `base`. The result has one row per
/// volatility and one column per spot.
///
/// # Errors
///
/// [`GridError::EmptyAxis`] if either axis is empty and
/// [`GridError::NonFiniteAxisValue`] if an axis contains NaN or infinity.
pub fn evaluate_grid(
    base: &PricingInputs,
    spot_axis: &[f64],
    vol_axis: &[f64],
    mode: GridMode,
) -> Result<Grid, GridError> {
    validate_axis("spot", spot_axis)?;
    validate_axis("volatility", vol_axis)?;

    debug!(
        rows = vol_axis.len(),
        cols = spot_axis.len(),
        ?mode,
        "evaluating grid"
    );

    let rows = vol_axis
        .iter()
        .map(|&vol| evaluate_row(base, vol, spot_axis, mode))
        .collect();

    Ok(assemble(mode, spot_axis, vol_axis, rows))
}

/// Same contract and output as [`evaluate_grid`], with rows priced on the
/// rayon thread pool. Each task owns its row, so no synchronisation is needed.
pub fn evaluate_grid_parallel(
    base: &PricingInputs,
    spot_axis: &[f64],
    vol_axis: &[f64],
    mode: GridMode,
) -> Result<Grid, GridError> {
    validate_axis("spot", spot_axis)?;
    validate_axis("volatility", vol_axis)?;

    debug!(
        rows = vol_axis.len(),
        cols = spot_axis.len(),
        ?mode,
        threads = rayon::current_num_threads(),
        "evaluating grid in parallel"
    );

    let rows = vol_axis
        .par_iter()
        .map(|&vol| evaluate_row(base, vol, spot_axis, mode))
        .collect();

    Ok(assemble(mode, spot_axis, vol_axis, rows))
}
