use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::grid::types::{Grid, GridMode};
use crate::models::bs::OptionSide;

/// Write one matrix of `grid` as CSV.
///
/// The header row is an empty corner cell followed by the spot axis (2 dp);
/// each record starts with its volatility (3 dp) followed by the cell values.
pub fn write_grid_csv<W: Write>(writer: W, grid: &Grid, side: OptionSide) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    let header = std::iter::once(String::new())
        .chain(grid.spot_axis.iter().map(|s| format!("{:.2}", s)));
    wtr.write_record(header).context("failed to write CSV header")?;

    for (vol, row) in grid.vol_axis.iter().zip(grid.matrix(side)) {
        let record =
            std::iter::once(format!("{:.3}", vol)).chain(row.iter().map(|v| v.to_string()));
        wtr.write_record(record)
            .with_context(|| format!("failed to write CSV row for volatility {}", vol))?;
    }

    wtr.flush().context("failed to flush CSV writer")?;
    Ok(())
}

pub fn grid_to_csv_string(grid: &Grid, side: OptionSide) -> Result<String> {
    let mut buf = Vec::new();
    write_grid_csv(&mut buf, grid, side)?;
    String::from_utf8(buf).context("CSV output was not valid UTF-8")
}

pub fn save_grid_csv(path: impl AsRef<Path>, grid: &Grid, side: OptionSide) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_grid_csv(file, grid, side)
}

/// Conventional file name, e.g. `fair_value_call.csv` or `pnl_put.csv`.
pub fn default_csv_name(grid: &Grid, side: OptionSide) -> String {
    let mode = match grid.mode {
        GridMode::FairValue => "fair_value",
        GridMode::PnL => "pnl",
    };
    format!("{}_{}.csv", mode, side.as_str())
}
