// Example: heatmap_demo.rs
// Evaluates fair-value and P&L surfaces over spot x volatility and writes one
// CSV table and one SVG heatmap per option side and mode.
//
// Usage:
//     cargo run --example heatmap_demo -- [config.toml] [output_dir]
//
// Without a config file the standard preset is used. Output goes to
// ./heatmaps unless a directory is given. Set RUST_LOG=debug for grid timing.

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use bs_surface::export::{default_csv_name, default_title, save_grid_csv, write_heatmap_svg};
use bs_surface::{
    compute_grids, default_configs, price, GridMode, HeatmapConfig, HeatmapOptions, OptionSide,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => default_configs::standard(),
    };
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("heatmaps"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let at_point = price(&config.base_inputs());
    tracing::info!(
        call = at_point.call_price,
        put = at_point.put_price,
        call_pnl = at_point.call_pnl,
        put_pnl = at_point.put_pnl,
        "priced configured market point"
    );

    let options: HeatmapOptions = config.render.clone().into();

    for mode in [GridMode::FairValue, GridMode::PnL] {
        let started = Instant::now();
        let grid = compute_grids(&config, mode)?;
        tracing::info!(
            mode = mode.label(),
            rows = grid.shape().0,
            cols = grid.shape().1,
            elapsed_us = started.elapsed().as_micros() as u64,
            "grid evaluated"
        );

        for side in [OptionSide::Call, OptionSide::Put] {
            let csv_path = out_dir.join(default_csv_name(&grid, side));
            save_grid_csv(&csv_path, &grid, side)?;

            let svg_path = csv_path.with_extension("svg");
            write_heatmap_svg(&svg_path, &grid, side, &default_title(&grid, side), &options)?;

            let (lo, hi) = grid.value_range(side);
            println!(
                "{:<24} range [{:>9.4}, {:>9.4}] -> {}",
                default_title(&grid, side),
                lo,
                hi,
                svg_path.display()
            );
        }
    }

    Ok(())
}
