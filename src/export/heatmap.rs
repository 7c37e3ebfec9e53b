//! Static SVG heatmaps of a [`Grid`] matrix
//!
//! Spot runs along the x axis and volatility along the y axis, matching the
//! row/column layout of the grid. Cells are coloured on a red-yellow-green
//! scale normalised to the matrix' own value range.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::grid::config::RenderConfig;
use crate::grid::types::Grid;
use crate::models::bs::OptionSide;

/// Size and labelling of a rendered heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapOptions {
    pub width: u32,
    pub height: u32,
    /// Print each cell's value (2 dp) inside the cell
    pub show_values: bool,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        RenderConfig::default().into()
    }
}

impl From<RenderConfig> for HeatmapOptions {
    fn from(r: RenderConfig) -> Self {
        Self {
            width: r.width,
            height: r.height,
            show_values: r.show_values,
        }
    }
}

const LOW: (f64, f64, f64) = (215.0, 48.0, 39.0);
const MID: (f64, f64, f64) = (255.0, 255.0, 191.0);
const HIGH: (f64, f64, f64) = (26.0, 152.0, 80.0);

/// Red-yellow-green colour for `t` in [0, 1]; NaN maps to grey.
pub fn diverging_color(t: f64) -> RGBColor {
    if t.is_nan() {
        return RGBColor(160, 160, 160);
    }
    let t = t.clamp(0.0, 1.0);
    let (from, to, u) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * u).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Cell boundaries around each axis value (`axis.len() + 1` entries).
fn cell_edges(axis: &[f64]) -> Vec<f64> {
    match axis {
        [] => Vec::new(),
        [v] => {
            let pad = (v.abs() * 0.01).max(1e-3);
            vec![v - pad, v + pad]
        }
        _ => {
            let n = axis.len();
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(axis[0] - (axis[1] - axis[0]) / 2.0);
            edges.extend(axis.windows(2).map(|w| (w[0] + w[1]) / 2.0));
            edges.push(axis[n - 1] + (axis[n - 1] - axis[n - 2]) / 2.0);
            edges
        }
    }
}

fn span(edges: &[f64]) -> std::ops::Range<f64> {
    let lo = edges.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = edges.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    lo..hi
}

/// Render one matrix of `grid` to an SVG document.
pub fn render_heatmap_svg(
    grid: &Grid,
    side: OptionSide,
    title: &str,
    options: &HeatmapOptions,
) -> Result<String> {
    let x_edges = cell_edges(&grid.spot_axis);
    let y_edges = cell_edges(&grid.vol_axis);
    if x_edges.is_empty() || y_edges.is_empty() {
        anyhow::bail!("cannot render heatmap '{}' of an empty grid", title);
    }
    let matrix = grid.matrix(side);
    if matrix.len() != grid.vol_axis.len()
        || matrix.iter().any(|row| row.len() != grid.spot_axis.len())
    {
        anyhow::bail!(
            "cannot render heatmap '{}': matrix shape does not match {} volatilities x {} spots",
            title,
            grid.vol_axis.len(),
            grid.spot_axis.len()
        );
    }

    let (lo, hi) = grid.value_range(side);
    let scale = hi - lo;
    let normalise = |v: f64| if scale > 0.0 { (v - lo) / scale } else { 0.5 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(
                format!("{} | range [{:.2}, {:.2}]", title, lo, hi),
                ("sans-serif", 24),
            )
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(span(&x_edges), span(&y_edges))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Spot Price (S)")
            .y_desc("Volatility (σ)")
            .draw()?;

        chart.draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
            let (y0, y1) = (y_edges[i], y_edges[i + 1]);
            let x_edges = &x_edges;
            row.iter().enumerate().map(move |(j, &v)| {
                Rectangle::new(
                    [(x_edges[j], y0), (x_edges[j + 1], y1)],
                    diverging_color(normalise(v)).filled(),
                )
            })
        }))?;

        if options.show_values {
            let style = TextStyle::from(("sans-serif", 10).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
                let vol = grid.vol_axis[i];
                let style = style.clone();
                row.iter().enumerate().map(move |(j, &v)| {
                    Text::new(format!("{:.2}", v), (grid.spot_axis[j], vol), style.clone())
                })
            }))?;
        }

        root.present()
            .with_context(|| format!("failed to finish heatmap '{}'", title))?;
    }

    Ok(svg)
}

/// Render and write an SVG heatmap to `path`.
pub fn write_heatmap_svg(
    path: impl AsRef<Path>,
    grid: &Grid,
    side: OptionSide,
    title: &str,
    options: &HeatmapOptions,
) -> Result<()> {
    let path = path.as_ref();
    let svg = render_heatmap_svg(grid, side, title, options)?;
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))
}

/// Conventional chart title, e.g. "Call - Fair Value".
pub fn default_title(grid: &Grid, side: OptionSide) -> String {
    let side = match side {
        OptionSide::Call => "Call",
        OptionSide::Put => "Put",
    };
    format!("{} - {}", side, grid.mode.label())
}
