//! Output collaborators for evaluated grids: CSV tables and SVG heatmaps.

pub mod heatmap;
pub mod table;

pub use heatmap::{default_title, render_heatmap_svg, write_heatmap_svg, HeatmapOptions};
pub use table::{default_csv_name, grid_to_csv_string, save_grid_csv, write_grid_csv};
