use bs_surface::default_configs;

fn main() {
    println!("bs-surface Default Configuration Examples\n");

    let presets = [
        ("Standard", default_configs::standard(), "Interactive use"),
        ("Coarse", default_configs::coarse(), "Quick checks, tests"),
        ("Fine", default_configs::fine(), "Publication-quality heatmaps"),
        ("Preview", default_configs::preview(), "Small grids with cell labels"),
    ];

    for (i, (name, config, use_case)) in presets.iter().enumerate() {
        let (spot_lo, spot_hi) = config.spot_bounds();
        let (vol_lo, vol_hi) = config.vol_bounds();
        println!("{}. {} Configuration:", i + 1, name);
        println!("   Grid points per axis: {}", config.grid_points());
        println!("   Spot range: [{:.2}, {:.2}]", spot_lo, spot_hi);
        println!("   Vol range: [{:.3}, {:.3}]", vol_lo, vol_hi);
        println!("   Parallel evaluation: {}", config.parallel);
        println!("   Cell values shown: {}", config.render.show_values);
        println!("   Use case: {}\n", use_case);
    }

    match default_configs::standard().to_toml_string() {
        Ok(toml) => println!("Standard preset as TOML:\n\n{}", toml),
        Err(e) => eprintln!("Failed to serialize preset: {}", e),
    }
}
