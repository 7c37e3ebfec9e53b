
use bs_surface::{
    compute_grids, default_configs, evaluate_grid, evaluate_grid_parallel, price, GridError,
    GridMode, OptionSide,
};
use test_utils::{atm_inputs, axis};

/// Matrices are |vol| x |spot| and every cell equals a direct pricing call
/// with spot and volatility overridden
#[test]
fn test_grid_cells_match_engine() {
    let base = atm_inputs().with_purchase_prices(10.0, 5.0);
    let spots = axis(80.0, 120.0, 7);
    let vols = axis(0.1, 0.4, 4);

    let fair = evaluate_grid(&base, &spots, &vols, GridMode::FairValue).expect("grid");
    let pnl = evaluate_grid(&base, &spots, &vols, GridMode::PnL).expect("grid");

    assert_eq!(fair.shape(), (4, 7));
    assert_eq!(fair.call.len(), 4);
    assert!(fair.put.iter().all(|row| row.len() == 7));
    assert_eq!(fair.spot_axis, spots);
    assert_eq!(fair.vol_axis, vols);

    for (i, &vol) in vols.iter().enumerate() {
        for (j, &spot) in spots.iter().enumerate() {
            let expected = price(&base.with_spot_and_vol(spot, vol));
            assert_eq!(fair.call[i][j], expected.call_price);
            assert_eq!(fair.put[i][j], expected.put_price);
            assert_eq!(pnl.call[i][j], expected.call_price - 10.0);
            assert_eq!(pnl.put[i][j], expected.put_price - 5.0);
        }
    }
}

/// Row index follows volatility and column index follows spot
#[test]
fn test_grid_orientation() {
    let base = atm_inputs();
    let spots = [90.0, 110.0];
    let vols = [0.1, 0.2, 0.3];
    let grid = evaluate_grid(&base, &spots, &vols, GridMode::FairValue).expect("grid");

    // Call value rises with volatility down a column and with spot along a row
    for j in 0..spots.len() {
        assert!(grid.call[0][j] < grid.call[1][j]);
        assert!(grid.call[1][j] < grid.call[2][j]);
    }
    for row in &grid.call {
        assert!(row[0] < row[1]);
    }
    assert_eq!(
        grid.value(OptionSide::Put, 2, 0),
        Some(price(&base.with_spot_and_vol(90.0, 0.3)).put_price)
    );
    assert_eq!(grid.value(OptionSide::Put, 3, 0), None);
}

/// Base inputs other than spot and volatility are carried into every cell
#[test]
fn test_grid_carries_strike_rate_and_maturity() {
    let base = atm_inputs();
    let shorter = bs_surface::PricingInputs {
        time_to_maturity: 0.25,
        strike: 95.0,
        interest_rate: 0.01,
        ..base
    };
    let grid = evaluate_grid(&shorter, &[100.0], &[0.2], GridMode::FairValue).expect("grid");
    let expected = price(&bs_surface::PricingInputs::new(100.0, 95.0, 0.25, 0.2, 0.01));
    assert_eq!(grid.call[0][0], expected.call_price);
}

/// Zero-volatility rows fall back to intrinsic value
#[test]
fn test_zero_vol_row_is_intrinsic() {
    let base = atm_inputs();
    let grid = evaluate_grid(&base, &[90.0, 100.0, 110.0], &[0.0], GridMode::FairValue)
        .expect("grid");
    assert_eq!(grid.call[0], vec![0.0, 0.0, 10.0]);
    assert_eq!(grid.put[0], vec![10.0, 0.0, 0.0]);
}

/// Parallel evaluation produces exactly the sequential grid
#[test]
fn test_parallel_matches_sequential() {
    let base = atm_inputs().with_purchase_prices(7.5, 3.25);
    let spots = axis(60.0, 140.0, 41);
    let vols = axis(0.05, 0.95, 37);

    for mode in [GridMode::FairValue, GridMode::PnL] {
        let seq = evaluate_grid(&base, &spots, &vols, mode).expect("sequential");
        let par = evaluate_grid_parallel(&base, &spots, &vols, mode).expect("parallel");
        assert_eq!(seq, par);
    }
}

/// Empty axes are argument errors rather than empty grids
#[test]
fn test_empty_axis_rejected() {
    let base = atm_inputs();
    assert_eq!(
        evaluate_grid(&base, &[], &[0.2], GridMode::FairValue),
        Err(GridError::EmptyAxis { axis: "spot" })
    );
    assert_eq!(
        evaluate_grid(&base, &[100.0], &[], GridMode::FairValue),
        Err(GridError::EmptyAxis { axis: "volatility" })
    );
    let err = evaluate_grid_parallel(&base, &[], &[], GridMode::PnL).unwrap_err();
    assert!(err.to_string().contains("spot axis is empty"));
}

/// Config-driven evaluation resolves axes from the market point
#[test]
fn test_compute_grids_from_config() {
    let config = default_configs::coarse();
    let grid = compute_grids(&config, GridMode::FairValue).expect("grid");
    assert_eq!(grid.shape(), (10, 10));
    assert!((grid.spot_axis[0] - 80.0).abs() < 1e-12);
    assert!((grid.spot_axis[9] - 120.0).abs() < 1e-12);
    assert!((grid.vol_axis[0] - 0.10).abs() < 1e-12);

    let mut parallel = config.clone();
    parallel.parallel = true;
    let par = compute_grids(&parallel, GridMode::FairValue).expect("grid");
    assert_eq!(grid, par);
}

/// P&L surfaces of an at-cost position straddle zero
#[test]
fn test_pnl_grid_sign_change() {
    let mut config = default_configs::coarse();
    let at_point = price(&config.base_inputs());
    config.purchase.call_price = at_point.call_price;
    config.purchase.put_price = at_point.put_price;

    let grid = compute_grids(&config, GridMode::PnL).expect("grid");
    let (lo, hi) = grid.value_range(OptionSide::Call);
    assert!(lo < 0.0 && hi > 0.0, "call P&L range [{}, {}]", lo, hi);
    let (lo, hi) = grid.value_range(OptionSide::Put);
    assert!(lo < 0.0 && hi > 0.0, "put P&L range [{}, {}]", lo, hi);
}
