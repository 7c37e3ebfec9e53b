// demos/pricing_demo.rs

//! Demonstration of single-point Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Build pricing inputs with purchase prices
//! 2. Price the call/put pair and read P&L
//! 3. Read the Greeks in both annual and per-day/per-point units
//! 4. Check put-call parity on the result

use bs_surface::{price, OptionSide, PricingInputs};

fn main() {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let inputs = PricingInputs::new(
        100.0, // current price
        100.0, // strike
        1.0,   // years to maturity
        0.20,  // volatility
        0.05,  // risk-free rate
    )
    .with_purchase_prices(9.50, 6.00);

    println!("Spot:       ${:.2}", inputs.current_price);
    println!("Strike:     ${:.2}", inputs.strike);
    println!("Maturity:   {:.2} years", inputs.time_to_maturity);
    println!("Volatility: {:.1}%", inputs.volatility * 100.0);
    println!("Rate:       {:.2}%", inputs.interest_rate * 100.0);

    let result = price(&inputs);

    println!("\n{:<6} {:>10} {:>10}", "", "Value", "Net Gain");
    println!("{}", "-".repeat(28));
    for side in [OptionSide::Call, OptionSide::Put] {
        println!(
            "{:<6} {:>10.4} {:>+10.4}",
            side.as_str(),
            result.price(side),
            result.pnl(side)
        );
    }

    println!(
        "\n{:<6} {:>9} {:>9} {:>11} {:>11} {:>9} {:>9}",
        "", "Delta", "Gamma", "Theta/yr", "Theta/day", "Vega", "Rho"
    );
    println!("{}", "-".repeat(72));
    for side in [OptionSide::Call, OptionSide::Put] {
        let g = result.greeks(side);
        println!(
            "{:<6} {:>9.4} {:>9.5} {:>11.4} {:>11.5} {:>9.4} {:>9.4}",
            side.as_str(),
            g.delta,
            g.gamma,
            g.theta,
            g.theta_per_day(),
            g.vega,
            g.rho
        );
    }

    let parity_gap = (result.call_price - result.put_price)
        - (inputs.current_price
            - inputs.strike * (-inputs.interest_rate * inputs.time_to_maturity).exp());
    println!("\nPut-call parity gap: {:.2e}", parity_gap);
}
