use serde::{Deserialize, Serialize};

/// Days used to convert annualized theta into a per-calendar-day figure.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option side of a call/put pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

/// Market parameters for a single Black-Scholes evaluation.
///
/// Values are taken as supplied; the engine clamps spot and strike to a small
/// positive floor and negative volatility or maturity to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Spot price of the underlying (S)
    pub current_price: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualized volatility as a decimal, e.g. 0.20 for 20% (σ)
    pub volatility: f64,
    /// Continuously compounded risk-free rate (r)
    pub interest_rate: f64,
    /// Premium paid for the call, subtracted to obtain call P&L
    #[serde(default)]
    pub call_purchase_price: f64,
    /// Premium paid for the put, subtracted to obtain put P&L
    #[serde(default)]
    pub put_purchase_price: f64,
}

impl PricingInputs {
    /// Inputs with zero purchase prices, so P&L equals the raw price.
    pub fn new(
        current_price: f64,
        strike: f64,
        time_to_maturity: f64,
        volatility: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            current_price,
            strike,
            time_to_maturity,
            volatility,
            interest_rate,
            call_purchase_price: 0.0,
            put_purchase_price: 0.0,
        }
    }

    pub fn with_purchase_prices(self, call_purchase_price: f64, put_purchase_price: f64) -> Self {
        Self {
            call_purchase_price,
            put_purchase_price,
            ..self
        }
    }

    /// Copy of these inputs with only spot and volatility replaced.
    pub fn with_spot_and_vol(self, current_price: f64, volatility: f64) -> Self {
        Self {
            current_price,
            volatility,
            ..self
        }
    }
}

/// Sensitivities of one option of the pair.
///
/// Conventions: theta is annualized (value change per year of elapsed time),
/// vega is per 1.0 change in volatility, rho is per 1 percentage point change
/// in the rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionGreeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl OptionGreeks {
    /// Theta per calendar day (annual theta / 365)
    pub fn theta_per_day(&self) -> f64 {
        self.theta / DAYS_PER_YEAR
    }

    /// Vega per one volatility point (a 0.01 change in σ)
    pub fn vega_per_vol_point(&self) -> f64 {
        self.vega / 100.0
    }
}

/// Output of one Black-Scholes evaluation for a call/put pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
    /// Call price minus call purchase price
    pub call_pnl: f64,
    /// Put price minus put purchase price
    pub put_pnl: f64,
    pub call: OptionGreeks,
    pub put: OptionGreeks,
}

impl PricingResult {
    pub fn price(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_price,
            OptionSide::Put => self.put_price,
        }
    }

    pub fn pnl(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_pnl,
            OptionSide::Put => self.put_pnl,
        }
    }

    pub fn greeks(&self, side: OptionSide) -> &OptionGreeks {
        match side {
            OptionSide::Call => &self.call,
            OptionSide::Put => &self.put,
        }
    }
}
