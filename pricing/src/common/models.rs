/// The five scalar inputs of the Black-Scholes model.
/// Constructed once per scenario and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct OptionParameters {
    /// the underlying asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the option
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the asset's log returns
    pub vola: f64,
}

impl OptionParameters {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// A new scenario with a different asset price, all other inputs unchanged.
    pub fn with_asset_price(&self, asset_price: f64) -> Self {
        Self {
            asset_price,
            ..*self
        }
    }

    /// A new scenario with a different volatility, all other inputs unchanged.
    pub fn with_vola(&self, vola: f64) -> Self {
        Self { vola, ..*self }
    }
}
