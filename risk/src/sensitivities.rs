use crate::error::RiskError;
use pricing::analytic::{cdf, d1, d2, pdf};
use pricing::common::models::OptionParameters;

/// First-order sensitivities of the Black-Scholes price.
/// All values are in raw annualized units (no per-day or per-percent scaling).
/// Gamma and vega coincide for calls and puts, so only the call values are
/// stored; see [`Greeks::put_gamma`] and [`Greeks::put_vega`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    pub call_delta: f64,
    pub put_delta: f64,
    pub call_gamma: f64,
    pub call_vega: f64,
    pub call_theta: f64,
    pub put_theta: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}

impl Greeks {
    /// Gamma is identical for calls and puts.
    pub fn put_gamma(&self) -> f64 {
        self.call_gamma
    }

    /// Vega is identical for calls and puts.
    pub fn put_vega(&self) -> f64 {
        self.call_vega
    }
}

fn validate(op: &OptionParameters) -> Result<(), RiskError> {
    let required_positive = [
        ("asset_price", op.asset_price),
        ("strike", op.strike),
        ("time_to_expiration", op.time_to_expiration),
        ("vola", op.vola),
    ];
    for (name, value) in required_positive {
        // also rejects NaN
        if !(value > 0.0) {
            return Err(RiskError::NonPositiveParameter { name, value });
        }
    }
    Ok(())
}

/// The Greeks of a European option, using the same d1/d2 as the price
/// formulas in `pricing::analytic`.
/// https://en.wikipedia.org/wiki/Greeks_(finance)
pub fn greeks(op: &OptionParameters) -> Result<Greeks, RiskError> {
    validate(op)?;

    let sqrt_t = op.time_to_expiration.sqrt();
    let d1 = d1(op);
    let d2 = d2(op);
    let density_d1 = pdf(d1);
    let discounted_strike = op.strike * (-op.rfr * op.time_to_expiration).exp();

    let call_delta = cdf(d1);
    // common time-decay term of call and put theta
    let theta_decay = -(op.asset_price * density_d1 * op.vola) / (2.0 * sqrt_t);

    Ok(Greeks {
        call_delta,
        put_delta: call_delta - 1.0,
        call_gamma: density_d1 / (op.asset_price * op.vola * sqrt_t),
        call_vega: op.asset_price * density_d1 * sqrt_t,
        call_theta: theta_decay - op.rfr * discounted_strike * cdf(d2),
        put_theta: theta_decay + op.rfr * discounted_strike * cdf(-d2),
        call_rho: op.time_to_expiration * discounted_strike * cdf(d2),
        put_rho: -op.time_to_expiration * discounted_strike * cdf(-d2),
    })
}
