use crate::common::models::OptionParameters;
use probability::distribution::{Continuous, Distribution, Gaussian};

/// Standard normal cumulative distribution function.
pub fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// Standard normal probability density function.
pub fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

/// d1 = (ln(S/K) + (r + sigma^2 / 2) * t) / (sigma * sqrt(t))
/// Undefined inputs (non-positive price, strike, vola or expiration) propagate
/// through IEEE-754 semantics as NaN/Inf rather than raising an error.
pub fn d1(op: &OptionParameters) -> f64 {
    let sigma_exp = op.vola * op.time_to_expiration.sqrt();
    ((op.asset_price / op.strike).ln() + (op.rfr + op.vola.powi(2) / 2.0) * op.time_to_expiration)
        / sigma_exp
}

/// d2 = d1 - sigma * sqrt(t)
pub fn d2(op: &OptionParameters) -> f64 {
    d1(op) - op.vola * op.time_to_expiration.sqrt()
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;

    /// The (call, put) price pair; the returned pair is authoritative,
    /// nothing is stored between evaluations.
    fn prices(params: &Self::Params) -> (f64, f64) {
        (Self::call(params), Self::put(params))
    }
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(op: &OptionParameters) -> f64 {
        let d1 = d1(op);
        let d2 = d2(op);
        cdf(d1) * op.asset_price
            - cdf(d2) * op.strike * (-op.rfr * op.time_to_expiration).exp()
    }

    fn put(op: &OptionParameters) -> f64 {
        let d1 = d1(op);
        let d2 = d2(op);
        cdf(-d2) * op.strike * (-op.rfr * op.time_to_expiration).exp()
            - cdf(-d1) * op.asset_price
    }
}
