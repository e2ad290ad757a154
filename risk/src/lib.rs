pub mod error;
pub mod sensitivities;

pub use error::RiskError;
pub use sensitivities::{greeks, Greeks};
