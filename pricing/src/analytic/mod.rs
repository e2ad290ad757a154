pub mod black_scholes;

pub use black_scholes::{cdf, d1, d2, pdf, BlackScholesMerton, OptionPrice};
