use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("parameter '{name}' must be strictly positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },
}
