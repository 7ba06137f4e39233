use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MintError {
    #[error("unknown country code {0}")]
    UnknownCountry(String),
    #[error("{value} is not a valid denomination for {currency}")]
    InvalidDenomination { value: Decimal, currency: String },
    #[error("invalid amount: {0}")]
    ParseAmount(#[from] rust_decimal::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MintError>;
