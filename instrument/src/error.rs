use thiserror::Error;

use crate::common::models::Field;

pub type Result<T> = std::result::Result<T, InstrumentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    #[error("{field} is not finite: {value}")]
    NonFinite { field: Field, value: f64 },
    #[error("time horizon must be positive, got {0}")]
    NonPositiveTimeHorizon(f64),
    #[error("volatility must not be negative, got {0}")]
    NegativeVolatility(f64),
    #[error("initial price must be positive, got {0}")]
    NonPositiveInitialPrice(f64),
    #[error("strike price must be positive, got {0}")]
    NonPositiveStrikePrice(f64),
    #[error("malformed parameter line: {0:?}")]
    MalformedLine(String),
    #[error("expected label {expected}, found {found:?}")]
    UnexpectedLabel { expected: Field, found: String },
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: Field, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_labels() {
        let err = InstrumentError::NonFinite {
            field: Field::Volatility,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "volatility is not finite: NaN");

        let err = InstrumentError::UnexpectedLabel {
            expected: Field::TimeHorizon,
            found: "T".to_string(),
        };
        assert_eq!(err.to_string(), "expected label timeT, found \"T\"");
    }
}
