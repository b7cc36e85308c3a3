use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::error::{InstrumentError, Result};

/// The parameters of a financial instrument, e.g. a European option on a stock.
/// [`InstrumentParameters::new`] takes every value as given, out of domain ones included.
/// [`InstrumentParameters::validate`] and [`InstrumentParameters::try_new`] are opt-in
/// extensions on top of that and are never applied implicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct InstrumentParameters {
    /// (T - t) in years, where T is the time of the instrument's expiration and t is the current time
    pub time_horizon: f64,
    /// the annualized risk-free interest rate
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the underlying's returns
    pub volatility: f64,
    /// the underlying's price at time t
    pub initial_price: f64,
    /// the strike or exercise price
    pub strike_price: f64,
}

/// The fields of [`InstrumentParameters`] in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TimeHorizon,
    RiskFreeRate,
    Volatility,
    InitialPrice,
    StrikePrice,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::TimeHorizon,
        Field::RiskFreeRate,
        Field::Volatility,
        Field::InitialPrice,
        Field::StrikePrice,
    ];

    /// Label used in the diagnostic line.
    pub fn label(&self) -> &'static str {
        match self {
            Field::TimeHorizon => "timeT",
            Field::RiskFreeRate => "freeRate",
            Field::Volatility => "volatility",
            Field::InitialPrice => "initPrice",
            Field::StrikePrice => "strikePrice",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl InstrumentParameters {
    pub fn new(
        time_horizon: f64,
        risk_free_rate: f64,
        volatility: f64,
        initial_price: f64,
        strike_price: f64,
    ) -> Self {
        Self {
            time_horizon,
            risk_free_rate,
            volatility,
            initial_price,
            strike_price,
        }
    }

    /// Like [`InstrumentParameters::new`], but rejects parameters outside of their domain.
    pub fn try_new(
        time_horizon: f64,
        risk_free_rate: f64,
        volatility: f64,
        initial_price: f64,
        strike_price: f64,
    ) -> Result<Self> {
        let params = Self::new(
            time_horizon,
            risk_free_rate,
            volatility,
            initial_price,
            strike_price,
        );
        params.validate()?;
        trace!("created {}", params);
        Ok(params)
    }

    /// An independent copy with identical field values.
    pub fn copy(&self) -> Self {
        *self
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::TimeHorizon => self.time_horizon,
            Field::RiskFreeRate => self.risk_free_rate,
            Field::Volatility => self.volatility,
            Field::InitialPrice => self.initial_price,
            Field::StrikePrice => self.strike_price,
        }
    }

    /// `(field, value)` pairs in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Checks all values are finite, then the domain of each field in display order.
    /// Returns the first violation.
    pub fn validate(&self) -> Result<()> {
        if let Some((field, value)) = self.fields().find(|(_, value)| !value.is_finite()) {
            debug!("rejected {}: {} is not finite", self, field);
            return Err(InstrumentError::NonFinite { field, value });
        }

        let violation = if self.time_horizon <= 0.0 {
            Some(InstrumentError::NonPositiveTimeHorizon(self.time_horizon))
        } else if self.volatility < 0.0 {
            Some(InstrumentError::NegativeVolatility(self.volatility))
        } else if self.initial_price <= 0.0 {
            Some(InstrumentError::NonPositiveInitialPrice(self.initial_price))
        } else if self.strike_price <= 0.0 {
            Some(InstrumentError::NonPositiveStrikePrice(self.strike_price))
        } else {
            None
        };

        match violation {
            Some(err) => {
                debug!("rejected {}: {}", self, err);
                Err(err)
            }
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The diagnostic line including its line terminator.
    pub fn describe(&self) -> String {
        format!("{}\n", self)
    }

    /// Writes the diagnostic line and its terminator to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Writes the diagnostic line to stdout. A failed write is only logged.
    pub fn print(&self) {
        self.print_to(io::stdout().lock());
    }

    fn print_to<W: Write>(&self, mut out: W) {
        if let Err(err) = self.write_to(&mut out) {
            warn!("could not print instrument parameters: {}", err);
        }
    }
}

impl fmt::Display for InstrumentParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", field.label(), value)?;
        }
        Ok(())
    }
}

impl FromStr for InstrumentParameters {
    type Err = InstrumentError;

    /// Parses the diagnostic line, with or without its terminator. Domains are not checked.
    fn from_str(s: &str) -> Result<Self> {
        let line = s
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(s);

        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != Field::ALL.len() {
            return Err(InstrumentError::MalformedLine(s.to_string()));
        }

        let mut values = [0.0; 5];
        for ((field, token), slot) in Field::ALL.iter().zip(tokens).zip(values.iter_mut()) {
            let (label, value) = token
                .split_once(':')
                .ok_or_else(|| InstrumentError::MalformedLine(s.to_string()))?;
            if label != field.label() {
                return Err(InstrumentError::UnexpectedLabel {
                    expected: *field,
                    found: label.to_string(),
                });
            }
            *slot = value.parse().map_err(|_| InstrumentError::InvalidNumber {
                field: *field,
                value: value.to_string(),
            })?;
        }

        let [time_horizon, risk_free_rate, volatility, initial_price, strike_price] = values;
        Ok(Self::new(
            time_horizon,
            risk_free_rate,
            volatility,
            initial_price,
            strike_price,
        ))
    }
}
