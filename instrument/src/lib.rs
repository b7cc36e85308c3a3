pub mod common;
pub mod error;

pub use common::models::{Field, InstrumentParameters};
pub use error::InstrumentError;
