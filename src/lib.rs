//! A named calculator that sums and divides optional 32-bit integers and
//! counts the operations that completed without error.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use calculator::{Calculator, MAX_NAME_LEN, MAX_OPERATIONS, MIN_NAME_LEN};
pub use config::{CalculatorConfig, LoggingConfig, Settings};
pub use error::{CalculatorError, CalculatorResult, ErrorKind};
