pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use analyzers::{AverageCalculator, AverageReport};
pub use config::ProcessingConfig;
pub use error::{ProcessingError, Result};
pub use processors::{ConversionHandler, ConversionOutcome, TemperatureConverter};
