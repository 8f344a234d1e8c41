use std::path::PathBuf;
use thiserror::Error;

use crate::models::TemperatureParseError;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Error opening input file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating output file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error reading header line: {path} is empty")]
    MissingHeader { path: PathBuf },

    #[error("Malformed data in {path} on line {line}: no value in column {column}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Error parsing temperature value in {path} on line {line}: {source}")]
    InvalidTemperature {
        path: PathBuf,
        line: usize,
        #[source]
        source: TemperatureParseError,
    },

    #[error("No temperature data found in {path}")]
    NoData { path: PathBuf },

    #[error("Invalid temperature unit: '{0}' (expected 'c' or 'f')")]
    InvalidUnit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
