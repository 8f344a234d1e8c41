use encoding_rs::UTF_8;
use std::borrow::Cow;
use std::num::ParseFloatError;
use thiserror::Error;

use crate::utils::constants::FIELD_COUNT;

/// Why a temperature field could not be turned into a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemperatureParseError {
    #[error("Temperature field is empty")]
    Empty,

    #[error("invalid temperature '{value}': {source}")]
    Invalid {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Temperature '{value}' is not a finite number")]
    NonFinite { value: String },
}

/// Per-line problem found by the converter. The line is skipped, the run continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineIssue {
    #[error("Invalid input format: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error(transparent)]
    Temperature(#[from] TemperatureParseError),
}

/// One data row: station;station_id;timestamp;temperature.
///
/// Borrows the raw bytes of the line. Only the temperature field is decoded,
/// the other three are written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureRecord<'a> {
    pub station: &'a [u8],
    pub station_id: &'a [u8],
    pub timestamp: &'a [u8],
    pub temperature: Cow<'a, str>,
}

impl<'a> TemperatureRecord<'a> {
    /// Split a raw line into a record. Anything other than exactly four fields is rejected.
    pub fn from_bytes(line: &'a [u8], delimiter: u8) -> std::result::Result<Self, LineIssue> {
        let parts: Vec<&'a [u8]> = line.split(|&b| b == delimiter).collect();

        if parts.len() != FIELD_COUNT {
            return Err(LineIssue::FieldCount {
                expected: FIELD_COUNT,
                found: parts.len(),
            });
        }

        // Undecodable bytes become U+FFFD and then fail to parse as a number
        let (temperature, _) = UTF_8.decode_without_bom_handling(parts[3]);

        Ok(Self {
            station: parts[0],
            station_id: parts[1],
            timestamp: parts[2],
            temperature,
        })
    }

    pub fn temperature_value(&self) -> std::result::Result<f64, TemperatureParseError> {
        parse_temperature(&self.temperature)
    }

    /// Replace the temperature field, leaving the other fields untouched
    pub fn with_temperature(self, temperature: String) -> Self {
        Self {
            temperature: Cow::Owned(temperature),
            ..self
        }
    }

    pub fn fields(&self) -> [&[u8]; FIELD_COUNT] {
        [
            self.station,
            self.station_id,
            self.timestamp,
            self.temperature.as_bytes(),
        ]
    }
}

/// Parse a temperature field, accepting `,` as well as `.` as the decimal separator.
///
/// The comma is swapped for a dot before parsing so the result never depends on locale.
///
/// # Examples
/// ```
/// use minyr::models::parse_temperature;
///
/// assert_eq!(parse_temperature("-3,5").unwrap(), -3.5);
/// assert_eq!(parse_temperature("12.5").unwrap(), 12.5);
/// assert!(parse_temperature("").is_err());
/// ```
pub fn parse_temperature(raw: &str) -> std::result::Result<f64, TemperatureParseError> {
    if raw.is_empty() {
        return Err(TemperatureParseError::Empty);
    }

    let normalized = raw.replace(',', ".");
    let value = normalized
        .parse::<f64>()
        .map_err(|source| TemperatureParseError::Invalid {
            value: raw.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(TemperatureParseError::NonFinite {
            value: raw.to_string(),
        });
    }

    Ok(value)
}
