use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::ProcessingConfig;
use crate::error::ProcessingError;
use crate::utils::constants::TEMPERATURE_COLUMN;

/// Which file an average is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn symbol(&self) -> char {
        match self {
            Unit::Celsius => 'C',
            Unit::Fahrenheit => 'F',
        }
    }

    pub fn source_file<'a>(&self, config: &'a ProcessingConfig) -> &'a Path {
        match self {
            Unit::Celsius => &config.celsius_file,
            Unit::Fahrenheit => &config.fahrenheit_file,
        }
    }

    /// Both files carry the temperature in the same column
    pub fn temperature_column(&self) -> usize {
        TEMPERATURE_COLUMN
    }
}

impl FromStr for Unit {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Unit::Celsius),
            "f" => Ok(Unit::Fahrenheit),
            other => Err(ProcessingError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Celsius => write!(f, "Celsius"),
            Unit::Fahrenheit => write!(f, "Fahrenheit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{CELSIUS_FILE, FAHRENHEIT_FILE};

    #[test]
    fn test_parse_unit() {
        assert_eq!("c".parse::<Unit>().unwrap(), Unit::Celsius);
        assert_eq!("f".parse::<Unit>().unwrap(), Unit::Fahrenheit);
        assert!(matches!(
            "x".parse::<Unit>(),
            Err(ProcessingError::InvalidUnit(u)) if u == "x"
        ));
        assert!("".parse::<Unit>().is_err());
        assert!("celsius".parse::<Unit>().is_err());
    }

    #[test]
    fn test_source_file() {
        let config = ProcessingConfig::default();
        assert_eq!(Unit::Celsius.source_file(&config), Path::new(CELSIUS_FILE));
        assert_eq!(
            Unit::Fahrenheit.source_file(&config),
            Path::new(FAHRENHEIT_FILE)
        );
        assert_eq!(Unit::Celsius.temperature_column(), 3);
        assert_eq!(Unit::Fahrenheit.symbol(), 'F');
        assert_eq!(Unit::Celsius.to_string(), "Celsius");
    }
}
