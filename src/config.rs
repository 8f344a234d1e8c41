//! Processing configuration.
//!
//! File locations, the run bound, the field delimiter and the attribution
//! line are parameters rather than literals so they can be swapped out in
//! tests. Defaults reproduce the Kjevik dataset layout exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    ATTRIBUTION_LINE, CELSIUS_FILE, ENV_PREFIX, FAHRENHEIT_FILE, FIELD_DELIMITER, MAX_DATA_LINE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Source file with Celsius readings
    #[validate(custom(function = "validate_file_name"))]
    pub celsius_file: PathBuf,

    /// Converter output, also the source for Fahrenheit averages
    #[validate(custom(function = "validate_file_name"))]
    pub fahrenheit_file: PathBuf,

    /// Last 1-based line (header is line 1) that is converted or averaged
    #[validate(range(min = 2))]
    pub max_line: usize,

    #[validate(custom(function = "validate_delimiter"))]
    pub delimiter: char,

    /// Written verbatim as the last row of the converted file
    #[validate(length(min = 1))]
    pub attribution: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            celsius_file: PathBuf::from(CELSIUS_FILE),
            fahrenheit_file: PathBuf::from(FAHRENHEIT_FILE),
            max_line: MAX_DATA_LINE,
            delimiter: FIELD_DELIMITER,
            attribution: ATTRIBUTION_LINE.to_string(),
        }
    }
}

impl ProcessingConfig {
    /// Load configuration: defaults, then an optional file, then `MINYR_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: ProcessingConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(
            "Resolved configuration: celsius={}, fahrenheit={}, max_line={}",
            config.celsius_file.display(),
            config.fahrenheit_file.display(),
            config.max_line
        );

        Ok(config)
    }

    /// Resolve both file names relative to `dir`
    pub fn with_directory(mut self, dir: &Path) -> Self {
        self.celsius_file = dir.join(&self.celsius_file);
        self.fahrenheit_file = dir.join(&self.fahrenheit_file);
        self
    }

    /// The delimiter as the single byte the CSV reader and writer expect
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                ProcessingError::Config(format!(
                    "Delimiter '{}' is not a single ASCII character",
                    self.delimiter
                ))
            })
    }

    pub fn with_max_line(mut self, max_line: usize) -> Self {
        self.max_line = max_line;
        self
    }
}

fn validate_file_name(path: &PathBuf) -> std::result::Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_file_name"));
    }
    Ok(())
}

fn validate_delimiter(delimiter: &char) -> std::result::Result<(), ValidationError> {
    if !delimiter.is_ascii() || *delimiter == '\n' || *delimiter == '\r' {
        return Err(ValidationError::new("delimiter_not_single_byte"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    // load() reads MINYR_* from the process environment, which tests share
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_defaults() {
        let config = ProcessingConfig::default();

        assert_eq!(config.celsius_file, PathBuf::from(CELSIUS_FILE));
        assert_eq!(config.fahrenheit_file, PathBuf::from(FAHRENHEIT_FILE));
        assert_eq!(config.max_line, 16755);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.attribution, ATTRIBUTION_LINE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_directory() {
        let config = ProcessingConfig::default().with_directory(Path::new("/data"));

        assert_eq!(config.celsius_file, Path::new("/data").join(CELSIUS_FILE));
        assert_eq!(
            config.fahrenheit_file,
            Path::new("/data").join(FAHRENHEIT_FILE)
        );
    }

    #[test]
    fn test_validation() {
        let config = ProcessingConfig::default().with_max_line(1);
        assert!(config.validate().is_err());

        let config = ProcessingConfig {
            delimiter: 'å',
            ..ProcessingConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.delimiter_byte().is_err());
        assert_eq!(ProcessingConfig::default().delimiter_byte().unwrap(), b';');

        let config = ProcessingConfig {
            celsius_file: PathBuf::new(),
            ..ProcessingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let _guard = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "celsius_file = \"input.csv\"").unwrap();
        writeln!(file, "max_line = 100").unwrap();

        let config = ProcessingConfig::load(Some(file.path()))?;

        assert_eq!(config.celsius_file, PathBuf::from("input.csv"));
        assert_eq!(config.max_line, 100);
        // Untouched keys keep their defaults
        assert_eq!(config.fahrenheit_file, PathBuf::from(FAHRENHEIT_FILE));
        assert_eq!(config.attribution, ATTRIBUTION_LINE);

        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let _guard = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_line = 0").unwrap();

        assert!(ProcessingConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let _guard = env_lock();
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        assert!(ProcessingConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_environment_overrides_file() -> Result<()> {
        let _guard = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_line = 100").unwrap();
        writeln!(file, "celsius_file = \"input.csv\"").unwrap();

        std::env::set_var("MINYR_MAX_LINE", "120");
        let result = ProcessingConfig::load(Some(file.path()));
        std::env::remove_var("MINYR_MAX_LINE");
        let config = result?;

        assert_eq!(config.max_line, 120);
        assert_eq!(config.celsius_file, PathBuf::from("input.csv"));

        Ok(())
    }
}
