use crate::config::ProcessingConfig;
use crate::error::Result;
use crate::models::{LineIssue, TemperatureRecord};
use crate::readers::LineReader;
use crate::utils::conversion::{celsius_to_fahrenheit, format_one_decimal};
use crate::writers::FahrenheitWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Callbacks the converter needs from whoever drives it
pub trait ConversionHandler {
    /// Asked only when the output file already exists. `false` leaves it untouched.
    fn confirm_regenerate(&mut self, output: &Path) -> bool;

    /// Called for every input line that was skipped
    fn line_skipped(&mut self, _skipped: &SkippedLine) {}
}

/// Overwrites an existing output without asking
pub struct AlwaysRegenerate;

impl ConversionHandler for AlwaysRegenerate {
    fn confirm_regenerate(&mut self, _output: &Path) -> bool {
        true
    }
}

/// Keeps an existing output without asking
pub struct NeverRegenerate;

impl ConversionHandler for NeverRegenerate {
    fn confirm_regenerate(&mut self, _output: &Path) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line: usize,
    pub issue: LineIssue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_written: usize,
    pub skipped: Vec<SkippedLine>,
    /// Input continued past the run bound and the rest was ignored
    pub truncated: bool,
}

impl ConversionReport {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Converted {} rows from {} to {}",
            self.rows_written,
            self.input.display(),
            self.output.display()
        );
        if !self.skipped.is_empty() {
            summary.push_str(&format!(", skipped {} invalid lines", self.skipped.len()));
        }
        if self.truncated {
            summary.push_str(", input truncated at the row limit");
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Output already existed and regeneration was declined
    Declined,
    Written(ConversionReport),
}

/// Converts the Celsius CSV into the Fahrenheit CSV, one line at a time
pub struct TemperatureConverter {
    config: ProcessingConfig,
}

impl TemperatureConverter {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    pub fn convert<H>(&self, handler: &mut H) -> Result<ConversionOutcome>
    where
        H: ConversionHandler + ?Sized,
    {
        let input = &self.config.celsius_file;
        let output = &self.config.fahrenheit_file;

        if output.exists() && !handler.confirm_regenerate(output) {
            info!("Keeping existing {}", output.display());
            return Ok(ConversionOutcome::Declined);
        }

        let delimiter = self.config.delimiter_byte()?;

        // Input is opened and its header read before anything is written
        let mut lines = LineReader::open(input)?;
        let header = lines.next().transpose()?;
        let mut writer =
            FahrenheitWriter::create(output, delimiter, header.as_ref().map(|h| h.bytes.as_slice()))?;

        info!("Converting {} to {}", input.display(), output.display());

        let mut skipped = Vec::new();
        let mut truncated = false;

        for line in lines {
            let line = line?;

            if line.number > self.config.max_line {
                debug!("Reached row limit at line {}", self.config.max_line);
                truncated = true;
                break;
            }

            match Self::convert_line(&line.bytes, delimiter) {
                Ok(record) => writer.write_record(&record)?,
                Err(issue) => {
                    debug!("Skipping line {}: {}", line.number, issue);
                    let line = SkippedLine {
                        line: line.number,
                        issue,
                    };
                    handler.line_skipped(&line);
                    skipped.push(line);
                }
            }
        }

        writer.write_attribution(&self.config.attribution)?;
        let rows_written = writer.finish()?;

        if !skipped.is_empty() {
            warn!("Skipped {} invalid lines in {}", skipped.len(), input.display());
        }
        info!("Wrote {} rows to {}", rows_written, output.display());

        Ok(ConversionOutcome::Written(ConversionReport {
            input: input.clone(),
            output: output.clone(),
            rows_written,
            skipped,
            truncated,
        }))
    }

    /// Validate one raw data line and replace its Celsius value with Fahrenheit
    pub fn convert_line(
        line: &[u8],
        delimiter: u8,
    ) -> std::result::Result<TemperatureRecord<'_>, LineIssue> {
        let record = TemperatureRecord::from_bytes(line, delimiter)?;
        let celsius = record.temperature_value()?;
        let fahrenheit = format_one_decimal(celsius_to_fahrenheit(celsius));

        Ok(record.with_temperature(fahrenheit))
    }
}
