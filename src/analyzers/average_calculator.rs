use crate::config::ProcessingConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{parse_temperature, Unit};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct AverageReport {
    pub unit: Unit,
    pub path: PathBuf,
    pub mean: f64,
    pub rows: usize,
}

impl AverageReport {
    pub fn summary(&self) -> String {
        format!(
            "The average temperature is {:.1} degrees {} ({} rows from {})",
            self.mean,
            self.unit.symbol(),
            self.rows,
            self.path.display()
        )
    }
}

/// Streams a temperature file and averages one column.
///
/// Unlike the converter this is strict: a short record or an unparseable
/// value aborts the whole computation.
pub struct AverageCalculator {
    config: ProcessingConfig,
}

impl AverageCalculator {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Mean temperature for `"c"` or `"f"`. Any other unit fails before a file is opened.
    pub fn compute(&self, unit: &str) -> Result<f64> {
        let unit: Unit = unit.parse()?;
        Ok(self.compute_unit(unit)?.mean)
    }

    pub fn compute_unit(&self, unit: Unit) -> Result<AverageReport> {
        let path = unit.source_file(&self.config);
        let column = unit.temperature_column();
        let delimiter = self.config.delimiter_byte()?;

        let file = File::open(path).map_err(|source| ProcessingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file));

        let mut record = StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(ProcessingError::MissingHeader {
                path: path.to_path_buf(),
            });
        }

        let attribution: StringRecord = self
            .config
            .attribution
            .split(self.config.delimiter)
            .collect();
        let mut line = 1;
        let mut sum = 0.0;
        let mut count = 0usize;

        while reader.read_record(&mut record)? {
            line += 1;

            if line > self.config.max_line {
                debug!("Reached row limit at line {}", self.config.max_line);
                break;
            }

            if record == attribution {
                debug!("Attribution line reached at line {}", line);
                break;
            }

            let value = record.get(column).ok_or_else(|| ProcessingError::MalformedRecord {
                path: path.to_path_buf(),
                line,
                column,
            })?;

            let temperature =
                parse_temperature(value).map_err(|source| ProcessingError::InvalidTemperature {
                    path: path.to_path_buf(),
                    line,
                    source,
                })?;

            sum += temperature;
            count += 1;
        }

        if count == 0 {
            return Err(ProcessingError::NoData {
                path: path.to_path_buf(),
            });
        }

        let mean = sum / count as f64;
        info!(
            "{} average of {} rows in {}: {:.3}",
            unit,
            count,
            path.display(),
            mean
        );

        Ok(AverageReport {
            unit,
            path: path.to_path_buf(),
            mean,
            rows: count,
        })
    }
}
