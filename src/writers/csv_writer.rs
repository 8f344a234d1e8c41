use crate::error::{ProcessingError, Result};
use crate::models::TemperatureRecord;
use csv::{QuoteStyle, WriterBuilder};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes the converted Fahrenheit file.
///
/// Quoting is disabled: the header, data rows and the attribution line end up
/// in the file exactly as given, joined by the delimiter.
pub struct FahrenheitWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
    rows_written: usize,
}

impl FahrenheitWriter<BufWriter<NamedTempFile>> {
    /// Start writing `path`.
    ///
    /// Output goes to a temporary file in the same directory and only replaces
    /// `path` in [`finish`](Self::finish). Dropping the writer early leaves any
    /// existing file untouched.
    pub fn create(path: &Path, delimiter: u8, header: Option<&[u8]>) -> Result<Self> {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let file = NamedTempFile::new_in(dir).map_err(|source| ProcessingError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_writer(BufWriter::new(file), path, delimiter, header)
    }

    /// Flush, move the finished file into place and return the number of data rows
    pub fn finish(self) -> Result<usize> {
        let path = self.path.clone();
        let (buffered, rows_written) = self.into_inner()?;

        let file = buffered
            .into_inner()
            .map_err(|e| ProcessingError::Write {
                path: path.clone(),
                source: e.into_error(),
            })?;

        file.persist(&path).map_err(|e| ProcessingError::Write {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(rows_written)
    }
}

impl<W: Write> FahrenheitWriter<W> {
    /// Wrap `inner`, writing `header` first.
    ///
    /// The header is copied byte for byte, an empty header still produces an
    /// empty first line.
    pub fn from_writer(mut inner: W, path: &Path, delimiter: u8, header: Option<&[u8]>) -> Result<Self> {
        if let Some(header) = header {
            inner
                .write_all(header)
                .and_then(|_| inner.write_all(b"\n"))
                .map_err(|source| ProcessingError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .flexible(true)
            .from_writer(inner);

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows_written: 0,
        })
    }

    pub fn write_record(&mut self, record: &TemperatureRecord) -> Result<()> {
        self.writer
            .write_record(record.fields())
            .map_err(|e| self.write_error(e))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Append the trailing single-field provenance row
    pub fn write_attribution(&mut self, attribution: &str) -> Result<()> {
        self.writer
            .write_record([attribution])
            .map_err(|e| self.write_error(e))
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows and hand back the underlying writer
    pub fn into_inner(self) -> Result<(W, usize)> {
        let rows_written = self.rows_written;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| ProcessingError::Write {
                path: self.path.clone(),
                source: e.into_error(),
            })?;

        Ok((inner, rows_written))
    }

    fn write_error(&self, error: csv::Error) -> ProcessingError {
        ProcessingError::Write {
            path: self.path.clone(),
            source: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::ATTRIBUTION_LINE;
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &[u8] = b"Navn;Stasjon;Tid(norsk normaltid);Lufttemperatur";

    fn record(temperature: &str) -> TemperatureRecord<'_> {
        TemperatureRecord {
            station: b"Kjevik",
            station_id: b"SN39040",
            timestamp: b"18.03.2022 01:50",
            temperature: Cow::Borrowed(temperature),
        }
    }

    #[test]
    fn test_writes_rows_verbatim() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut writer = FahrenheitWriter::create(&path, b';', Some(HEADER))?;
        writer.write_record(&record("42.8"))?;
        writer.write_attribution(ATTRIBUTION_LINE)?;
        assert_eq!(writer.finish()?, 1);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            format!(
                "Navn;Stasjon;Tid(norsk normaltid);Lufttemperatur\nKjevik;SN39040;18.03.2022 01:50;42.8\n{}\n",
                ATTRIBUTION_LINE
            )
        );

        Ok(())
    }

    #[test]
    fn test_attribution_is_not_quoted() -> Result<()> {
        let mut writer = FahrenheitWriter::from_writer(Vec::new(), Path::new("mem.csv"), b';', None)?;
        writer.write_attribution("contains; a delimiter and \"quotes\"")?;

        let (bytes, rows) = writer.into_inner()?;
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "contains; a delimiter and \"quotes\"\n"
        );
        assert_eq!(rows, 0);

        Ok(())
    }

    #[test]
    fn test_header_is_copied_raw() -> Result<()> {
        let writer = FahrenheitWriter::from_writer(Vec::new(), Path::new("mem.csv"), b';', Some(b"".as_slice()))?;
        let (bytes, _) = writer.into_inner()?;
        assert_eq!(bytes, b"\n");

        let header: &[u8] = b"Navn \"x\";St\xE5sjon";
        let writer = FahrenheitWriter::from_writer(Vec::new(), Path::new("mem.csv"), b';', Some(header))?;
        let (bytes, _) = writer.into_inner()?;
        assert_eq!(bytes, b"Navn \"x\";St\xE5sjon\n");

        Ok(())
    }

    #[test]
    fn test_non_utf8_fields_are_written_unchanged() -> Result<()> {
        let mut writer = FahrenheitWriter::from_writer(Vec::new(), Path::new("mem.csv"), b';', None)?;
        writer.write_record(&TemperatureRecord {
            station: b"Kj\xE5vik",
            ..record("42.8")
        })?;

        let (bytes, rows) = writer.into_inner()?;
        assert_eq!(bytes, b"Kj\xE5vik;SN39040;18.03.2022 01:50;42.8\n");
        assert_eq!(rows, 1);

        Ok(())
    }

    #[test]
    fn test_unfinished_writer_leaves_existing_file() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        fs::write(&path, "previous output\n").unwrap();

        let mut writer = FahrenheitWriter::create(&path, b';', Some(HEADER))?;
        writer.write_record(&record("42.8"))?;
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous output\n");
        // The temporary file is cleaned up as well
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);

        Ok(())
    }

    #[test]
    fn test_create_in_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let result = FahrenheitWriter::create(&path, b';', None);
        assert!(matches!(result, Err(ProcessingError::CreateFile { .. })));
    }
}
