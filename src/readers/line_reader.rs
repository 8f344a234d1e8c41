use crate::error::{ProcessingError, Result};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A single line of input with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    /// Raw bytes with the line terminator removed
    pub bytes: Vec<u8>,
}

/// Streams a file line by line without loading it into memory.
///
/// Lines are not decoded: whatever bytes are in the file come back unchanged,
/// so text in any encoding can be passed through. A leading BOM is kept.
pub struct LineReader<R> {
    reader: R,
    path: PathBuf,
    line_number: usize,
    buffer: Vec<u8>,
}

impl LineReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ProcessingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(
            BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file),
            path,
        ))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            reader,
            path: path.to_path_buf(),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Number of the last line returned (0 before the first read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                self.line_number += 1;

                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                    if self.buffer.last() == Some(&b'\r') {
                        self.buffer.pop();
                    }
                }

                Some(Ok(Line {
                    number: self.line_number,
                    bytes: self.buffer.clone(),
                }))
            }
            Err(source) => Some(Err(ProcessingError::Read {
                path: self.path.clone(),
                source,
            })),
        }
    }
}
