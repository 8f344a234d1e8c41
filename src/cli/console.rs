use crate::processors::{ConversionHandler, SkippedLine};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::warn;

/// Line-oriented terminal I/O shared by the subcommands and the interactive menu
pub struct Console<R, W> {
    input: R,
    output: W,
    regenerate: Option<bool>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            regenerate: None,
        }
    }

    /// Answer the regenerate question up front instead of prompting
    pub fn with_regenerate(mut self, answer: Option<bool>) -> Self {
        self.regenerate = answer;
        self
    }

    /// Print `question` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ConversionHandler for Console<R, W> {
    fn confirm_regenerate(&mut self, _output: &Path) -> bool {
        if let Some(answer) = self.regenerate {
            return answer;
        }

        match self.ask("Output file already exists. Regenerate? (y/n): ") {
            Ok(Some(answer)) => answer == "y" || answer == "Y",
            _ => false,
        }
    }

    fn line_skipped(&mut self, skipped: &SkippedLine) {
        if let Err(e) = writeln!(self.output, "Error on line {}: {}", skipped.line, skipped.issue) {
            warn!("Could not report skipped line {}: {}", skipped.line, e);
        }
    }
}
