pub mod line_reader;

pub use line_reader::{Line, LineReader};
