pub mod average_calculator;

pub use average_calculator::{AverageCalculator, AverageReport};
