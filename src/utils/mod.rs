pub mod constants;
pub mod conversion;

pub use constants::*;
pub use conversion::{celsius_to_fahrenheit, format_one_decimal};
