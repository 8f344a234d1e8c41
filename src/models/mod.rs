pub mod temperature;
pub mod unit;

pub use temperature::{parse_temperature, LineIssue, TemperatureParseError, TemperatureRecord};
pub use unit::Unit;
