pub mod temperature_converter;

pub use temperature_converter::{
    AlwaysRegenerate, ConversionHandler, ConversionOutcome, ConversionReport, NeverRegenerate,
    SkippedLine, TemperatureConverter,
};
