/// File names
pub const CELSIUS_FILE: &str = "kjevik-temp-celsius-20220318-20230318.csv";
pub const FAHRENHEIT_FILE: &str = "kjevik-temp-fahr-20220318-20230318.csv";

/// Last 1-based line (header is line 1) taken from either file
pub const MAX_DATA_LINE: usize = 16755;

/// Record layout: station;station_id;timestamp;temperature
pub const FIELD_DELIMITER: char = ';';
pub const FIELD_COUNT: usize = 4;
pub const TEMPERATURE_COLUMN: usize = 3;

/// Trailing provenance row of the Fahrenheit file. Consumers compare it byte-for-byte.
pub const ATTRIBUTION_LINE: &str = "Data er basert på gyldig data (as of 18.03.2023) (CC BY 4.0) fra Meteorologisk institutt (MET); endringen er gjort av Oliver Aaron Berg Johnston";

/// Buffered I/O
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Environment prefix for configuration overrides (MINYR_MAX_LINE, ...)
pub const ENV_PREFIX: &str = "MINYR";
