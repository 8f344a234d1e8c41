use crate::analyzers::AverageCalculator;
use crate::cli::args::{Cli, Commands};
use crate::cli::console::Console;
use crate::cli::interactive::run_interactive;
use crate::config::ProcessingConfig;
use crate::models::Unit;
use crate::processors::{ConversionOutcome, TemperatureConverter};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose);

    let config = load_configuration(&cli)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match cli.command {
        Some(Commands::Convert { yes, no }) => {
            let mut console = console.with_regenerate(Commands::regenerate_answer(yes, no));
            convert(&config, &mut console)
        }
        Some(Commands::Average { unit }) => average(&config, &unit, &mut console),
        Some(Commands::Interactive) | None => {
            run_interactive(&mut console, &config).context("Interactive session failed")
        }
    }
}

/// Run the converter once and print its summary
pub fn convert<R: BufRead, W: Write>(
    config: &ProcessingConfig,
    console: &mut Console<R, W>,
) -> Result<()> {
    let converter = TemperatureConverter::new(config.clone());
    let outcome = converter
        .convert(&mut *console)
        .context("Error converting temperatures")?;

    match outcome {
        ConversionOutcome::Declined => console.say("Exiting without generating new file.")?,
        ConversionOutcome::Written(report) => {
            console.say(&report.summary())?;
            console.say("Temperatures successfully converted.")?;
        }
    }

    Ok(())
}

/// Compute and print the average for `unit`
pub fn average<R: BufRead, W: Write>(
    config: &ProcessingConfig,
    unit: &str,
    console: &mut Console<R, W>,
) -> Result<()> {
    let unit: Unit = unit.parse()?;
    let report = AverageCalculator::new(config.clone())
        .compute_unit(unit)
        .context("Error calculating average temperature")?;

    console.say(&report.summary())?;
    Ok(())
}

fn load_configuration(cli: &Cli) -> Result<ProcessingConfig> {
    let config = ProcessingConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    Ok(match &cli.data_dir {
        Some(dir) => {
            debug!("Using data directory {}", dir.display());
            config.with_directory(dir)
        }
        None => config,
    })
}

/// Structured logging to stderr; `RUST_LOG` overrides the default level
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("minyr={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
