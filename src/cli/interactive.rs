use crate::analyzers::AverageCalculator;
use crate::cli::console::Console;
use crate::config::ProcessingConfig;
use crate::processors::{ConversionOutcome, TemperatureConverter};
use std::io::{self, BufRead, Write};

const GATE_WORD: &str = "minyr";

/// Menu loop: `convert`, `average` or `exit`, until exit or end of input.
///
/// Failures of either operation are reported and the loop continues.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ProcessingConfig,
) -> io::Result<()> {
    let Some(input) = console.ask("Type 'minyr' to continue or anything else to exit:\n")? else {
        return Ok(());
    };
    if input != GATE_WORD {
        return console.say("Invalid input. Exiting.");
    }

    let converter = TemperatureConverter::new(config.clone());
    let calculator = AverageCalculator::new(config.clone());

    loop {
        let Some(option) = console.ask("Choose an option: 'convert', 'average', or 'exit':\n")? else {
            return Ok(());
        };

        match option.as_str() {
            "convert" => match converter.convert(&mut *console) {
                Ok(ConversionOutcome::Declined) => {
                    console.say("Exiting without generating new file.")?
                }
                Ok(ConversionOutcome::Written(_)) => {
                    console.say("Temperatures successfully converted.")?
                }
                Err(e) => console.say(&format!("Error converting temperatures: {}", e))?,
            },
            "average" => {
                let Some(unit) =
                    console.ask("Choose a unit: 'c' for Celsius or 'f' for Fahrenheit:\n")?
                else {
                    return Ok(());
                };

                match calculator.compute(&unit) {
                    Ok(average) => console.say(&format!(
                        "The average temperature is {:.1} degrees {}",
                        average,
                        unit.to_uppercase()
                    ))?,
                    Err(e) => {
                        console.say(&format!("Error calculating average temperature: {}", e))?
                    }
                }
            }
            "exit" => return console.say("Exiting the program."),
            _ => console.say("Invalid option. Try again.")?,
        }
    }
}
