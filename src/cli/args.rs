use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minyr")]
#[command(about = "Convert Kjevik temperature data from Celsius to Fahrenheit and compute averages")]
#[command(version)]
pub struct Cli {
    /// Starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Configuration file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Directory containing the Celsius and Fahrenheit files"
    )]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the Celsius file into the Fahrenheit file
    Convert {
        #[arg(
            short,
            long,
            conflicts_with = "no",
            help = "Regenerate an existing output file without asking"
        )]
        yes: bool,

        #[arg(short, long, help = "Keep an existing output file without asking")]
        no: bool,
    },

    /// Compute the average temperature
    Average {
        #[arg(short, long, help = "'c' for Celsius or 'f' for Fahrenheit")]
        unit: String,
    },

    /// Menu-driven session (convert / average / exit)
    Interactive,
}

impl Commands {
    /// Answer to the regenerate prompt given on the command line, if any
    pub fn regenerate_answer(yes: bool, no: bool) -> Option<bool> {
        match (yes, no) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from(["minyr", "convert", "--yes"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Convert {
                yes: true,
                no: false
            })
        ));
    }

    #[test]
    fn test_parse_average_with_globals() {
        let cli = Cli::parse_from(["minyr", "average", "--unit", "f", "--data-dir", "data", "-v"]);

        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("data")));
        match cli.command {
            Some(Commands::Average { unit }) => assert_eq!(unit, "f"),
            _ => panic!("expected average command"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["minyr"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_conflicting_answers() {
        assert!(Cli::try_parse_from(["minyr", "convert", "--yes", "--no"]).is_err());
    }

    #[test]
    fn test_regenerate_answer() {
        assert_eq!(Commands::regenerate_answer(true, false), Some(true));
        assert_eq!(Commands::regenerate_answer(false, true), Some(false));
        assert_eq!(Commands::regenerate_answer(false, false), None);
    }
}
