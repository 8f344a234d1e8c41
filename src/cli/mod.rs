pub mod args;
pub mod commands;
pub mod console;
pub mod interactive;

pub use args::{Cli, Commands};
pub use commands::run;
pub use console::Console;
pub use interactive::run_interactive;
