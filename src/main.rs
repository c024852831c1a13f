use anyhow::Result;

use hoopscout::cli::Command;
use hoopscout::{handle_heights, handle_positions, handle_report, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report { input, max_grade } => handle_report(input, *max_grade),
        Command::Heights => handle_heights(),
        Command::Positions => handle_positions(),
    }
}
