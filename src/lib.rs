pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod format;
pub mod rating;
pub mod roster;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::listing;
use crate::services::report::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(input: &Path, max_grade: u32) -> Result<()> {
    let mut config = AppConfig::new();
    config.grades.max_grade = max_grade;

    let service = ReportService::new(config)?;
    service.run(input)
}

pub fn handle_heights() -> Result<()> {
    listing::print_height_options();
    Ok(())
}

pub fn handle_positions() -> Result<()> {
    listing::print_position_table();
    Ok(())
}
