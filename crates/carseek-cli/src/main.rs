//! Carseek - vehicle lookup by VIN, license plate, or brand/model/year
//!
//! A CLI tool over a small vehicle catalog with maintenance recommendations
//! and bounded recent-search history.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
