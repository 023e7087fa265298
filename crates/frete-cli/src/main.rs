//! CDD Frete - freight rate resolution and spreadsheet import
//!
//! A CLI tool that prices delivery runs for the Santa Luzia and Contagem
//! distribution centers and keeps the resulting freight list.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
