mod cli;
mod commands;
mod dbs;
mod models;
mod output;
mod rules;

use clap::Parser;
use cli::{Cli, Commands};
use dbs::error::DbsError;

fn main() {
    let cli = Cli::parse();

    let result: Result<(), DbsError> = match &cli.command {
        Commands::Dump { path, filter, verbose } => {
            commands::dump::run(path, filter.as_deref(), *verbose)
        }
        Commands::Export { path, out_json, filter, verbose } => {
            commands::export::run(path, out_json, filter.as_deref(), *verbose)
        }
        Commands::Stats { path, filter } => {
            commands::stats::run(path, filter.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("[!] КРИТИЧЕСКАЯ ОШИБКА: {}", e);
        std::process::exit(1);
    }
}
