use clap::Parser;
use env_logger::Env;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Config;
use crate::ledger::{Ledger, LoadReport};

mod config;
mod controller;
mod ledger;
mod parser;
mod transaction;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Ledger file path. Falls back to the config value, then to fintrack.dat
    file: Option<String>,
}

static COMMAND_HISTORY_FILE: &str = ".fintrack_history";
static DEFAULT_LEDGER_FILE: &str = "fintrack.dat";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();
    let config = Config::load();

    let file_path = cli
        .file
        .or(config.ledger_file)
        .unwrap_or_else(|| DEFAULT_LEDGER_FILE.to_string());

    let (mut ledger, report) = Ledger::open(&file_path);
    match report {
        LoadReport::Loaded(count) => info!("Loaded {count} transactions from {file_path}"),
        LoadReport::NoPriorData => println!("No data found, starting fresh"),
        LoadReport::LoadFailed(e) => println!("Could not load {file_path}: {e}"),
    }

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(COMMAND_HISTORY_FILE).is_err() {
        println!("No previous history.");
    }

    loop {
        let readline = rl.readline("# ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if let Err(err) = controller::parse_and_run_command(&mut ledger, line) {
                    println!("{}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history(COMMAND_HISTORY_FILE)?;

    Ok(())
}
