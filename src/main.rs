use std::path::PathBuf;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::analyser::Analyser;
use crate::config::{default_config_path, Config, ParseMode};
use crate::controller::parse_and_run_command;

mod analyser;
mod common;
mod config;
mod controller;
mod parser;
mod reader;
mod transaction;
mod util;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Transaction file, either .json or .csv
    file: PathBuf,

    /// Config file path. Defaults to ~/.transaction-analyser.toml
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Keep records with an unparsable amount, using NaN as the amount
    #[clap(long)]
    lenient: bool,

    /// Run a statement and exit instead of starting the console. Can be repeated.
    #[clap(short, long)]
    execute: Vec<String>,
}

static COMMAND_HISTORY_FILE: &str = ".transaction_analyser_history";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli :Cli = Cli::parse();

    let mut config = match (&cli.config, default_config_path()) {
        (Some(path), _) => Config::load_from_given_file(path)?,
        (None, Some(path)) => Config::load_from_file(&path)?,
        (None, None) => Config::empty(),
    };
    if cli.lenient {
        config.parse_mode = ParseMode::Lenient;
    }

    let loaded = reader::read_transactions(&cli.file, &config)?;
    if !loaded.rejected.is_empty() {
        warn!("{} records skipped, see warnings above", loaded.rejected.len());
    }

    let mut analyser = Analyser::new(loaded.transactions);
    if analyser.is_empty() {
        warn!("No transactions loaded from {}", cli.file.display());
    } else {
        info!("{} transactions ready", analyser.len());
    }

    if !cli.execute.is_empty() {
        for statement in &cli.execute {
            if let Err(err) = parse_and_run_command(&mut analyser, statement) {
                println!("{}", err);
            }
        }
        return Ok(());
    }

    run_console(&mut analyser)
}

/// Read statements until CTRL-C or CTRL-D. A statement ends with ';' and may span several lines.
fn run_console(analyser: &mut Analyser) -> anyhow::Result<()> {
    let history_file = dirs::home_dir()
        .map(|home| home.join(COMMAND_HISTORY_FILE))
        .unwrap_or_else(|| PathBuf::from(COMMAND_HISTORY_FILE));

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&history_file).is_err() {
        println!("No previous history.");
    }
    let mut statement_buffer :Vec<String> = vec![];
    loop {
        let readline = rl.readline("# ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                let is_last = line.ends_with(';');
                if !line.is_empty() {
                    statement_buffer.push(line.to_string());
                }
                if is_last {
                    let statement = statement_buffer.join("\n");
                    rl.add_history_entry(statement.trim())?;

                    if let Err(err) = parse_and_run_command(analyser, &statement) {
                        println!("{}", err);
                    }

                    statement_buffer.clear();
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }
    rl.save_history(&history_file)?;

    Ok(())
}
