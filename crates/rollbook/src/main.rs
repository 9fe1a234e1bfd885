//! `rollbook` - CLI for the student roll book
//!
//! This binary is the front end: it turns command-line arguments into
//! roster actions and prints the results.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use rollbook::cli::{render_record, render_records, Cli, Command, ConfigCommand};
use rollbook::{init_logging, Config, Roster, Storage};

/// Exit status for rejected input; storage and other failures use 1.
const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let rejected = err
                .downcast_ref::<rollbook::Error>()
                .is_some_and(rollbook::Error::is_validation);
            if rejected {
                ExitCode::from(EXIT_REJECTED)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // `config validate` must reach its handler even when the file is broken.
    let config = match &cli.command {
        Command::Config(ConfigCommand::Validate { .. }) => Config::default(),
        _ => Config::load_from(cli.config.clone())?,
    };
    let database = cli
        .database
        .unwrap_or_else(|| config.database_path());
    let open_roster = || -> anyhow::Result<Roster> {
        let storage = Storage::open(&database)
            .with_context(|| format!("cannot use database {}", database.display()))?;
        Ok(Roster::new(storage))
    };

    match cli.command {
        Command::Config(cmd) => handle_config(&config, cmd, cli.config)?,
        Command::Init => {
            open_roster()?;
            println!("Database ready at {}", database.display());
        }
        Command::Add(form) => {
            let record = open_roster()?.add(&form.into())?;
            println!("Student added: {}", record.roll_no);
        }
        Command::Update { roll_no, form } => {
            let affected = open_roster()?.update(&roll_no, &form.into())?;
            if affected == 0 {
                warn!("no student with roll number {}", roll_no);
            }
            println!("Student updated");
        }
        Command::Delete { roll_no } => {
            let affected = open_roster()?.delete(&roll_no)?;
            if affected == 0 {
                warn!("no student with roll number {}", roll_no);
            }
            println!("Student deleted");
        }
        Command::List(list) => {
            let format = list.format.unwrap_or(config.display.format);
            let rendered = render_records(&open_roster()?.list()?, format)?;
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
        Command::Show(show) => match open_roster()?.find(&show.roll_no)? {
            Some(record) => println!("{}", render_record(&record, show.json)?),
            None => anyhow::bail!("no student with roll number {}", show.roll_no),
        },
        Command::Next => {
            println!("{}", open_roster()?.peek_next()?);
        }
    }
    Ok(())
}

fn handle_config(
    config: &Config,
    cmd: ConfigCommand,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!();
                println!("[Display]");
                println!("  Format:         {:?}", config.display.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("invalid configuration {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
