//! Command-line interface for rollbook.
//!
//! This module provides the CLI structure for the `rollbook` binary, the
//! front end that collects raw field strings and hands them to
//! [`crate::roster::Roster`].

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, FormArgs, ListCommand, ShowCommand};
pub use output::{render_record, render_records, OutputFormat};

/// rollbook - Keep a roll book of students
///
/// Add, update, delete and list student records stored in a single SQLite
/// table. Roll numbers are assigned automatically as 22CSR001, 22CSR002, ...
#[derive(Debug, Parser)]
#[command(name = "rollbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the student database (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the database if it does not exist
    Init,

    /// Add a student; the roll number is generated
    Add(FormArgs),

    /// Replace a student's details
    Update {
        /// Roll number of the student, e.g. 22CSR004
        roll_no: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Delete a student
    Delete {
        /// Roll number of the student
        roll_no: String,
    },

    /// List all students
    List(ListCommand),

    /// Show one student
    Show(ShowCommand),

    /// Print the roll number the next add would assign
    Next,

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                2 => crate::logging::Verbosity::Debug,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
