//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::OutputFormat;
use crate::record::RecordForm;

/// The four student fields, passed through unvalidated.
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Age in years (digits only)
    #[arg(long)]
    pub age: String,

    /// Male, Female, or Other
    #[arg(long)]
    pub gender: String,
}

impl From<FormArgs> for RecordForm {
    fn from(args: FormArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            age: args.age,
            gender: args.gender,
        }
    }
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured display format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Roll number of the student
    pub roll_no: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
