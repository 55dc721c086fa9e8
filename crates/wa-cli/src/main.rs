mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "wa")]
#[command(version, about = "Validate Water Accountant form values", long_about = None)]
struct Cli {
    /// Path to the rules config file [default: wa.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON (`false` when valid, the message otherwise)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one field value
    ///
    /// VALUE is read as JSON when it parses (70, null, "70"), otherwise as text.
    Check {
        /// Field name: email, password, confirm-password, name, weight, measure
        field: String,

        /// Raw field value
        #[arg(default_value = "")]
        value: String,

        /// Password the confirmation must repeat (confirm-password only)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the strength tier of a password
    Strength {
        password: String,
    },

    /// Validate a whole form given as a JSON object
    Form {
        /// Form: login, register, profile or measure
        kind: String,

        /// JSON object with the form fields
        payload: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    // Execute command
    let all_valid = match cli.command {
        Commands::Check {
            field,
            value,
            password,
        } => commands::check::execute(&config.rules, &field, &value, password.as_deref(), cli.json)?,
        Commands::Strength { password } => {
            commands::strength::execute(&config.rules, &password, cli.json)?
        }
        Commands::Form { kind, payload } => {
            commands::form::execute(&config.rules, &kind, &payload, cli.json)?
        }
    };

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
