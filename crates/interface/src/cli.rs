//! CLI - Command Line Interface
//!
//! `hola` takes no input on the command line: the three answers are read
//! from stdin. The only option controls logging, which goes to stderr so
//! stdout carries nothing but prompts and the greeting.

use clap::Parser;
use std::io;
use thiserror::Error;
use tracing::{debug, Level};

use hola_core::GreeterError;

use crate::session::run_greeter;

/// CLI Errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Greeter(#[from] GreeterError),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// CLI Configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Verbose output
    pub verbose: bool,
}

/// Hola CLI
#[derive(Parser, Debug)]
#[command(name = "hola")]
#[command(author, version, about = "Asks three questions and greets you", long_about = None)]
pub(crate) struct Cli {
    /// Log session events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse CLI arguments and run the greeter on the console
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Build config from args
    let config = CliConfig {
        verbose: cli.verbose,
    };

    run_with_config(&config)
}

/// Run the greeter on stdin/stdout with an explicit configuration
pub fn run_with_config(config: &CliConfig) -> Result<(), CliError> {
    if config.verbose {
        init_logging()?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let profile = run_greeter(stdin.lock(), stdout.lock())?;
    debug!(age = profile.age, "session finished");

    Ok(())
}

fn init_logging() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
