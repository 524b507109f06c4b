//! # solsign
//!
//! Solana message signer.
//!
//! ## Usage
//!
//! ```bash
//! # Sign a message with a base58 secret key
//! solsign sign -m "hello" --base58 <KEY>
//!
//! # Sign with a seed phrase, default derivation
//! solsign sign -m "hello" --seed-phrase "word1 word2 ..."
//!
//! # Display the address for a key source
//! solsign address --base58 <KEY>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use clap::Parser;

use solsign::cli::commands::{
    AddressCommand, SignCommand, EXIT_COMMAND_FAILED, EXIT_SETUP_ERROR, EXIT_SUCCESS,
};
use solsign::cli::{Cli, Commands};
use solsign::config::Config;
use solsign::logging::{init_logging, verbosity_to_level, LogConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: verbosity_to_level(cli.verbose),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(EXIT_SETUP_ERROR);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_SETUP_ERROR);
        }
    };

    let code = match cli.command {
        Commands::Sign(args) => run_sign(args, &config).await,
        Commands::Address(args) => run_address(args, &config),
    };

    std::process::exit(code);
}

/// Run the sign command and map the outcome onto an exit code.
async fn run_sign(args: solsign::cli::SignArgs, config: &Config) -> i32 {
    let command = match SignCommand::from_args(args, config) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_SETUP_ERROR;
        }
    };

    match command.run().await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_COMMAND_FAILED
        }
    }
}

/// Run the address command and map the outcome onto an exit code.
fn run_address(args: solsign::cli::AddressArgs, config: &Config) -> i32 {
    let command = match AddressCommand::from_args(args, config) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_SETUP_ERROR;
        }
    };

    match command.run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_COMMAND_FAILED
        }
    }
}
