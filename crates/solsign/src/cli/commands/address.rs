//! # Address Command
//!
//! Implementation of `solsign address`: resolve the selected key material
//! and print the address it signs as, without signing anything.

use solsign_core::error::KeyError;
use solsign_core::types::PrivateKeyInput;
use solsign_crypto::material;

use crate::cli::args::AddressArgs;
use crate::cli::commands::key_input;
use crate::config::{Config, OutputFormat};

/// Errors that can occur while running the address command.
#[derive(Debug, thiserror::Error)]
pub enum AddressCommandError {
    /// Key material could not be resolved.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The key text is empty.
    #[error("no private key provided")]
    EmptyKey,

    /// No key source was selected (normally prevented by argument
    /// parsing).
    #[error("select a key source: --base58, --seed-phrase, or --byte-array")]
    MissingKeySource,
}

/// Command to display the address a key source resolves to.
pub struct AddressCommand {
    /// The key material to resolve.
    pub input: PrivateKeyInput,
    /// How to print the result.
    pub output: OutputFormat,
}

impl std::fmt::Debug for AddressCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `input` redacts its own key material.
        f.debug_struct("AddressCommand")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish()
    }
}

impl AddressCommand {
    /// Build the command from parsed arguments and loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AddressCommandError::MissingKeySource`] when no key source
    /// is selected.
    pub fn from_args(args: AddressArgs, config: &Config) -> Result<Self, AddressCommandError> {
        let input = key_input(
            &args.key_source,
            args.path.as_deref(),
            config.derivation_path.as_deref(),
        )
        .ok_or(AddressCommandError::MissingKeySource)?;

        let output = if args.json {
            OutputFormat::Json
        } else {
            config.output
        };

        Ok(Self { input, output })
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns [`AddressCommandError`] if the key material cannot be
    /// resolved.
    pub fn run(&self) -> Result<(), AddressCommandError> {
        if self.input.is_empty() {
            return Err(AddressCommandError::EmptyKey);
        }

        let keypair = material::parse(&self.input)?;
        match self.output {
            OutputFormat::Text => {
                println!("  Address:  {}", keypair.address());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "address": keypair.address() }));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
