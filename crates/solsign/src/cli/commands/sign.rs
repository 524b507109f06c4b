//! # Sign Command
//!
//! Implementation of `solsign sign`: resolve a signer from the selected
//! key source (or wallet provider), sign the message, and print the
//! result.

use solsign_core::error::SigningError;
use solsign_core::signing::SigningFlow;
use solsign_core::types::{SignedMessage, SigningMethod};
use solsign_crypto::material::MaterialResolver;
use solsign_wallet::registry::ProviderRegistry;

use crate::cli::args::SignArgs;
use crate::cli::commands::key_input;
use crate::config::{Config, OutputFormat};

/// Errors that can occur while running the sign command.
#[derive(Debug, thiserror::Error)]
pub enum SignCommandError {
    /// The signing flow failed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// No key source was selected (normally prevented by argument
    /// parsing).
    #[error("select a key source: --base58, --seed-phrase, --byte-array, or --wallet")]
    MissingKeySource,
}

/// Command to sign a message and print the signature.
pub struct SignCommand {
    /// How to obtain the signer.
    pub method: SigningMethod,
    /// The message to sign, exactly as provided.
    pub message: String,
    /// How to print the result.
    pub output: OutputFormat,
}

impl std::fmt::Debug for SignCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `method` redacts its own key material.
        f.debug_struct("SignCommand")
            .field("method", &self.method)
            .field("message", &self.message)
            .field("output", &self.output)
            .finish()
    }
}

impl SignCommand {
    /// Build the command from parsed arguments and loaded configuration.
    ///
    /// A wallet selection takes the remote path; otherwise the local key
    /// source is used, with the config's `derivation_path` applied to seed
    /// phrases when `--path` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SignCommandError::MissingKeySource`] when neither a key
    /// source nor a wallet is selected.
    pub fn from_args(args: SignArgs, config: &Config) -> Result<Self, SignCommandError> {
        let method = if let Some(wallet) = args.wallet {
            SigningMethod::Remote(wallet.into())
        } else {
            let input = key_input(
                &args.key_source,
                args.path.as_deref(),
                config.derivation_path.as_deref(),
            )
            .ok_or(SignCommandError::MissingKeySource)?;
            SigningMethod::Local(input)
        };

        let output = if args.json {
            OutputFormat::Json
        } else {
            config.output
        };

        Ok(Self {
            method,
            message: args.message,
            output,
        })
    }

    /// Execute the command.
    ///
    /// No wallet extension capability is reachable from a plain terminal
    /// session, so the default registry is empty and `--wallet` reports
    /// the provider as not found.
    ///
    /// # Errors
    ///
    /// Returns [`SignCommandError`] if the signing flow fails.
    pub async fn run(&self) -> Result<(), SignCommandError> {
        self.run_with_registry(ProviderRegistry::new()).await
    }

    /// Execute the command against a specific provider registry.
    ///
    /// # Errors
    ///
    /// Returns [`SignCommandError`] if the signing flow fails.
    pub async fn run_with_registry(
        &self,
        registry: ProviderRegistry,
    ) -> Result<(), SignCommandError> {
        let flow = SigningFlow::new(MaterialResolver::new(), registry);
        let signed = flow.sign(&self.method, &self.message).await?;
        self.print(&signed);
        Ok(())
    }

    /// Print the result in the configured format.
    fn print(&self, signed: &SignedMessage) {
        match self.output {
            OutputFormat::Text => {
                println!("Message signed successfully!");
                println!();
                println!("  Address:    {}", signed.address);
                println!("  Message:    {}", signed.message);
                println!("  Signature:  {}", signed.signature_base64);
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "address": signed.address,
                        "message": signed.message,
                        "signature": signed.signature_base64,
                    })
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
