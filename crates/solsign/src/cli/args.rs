//! CLI argument definitions.
//!
//! The CLI is structured as follows:
//!
//! - `solsign sign` - Sign a message with a local key or a wallet provider
//! - `solsign address` - Display the address a key source resolves to
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level
//! - `-c, --config <PATH>` - Path to configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use solsign_core::types::ProviderId;

/// Sign arbitrary messages with a Solana key.
///
/// Accepts a base58 secret key, a BIP39 seed phrase (with optional
/// hardened derivation path), a raw 64-byte JSON array, or a wallet
/// extension provider, and produces a base64-encoded ed25519 detached
/// signature.
#[derive(Debug, Parser)]
#[command(name = "solsign")]
#[command(author, version, about = "Solana message signer")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    ///
    /// If not specified, `solsign` looks in the platform config directory
    /// (`~/.config/solsign/config.toml` on Unix).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign a message and print the base64 signature
    Sign(SignArgs),
    /// Display the address a key source resolves to
    Address(AddressArgs),
}

/// The wallet provider slots selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalletArg {
    /// Phantom-style provider (signMessage takes an encoding hint).
    Phantom,
    /// Solflare-style provider (signMessage takes no hint).
    Solflare,
}

impl From<WalletArg> for ProviderId {
    fn from(arg: WalletArg) -> Self {
        match arg {
            WalletArg::Phantom => Self::Phantom,
            WalletArg::Solflare => Self::Solflare,
        }
    }
}

/// The mutually exclusive local key sources.
///
/// Exactly one source must be chosen per invocation (commands may add
/// further members to the same group, e.g. `--wallet` on `sign`).
#[derive(Debug, Clone, Args)]
#[group(id = "key_source", required = true, multiple = false)]
pub struct KeySourceArgs {
    /// Base58-encoded 64-byte secret key
    #[arg(long, value_name = "KEY")]
    pub base58: Option<String>,

    /// BIP39 seed phrase, 12-24 words (quote the whole phrase)
    #[arg(long, value_name = "WORDS")]
    pub seed_phrase: Option<String>,

    /// JSON array of exactly 64 bytes, e.g. "[1,2,3,...]"
    #[arg(long, value_name = "JSON")]
    pub byte_array: Option<String>,
}

/// Arguments for `solsign sign`.
#[derive(Debug, Args)]
pub struct SignArgs {
    /// The message to sign, exactly as it should be signed
    #[arg(short, long, value_name = "TEXT")]
    pub message: String,

    #[command(flatten)]
    pub key_source: KeySourceArgs,

    /// Sign through a wallet extension provider instead of local key
    /// material
    #[arg(long, value_enum, value_name = "PROVIDER", group = "key_source")]
    pub wallet: Option<WalletArg>,

    /// Hardened derivation path for --seed-phrase, e.g. "m/44'/501'/0'/0'"
    #[arg(long, value_name = "PATH", requires = "seed_phrase")]
    pub path: Option<String>,

    /// Emit a JSON object instead of the human-readable summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `solsign address`.
#[derive(Debug, Args)]
pub struct AddressArgs {
    #[command(flatten)]
    pub key_source: KeySourceArgs,

    /// Hardened derivation path for --seed-phrase, e.g. "m/44'/501'/0'/0'"
    #[arg(long, value_name = "PATH", requires = "seed_phrase")]
    pub path: Option<String>,

    /// Emit a JSON object instead of the human-readable summary
    #[arg(long)]
    pub json: bool,
}
