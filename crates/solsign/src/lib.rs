//! # solsign
//!
//! Sign arbitrary messages with a Solana key.
//!
//! `solsign` accepts a base58 secret key, a BIP39 seed phrase (with an
//! optional hardened derivation path), a raw 64-byte JSON array, or a
//! wallet extension provider, and produces a base64-encoded ed25519
//! detached signature.
//!
//! ## Usage
//!
//! ```bash
//! # Sign with a base58 secret key
//! solsign sign -m "hello" --base58 <KEY>
//!
//! # Sign with a seed phrase at the conventional Solana path
//! solsign sign -m "hello" --seed-phrase "word1 word2 ..." --path "m/44'/501'/0'/0'"
//!
//! # Sign with a raw byte array
//! solsign sign -m "hello" --byte-array "[12,34,...]"
//!
//! # Show the address a key source resolves to
//! solsign address --seed-phrase "word1 word2 ..."
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Argument definitions and command implementations
//! - [`config`] - Optional TOML configuration
//! - [`logging`] - Tracing setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod logging;
