//! # solsign-crypto
//!
//! Key material resolution and ed25519 signing for the `solsign` message
//! signer.
//!
//! This crate turns one of three private-key encodings into a ready
//! keypair and exposes it behind the signing-flow interface:
//!
//! ## Modules
//!
//! - [`keys`] - The zeroizing [`Seed`] type
//! - [`keypair`] - [`Keypair`] with the 64-byte `seed || public key`
//!   secret convention
//! - [`material`] - Parsing of base58 / seed-phrase / byte-array input
//! - [`mnemonic`] - BIP39 handling and the derivation fallback chain
//! - [`hd`] - SLIP-0010 hardened ed25519 derivation and path parsing
//! - [`signer`] - [`LocalSigner`], the local [`SignerHandle`] implementation
//!
//! ## Example
//!
//! ```rust
//! use solsign_core::types::PrivateKeyInput;
//! use solsign_crypto::material;
//!
//! let input = PrivateKeyInput::SeedPhrase {
//!     words: std::iter::repeat("abandon")
//!         .take(11)
//!         .chain(std::iter::once("about"))
//!         .collect::<Vec<_>>()
//!         .join(" "),
//!     use_custom_path: false,
//!     path: None,
//! };
//!
//! let keypair = material::parse(&input).expect("valid phrase");
//! let signature = keypair.sign(b"hello");
//! assert!(keypair.verify(b"hello", &signature));
//! ```
//!
//! [`Seed`]: keys::Seed
//! [`Keypair`]: keypair::Keypair
//! [`LocalSigner`]: signer::LocalSigner
//! [`SignerHandle`]: solsign_core::signing::SignerHandle

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hd;
pub mod keypair;
pub mod keys;
pub mod material;
pub mod mnemonic;
pub mod signer;

// Re-export the main entry points at the crate root for convenience
pub use hd::{DerivationPath, SOLANA_DERIVATION_PATH};
pub use keypair::Keypair;
pub use keys::Seed;
pub use material::{parse, MaterialResolver};
pub use mnemonic::{DerivationStrategy, DerivedKeypair};
pub use signer::LocalSigner;
