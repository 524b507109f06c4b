//! # solsign-core
//!
//! Core types, errors, and the signing flow for the `solsign` message
//! signer.
//!
//! This crate provides the foundational pieces shared across all `solsign`
//! crates:
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`types`] - Core data types ([`PrivateKeyInput`], [`SigningMethod`],
//!   [`SignedMessage`])
//! - [`signing`] - The [`SigningFlow`] orchestrator and the boundary traits
//!   it is generic over
//!
//! ## Layering
//!
//! The flow is generic over a key-material resolver and a wallet bridge;
//! the concrete implementations live in `solsign-crypto` and
//! `solsign-wallet` and are wired together by the binary crate. The traits
//! are defined here so that this crate carries no cryptographic
//! dependencies.
//!
//! ## Error Handling
//!
//! ```rust
//! use solsign_core::error::{KeyError, SigningError};
//!
//! let err: SigningError = KeyError::invalid_word_count(13).into();
//! assert!(err.to_string().contains("13 words"));
//! ```
//!
//! [`PrivateKeyInput`]: types::PrivateKeyInput
//! [`SigningMethod`]: types::SigningMethod
//! [`SignedMessage`]: types::SignedMessage
//! [`SigningFlow`]: signing::SigningFlow

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod signing;
pub mod types;

// Re-export commonly used types at the crate root for convenience
pub use error::{KeyError, KeyResult, Result, SigningError, WalletError, WalletResult};
pub use signing::{
    KeyMaterialResolver, SignatureBytes, SignerHandle, SigningFlow, WalletBridge,
};
pub use types::{PrivateKeyInput, ProviderId, SignedMessage, SigningMethod};
