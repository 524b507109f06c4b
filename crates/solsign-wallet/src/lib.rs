//! # solsign-wallet
//!
//! The wallet-extension capability interface for the `solsign` message
//! signer.
//!
//! A wallet extension holds its own keys; this crate only consumes its
//! capability (`connect` plus `sign_message`) behind the same
//! [`SignerHandle`] interface local keys use. It does not implement a
//! wallet protocol of its own.
//!
//! ## Modules
//!
//! - [`provider`] - The [`WalletProvider`] capability trait and the
//!   [`RemoteWalletSigner`] adapter
//! - [`registry`] - [`ProviderRegistry`], the well-known slots probed
//!   defensively
//!
//! [`SignerHandle`]: solsign_core::signing::SignerHandle
//! [`WalletProvider`]: provider::WalletProvider
//! [`RemoteWalletSigner`]: provider::RemoteWalletSigner
//! [`ProviderRegistry`]: registry::ProviderRegistry

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod provider;
pub mod registry;

// Re-export the main entry points at the crate root for convenience
pub use provider::{RemoteWalletSigner, WalletAccount, WalletProvider, UTF8_ENCODING_HINT};
pub use registry::ProviderRegistry;
