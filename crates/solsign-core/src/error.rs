//! Error types for the solsign message-signing engine.
//!
//! This module provides error types for all failure modes in the signing
//! flow, organized by domain:
//!
//! - [`KeyError`] - Key material parsing and derivation failures
//! - [`WalletError`] - Wallet-extension capability failures
//! - [`SigningError`] - Top-level error produced by the signing flow
//!
//! Every failure is caught at the boundary where it occurs and converted
//! into one of these structured values; nothing propagates as an
//! unstructured fault. Each variant maps to a distinct human-readable
//! message via `Display`, so presentation layers stay swappable.
//!
//! # Example
//!
//! ```rust
//! use solsign_core::error::{KeyError, SigningError};
//!
//! fn check_length(bytes: &[u8]) -> Result<(), SigningError> {
//!     if bytes.len() != 64 {
//!         return Err(KeyError::invalid_key_length(64, bytes.len()).into());
//!     }
//!     Ok(())
//! }
//! ```

// ============================================================================
// KeyError
// ============================================================================

/// Errors that can occur while resolving key material into a keypair.
///
/// These cover all three private-key encodings (base58, seed phrase, byte
/// array) as well as hierarchical derivation failures. All of them are
/// local validation or derivation failures; no partial keypair is ever
/// produced alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The input text could not be decoded in the selected encoding.
    #[error("invalid key encoding: {reason}")]
    InvalidEncoding {
        /// What was wrong with the input.
        reason: String,
    },

    /// The seed phrase has an unsupported number of words.
    ///
    /// Valid counts are 12, 15, 18, 21, and 24.
    #[error("invalid seed phrase length: {count} words (expected 12, 15, 18, 21, or 24)")]
    InvalidWordCount {
        /// The number of words that were provided.
        count: usize,
    },

    /// The decoded key material has the wrong length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// The expected length in bytes.
        expected: usize,
        /// The length that was actually decoded.
        actual: usize,
    },

    /// Hierarchical derivation failed.
    ///
    /// The context names the derivation path (or `"all methods"` when the
    /// whole fallback chain was exhausted).
    #[error("key derivation failed: {context}")]
    DerivationFailed {
        /// What was being derived when the failure occurred.
        context: String,
    },
}

impl KeyError {
    /// Create an `InvalidEncoding` error with a reason.
    #[must_use]
    pub fn invalid_encoding(reason: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidWordCount` error.
    #[must_use]
    pub const fn invalid_word_count(count: usize) -> Self {
        Self::InvalidWordCount { count }
    }

    /// Create an `InvalidKeyLength` error.
    #[must_use]
    pub const fn invalid_key_length(expected: usize, actual: usize) -> Self {
        Self::InvalidKeyLength { expected, actual }
    }

    /// Create a `DerivationFailed` error with context.
    #[must_use]
    pub fn derivation_failed(context: impl Into<String>) -> Self {
        Self::DerivationFailed {
            context: context.into(),
        }
    }
}

// ============================================================================
// WalletError
// ============================================================================

/// Errors that can occur while signing through a wallet extension.
///
/// The wallet capability is external; each of these is terminal for the
/// current attempt. No retry is performed automatically.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No provider is registered at the requested well-known slot.
    #[error("{name} wallet not found. Please install the extension.")]
    ProviderNotFound {
        /// The display name of the missing provider.
        name: String,
    },

    /// The user rejected the connection request.
    #[error("wallet connection rejected")]
    ConnectRejected,

    /// The provider rejected the sign request or could not serve it.
    ///
    /// This frequently means the wallet is locked.
    #[error("wallet refused to sign: {reason}")]
    SignRejected {
        /// Why the provider refused.
        reason: String,
    },
}

impl WalletError {
    /// Create a `ProviderNotFound` error.
    #[must_use]
    pub fn provider_not_found(name: impl Into<String>) -> Self {
        Self::ProviderNotFound { name: name.into() }
    }

    /// Create a `SignRejected` error with a reason.
    #[must_use]
    pub fn sign_rejected(reason: impl Into<String>) -> Self {
        Self::SignRejected {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// SigningError
// ============================================================================

/// Top-level error for a signing attempt.
///
/// Exactly one of a signed result or a `SigningError` is produced per
/// attempt. The two precondition variants (`EmptyMessage`, `EmptyKey`) are
/// checked before any key material is touched.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The message to sign is empty or whitespace-only.
    #[error("no message to sign")]
    EmptyMessage,

    /// The local key source text is empty.
    #[error("no private key provided")]
    EmptyKey,

    /// Key material could not be resolved into a keypair.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The wallet extension failed or refused.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl SigningError {
    /// Returns `true` if this error is a precondition failure
    /// (empty message or empty key), as opposed to a resolution or
    /// signing failure.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyMessage | Self::EmptyKey)
    }
}

// ============================================================================
// Result type aliases
// ============================================================================

/// A `Result` type alias for key material resolution.
pub type KeyResult<T> = std::result::Result<T, KeyError>;

/// A `Result` type alias for wallet capability calls.
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// A `Result` type alias for the signing flow.
pub type Result<T> = std::result::Result<T, SigningError>;

// ============================================================================
// Tests
// ============================================================================
