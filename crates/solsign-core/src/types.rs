//! Core data types for the solsign signing flow.
//!
//! The two axes of the flow are modeled as sum types so that the variants
//! stay mutually exclusive and exhaustively matchable:
//!
//! - [`PrivateKeyInput`] - the three accepted private-key encodings
//! - [`SigningMethod`] - local key material vs. a remote wallet provider
//!
//! [`SignedMessage`] is the immutable result of a successful attempt.

use std::fmt;

// ============================================================================
// PrivateKeyInput
// ============================================================================

/// One of the three accepted private-key encodings, as raw user text.
///
/// Created from user input and consumed once per sign attempt. The `Debug`
/// implementation redacts the key material so the input can appear in logs
/// and error context without leaking secrets.
///
/// # Example
///
/// ```rust
/// use solsign_core::types::PrivateKeyInput;
///
/// let input = PrivateKeyInput::Base58("not-a-real-key".to_string());
/// assert!(!input.is_empty());
/// assert_eq!(format!("{input:?}"), "PrivateKeyInput::Base58([REDACTED])");
/// ```
pub enum PrivateKeyInput {
    /// A base58-encoded 64-byte secret key (seed || public key).
    Base58(String),

    /// A BIP39 seed phrase, with an optional custom derivation path.
    SeedPhrase {
        /// The space-separated mnemonic words.
        words: String,
        /// Whether to derive at `path` instead of the default fallback chain.
        use_custom_path: bool,
        /// The hardened derivation path, e.g. `m/44'/501'/0'/0'`.
        path: Option<String>,
    },

    /// A JSON array literal of exactly 64 integers in `[0, 255]`.
    ByteArray(String),
}

impl PrivateKeyInput {
    /// Returns `true` if the key text is empty or whitespace-only.
    ///
    /// Checked by the signing flow before any parsing happens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Base58(text) | Self::ByteArray(text) => text.trim().is_empty(),
            Self::SeedPhrase { words, .. } => words.trim().is_empty(),
        }
    }

    /// The display name of this encoding, for logs and error context.
    #[must_use]
    pub const fn encoding_name(&self) -> &'static str {
        match self {
            Self::Base58(_) => "base58",
            Self::SeedPhrase { .. } => "seed phrase",
            Self::ByteArray(_) => "byte array",
        }
    }
}

// Key material never appears in debug output.
impl fmt::Debug for PrivateKeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base58(_) => write!(f, "PrivateKeyInput::Base58([REDACTED])"),
            Self::SeedPhrase {
                use_custom_path,
                path,
                ..
            } => f
                .debug_struct("PrivateKeyInput::SeedPhrase")
                .field("words", &"[REDACTED]")
                .field("use_custom_path", use_custom_path)
                .field("path", path)
                .finish(),
            Self::ByteArray(_) => write!(f, "PrivateKeyInput::ByteArray([REDACTED])"),
        }
    }
}

// ============================================================================
// ProviderId
// ============================================================================

/// The well-known wallet-extension slots the flow knows how to probe.
///
/// Each corresponds to a named global slot in the host environment. Presence
/// is never assumed; the registry probes defensively and absence surfaces as
/// [`WalletError::ProviderNotFound`](crate::error::WalletError::ProviderNotFound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Phantom-style provider: `signMessage` accepts an encoding hint.
    Phantom,
    /// Solflare-style provider: `signMessage` takes no hint.
    Solflare,
}

impl ProviderId {
    /// The user-facing display name of this provider.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Phantom => "Phantom",
            Self::Solflare => "Solflare",
        }
    }

    /// Whether this provider's `signMessage` expects an encoding hint.
    #[must_use]
    pub const fn wants_encoding_hint(self) -> bool {
        matches!(self, Self::Phantom)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// SigningMethod
// ============================================================================

/// How a sign attempt obtains its signer.
///
/// Exactly one signer is active per attempt.
#[derive(Debug)]
pub enum SigningMethod {
    /// Resolve a keypair from locally supplied key material.
    Local(PrivateKeyInput),
    /// Delegate to a wallet extension at a well-known slot.
    Remote(ProviderId),
}

// ============================================================================
// SignedMessage
// ============================================================================

/// The result of a successful sign attempt.
///
/// Produced once, immutable. The signature is the raw 64-byte ed25519
/// detached signature, standard base64-encoded with padding; the address is
/// the base58-encoded 32-byte public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    /// Base58-encoded public key of the signer.
    pub address: String,
    /// The message that was signed, exactly as provided.
    pub message: String,
    /// Standard base64 encoding of the 64-byte detached signature.
    pub signature_base64: String,
}

// ============================================================================
// Tests
// ============================================================================
