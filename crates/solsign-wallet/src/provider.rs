//! The wallet-extension capability interface.
//!
//! A wallet extension is an external process that owns its keys and exposes
//! exactly two operations: `connect` and `sign_message`. This module models
//! that capability as an explicit trait rather than duck-typed probing, so
//! "provider is absent" (a registry miss) and "provider refused" (an error
//! from the provider itself) stay distinct, explicitly checked conditions.
//!
//! Two capability variants exist at the boundary: hint-taking providers
//! (Phantom-style, `sign_message` receives an encoding hint) and plain
//! providers (Solflare-style, no hint). [`RemoteWalletSigner`] calls the
//! variant-appropriate form based on the provider's [`ProviderId`].

use std::sync::Arc;

use solsign_core::error::{SigningError, WalletError, WalletResult};
use solsign_core::signing::{SignatureBytes, SignerHandle};
use solsign_core::types::ProviderId;

/// The encoding hint passed to hint-taking providers.
pub const UTF8_ENCODING_HINT: &str = "utf8";

// ============================================================================
// WalletAccount
// ============================================================================

/// The account a provider reports after a successful `connect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    /// The 32-byte ed25519 public key of the connected account.
    pub public_key: [u8; 32],
}

impl WalletAccount {
    /// The base58-encoded address of the connected account.
    #[must_use]
    pub fn address(&self) -> String {
        bs58::encode(&self.public_key).into_string()
    }
}

// ============================================================================
// WalletProvider
// ============================================================================

/// The capability a wallet extension exposes.
///
/// Both operations may suspend while the extension waits on user
/// interaction in its own process; the provider is responsible for
/// eventually resolving or rejecting. Each failure is terminal for the
/// current attempt; no retry is performed here.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    /// Which well-known slot this provider occupies.
    fn id(&self) -> ProviderId;

    /// Request a connection, returning the account to sign as.
    ///
    /// # Errors
    ///
    /// [`WalletError::ConnectRejected`] when the user declines.
    async fn connect(&self) -> WalletResult<WalletAccount>;

    /// Ask the extension to sign `message`.
    ///
    /// `encoding` carries the hint for hint-taking providers and is `None`
    /// for plain ones.
    ///
    /// # Errors
    ///
    /// [`WalletError::SignRejected`] when the extension declines or cannot
    /// serve the request (commonly a locked wallet).
    async fn sign_message(
        &self,
        message: &[u8],
        encoding: Option<&str>,
    ) -> WalletResult<SignatureBytes>;
}

// ============================================================================
// RemoteWalletSigner
// ============================================================================

/// A connected wallet provider behind the [`SignerHandle`] interface.
///
/// Constructed by the registry after a successful `connect`; holds the
/// connected account so the address is available without further provider
/// calls.
pub struct RemoteWalletSigner {
    provider: Arc<dyn WalletProvider>,
    account: WalletAccount,
}

impl RemoteWalletSigner {
    /// Wrap a connected provider.
    #[must_use]
    pub fn new(provider: Arc<dyn WalletProvider>, account: WalletAccount) -> Self {
        Self { provider, account }
    }

    /// The account this signer signs as.
    #[must_use]
    pub const fn account(&self) -> &WalletAccount {
        &self.account
    }
}

impl std::fmt::Debug for RemoteWalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteWalletSigner")
            .field("provider", &self.provider.id())
            .field("address", &self.account.address())
            .finish()
    }
}

#[async_trait::async_trait]
impl SignerHandle for RemoteWalletSigner {
    fn address(&self) -> String {
        self.account.address()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<SignatureBytes, SigningError> {
        let hint = self
            .provider
            .id()
            .wants_encoding_hint()
            .then_some(UTF8_ENCODING_HINT);

        let signature = self.provider.sign_message(message, hint).await?;
        Ok(signature)
    }
}

// ============================================================================
// Tests
// ============================================================================
