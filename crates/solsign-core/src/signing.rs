//! Signing flow orchestration.
//!
//! This module provides the [`SigningFlow`] that turns a
//! [`SigningMethod`] and a message into a [`SignedMessage`].
//!
//! # Flow Overview
//!
//! 1. **Validate** - reject empty messages and empty key text before any
//!    key material is touched
//! 2. **Resolve** - obtain a [`SignerHandle`]: a local keypair resolved
//!    from the supplied key material, or a connected wallet provider
//! 3. **Sign** - invoke the handle on the UTF-8 bytes of the message
//! 4. **Encode** - base64-encode the raw signature and assemble the result
//!
//! Either a full [`SignedMessage`] or a [`SigningError`] is produced;
//! partial state is never surfaced.
//!
//! # Thread Safety
//!
//! [`SigningFlow`] is `Send + Sync` when its components are, and holds no
//! mutable state between calls; it is safe to invoke repeatedly with
//! different inputs.

use base64::Engine as _;

use crate::error::{KeyError, SigningError, WalletError};
use crate::types::{PrivateKeyInput, ProviderId, SignedMessage, SigningMethod};

// ============================================================================
// Type Aliases
// ============================================================================

/// A raw ed25519 detached signature (64 bytes).
pub type SignatureBytes = [u8; 64];

// ============================================================================
// Boundary traits
// ============================================================================

/// A signer resolved for one attempt.
///
/// Polymorphic over the two signer sources: a local keypair or a remote
/// wallet provider. Signing through a wallet suspends while the extension
/// waits on user interaction, so the operation is async; local signing
/// resolves immediately.
#[async_trait::async_trait]
pub trait SignerHandle: Send + Sync {
    /// The base58-encoded public key this handle signs as.
    fn address(&self) -> String;

    /// Produce a detached ed25519 signature over `message`.
    ///
    /// # Errors
    ///
    /// Local signers cannot fail once constructed; remote signers surface
    /// [`WalletError`] values through [`SigningError::Wallet`].
    async fn sign_message(&self, message: &[u8]) -> Result<SignatureBytes, SigningError>;
}

/// Resolves locally supplied key material into a signer.
///
/// Implemented by the key-material parser in `solsign-crypto`. Defined
/// here, mirror-trait style, so this crate stays free of crypto
/// dependencies.
pub trait KeyMaterialResolver: Send + Sync {
    /// Parse and validate `input`, returning a ready-to-sign handle.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError`] if the input cannot be decoded, has the wrong
    /// length, or derivation fails. No partial keypair is ever returned.
    fn resolve(&self, input: &PrivateKeyInput) -> Result<Box<dyn SignerHandle>, KeyError>;
}

/// Connects to a wallet provider at a well-known slot.
///
/// Implemented by the provider registry in `solsign-wallet`.
#[async_trait::async_trait]
pub trait WalletBridge: Send + Sync {
    /// Probe for `provider` and connect, returning a ready-to-sign handle.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::ProviderNotFound`] when nothing is registered
    /// at the slot, or [`WalletError::ConnectRejected`] when the user
    /// declines the connection.
    async fn connect(&self, provider: ProviderId) -> Result<Box<dyn SignerHandle>, WalletError>;
}

// ============================================================================
// SigningFlow
// ============================================================================

/// Orchestrates one sign attempt: validation, signer resolution, signing,
/// and signature encoding.
///
/// # Type Parameters
///
/// * `R` - key material resolver implementing [`KeyMaterialResolver`]
/// * `W` - wallet bridge implementing [`WalletBridge`]
///
/// # Example
///
/// ```ignore
/// let flow = SigningFlow::new(resolver, registry);
/// let signed = flow
///     .sign(&SigningMethod::Local(input), "message to sign")
///     .await?;
/// println!("{}", signed.signature_base64);
/// ```
pub struct SigningFlow<R, W> {
    resolver: R,
    wallets: W,
}

impl<R, W> std::fmt::Debug for SigningFlow<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningFlow")
            .field("resolver", &"<KeyMaterialResolver>")
            .field("wallets", &"<WalletBridge>")
            .finish()
    }
}

impl<R, W> SigningFlow<R, W> {
    /// Create a new flow from its two collaborators.
    #[must_use]
    pub const fn new(resolver: R, wallets: W) -> Self {
        Self { resolver, wallets }
    }

    /// Get a reference to the key material resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Get a reference to the wallet bridge.
    #[must_use]
    pub const fn wallets(&self) -> &W {
        &self.wallets
    }
}

impl<R, W> SigningFlow<R, W>
where
    R: KeyMaterialResolver,
    W: WalletBridge,
{
    /// Sign `message` using the signer selected by `method`.
    ///
    /// The message is signed exactly as provided (no trimming); only the
    /// emptiness check looks at the trimmed form.
    ///
    /// # Errors
    ///
    /// - [`SigningError::EmptyMessage`] for a blank message, before any key
    ///   material is touched
    /// - [`SigningError::EmptyKey`] for a `Local` method with empty key text
    /// - [`SigningError::Key`] when key material cannot be resolved
    /// - [`SigningError::Wallet`] when the wallet capability fails
    pub async fn sign(
        &self,
        method: &SigningMethod,
        message: &str,
    ) -> Result<SignedMessage, SigningError> {
        if message.trim().is_empty() {
            return Err(SigningError::EmptyMessage);
        }

        let signer = self.resolve_signer(method).await?;
        let address = signer.address();

        tracing::debug!(%address, method = method_name(method), "signing message");
        let signature = signer.sign_message(message.as_bytes()).await?;

        Ok(SignedMessage {
            address,
            message: message.to_owned(),
            signature_base64: base64::engine::general_purpose::STANDARD.encode(signature),
        })
    }

    /// Resolve the signer for `method`.
    async fn resolve_signer(
        &self,
        method: &SigningMethod,
    ) -> Result<Box<dyn SignerHandle>, SigningError> {
        match method {
            SigningMethod::Local(input) => {
                if input.is_empty() {
                    return Err(SigningError::EmptyKey);
                }
                Ok(self.resolver.resolve(input)?)
            }
            SigningMethod::Remote(provider) => Ok(self.wallets.connect(*provider).await?),
        }
    }
}

/// Short method label for trace output.
const fn method_name(method: &SigningMethod) -> &'static str {
    match method {
        SigningMethod::Local(input) => input.encoding_name(),
        SigningMethod::Remote(ProviderId::Phantom) => "phantom",
        SigningMethod::Remote(ProviderId::Solflare) => "solflare",
    }
}

// ============================================================================
// Tests
// ============================================================================
