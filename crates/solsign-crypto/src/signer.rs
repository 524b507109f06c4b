//! The local signer: a resolved keypair behind the [`SignerHandle`]
//! interface.

use solsign_core::error::SigningError;
use solsign_core::signing::{SignatureBytes, SignerHandle};

use crate::keypair::Keypair;

/// A signer backed by locally resolved key material.
///
/// Signing is a pure function of the keypair and the message: detached,
/// deterministic ed25519 with no randomness and no I/O. Once constructed,
/// it cannot fail.
///
/// # Example
///
/// ```rust
/// use solsign_crypto::keypair::Keypair;
/// use solsign_crypto::signer::LocalSigner;
///
/// let signer = LocalSigner::new(Keypair::generate());
/// println!("signing as {}", signer.address());
/// ```
#[derive(Debug)]
pub struct LocalSigner {
    keypair: Keypair,
}

impl LocalSigner {
    /// Wrap a resolved keypair.
    #[must_use]
    pub const fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// The base58-encoded public key this signer signs as.
    #[must_use]
    pub fn address(&self) -> String {
        self.keypair.address()
    }

    /// Get a reference to the underlying keypair.
    #[must_use]
    pub const fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

#[async_trait::async_trait]
impl SignerHandle for LocalSigner {
    fn address(&self) -> String {
        self.keypair.address()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<SignatureBytes, SigningError> {
        Ok(self.keypair.sign(message))
    }
}
