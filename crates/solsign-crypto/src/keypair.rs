//! Ed25519 keypair with the Solana secret-key convention.
//!
//! A [`Keypair`] is built from a 32-byte seed; its 64-byte secret-key form
//! is `seed (32) || public key (32)`, the standard expanded-key convention
//! used by Solana tooling. Keypairs are derived per sign attempt and never
//! persisted.
//!
//! # Example
//!
//! ```rust
//! use solsign_crypto::keypair::Keypair;
//! use solsign_crypto::keys::Seed;
//!
//! let keypair = Keypair::from_seed(&Seed::new([0x42u8; 32]));
//!
//! let signature = keypair.sign(b"hello");
//! assert!(keypair.verify(b"hello", &signature));
//!
//! // The address is the base58-encoded public key.
//! println!("{}", keypair.address());
//! ```

use ed25519_dalek::Signer as _;
use ed25519_dalek::Verifier as _;
use zeroize::{Zeroize, Zeroizing};

use solsign_core::error::KeyError;
use solsign_core::signing::SignatureBytes;

use crate::keys::{Seed, SEED_LEN};

/// The length of an expanded secret key in bytes (seed || public key).
pub const SECRET_KEY_LEN: usize = 64;

/// The length of an ed25519 public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// An ed25519 keypair.
///
/// # Security
///
/// - The signing key is an [`ed25519_dalek::SigningKey`], which zeroizes
///   its secret material on drop (the `zeroize` feature is enabled in the
///   workspace `Cargo.toml`)
/// - `Debug` output shows only the public address
pub struct Keypair {
    /// The signing key (seed plus expanded scalar).
    signing_key: ed25519_dalek::SigningKey,
    /// Cached public key bytes.
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl Keypair {
    /// Build a keypair from a 32-byte seed.
    ///
    /// Any 32-byte value is a valid ed25519 seed, so this cannot fail.
    #[must_use]
    pub fn from_seed(seed: &Seed) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed.as_bytes());
        let public_key = signing_key.verifying_key().to_bytes();
        Self {
            signing_key,
            public_key,
        }
    }

    /// Generate a keypair from a fresh random seed.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_seed(&Seed::generate())
    }

    /// Build a keypair from a 64-byte expanded secret key
    /// (`seed || public key`).
    ///
    /// # Errors
    ///
    /// - [`KeyError::InvalidKeyLength`] if `bytes` is not exactly 64 bytes
    /// - [`KeyError::InvalidEncoding`] if the embedded public half does not
    ///   match the public key derived from the seed half (a corrupted or
    ///   mis-assembled key)
    pub fn from_secret_key_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != SECRET_KEY_LEN {
            return Err(KeyError::invalid_key_length(SECRET_KEY_LEN, bytes.len()));
        }

        let mut seed_bytes = [0u8; SEED_LEN];
        seed_bytes.copy_from_slice(&bytes[..SEED_LEN]);
        let keypair = Self::from_seed(&Seed::new(seed_bytes));
        seed_bytes.zeroize();

        if keypair.public_key[..] != bytes[SEED_LEN..] {
            return Err(KeyError::invalid_encoding(
                "secret key public half does not match the derived public key",
            ));
        }

        Ok(keypair)
    }

    /// Get the raw public key bytes (32 bytes).
    #[must_use]
    pub const fn public_key_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// The base58-encoded public key, i.e. the Solana address.
    #[must_use]
    pub fn address(&self) -> String {
        bs58::encode(&self.public_key).into_string()
    }

    /// The 64-byte expanded secret key (`seed || public key`), zeroized on
    /// drop.
    #[must_use]
    pub fn to_secret_key_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LEN]> {
        let mut out = Zeroizing::new([0u8; SECRET_KEY_LEN]);
        out[..SEED_LEN].copy_from_slice(&self.signing_key.to_bytes());
        out[SEED_LEN..].copy_from_slice(&self.public_key);
        out
    }

    /// Produce a detached, deterministic ed25519 signature over `message`.
    ///
    /// The message is signed as-is; no hashing or transformation is applied
    /// by this method.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> SignatureBytes {
        self.signing_key.sign(message).to_bytes()
    }

    /// Verify a detached signature over `message` against this keypair's
    /// public key.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &SignatureBytes) -> bool {
        let sig = ed25519_dalek::Signature::from_bytes(signature);
        self.signing_key
            .verifying_key()
            .verify(message, &sig)
            .is_ok()
    }
}

// Implement Debug without exposing the private key
impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
