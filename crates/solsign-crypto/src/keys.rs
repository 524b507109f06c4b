//! Seed material with secure memory handling.
//!
//! This module provides the [`Seed`] type used as the input to keypair
//! construction. Seed material is:
//!
//! - Zeroized on drop to prevent memory leaks
//! - Never exposed in debug output
//! - Compared in constant time to prevent timing attacks
//!
//! `Seed` intentionally does not implement `Clone`; seed material is moved,
//! not copied.

use rand::RngCore;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The length of an ed25519 seed in bytes.
pub const SEED_LEN: usize = 32;

/// A 32-byte ed25519 seed with automatic zeroization.
///
/// # Example
///
/// ```
/// use solsign_crypto::keys::Seed;
///
/// // Generate a fresh random seed
/// let seed = Seed::generate();
/// assert_eq!(seed.as_bytes().len(), 32);
///
/// // Seeds are zeroized when dropped
/// drop(seed);
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Create a `Seed` from raw bytes.
    ///
    /// The input bytes are copied; the caller should zeroize the original
    /// buffer if it is no longer needed.
    #[must_use]
    pub const fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    /// Generate a random `Seed` using the operating system RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; SEED_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Expose the raw bytes for keypair construction.
    ///
    /// The returned reference must not be stored or copied beyond the
    /// immediate cryptographic operation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self::new(bytes)
    }
}

// Prevent accidental debug printing of seed material
impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

// Constant-time equality comparison to prevent timing attacks
impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Seed {}
