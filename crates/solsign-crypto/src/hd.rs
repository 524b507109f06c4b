//! Hierarchical key derivation for ed25519 (SLIP-0010).
//!
//! Solana wallets derive accounts from a BIP39 seed at hardened BIP32-style
//! paths such as `m/44'/501'/0'/0'`. Ed25519 supports only hardened
//! derivation, so every path segment must carry a hardened marker
//! (`'` or `h`).
//!
//! The derivation chain is HMAC-SHA512 per SLIP-0010: the master key is
//! `HMAC-SHA512(key = "ed25519 seed", data = seed)`, and each hardened
//! child is `HMAC-SHA512(key = chain code, data = 0x00 || parent key ||
//! index)` with the high bit set on the index.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use solsign_core::error::KeyError;

use crate::keys::Seed;

type HmacSha512 = Hmac<Sha512>;

/// The conventional Solana derivation path.
pub const SOLANA_DERIVATION_PATH: &str = "m/44'/501'/0'/0'";

/// Hardened-index offset (the high bit of a BIP32 child index).
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// HMAC key for the SLIP-0010 ed25519 master node.
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

// ============================================================================
// DerivationPath
// ============================================================================

/// A parsed hardened derivation path.
///
/// Segments are stored as raw child numbers without the hardened bit; the
/// bit is applied during derivation. Every segment of an ed25519 path is
/// hardened, so unhardened segments are rejected at parse time.
///
/// # Example
///
/// ```rust
/// use solsign_crypto::hd::DerivationPath;
///
/// let path = DerivationPath::parse("m/44'/501'/0'/0'").unwrap();
/// assert_eq!(path.segments(), &[44, 501, 0, 0]);
/// assert_eq!(path.to_string(), "m/44'/501'/0'/0'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    segments: Vec<u32>,
}

impl DerivationPath {
    /// Parse a path of the form `m/44'/501'/0'/0'`.
    ///
    /// Accepts `'` or `h`/`H` as the hardened marker. The leading `m` may
    /// be upper- or lowercase. `m` alone (no segments) is valid and refers
    /// to the master key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::DerivationFailed`] naming the offending path if
    /// the syntax is malformed, a segment is unhardened, or an index is out
    /// of range.
    pub fn parse(path: &str) -> Result<Self, KeyError> {
        let malformed = |reason: &str| KeyError::derivation_failed(format!("{path}: {reason}"));

        let mut parts = path.trim().split('/');
        match parts.next() {
            Some("m" | "M") => {}
            _ => return Err(malformed("path must start with 'm'")),
        }

        let mut segments = Vec::new();
        for part in parts {
            let Some(index_str) = part
                .strip_suffix('\'')
                .or_else(|| part.strip_suffix(['h', 'H']))
            else {
                if part.is_empty() {
                    return Err(malformed("empty path segment"));
                }
                // Ed25519 keys cannot be soft-derived.
                return Err(malformed("all segments must be hardened (use ')"));
            };

            let index: u32 = index_str
                .parse()
                .map_err(|_| malformed("segment is not a number"))?;
            if index >= HARDENED_OFFSET {
                return Err(malformed("segment index out of range"));
            }
            segments.push(index);
        }

        Ok(Self { segments })
    }

    /// The hardened child numbers, without the hardened bit.
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }
}

impl std::fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{segment}'")?;
        }
        Ok(())
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// An extended key node in the derivation chain.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    /// Split an HMAC-SHA512 output into key and chain-code halves.
    fn from_hmac_output(output: &[u8]) -> Result<Self, KeyError> {
        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(
            output
                .get(..32)
                .ok_or_else(|| KeyError::derivation_failed("short HMAC output"))?,
        );
        chain_code.copy_from_slice(
            output
                .get(32..64)
                .ok_or_else(|| KeyError::derivation_failed("short HMAC output"))?,
        );
        Ok(Self { key, chain_code })
    }
}

/// Compute the SLIP-0010 master node from a BIP39 seed.
fn master_key(seed: &[u8]) -> Result<ExtendedKey, KeyError> {
    let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY)
        .map_err(|_| KeyError::derivation_failed("HMAC initialization"))?;
    mac.update(seed);
    ExtendedKey::from_hmac_output(&mac.finalize().into_bytes())
}

/// Derive one hardened child from a parent node.
fn child_key(parent: &ExtendedKey, index: u32) -> Result<ExtendedKey, KeyError> {
    let hardened_index = index | HARDENED_OFFSET;

    let mut mac = HmacSha512::new_from_slice(&parent.chain_code)
        .map_err(|_| KeyError::derivation_failed("HMAC initialization"))?;
    mac.update(&[0x00]);
    mac.update(&parent.key);
    mac.update(&hardened_index.to_be_bytes());
    ExtendedKey::from_hmac_output(&mac.finalize().into_bytes())
}

/// Derive the 32-byte ed25519 seed at `path` from a BIP39 seed.
///
/// # Errors
///
/// Returns [`KeyError::DerivationFailed`] if the HMAC chain cannot be
/// computed. Path syntax errors are reported by
/// [`DerivationPath::parse`] before this point.
pub fn derive_seed(seed: &[u8], path: &DerivationPath) -> Result<Seed, KeyError> {
    let mut node = master_key(seed)?;
    for &segment in path.segments() {
        node = child_key(&node, segment)?;
    }
    Ok(Seed::new(node.key))
}

// ============================================================================
// Tests
// ============================================================================
