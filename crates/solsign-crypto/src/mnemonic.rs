//! BIP39 seed phrases and keypair derivation.
//!
//! This module turns a mnemonic phrase into an ed25519 [`Keypair`]. The
//! derivation order matters for address compatibility:
//!
//! - With a custom path, the keypair is derived at that path through
//!   SLIP-0010 hardened derivation.
//! - Without one, the raw-seed strategy is tried first (a keypair built
//!   directly from the first 32 bytes of the BIP39 seed), falling back to
//!   the conventional Solana path `m/44'/501'/0'/0'`. Raw-seed-first is
//!   this application's historical default; changing the order would change
//!   the addresses users see for the same phrase.
//!
//! Checksum validation is advisory: phrases that fail BIP39 validation
//! (custom or foreign wordlists) still derive, with a warning logged.

use zeroize::Zeroizing;

use solsign_core::error::KeyError;

use crate::hd::{self, DerivationPath, SOLANA_DERIVATION_PATH};
use crate::keypair::Keypair;
use crate::keys::{Seed, SEED_LEN};

/// The length of a BIP39 seed in bytes.
pub const BIP39_SEED_LEN: usize = 64;

/// Word counts accepted for a seed phrase.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// PBKDF2 iteration count fixed by the BIP39 specification.
const PBKDF2_ROUNDS: u32 = 2048;

// ============================================================================
// DerivationStrategy
// ============================================================================

/// Which derivation strategy produced a keypair.
///
/// Recorded so callers (and logs) can tell which step of the fallback
/// chain succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationStrategy {
    /// Keypair built directly from the first 32 bytes of the BIP39 seed.
    DirectSeed,
    /// Keypair derived at the conventional path `m/44'/501'/0'/0'`.
    StandardPath,
    /// Keypair derived at a caller-supplied path.
    CustomPath,
}

impl DerivationStrategy {
    /// A short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectSeed => "direct seed",
            Self::StandardPath => "standard path",
            Self::CustomPath => "custom path",
        }
    }
}

impl std::fmt::Display for DerivationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived keypair together with the strategy that produced it.
#[derive(Debug)]
pub struct DerivedKeypair {
    /// The derived keypair.
    pub keypair: Keypair,
    /// The strategy that succeeded.
    pub strategy: DerivationStrategy,
}

// ============================================================================
// Derivation entry point
// ============================================================================

/// Derive a keypair from a seed phrase.
///
/// # Arguments
///
/// * `words` - the space-separated mnemonic; surrounding and internal
///   whitespace is normalized before use
/// * `use_custom_path` - derive at `path` instead of the default chain
/// * `path` - the hardened derivation path, required when
///   `use_custom_path` is set
///
/// # Errors
///
/// - [`KeyError::InvalidWordCount`] for word counts outside
///   {12, 15, 18, 21, 24}, checked before any seed computation
/// - [`KeyError::DerivationFailed`] for a missing/malformed custom path or
///   an exhausted fallback chain
pub fn derive(
    words: &str,
    use_custom_path: bool,
    path: Option<&str>,
) -> Result<DerivedKeypair, KeyError> {
    let phrase = normalize_phrase(words);

    let word_count = phrase.split(' ').filter(|w| !w.is_empty()).count();
    if !VALID_WORD_COUNTS.contains(&word_count) {
        return Err(KeyError::invalid_word_count(word_count));
    }

    // Advisory only: a failed checksum (custom or foreign wordlist) does
    // not block derivation.
    if let Err(err) = bip39::Mnemonic::parse_in_normalized(bip39::Language::English, &phrase) {
        tracing::warn!(%err, "seed phrase failed BIP39 validation, continuing with derivation");
    }

    let seed = bip39_seed(&phrase);

    if use_custom_path {
        let path = path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| KeyError::derivation_failed("empty derivation path"))?;
        let parsed = DerivationPath::parse(path)?;
        let keypair = Keypair::from_seed(&hd::derive_seed(&seed[..], &parsed)?);
        tracing::debug!(%parsed, "derived keypair at custom path");
        return Ok(DerivedKeypair {
            keypair,
            strategy: DerivationStrategy::CustomPath,
        });
    }

    derive_with_fallback(&seed)
}

/// The default derivation chain: raw seed head first, then the
/// conventional Solana path.
fn derive_with_fallback(seed: &Zeroizing<[u8; BIP39_SEED_LEN]>) -> Result<DerivedKeypair, KeyError> {
    match direct_seed_keypair(seed) {
        Ok(keypair) => {
            tracing::debug!("derived keypair from raw seed bytes");
            Ok(DerivedKeypair {
                keypair,
                strategy: DerivationStrategy::DirectSeed,
            })
        }
        Err(direct_err) => {
            tracing::debug!(%direct_err, "raw-seed derivation failed, trying standard path");
            let parsed = DerivationPath::parse(SOLANA_DERIVATION_PATH)?;
            match hd::derive_seed(&seed[..], &parsed) {
                Ok(derived) => Ok(DerivedKeypair {
                    keypair: Keypair::from_seed(&derived),
                    strategy: DerivationStrategy::StandardPath,
                }),
                Err(_) => Err(KeyError::derivation_failed("all methods")),
            }
        }
    }
}

/// Build a keypair from the first 32 bytes of the BIP39 seed.
fn direct_seed_keypair(seed: &Zeroizing<[u8; BIP39_SEED_LEN]>) -> Result<Keypair, KeyError> {
    let head: [u8; SEED_LEN] = seed[..SEED_LEN]
        .try_into()
        .map_err(|_| KeyError::derivation_failed("seed too short for direct use"))?;
    Ok(Keypair::from_seed(&Seed::new(head)))
}

// ============================================================================
// Helpers
// ============================================================================

/// Trim the phrase and collapse internal whitespace to single spaces.
#[must_use]
pub fn normalize_phrase(words: &str) -> String {
    words.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The standard BIP39 seed function: PBKDF2-HMAC-SHA512 over the phrase
/// with salt `"mnemonic"` (empty passphrase), 2048 rounds, 64 bytes out.
fn bip39_seed(phrase: &str) -> Zeroizing<[u8; BIP39_SEED_LEN]> {
    let mut seed = Zeroizing::new([0u8; BIP39_SEED_LEN]);
    pbkdf2::pbkdf2_hmac::<sha2::Sha512>(
        phrase.as_bytes(),
        b"mnemonic",
        PBKDF2_ROUNDS,
        &mut seed[..],
    );
    seed
}

// ============================================================================
// Tests
// ============================================================================
