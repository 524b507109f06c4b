//! Key material parsing: raw text in, validated keypair out.
//!
//! Each of the three accepted encodings resolves to an ed25519 [`Keypair`]
//! or fails with a structured [`KeyError`]; no partial keypair is ever
//! returned. Intermediate secret buffers are zeroized as soon as the
//! keypair owns a copy.
//!
//! | Encoding   | Accepted form                                      |
//! |------------|----------------------------------------------------|
//! | base58     | standard alphabet, decodes to exactly 64 bytes     |
//! | seed phrase| 12/15/18/21/24 BIP39 words, optional custom path   |
//! | byte array | JSON array of exactly 64 integers in `[0, 255]`    |

use zeroize::Zeroizing;

use solsign_core::error::KeyError;
use solsign_core::signing::{KeyMaterialResolver, SignerHandle};
use solsign_core::types::PrivateKeyInput;

use crate::keypair::{Keypair, SECRET_KEY_LEN};
use crate::mnemonic;
use crate::signer::LocalSigner;

/// Resolve `input` into a keypair.
///
/// # Errors
///
/// Returns [`KeyError`] describing the first validation or derivation
/// failure; see the module table for what each encoding accepts.
pub fn parse(input: &PrivateKeyInput) -> Result<Keypair, KeyError> {
    match input {
        PrivateKeyInput::Base58(text) => parse_base58(text),
        PrivateKeyInput::SeedPhrase {
            words,
            use_custom_path,
            path,
        } => {
            let derived = mnemonic::derive(words, *use_custom_path, path.as_deref())?;
            tracing::debug!(strategy = %derived.strategy, "seed phrase resolved");
            Ok(derived.keypair)
        }
        PrivateKeyInput::ByteArray(json) => parse_byte_array(json),
    }
}

/// Decode a base58 secret key (64 bytes, seed || public key).
fn parse_base58(text: &str) -> Result<Keypair, KeyError> {
    let bytes = Zeroizing::new(
        bs58::decode(text.trim())
            .into_vec()
            .map_err(|_| KeyError::invalid_encoding("not a valid base58 string"))?,
    );
    Keypair::from_secret_key_bytes(&bytes)
}

/// Parse a JSON byte-array secret key (exactly 64 integers in `[0, 255]`).
fn parse_byte_array(json: &str) -> Result<Keypair, KeyError> {
    let values: Vec<i64> = serde_json::from_str(json.trim()).map_err(|_| {
        KeyError::invalid_encoding("expected a JSON array of 64 integers, e.g. [1,2,3,...]")
    })?;

    if values.len() != SECRET_KEY_LEN {
        return Err(KeyError::invalid_key_length(SECRET_KEY_LEN, values.len()));
    }

    let mut bytes = Zeroizing::new([0u8; SECRET_KEY_LEN]);
    for (slot, &value) in bytes.iter_mut().zip(&values) {
        *slot = u8::try_from(value).map_err(|_| {
            KeyError::invalid_encoding(format!(
                "value {value} is out of range for a 64-byte key (expected 0-255)"
            ))
        })?;
    }

    Keypair::from_secret_key_bytes(&bytes[..])
}

// ============================================================================
// MaterialResolver
// ============================================================================

/// The concrete [`KeyMaterialResolver`] wired into the signing flow.
///
/// Stateless; resolution is a pure function of the input.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialResolver;

impl MaterialResolver {
    /// Create a resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KeyMaterialResolver for MaterialResolver {
    fn resolve(&self, input: &PrivateKeyInput) -> Result<Box<dyn SignerHandle>, KeyError> {
        Ok(Box::new(LocalSigner::new(parse(input)?)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::keys::Seed;

    fn known_keypair() -> Keypair {
        Keypair::from_seed(&Seed::new([0x42u8; 32]))
    }

    fn base58_secret(keypair: &Keypair) -> String {
        bs58::encode(&keypair.to_secret_key_bytes()[..]).into_string()
    }

    fn json_secret(keypair: &Keypair) -> String {
        let bytes = keypair.to_secret_key_bytes();
        let values: Vec<String> = bytes.iter().map(ToString::to_string).collect();
        format!("[{}]", values.join(","))
    }

    // ------------------------------------------------------------------------
    // Base58
    // ------------------------------------------------------------------------

    #[test]
    fn test_base58_round_trip() {
        let original = known_keypair();
        let input = PrivateKeyInput::Base58(base58_secret(&original));

        let parsed = parse(&input).unwrap();
        assert_eq!(parsed.address(), original.address());
    }

    #[test]
    fn test_base58_tolerates_surrounding_whitespace() {
        let original = known_keypair();
        let input = PrivateKeyInput::Base58(format!("  {}  ", base58_secret(&original)));
        assert_eq!(parse(&input).unwrap().address(), original.address());
    }

    #[test]
    fn test_base58_rejects_invalid_alphabet() {
        // '0', 'I', 'O', and 'l' are not in the base58 alphabet.
        let input = PrivateKeyInput::Base58("0OIl+/".to_string());
        let err = parse(&input).unwrap_err();
        assert!(matches!(err, KeyError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_base58_rejects_wrong_length() {
        // A valid base58 string that decodes to 32 bytes, not 64.
        let short = bs58::encode([1u8; 32]).into_string();
        let err = parse(&PrivateKeyInput::Base58(short)).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidKeyLength {
                expected: 64,
                actual: 32
            }
        ));
    }

    #[test]
    fn test_base58_rejects_inconsistent_secret() {
        // 64 well-formed bytes whose public half does not match.
        let mut bytes = *known_keypair().to_secret_key_bytes();
        bytes[40] ^= 0xFF;
        let input = PrivateKeyInput::Base58(bs58::encode(bytes).into_string());
        let err = parse(&input).unwrap_err();
        assert!(matches!(err, KeyError::InvalidEncoding { .. }));
    }

    // ------------------------------------------------------------------------
    // Byte array
    // ------------------------------------------------------------------------

    #[test]
    fn test_byte_array_round_trip() {
        let original = known_keypair();
        let input = PrivateKeyInput::ByteArray(json_secret(&original));

        let parsed = parse(&input).unwrap();
        assert_eq!(parsed.address(), original.address());
    }

    #[test]
    fn test_byte_array_too_short() {
        let err = parse(&PrivateKeyInput::ByteArray("[1,2,3]".to_string())).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidKeyLength {
                expected: 64,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_byte_array_too_long() {
        let long = format!("[{}]", vec!["1"; 65].join(","));
        let err = parse(&PrivateKeyInput::ByteArray(long)).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidKeyLength {
                expected: 64,
                actual: 65
            }
        ));
    }

    #[test]
    fn test_byte_array_rejects_malformed_json() {
        for bad in ["not json", "{\"a\": 1}", "[1, 2,", "[1, \"two\"]", "[1.5, 2]"] {
            let err = parse(&PrivateKeyInput::ByteArray(bad.to_string())).unwrap_err();
            assert!(
                matches!(err, KeyError::InvalidEncoding { .. }),
                "{bad:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_byte_array_rejects_out_of_range_values() {
        let too_big = format!("[{}256]", "1,".repeat(63));
        let err = parse(&PrivateKeyInput::ByteArray(too_big)).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidEncoding { ref reason } if reason.contains("256")
        ));

        let negative = format!("[{}-1]", "1,".repeat(63));
        let err = parse(&PrivateKeyInput::ByteArray(negative)).unwrap_err();
        assert!(matches!(err, KeyError::InvalidEncoding { .. }));
    }

    // ------------------------------------------------------------------------
    // Seed phrase dispatch
    // ------------------------------------------------------------------------

    #[test]
    fn test_seed_phrase_dispatches_to_deriver() {
        let input = PrivateKeyInput::SeedPhrase {
            words: vec!["abandon"; 12].join(" "),
            use_custom_path: false,
            path: None,
        };
        let keypair = parse(&input).unwrap();
        assert!(!keypair.address().is_empty());
    }

    #[test]
    fn test_seed_phrase_errors_pass_through() {
        let input = PrivateKeyInput::SeedPhrase {
            words: "only three words".to_string(),
            use_custom_path: false,
            path: None,
        };
        let err = parse(&input).unwrap_err();
        assert!(matches!(err, KeyError::InvalidWordCount { count: 3 }));
    }

    // ------------------------------------------------------------------------
    // MaterialResolver
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolver_produces_signer_handle() {
        let original = known_keypair();
        let resolver = MaterialResolver::new();
        let handle = resolver
            .resolve(&PrivateKeyInput::Base58(base58_secret(&original)))
            .unwrap();
        assert_eq!(handle.address(), original.address());
    }

    #[test]
    fn test_resolver_propagates_errors() {
        let resolver = MaterialResolver::new();
        let err = resolver
            .resolve(&PrivateKeyInput::ByteArray("[]".to_string()))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            KeyError::InvalidKeyLength {
                expected: 64,
                actual: 0
            }
        ));
    }
}
