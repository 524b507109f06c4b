//! End-to-end signing flow tests.
//!
//! These wire the real key-material resolver and provider registry into
//! the flow, and verify produced signatures independently with
//! `ed25519-dalek` against the base58 address; nothing from the signing
//! path is reused on the verification side.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;

use base64::Engine as _;

use solsign_core::error::{KeyError, SigningError, WalletError};
use solsign_core::signing::{SignatureBytes, SigningFlow};
use solsign_core::types::{PrivateKeyInput, ProviderId, SignedMessage, SigningMethod};
use solsign_crypto::material::MaterialResolver;
use solsign_crypto::{Keypair, Seed};
use solsign_wallet::provider::{WalletAccount, WalletProvider};
use solsign_wallet::registry::ProviderRegistry;

/// The 24-word example phrase offered by the signing form.
const EXAMPLE_24_WORDS: &str = "nation goddess judge attend whip media access attack brother \
     acquire sand vacant teach ranch robust weather sick reunion injury frame poet drop wash differ";

fn flow() -> SigningFlow<MaterialResolver, ProviderRegistry> {
    SigningFlow::new(MaterialResolver::new(), ProviderRegistry::new())
}

fn flow_with_registry(
    registry: ProviderRegistry,
) -> SigningFlow<MaterialResolver, ProviderRegistry> {
    SigningFlow::new(MaterialResolver::new(), registry)
}

/// Verify a signed message using only its public fields.
fn verify_independently(signed: &SignedMessage) {
    let public_key: [u8; 32] = bs58::decode(&signed.address)
        .into_vec()
        .expect("address is base58")
        .try_into()
        .expect("address decodes to 32 bytes");

    let signature: [u8; 64] = base64::engine::general_purpose::STANDARD
        .decode(&signed.signature_base64)
        .expect("signature is standard base64")
        .try_into()
        .expect("signature decodes to 64 bytes");

    let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(&public_key).expect("valid key");
    let signature = ed25519_dalek::Signature::from_bytes(&signature);

    use ed25519_dalek::Verifier as _;
    verifying_key
        .verify(signed.message.as_bytes(), &signature)
        .expect("signature verifies against the address");
}

// ============================================================================
// Local key material
// ============================================================================

#[tokio::test]
async fn base58_key_signs_and_verifies() {
    let keypair = Keypair::from_seed(&Seed::new([0x17u8; 32]));
    let key = bs58::encode(&keypair.to_secret_key_bytes()[..]).into_string();

    let signed = flow()
        .sign(
            &SigningMethod::Local(PrivateKeyInput::Base58(key)),
            "hello solana",
        )
        .await
        .unwrap();

    assert_eq!(signed.address, keypair.address());
    assert_eq!(signed.message, "hello solana");
    verify_independently(&signed);
}

#[tokio::test]
async fn byte_array_key_signs_and_verifies() {
    let keypair = Keypair::from_seed(&Seed::new([0x23u8; 32]));
    let bytes = keypair.to_secret_key_bytes();
    let json = format!(
        "[{}]",
        bytes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    );

    let signed = flow()
        .sign(
            &SigningMethod::Local(PrivateKeyInput::ByteArray(json)),
            "byte array input",
        )
        .await
        .unwrap();

    assert_eq!(signed.address, keypair.address());
    verify_independently(&signed);
}

#[tokio::test]
async fn seed_phrase_default_derivation_signs_and_verifies() {
    let method = SigningMethod::Local(PrivateKeyInput::SeedPhrase {
        words: EXAMPLE_24_WORDS.to_string(),
        use_custom_path: false,
        path: None,
    });

    let first = flow().sign(&method, "scenario a").await.unwrap();
    let second = flow().sign(&method, "scenario a").await.unwrap();

    // Stable, reproducible address and signature.
    assert_eq!(first, second);
    verify_independently(&first);
}

#[tokio::test]
async fn seed_phrase_custom_path_signs_and_verifies() {
    let method = SigningMethod::Local(PrivateKeyInput::SeedPhrase {
        words: EXAMPLE_24_WORDS.to_string(),
        use_custom_path: true,
        path: Some("m/44'/501'/0'/0'".to_string()),
    });

    let signed = flow().sign(&method, "custom path").await.unwrap();
    verify_independently(&signed);
}

#[tokio::test]
async fn custom_and_default_derivation_differ() {
    let default_method = SigningMethod::Local(PrivateKeyInput::SeedPhrase {
        words: EXAMPLE_24_WORDS.to_string(),
        use_custom_path: false,
        path: None,
    });
    let custom_method = SigningMethod::Local(PrivateKeyInput::SeedPhrase {
        words: EXAMPLE_24_WORDS.to_string(),
        use_custom_path: true,
        path: Some("m/44'/501'/0'/0'".to_string()),
    });

    let default_signed = flow().sign(&default_method, "m").await.unwrap();
    let custom_signed = flow().sign(&custom_method, "m").await.unwrap();

    assert_ne!(default_signed.address, custom_signed.address);
}

#[tokio::test]
async fn signature_decodes_to_64_bytes_for_any_message() {
    let keypair = Keypair::from_seed(&Seed::new([0x55u8; 32]));
    let key = bs58::encode(&keypair.to_secret_key_bytes()[..]).into_string();

    for message in ["a", "longer message with spaces", "ünïcode ⚡", "\n\t"] {
        let signed = flow()
            .sign(
                &SigningMethod::Local(PrivateKeyInput::Base58(key.clone())),
                message,
            )
            .await
            .unwrap();

        let raw = base64::engine::general_purpose::STANDARD
            .decode(&signed.signature_base64)
            .unwrap();
        assert_eq!(raw.len(), 64, "for message {message:?}");
    }
}

// ============================================================================
// Validation failures
// ============================================================================

#[tokio::test]
async fn short_byte_array_is_invalid_key_length() {
    let err = flow()
        .sign(
            &SigningMethod::Local(PrivateKeyInput::ByteArray("[1,2,3]".to_string())),
            "hello",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SigningError::Key(KeyError::InvalidKeyLength {
            expected: 64,
            actual: 3
        })
    ));
}

#[tokio::test]
async fn empty_message_short_circuits_before_key_material() {
    // The key is garbage; the empty-message check must fire first.
    let err = flow()
        .sign(
            &SigningMethod::Local(PrivateKeyInput::Base58("garbage!!!".to_string())),
            "",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SigningError::EmptyMessage));
}

#[tokio::test]
async fn empty_key_is_rejected() {
    let err = flow()
        .sign(
            &SigningMethod::Local(PrivateKeyInput::Base58(String::new())),
            "hello",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SigningError::EmptyKey));
}

#[tokio::test]
async fn wrong_word_count_is_reported() {
    let err = flow()
        .sign(
            &SigningMethod::Local(PrivateKeyInput::SeedPhrase {
                words: "too few words here".to_string(),
                use_custom_path: false,
                path: None,
            }),
            "hello",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SigningError::Key(KeyError::InvalidWordCount { count: 4 })
    ));
}

// ============================================================================
// Wallet providers
// ============================================================================

/// A provider backed by a real keypair, standing in for an extension.
struct KeypairProvider {
    id: ProviderId,
    keypair: Keypair,
}

#[async_trait::async_trait]
impl WalletProvider for KeypairProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn connect(&self) -> Result<WalletAccount, WalletError> {
        Ok(WalletAccount {
            public_key: *self.keypair.public_key_bytes(),
        })
    }

    async fn sign_message(
        &self,
        message: &[u8],
        _encoding: Option<&str>,
    ) -> Result<SignatureBytes, WalletError> {
        Ok(self.keypair.sign(message))
    }
}

#[tokio::test]
async fn absent_provider_is_reported() {
    let err = flow()
        .sign(&SigningMethod::Remote(ProviderId::Phantom), "hello")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SigningError::Wallet(WalletError::ProviderNotFound { ref name }) if name == "Phantom"
    ));
}

#[tokio::test]
async fn registered_provider_signs_and_verifies() {
    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(KeypairProvider {
        id: ProviderId::Solflare,
        keypair: Keypair::from_seed(&Seed::new([0x77u8; 32])),
    }));

    let signed = flow_with_registry(registry)
        .sign(&SigningMethod::Remote(ProviderId::Solflare), "via wallet")
        .await
        .unwrap();

    verify_independently(&signed);
}
