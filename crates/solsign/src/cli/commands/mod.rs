//! Command implementations.
//!
//! Each command is a struct built from parsed arguments plus loaded
//! configuration, with a `run` method and a command-specific error enum.

pub mod address;
pub mod exit_codes;
pub mod sign;

pub use address::{AddressCommand, AddressCommandError};
pub use exit_codes::{EXIT_COMMAND_FAILED, EXIT_SETUP_ERROR, EXIT_SUCCESS};
pub use sign::{SignCommand, SignCommandError};

use solsign_core::types::PrivateKeyInput;

use crate::cli::args::KeySourceArgs;

/// Turn the selected key source into a [`PrivateKeyInput`].
///
/// For seed phrases, `cli_path` (the `--path` flag) wins over
/// `config_path` (the config file's `derivation_path`); the custom-path
/// branch is taken whenever either is present.
pub(crate) fn key_input(
    source: &KeySourceArgs,
    cli_path: Option<&str>,
    config_path: Option<&str>,
) -> Option<PrivateKeyInput> {
    if let Some(key) = &source.base58 {
        return Some(PrivateKeyInput::Base58(key.clone()));
    }
    if let Some(words) = &source.seed_phrase {
        let path = cli_path.or(config_path).map(ToOwned::to_owned);
        return Some(PrivateKeyInput::SeedPhrase {
            words: words.clone(),
            use_custom_path: path.is_some(),
            path,
        });
    }
    if let Some(json) = &source.byte_array {
        return Some(PrivateKeyInput::ByteArray(json.clone()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(
        base58: Option<&str>,
        seed_phrase: Option<&str>,
        byte_array: Option<&str>,
    ) -> KeySourceArgs {
        KeySourceArgs {
            base58: base58.map(ToOwned::to_owned),
            seed_phrase: seed_phrase.map(ToOwned::to_owned),
            byte_array: byte_array.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn test_key_input_base58() {
        let input = key_input(&source(Some("key"), None, None), None, None);
        assert!(matches!(input, Some(PrivateKeyInput::Base58(k)) if k == "key"));
    }

    #[test]
    fn test_key_input_byte_array() {
        let input = key_input(&source(None, None, Some("[1]")), None, None);
        assert!(matches!(input, Some(PrivateKeyInput::ByteArray(j)) if j == "[1]"));
    }

    #[test]
    fn test_key_input_seed_phrase_without_path() {
        let input = key_input(&source(None, Some("words"), None), None, None);
        assert!(matches!(
            input,
            Some(PrivateKeyInput::SeedPhrase {
                use_custom_path: false,
                path: None,
                ..
            })
        ));
    }

    #[test]
    fn test_key_input_cli_path_wins() {
        let input = key_input(
            &source(None, Some("words"), None),
            Some("m/1'"),
            Some("m/2'"),
        );
        assert!(matches!(
            input,
            Some(PrivateKeyInput::SeedPhrase {
                use_custom_path: true,
                path: Some(p),
                ..
            }) if p == "m/1'"
        ));
    }

    #[test]
    fn test_key_input_none_selected() {
        assert!(key_input(&source(None, None, None), None, None).is_none());
    }
}
