//! Provider registry: the well-known slots, probed defensively.
//!
//! The host environment may have zero, one, or both wallet extensions
//! available. The registry never assumes presence; looking up an empty
//! slot is a normal condition that surfaces as
//! [`WalletError::ProviderNotFound`].

use std::collections::HashMap;
use std::sync::Arc;

use solsign_core::error::WalletError;
use solsign_core::signing::{SignerHandle, WalletBridge};
use solsign_core::types::ProviderId;

use crate::provider::{RemoteWalletSigner, WalletProvider};

/// The wallet providers available in this session, keyed by their
/// well-known slot.
///
/// # Example
///
/// ```ignore
/// let mut registry = ProviderRegistry::new();
/// registry.register(Arc::new(bridge_to_phantom));
///
/// assert!(registry.is_present(ProviderId::Phantom));
/// assert!(!registry.is_present(ProviderId::Solflare));
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, Arc<dyn WalletProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry (no extensions detected).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider at its slot, replacing any previous occupant.
    pub fn register(&mut self, provider: Arc<dyn WalletProvider>) {
        let id = provider.id();
        tracing::debug!(provider = %id, "wallet provider registered");
        self.providers.insert(id, provider);
    }

    /// Look up the provider at `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProviderId) -> Option<Arc<dyn WalletProvider>> {
        self.providers.get(&id).cloned()
    }

    /// Whether a provider occupies the slot.
    #[must_use]
    pub fn is_present(&self, id: ProviderId) -> bool {
        self.providers.contains_key(&id)
    }

    /// The slots that currently have a provider.
    #[must_use]
    pub fn available(&self) -> Vec<ProviderId> {
        let mut ids: Vec<ProviderId> = self.providers.keys().copied().collect();
        ids.sort_by_key(|id| id.display_name());
        ids
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("available", &self.available())
            .finish()
    }
}

#[async_trait::async_trait]
impl WalletBridge for ProviderRegistry {
    async fn connect(&self, id: ProviderId) -> Result<Box<dyn SignerHandle>, WalletError> {
        let provider = self
            .get(id)
            .ok_or_else(|| WalletError::provider_not_found(id.display_name()))?;

        let account = provider.connect().await?;
        tracing::debug!(provider = %id, address = %account.address(), "wallet connected");

        Ok(Box::new(RemoteWalletSigner::new(provider, account)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::provider::tests::ScriptedProvider;

    #[test]
    fn test_empty_registry_has_no_providers() {
        let registry = ProviderRegistry::new();
        assert!(!registry.is_present(ProviderId::Phantom));
        assert!(!registry.is_present(ProviderId::Solflare));
        assert!(registry.available().is_empty());
    }

    #[test]
    fn test_register_fills_the_right_slot() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(ScriptedProvider::new(ProviderId::Solflare)));

        assert!(registry.is_present(ProviderId::Solflare));
        assert!(!registry.is_present(ProviderId::Phantom));
        assert_eq!(registry.available(), vec![ProviderId::Solflare]);
    }

    #[test]
    fn test_register_replaces_previous_occupant() {
        let mut registry = ProviderRegistry::new();
        let first = ScriptedProvider::new(ProviderId::Phantom);
        let mut second = ScriptedProvider::new(ProviderId::Phantom);
        second.public_key = [0x11u8; 32];

        registry.register(Arc::new(first));
        registry.register(Arc::new(second));

        assert_eq!(registry.available().len(), 1);
    }

    #[tokio::test]
    async fn test_connect_to_absent_slot_is_provider_not_found() {
        let registry = ProviderRegistry::new();
        let err = registry.connect(ProviderId::Phantom).await.err().unwrap();
        assert!(matches!(
            err,
            WalletError::ProviderNotFound { ref name } if name == "Phantom"
        ));
    }

    #[tokio::test]
    async fn test_connect_returns_signer_with_account_address() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(ScriptedProvider::new(ProviderId::Phantom)));

        let signer = registry.connect(ProviderId::Phantom).await.unwrap();
        assert_eq!(signer.address(), bs58::encode([0xABu8; 32]).into_string());
    }

    #[tokio::test]
    async fn test_connect_rejection_propagates() {
        let mut scripted = ScriptedProvider::new(ProviderId::Solflare);
        scripted.reject_connect = true;

        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(scripted));

        let err = registry.connect(ProviderId::Solflare).await.err().unwrap();
        assert!(matches!(err, WalletError::ConnectRejected));
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(ScriptedProvider::new(ProviderId::Phantom)));

        // Phantom present, Solflare still absent.
        assert!(registry.connect(ProviderId::Phantom).await.is_ok());
        assert!(matches!(
            registry.connect(ProviderId::Solflare).await.err().unwrap(),
            WalletError::ProviderNotFound { .. }
        ));
    }
}
