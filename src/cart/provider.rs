//! Explicit cart accessor for consumers
//!
//! Consumers receive a `&CartProvider` instead of reaching for global state.
//! The application mounts one store at startup and unmounts it at exit;
//! asking for the cart outside that window is a configuration error.

use crate::cart::store::CartStore;
use crate::error::{GomarketError, GomarketResult};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Holds the cart store for the duration of the application
#[derive(Debug, Default)]
pub struct CartProvider {
    slot: RwLock<Option<CartStore>>,
}

impl CartProvider {
    /// Create a provider with nothing mounted
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with `store` already mounted
    pub fn with_store(store: CartStore) -> Self {
        Self {
            slot: RwLock::new(Some(store)),
        }
    }

    /// Mount `store`, returning any store it replaces
    pub fn mount(&self, store: CartStore) -> Option<CartStore> {
        debug!("Mounting cart store");
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(store)
    }

    /// Take the mounted store out of the provider
    pub fn unmount(&self) -> Option<CartStore> {
        debug!("Unmounting cart store");
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Get a handle to the mounted cart
    pub fn use_cart(&self) -> GomarketResult<CartStore> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(GomarketError::NotProvided)
    }

    /// Whether a store is currently mounted
    pub fn is_mounted(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartOptions, Product};
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn use_cart_without_store_fails() {
        let provider = CartProvider::new();
        let err = provider.use_cart().unwrap_err();

        assert!(matches!(err, GomarketError::NotProvided));
        assert!(err.to_string().contains("must be used within a CartProvider"));
    }

    #[tokio::test]
    async fn handles_share_one_cart() {
        let provider = CartProvider::with_store(CartStore::open(
            Arc::new(MemoryStore::new()),
            CartOptions::default(),
        ));

        let first = provider.use_cart().unwrap();
        first.ready().await;
        first
            .add_to_cart(Product {
                id: "1".to_string(),
                title: "A".to_string(),
                image_url: "u".to_string(),
                price: 10.0,
            })
            .await;

        let second = provider.use_cart().unwrap();
        assert_eq!(second.products().await.len(), 1);
    }

    #[tokio::test]
    async fn unmount_ends_lifetime() {
        let provider = CartProvider::new();
        let store = CartStore::open(Arc::new(MemoryStore::new()), CartOptions::default());

        assert!(provider.mount(store).is_none());
        assert!(provider.is_mounted());

        let store = provider.unmount().unwrap();
        store.close().await.unwrap();

        assert!(!provider.is_mounted());
        assert!(matches!(
            provider.use_cart(),
            Err(GomarketError::NotProvided)
        ));
    }
}
