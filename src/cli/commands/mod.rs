//! CLI command implementations

pub mod add;
pub mod clear;
pub mod completions;
pub mod config;
pub mod list;
pub mod quantity;

pub use add::execute as add;
pub use clear::execute as clear;
pub use completions::execute as completions;
pub use config::execute as config;
pub use list::execute as list;
pub use quantity::{decrement, increment};

use crate::audit::AuditLog;
use crate::cart::{CartOptions, CartProvider, CartStore};
use crate::config::{Config, ConfigManager};
use crate::error::GomarketResult;
use crate::storage::FileStore;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Open the on-disk cart under `data_dir` and wait for it to load
pub async fn open_cart(config: &Config, data_dir: &Path) -> GomarketResult<CartStore> {
    ConfigManager::ensure_data_dirs(data_dir).await?;

    let storage = FileStore::open(ConfigManager::store_dir(data_dir)).await?;
    debug!("Cart storage at {}", storage.dir().display());

    let cart = CartStore::open(
        Arc::new(storage),
        CartOptions {
            duplicate_policy: config.cart.duplicate_policy,
        },
    );
    cart.ready().await;

    Ok(cart)
}

/// A mounted cart plus the audit journal, for the commands that touch the cart
#[derive(Debug)]
pub struct CartSession {
    pub provider: CartProvider,
    pub audit: AuditLog,
}

impl CartSession {
    /// Open the cart under `data_dir` and mount it
    pub async fn open(config: &Config, data_dir: &Path) -> GomarketResult<Self> {
        let provider = CartProvider::with_store(open_cart(config, data_dir).await?);
        let audit = AuditLog::new(
            config.general.audit_log,
            ConfigManager::audit_log_path(data_dir),
        );

        Ok(Self { provider, audit })
    }

    /// Unmount and close the cart, so pending writes land before exit
    ///
    /// A command error takes precedence over a write error.
    pub async fn finish(self, result: GomarketResult<()>) -> GomarketResult<()> {
        let closed = match self.provider.unmount() {
            Some(cart) => cart.close().await,
            None => Ok(()),
        };

        result.and(closed)
    }
}
