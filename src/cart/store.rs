//! Cart state container
//!
//! `CartStore` owns the authoritative in-memory list of cart items and mirrors
//! it into a [`KeyValueStore`] under a fixed key. Loading happens in the
//! background when the store is opened; every mutation queues a snapshot of
//! the resulting list onto a single writer task, so storage sees writes in
//! the same order the list changed.

use crate::cart::item::{CartItem, DuplicatePolicy, Product};
use crate::error::{GomarketError, GomarketResult};
use crate::storage::KeyValueStore;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch, RwLock};
use tracing::{debug, error, info, warn};

/// Storage key holding the serialized cart
pub const STORAGE_PRODUCTS_KEY: &str = "@Gomarketplace:products";

/// Lifecycle of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Persisted cart not read yet
    Uninitialized,
    /// Load finished (successfully or not)
    Ready,
}

/// Outcome of a cart mutation
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    /// A new line was appended
    Added(CartItem),
    /// An existing line changed quantity
    Updated(CartItem),
    /// A line left the cart
    Removed(CartItem),
    /// Nothing matched; the list is untouched
    Unchanged,
}

/// Store options
#[derive(Debug, Clone, Copy, Default)]
pub struct CartOptions {
    pub duplicate_policy: DuplicatePolicy,
}

enum WriteOp {
    Persist(Vec<CartItem>),
    Clear,
    Flush(oneshot::Sender<GomarketResult<()>>),
}

struct Inner {
    products: RwLock<Vec<CartItem>>,
    writer: mpsc::UnboundedSender<WriteOp>,
    state: watch::Receiver<StoreState>,
    options: CartOptions,
}

/// Handle to a cart; clones share the same cart
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

impl CartStore {
    /// Open a cart over `storage`
    ///
    /// Returns immediately. The persisted cart is read by a background task;
    /// use [`CartStore::ready`] to wait for it. Mutations wait for the load on
    /// their own. Must be called from within a Tokio runtime.
    pub fn open(storage: Arc<dyn KeyValueStore>, options: CartOptions) -> Self {
        let (writer, queue) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(StoreState::Uninitialized);

        let inner = Arc::new(Inner {
            products: RwLock::new(Vec::new()),
            writer,
            state: state_rx,
            options,
        });

        debug!(
            "Opening cart on {} storage ({:?} duplicates)",
            storage.backend_name(),
            options.duplicate_policy
        );

        tokio::spawn(run_writer(Arc::clone(&storage), queue));
        tokio::spawn(load(Arc::clone(&inner), storage, state_tx));

        Self { inner }
    }

    /// Current lifecycle state
    pub fn state(&self) -> StoreState {
        *self.inner.state.borrow()
    }

    /// Wait until the persisted cart has been read
    pub async fn ready(&self) {
        let mut state = self.inner.state.clone();
        if state.wait_for(|s| *s == StoreState::Ready).await.is_err() {
            warn!("Cart load task ended without reporting completion");
        }
    }

    /// Snapshot of the cart in display order
    pub async fn products(&self) -> Vec<CartItem> {
        self.inner.products.read().await.clone()
    }

    /// Put a product in the cart with quantity 1
    ///
    /// A product whose price is NaN or infinite is refused, since it cannot be
    /// written back as JSON.
    pub async fn add_to_cart(&self, product: Product) -> CartChange {
        if !product.has_finite_price() {
            warn!("Refusing product {} with price {}", product.id, product.price);
            return CartChange::Unchanged;
        }

        self.ready().await;
        let mut products = self.inner.products.write().await;
        let change = apply_add(&mut products, product, self.inner.options.duplicate_policy);
        self.persist(&products, &change);
        change
    }

    /// Raise the quantity of `id` by one; unknown ids are ignored
    pub async fn increment(&self, id: &str) -> CartChange {
        self.ready().await;
        let mut products = self.inner.products.write().await;
        let change = apply_increment(&mut products, id);
        self.persist(&products, &change);
        change
    }

    /// Lower the quantity of `id` by one
    ///
    /// A line at quantity 1 is removed from the cart. Unknown ids are ignored.
    pub async fn decrement(&self, id: &str) -> CartChange {
        self.ready().await;
        let mut products = self.inner.products.write().await;
        let change = apply_decrement(&mut products, id);
        self.persist(&products, &change);
        change
    }

    /// Empty the cart and drop the persisted copy
    ///
    /// Returns the number of lines removed.
    pub async fn clear(&self) -> usize {
        self.ready().await;
        let mut products = self.inner.products.write().await;
        let removed = products.len();
        products.clear();

        if self.inner.writer.send(WriteOp::Clear).is_err() {
            error!("Cart writer has shut down; clear not persisted");
        }

        debug!("Cleared {} cart lines", removed);
        removed
    }

    /// Wait for every queued write to reach storage
    ///
    /// Returns the first write failure seen since the previous flush.
    pub async fn flush(&self) -> GomarketResult<()> {
        let (done, result) = oneshot::channel();
        self.inner
            .writer
            .send(WriteOp::Flush(done))
            .map_err(|_| GomarketError::WriterClosed)?;

        result.await.map_err(|_| GomarketError::WriterClosed)?
    }

    /// Flush pending writes and release this handle
    pub async fn close(self) -> GomarketResult<()> {
        self.flush().await
    }

    fn persist(&self, products: &[CartItem], change: &CartChange) {
        if matches!(change, CartChange::Unchanged) {
            return;
        }

        // Sent under the write guard so queue order matches mutation order
        if self
            .inner
            .writer
            .send(WriteOp::Persist(products.to_vec()))
            .is_err()
        {
            error!("Cart writer has shut down; change not persisted");
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state())
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

fn apply_add(
    products: &mut Vec<CartItem>,
    product: Product,
    policy: DuplicatePolicy,
) -> CartChange {
    if policy == DuplicatePolicy::Increment {
        if let Some(item) = products.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return CartChange::Updated(item.clone());
        }
    }

    let item = CartItem::from(product);
    products.push(item.clone());
    CartChange::Added(item)
}

fn apply_increment(products: &mut [CartItem], id: &str) -> CartChange {
    match products.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.quantity = item.quantity.saturating_add(1);
            CartChange::Updated(item.clone())
        }
        None => CartChange::Unchanged,
    }
}

fn apply_decrement(products: &mut Vec<CartItem>, id: &str) -> CartChange {
    let Some(index) = products.iter().position(|item| item.id == id) else {
        return CartChange::Unchanged;
    };

    let item = &mut products[index];
    if item.quantity > 1 {
        item.quantity -= 1;
        return CartChange::Updated(item.clone());
    }

    CartChange::Removed(products.remove(index))
}

async fn read_snapshot(storage: &dyn KeyValueStore) -> GomarketResult<Option<Vec<CartItem>>> {
    match storage.get(STORAGE_PRODUCTS_KEY).await? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

async fn load(
    inner: Arc<Inner>,
    storage: Arc<dyn KeyValueStore>,
    state: watch::Sender<StoreState>,
) {
    match read_snapshot(storage.as_ref()).await {
        Ok(Some(items)) => {
            let count = items.len();
            *inner.products.write().await = items;
            info!("Loaded {} cart lines", count);
        }
        Ok(None) => debug!("No persisted cart, starting empty"),
        Err(e) => warn!("Failed to load persisted cart, starting empty: {}", e),
    }

    state.send_replace(StoreState::Ready);
}

async fn run_writer(
    storage: Arc<dyn KeyValueStore>,
    mut queue: mpsc::UnboundedReceiver<WriteOp>,
) {
    let mut failure: Option<GomarketError> = None;

    while let Some(op) = queue.recv().await {
        let result = match op {
            WriteOp::Persist(items) => match serde_json::to_vec(&items) {
                Ok(bytes) => storage.set(STORAGE_PRODUCTS_KEY, &bytes).await,
                Err(e) => Err(e.into()),
            },
            WriteOp::Clear => storage.remove(STORAGE_PRODUCTS_KEY).await,
            WriteOp::Flush(done) => {
                done.send(failure.take().map_or(Ok(()), Err)).ok();
                continue;
            }
        };

        if let Err(e) = result {
            error!("Failed to persist cart: {}", e);
            failure.get_or_insert(e);
        }
    }

    debug!("Cart writer stopped");
}
