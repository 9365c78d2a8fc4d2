//! Shopping cart state

pub mod item;
pub mod provider;
pub mod store;

pub use item::{CartItem, DuplicatePolicy, Product};
pub use provider::CartProvider;
pub use store::{CartChange, CartOptions, CartStore, StoreState, STORAGE_PRODUCTS_KEY};
