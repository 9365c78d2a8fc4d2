//! gomarket - persisted shopping cart
//!
//! Keeps an ordered list of cart items in memory and mirrors it into a
//! device-local key-value store.

pub mod audit;
pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod ui;

pub use cart::{CartItem, CartProvider, CartStore, Product};
pub use error::{GomarketError, GomarketResult};
