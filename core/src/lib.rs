// src/lib.rs

//! cart_store: client-side shopping cart state for storefronts.
//!
//! A `CartStore` keeps an ordered, id-unique list of cart lines and offers
//! three mutations:
//!  - `add_product`: one more unit, checked against available stock.
//!  - `remove_product`: drop a line.
//!  - `update_product_amount`: set a line's amount, checked against stock.
//!
//! Every successful mutation persists the whole cart through a `CartStorage`
//! before it becomes visible, and the store restores that snapshot at startup.
//! Stock and product metadata come from `StockService` / `CatalogService`.
//! Failures are reported to a `Notifier`; the `try_` variants return the
//! typed `CartError` instead.

pub mod config;
pub mod error;
pub mod model;
pub mod services;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::config::{CartConfig, Locale, Messages, DEFAULT_STORAGE_KEY};
pub use crate::error::{CartError, CartOperation, CartResult};
pub use crate::model::{Cart, Product, ProductDetails, ProductId, Stock};
pub use crate::services::{
  CartStorage, CatalogService, MemoryStorage, Notifier, StaticInventory, StockService, TracingNotifier,
};
pub use crate::store::{CartServices, CartState, CartStore, ChangeListener};
