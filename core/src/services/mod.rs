// cart_store/src/services/mod.rs

//! Collaborators the cart store talks to, plus in-memory implementations.
//!
//! Every lookup may suspend. Failures are plain `anyhow::Error`s; the store
//! decides how they surface (see `CartError::OperationFailed`).

use crate::model::{ProductDetails, ProductId, Stock};
use async_trait::async_trait;

pub mod inventory;
pub mod memory;
pub mod notifier;

pub use inventory::StaticInventory;
pub use memory::MemoryStorage;
pub use notifier::TracingNotifier;

/// Read-only lookup of available stock by product id.
#[async_trait]
pub trait StockService: Send + Sync + 'static {
  /// Fails when the product is unknown or the inventory service is unreachable.
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<Stock>;
}

/// Read-only lookup of product metadata by id.
#[async_trait]
pub trait CatalogService: Send + Sync + 'static {
  async fn product(&self, product_id: ProductId) -> anyhow::Result<ProductDetails>;
}

/// Key-value persistence for serialized cart snapshots.
#[async_trait]
pub trait CartStorage: Send + Sync + 'static {
  /// Returns `Ok(None)` when nothing has been stored under `key` yet.
  async fn load(&self, key: &str) -> anyhow::Result<Option<String>>;

  async fn save(&self, key: &str, value: String) -> anyhow::Result<()>;
}

/// User-facing error surface. Fire-and-forget.
pub trait Notifier: Send + Sync + 'static {
  fn error(&self, message: &str);
}
