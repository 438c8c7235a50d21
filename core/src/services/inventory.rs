// cart_store/src/services/inventory.rs

use super::{CatalogService, StockService};
use crate::model::{ProductDetails, ProductId, Stock};
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory catalog and stock table. Serves both lookups.
///
/// Unknown ids fail the same way a 404 from the inventory API would.
/// Stock levels can be changed at runtime with `set_stock`.
#[derive(Debug, Default)]
pub struct StaticInventory {
  products: RwLock<HashMap<ProductId, ProductDetails>>,
  stock: RwLock<HashMap<ProductId, i64>>,
}

impl StaticInventory {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds (or replaces) a product with the given stock level.
  pub fn with_product(self, details: ProductDetails, stock: i64) -> Self {
    self.insert(details, stock);
    self
  }

  pub fn insert(&self, details: ProductDetails, stock: i64) {
    let id = details.id;
    self.products.write().insert(id, details);
    self.stock.write().insert(id, stock);
  }

  pub fn set_stock(&self, product_id: ProductId, amount: i64) {
    self.stock.write().insert(product_id, amount);
  }
}

#[async_trait]
impl StockService for StaticInventory {
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<Stock> {
    let amount = self
      .stock
      .read()
      .get(&product_id)
      .copied()
      .ok_or_else(|| anyhow!("no stock entry for product {}", product_id))?;
    Ok(Stock { id: product_id, amount })
  }
}

#[async_trait]
impl CatalogService for StaticInventory {
  async fn product(&self, product_id: ProductId) -> anyhow::Result<ProductDetails> {
    self
      .products
      .read()
      .get(&product_id)
      .cloned()
      .ok_or_else(|| anyhow!("product {} not found in catalog", product_id))
  }
}
