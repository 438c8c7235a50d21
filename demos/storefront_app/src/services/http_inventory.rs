// demos/storefront_app/src/services/http_inventory.rs

use async_trait::async_trait;
use cart_store::{CatalogService, ProductDetails, ProductId, Stock, StockService};
use std::time::Duration;
use tracing::{debug, instrument};

/// Stock and catalog lookups against the storefront REST API
/// (`GET /stock/{id}`, `GET /products/{id}`).
#[derive(Debug, Clone)]
pub struct HttpInventory {
  client: reqwest::Client,
  base_url: String,
}

impl HttpInventory {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }

  async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
    let url = format!("{}{}", self.base_url, path);
    debug!(%url, "Requesting inventory API.");
    let value = self
      .client
      .get(&url)
      .send()
      .await?
      .error_for_status()? // 404 for unknown products
      .json::<T>()
      .await?;
    Ok(value)
  }
}

#[async_trait]
impl StockService for HttpInventory {
  #[instrument(name = "HttpInventory::stock", skip(self))]
  async fn stock(&self, product_id: ProductId) -> anyhow::Result<Stock> {
    let stock: Stock = self.get_json(&format!("/stock/{}", product_id)).await?;
    Ok(Stock {
      id: product_id,
      amount: stock.amount,
    })
  }
}

#[async_trait]
impl CatalogService for HttpInventory {
  #[instrument(name = "HttpInventory::product", skip(self))]
  async fn product(&self, product_id: ProductId) -> anyhow::Result<ProductDetails> {
    self.get_json(&format!("/products/{}", product_id)).await
  }
}
