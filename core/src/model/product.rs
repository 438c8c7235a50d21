// cart_store/src/model/product.rs

use serde::{Deserialize, Serialize};

/// Catalog identity of a product. Unique within a cart.
pub type ProductId = u64;

/// Product metadata as served by the catalog, without any cart quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
  pub id: ProductId,
  #[serde(rename = "title", alias = "name")]
  pub name: String,
  pub price: f64,
  #[serde(rename = "image", alias = "image_url")]
  pub image_url: String,
}

impl ProductDetails {
  /// Turns catalog metadata into a cart line holding `amount` units.
  pub fn into_cart_line(self, amount: i64) -> Product {
    Product {
      id: self.id,
      name: self.name,
      price: self.price,
      image_url: self.image_url,
      amount,
    }
  }
}

/// A cart line: catalog metadata plus the quantity currently in the cart.
///
/// Serialized with the storefront API's field names (`title`, `image`) so
/// snapshots written by earlier clients restore verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  #[serde(rename = "title", alias = "name")]
  pub name: String,
  pub price: f64,
  #[serde(rename = "image", alias = "image_url")]
  pub image_url: String,
  pub amount: i64,
}

/// Maximum purchasable quantity for a product. Owned by the stock service.
///
/// Inventory APIs may answer with `{ "amount": n }` only; the id then
/// defaults to 0 and callers fill in the id they asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
  #[serde(default)]
  pub id: ProductId,
  pub amount: i64,
}
