// cart_store/src/model/cart.rs

//! The ordered, id-unique collection of cart lines.

use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

/// Ordered sequence of cart lines, in the order products were first added.
///
/// Serializes as a plain JSON array of `Product`, which is the persisted
/// snapshot format. Mutating methods take `&mut self` and are only ever
/// applied to a working copy inside a store operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart(Vec<Product>);

impl Cart {
  pub fn new() -> Self {
    Self(Vec::new())
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Product> {
    self.0.iter()
  }

  pub fn get(&self, product_id: ProductId) -> Option<&Product> {
    self.0.iter().find(|p| p.id == product_id)
  }

  pub fn contains(&self, product_id: ProductId) -> bool {
    self.get(product_id).is_some()
  }

  /// Sum of all line amounts.
  pub fn total_units(&self) -> i64 {
    self.0.iter().map(|p| p.amount).sum()
  }

  pub fn into_vec(self) -> Vec<Product> {
    self.0
  }

  pub fn as_slice(&self) -> &[Product] {
    &self.0
  }

  /// Sets the amount of an existing line. Returns `false` if the id is absent.
  pub(crate) fn set_amount(&mut self, product_id: ProductId, amount: i64) -> bool {
    match self.0.iter_mut().find(|p| p.id == product_id) {
      Some(line) => {
        line.amount = amount;
        true
      }
      None => false,
    }
  }

  /// Appends a new line. Returns `false` (and leaves the cart alone) if the id is already present.
  pub(crate) fn push(&mut self, product: Product) -> bool {
    if self.contains(product.id) {
      return false;
    }
    self.0.push(product);
    true
  }

  /// Removes the line with `product_id`, keeping the relative order of the rest.
  pub(crate) fn remove(&mut self, product_id: ProductId) -> Option<Product> {
    let index = self.0.iter().position(|p| p.id == product_id)?;
    Some(self.0.remove(index))
  }
}

impl From<Cart> for Vec<Product> {
  fn from(cart: Cart) -> Self {
    cart.0
  }
}

/// Builds a cart from lines, keeping the first occurrence of any duplicated id.
impl From<Vec<Product>> for Cart {
  fn from(lines: Vec<Product>) -> Self {
    let mut cart = Cart::new();
    for line in lines {
      let (product_id, amount) = (line.id, line.amount);
      if !cart.push(line) {
        event!(Level::WARN, product_id, amount, "Dropping cart line with duplicate product id.");
      }
    }
    cart
  }
}

impl<'a> IntoIterator for &'a Cart {
  type Item = &'a Product;
  type IntoIter = std::slice::Iter<'a, Product>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
