// cart_store/src/store/execution.rs

//! The result-returning cart operations and the commit step they share.
//!
//! Each operation copies the committed cart, performs its lookups, edits the
//! copy and then commits it. Commit persists the new cart first and only then
//! makes it visible, so storage always holds the post-mutation value.

use crate::error::{CartError, CartOperation, CartResult};
use crate::model::{Cart, ProductId};
use crate::store::definition::CartStore;
use anyhow::anyhow;
use tracing::{event, instrument, Level};

impl CartStore {
  /// Adds one unit of `product_id`, appending a new line from the catalog
  /// if the product is not in the cart yet.
  ///
  /// Errors with `StockExceeded` if the resulting amount is above stock and
  /// with `OperationFailed` if a lookup or the persistence write fails.
  #[instrument(name = "CartStore::add_product", skip(self), err(Display))]
  pub async fn try_add_product(&self, product_id: ProductId) -> CartResult<()> {
    let operation = CartOperation::Add;
    let mut next = self.state.snapshot();
    let existing_amount = next.get(product_id).map(|line| line.amount);

    let stock = self
      .services
      .stock
      .stock(product_id)
      .await
      .map_err(|e| CartError::failed(operation, e.context("stock lookup")))?;

    let candidate = existing_amount.map_or(1, |amount| amount.saturating_add(1));
    if candidate > stock.amount {
      event!(Level::INFO, candidate, available = stock.amount, "Not enough stock to add product.");
      return Err(CartError::StockExceeded {
        operation,
        product_id,
        requested: candidate,
        available: stock.amount,
      });
    }

    if existing_amount.is_some() {
      next.set_amount(product_id, candidate);
    } else {
      let details = self
        .services
        .catalog
        .product(product_id)
        .await
        .map_err(|e| CartError::failed(operation, e.context("catalog lookup")))?;
      if details.id != product_id {
        return Err(CartError::failed(
          operation,
          anyhow!("catalog answered product {} for id {}", details.id, product_id),
        ));
      }
      next.push(details.into_cart_line(1));
    }

    self.commit(operation, next).await
  }

  /// Removes the line for `product_id`. Missing lines are an `OperationFailed`.
  #[instrument(name = "CartStore::remove_product", skip(self), err(Display))]
  pub async fn try_remove_product(&self, product_id: ProductId) -> CartResult<()> {
    let operation = CartOperation::Remove;
    let mut next = self.state.snapshot();

    if next.remove(product_id).is_none() {
      return Err(CartError::failed(operation, anyhow!("product {} is not in the cart", product_id)));
    }

    self.commit(operation, next).await
  }

  /// Sets the amount of an existing line to exactly `amount` if stock allows.
  ///
  /// A product that is not in the cart is ignored without error. `amount` is
  /// not range-checked: zero or negative values pass whenever they do not
  /// exceed stock.
  #[instrument(name = "CartStore::update_product_amount", skip(self), err(Display))]
  pub async fn try_update_product_amount(&self, product_id: ProductId, amount: i64) -> CartResult<()> {
    let operation = CartOperation::Update;
    let mut next = self.state.snapshot();

    if !next.contains(product_id) {
      event!(Level::DEBUG, "Product not in cart, nothing to update.");
      return Ok(());
    }

    let stock = self
      .services
      .stock
      .stock(product_id)
      .await
      .map_err(|e| CartError::failed(operation, e.context("stock lookup")))?;

    if stock.amount < amount {
      event!(Level::INFO, available = stock.amount, "Not enough stock for requested amount.");
      return Err(CartError::StockExceeded {
        operation,
        product_id,
        requested: amount,
        available: stock.amount,
      });
    }

    next.set_amount(product_id, amount);
    self.commit(operation, next).await
  }

  /// Persists `next`, then exposes it as the committed cart and notifies listeners.
  /// Nothing changes in memory if the write fails.
  ///
  /// Only one commit runs at a time, so overlapping commits cannot leave
  /// storage holding one cart while memory holds another.
  async fn commit(&self, operation: CartOperation, next: Cart) -> CartResult<()> {
    let serialized = serde_json::to_string(&next).map_err(|e| CartError::failed(operation, e))?;

    let _commit_guard = self.commit_lock.lock().await;

    self
      .services
      .storage
      .save(&self.config.storage_key, serialized)
      .await
      .map_err(|e| CartError::failed(operation, e.context("persisting cart")))?;

    self.state.replace(next.clone());
    event!(Level::DEBUG, lines = next.len(), total_units = next.total_units(), "Cart committed.");
    self.notify_listeners(&next);
    Ok(())
  }
}
