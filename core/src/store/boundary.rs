// cart_store/src/store/boundary.rs

//! Operations as the UI layer calls them: failures go to the `Notifier`
//! and never back to the caller.

use crate::error::CartError;
use crate::model::ProductId;
use crate::store::definition::CartStore;

impl CartStore {
  pub async fn add_product(&self, product_id: ProductId) {
    if let Err(err) = self.try_add_product(product_id).await {
      self.report(&err);
    }
  }

  pub async fn remove_product(&self, product_id: ProductId) {
    if let Err(err) = self.try_remove_product(product_id).await {
      self.report(&err);
    }
  }

  pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) {
    if let Err(err) = self.try_update_product_amount(product_id, amount).await {
      self.report(&err);
    }
  }

  fn report(&self, err: &CartError) {
    if let Some(message) = self.messages.for_error(err) {
      self.services.notifier.error(message);
    }
  }
}
