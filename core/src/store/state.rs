// cart_store/src/store/state.rs

use crate::model::Cart;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Shared handle to the committed cart.
///
/// Operations never mutate the cart through this handle: they take a
/// `snapshot`, work on the copy, and `replace` the whole value on commit.
///
/// IMPORTANT: guards returned by `read` are blocking and MUST NOT be held
/// across `.await` points.
#[derive(Debug, Default)]
pub struct CartState(Arc<RwLock<Cart>>);

impl CartState {
  pub fn new(cart: Cart) -> Self {
    CartState(Arc::new(RwLock::new(cart)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.read()
  }

  /// Owned copy of the committed cart.
  pub fn snapshot(&self) -> Cart {
    self.0.read().clone()
  }

  pub(crate) fn replace(&self, cart: Cart) {
    *self.0.write() = cart;
  }
}

impl Clone for CartState {
  fn clone(&self) -> Self {
    CartState(Arc::clone(&self.0))
  }
}
