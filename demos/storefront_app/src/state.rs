// demos/storefront_app/src/state.rs
use crate::services::ToastQueue;
use cart_store::CartStore;
use std::sync::Arc;

/// Shared with every handler. The cart store is the single instance built at startup.
#[derive(Clone)]
pub struct AppState {
  pub cart: Arc<CartStore>,
  pub toasts: Arc<ToastQueue>,
}
