// cart_store/src/store/definition.rs

//! Contains the `CartStore` struct, its construction from persisted state,
//! and change listener registration.

use crate::config::{CartConfig, Messages};
use crate::error::{CartError, CartResult};
use crate::model::Cart;
use crate::services::{CartStorage, CatalogService, Notifier, StockService};
use crate::store::state::CartState;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Callback invoked with the newly committed cart after every successful mutation.
pub type ChangeListener = Arc<dyn Fn(&Cart) + Send + Sync + 'static>;

/// The external collaborators a `CartStore` is wired to.
#[derive(Clone)]
pub struct CartServices {
  pub stock: Arc<dyn StockService>,
  pub catalog: Arc<dyn CatalogService>,
  pub storage: Arc<dyn CartStorage>,
  pub notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for CartServices {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CartServices").finish_non_exhaustive()
  }
}

/// Client-side cart state with stock-checked mutations.
///
/// Built once at application start and shared (usually as `Arc<CartStore>`)
/// with every consumer. The committed cart is readable through `cart()`;
/// it changes only through `add_product`, `remove_product` and
/// `update_product_amount` (or their `try_` variants).
///
/// Operations are not serialized against each other. Each one works on a
/// snapshot taken when it starts, so two overlapping operations can lose
/// one of the updates. Commits are serialized: storage and the exposed
/// cart always agree once no commit is in flight.
pub struct CartStore {
  pub(crate) config: CartConfig,
  pub(crate) messages: &'static Messages,
  pub(crate) state: CartState,
  pub(crate) services: CartServices,
  pub(crate) listeners: RwLock<Vec<ChangeListener>>,
  // Held across persist + expose so the last snapshot written is the last one exposed.
  pub(crate) commit_lock: tokio::sync::Mutex<()>,
}

impl CartStore {
  /// Creates the store, restoring the cart persisted under `config.storage_key`.
  ///
  /// Starts empty when nothing is stored. A storage failure or an unreadable
  /// snapshot is returned as `CartError::Restore`.
  #[instrument(name = "CartStore::restore", skip_all, fields(storage_key = %config.storage_key), err(Display))]
  pub async fn restore(config: CartConfig, services: CartServices) -> CartResult<Self> {
    let key = config.storage_key.clone();
    let stored = services.storage.load(&key).await.map_err(|source| CartError::Restore {
      key: key.clone(),
      source,
    })?;

    let cart = match stored {
      Some(raw) => serde_json::from_str::<Cart>(&raw).map_err(|e| CartError::Restore {
        key: key.clone(),
        source: e.into(),
      })?,
      None => {
        event!(Level::DEBUG, "No persisted cart found, starting empty.");
        Cart::new()
      }
    };
    event!(Level::INFO, lines = cart.len(), "Cart restored.");

    Ok(Self::with_cart(config, services, cart))
  }

  /// Creates the store around an already-loaded cart, without touching storage.
  pub fn with_cart(config: CartConfig, services: CartServices, cart: Cart) -> Self {
    let messages = config.messages();
    Self {
      config,
      messages,
      state: CartState::new(cart),
      services,
      listeners: RwLock::new(Vec::new()),
      commit_lock: tokio::sync::Mutex::new(()),
    }
  }

  /// Snapshot of the committed cart.
  pub fn cart(&self) -> Cart {
    self.state.snapshot()
  }

  /// Shared handle to the committed cart, for consumers that want to read without copying.
  pub fn state(&self) -> CartState {
    self.state.clone()
  }

  pub fn config(&self) -> &CartConfig {
    &self.config
  }

  /// Registers a listener called after every successful commit.
  pub fn on_change(&self, listener: impl Fn(&Cart) + Send + Sync + 'static) {
    self.listeners.write().push(Arc::new(listener));
  }

  pub(crate) fn notify_listeners(&self, cart: &Cart) {
    let listeners: Vec<ChangeListener> = self.listeners.read().clone();
    for listener in listeners {
      listener(cart);
    }
  }
}

impl fmt::Debug for CartStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CartStore")
      .field("config", &self.config)
      .field("cart", &*self.state.read())
      .field("listeners", &self.listeners.read().len())
      .finish()
  }
}
