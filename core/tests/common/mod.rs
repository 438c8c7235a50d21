// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use cart_store::{
  Cart, CartConfig, CartServices, CartStorage, CartStore, MemoryStorage, Notifier, Product, ProductDetails,
  ProductId, StaticInventory,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Catalog fixtures ---
pub fn details(id: ProductId) -> ProductDetails {
  ProductDetails {
    id,
    name: format!("Running shoe {}", id),
    price: 139.9 + id as f64,
    image_url: format!("https://cdn.example.com/shoes/{}.jpg", id),
  }
}

pub fn line(id: ProductId, amount: i64) -> Product {
  details(id).into_cart_line(amount)
}

pub fn cart_of(lines: &[(ProductId, i64)]) -> Cart {
  Cart::from(lines.iter().map(|(id, amount)| line(*id, *amount)).collect::<Vec<_>>())
}

/// Inventory holding the listed products at the given stock levels.
pub fn inventory(stock: &[(ProductId, i64)]) -> Arc<StaticInventory> {
  let inventory = StaticInventory::new();
  for (id, amount) in stock {
    inventory.insert(details(*id), *amount);
  }
  Arc::new(inventory)
}

// --- Notifier that remembers what it was told ---
#[derive(Debug, Default)]
pub struct RecordingNotifier {
  messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
  pub fn messages(&self) -> Vec<String> {
    self.messages.lock().clone()
  }
}

impl Notifier for RecordingNotifier {
  fn error(&self, message: &str) {
    self.messages.lock().push(message.to_string());
  }
}

// --- Storage that can be told to fail writes ---
#[derive(Debug, Default)]
pub struct FlakyStorage {
  pub inner: MemoryStorage,
  pub fail_saves: std::sync::atomic::AtomicBool,
  pub saves: AtomicUsize,
}

#[async_trait]
impl CartStorage for FlakyStorage {
  async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
    self.inner.load(key).await
  }

  async fn save(&self, key: &str, value: String) -> anyhow::Result<()> {
    if self.fail_saves.load(Ordering::SeqCst) {
      anyhow::bail!("disk full");
    }
    self.saves.fetch_add(1, Ordering::SeqCst);
    self.inner.save(key, value).await
  }
}

/// Everything a test needs to drive and observe a store.
pub struct Harness {
  pub store: CartStore,
  pub inventory: Arc<StaticInventory>,
  pub storage: Arc<FlakyStorage>,
  pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
  pub async fn new(initial: Cart, stock: &[(ProductId, i64)]) -> Self {
    Self::with_config(CartConfig::default(), initial, stock).await
  }

  /// Seeds storage with `initial` and restores the store from it.
  pub async fn with_config(config: CartConfig, initial: Cart, stock: &[(ProductId, i64)]) -> Self {
    let inventory = inventory(stock);
    let storage = Arc::new(FlakyStorage::default());
    if !initial.is_empty() {
      let raw = serde_json::to_string(&initial).unwrap();
      storage.inner.save(&config.storage_key, raw).await.unwrap();
    }
    let notifier = Arc::new(RecordingNotifier::default());
    let services = CartServices {
      stock: inventory.clone(),
      catalog: inventory.clone(),
      storage: storage.clone(),
      notifier: notifier.clone(),
    };
    let store = CartStore::restore(config, services).await.unwrap();
    Self {
      store,
      inventory,
      storage,
      notifier,
    }
  }

  pub fn persisted(&self) -> Option<Cart> {
    self
      .storage
      .inner
      .get(&self.store.config().storage_key)
      .map(|raw| serde_json::from_str(&raw).unwrap())
  }

  pub fn amounts(&self) -> Vec<(ProductId, i64)> {
    self.store.cart().iter().map(|p| (p.id, p.amount)).collect()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
