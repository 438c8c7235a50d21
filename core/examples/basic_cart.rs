// cart_store/examples/basic_cart.rs

use cart_store::{
  CartConfig, CartError, CartServices, CartStore, MemoryStorage, ProductDetails, StaticInventory, TracingNotifier,
  DEFAULT_STORAGE_KEY,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CartError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. An in-memory inventory standing in for the storefront API.
  let inventory = Arc::new(
    StaticInventory::new()
      .with_product(
        ProductDetails {
          id: 1,
          name: "Tênis de Caminhada Leve Confortável".to_string(),
          price: 179.9,
          image_url: "https://cdn.example.com/1.jpg".to_string(),
        },
        3,
      )
      .with_product(
        ProductDetails {
          id: 2,
          name: "Tênis VR Caminhada Confortável Detalhes Couro Masculino".to_string(),
          price: 139.9,
          image_url: "https://cdn.example.com/2.jpg".to_string(),
        },
        5,
      ),
  );
  let storage = Arc::new(MemoryStorage::new());

  // 2. Wire the store and restore (nothing stored yet, so it starts empty).
  let services = CartServices {
    stock: inventory.clone(),
    catalog: inventory,
    storage: storage.clone(),
    notifier: Arc::new(TracingNotifier),
  };
  let store = CartStore::restore(CartConfig::default(), services).await?;
  store.on_change(|cart| info!("Cart changed: {} lines, {} units", cart.len(), cart.total_units()));

  // 3. Mutate.
  store.add_product(1).await;
  store.add_product(2).await;
  store.add_product(1).await;
  store.update_product_amount(2, 4).await;
  store.remove_product(1).await;

  for line in store.cart().iter() {
    info!("{} x {} ({})", line.amount, line.name, line.price);
  }
  info!("Persisted snapshot: {}", storage.get(DEFAULT_STORAGE_KEY).unwrap_or_default());
  Ok(())
}
