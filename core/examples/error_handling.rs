// cart_store/examples/error_handling.rs

use cart_store::{
  CartConfig, CartError, CartServices, CartStore, Locale, MemoryStorage, Notifier, ProductDetails, StaticInventory,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Prints what a toast would show.
struct ConsoleToast;

impl Notifier for ConsoleToast {
  fn error(&self, message: &str) {
    println!("[toast] {}", message);
  }
}

#[tokio::main]
async fn main() -> Result<(), CartError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Error Handling Example ---");

  let inventory = Arc::new(StaticInventory::new().with_product(
    ProductDetails {
      id: 1,
      name: "Tênis Adidas Duramo Lite 2.0".to_string(),
      price: 219.9,
      image_url: "https://cdn.example.com/3.jpg".to_string(),
    },
    1,
  ));
  let services = CartServices {
    stock: inventory.clone(),
    catalog: inventory,
    storage: Arc::new(MemoryStorage::new()),
    notifier: Arc::new(ConsoleToast),
  };
  let store = CartStore::restore(CartConfig::default().with_locale(Locale::PtBr), services).await?;

  // Typed outcomes through the `try_` operations.
  store.try_add_product(1).await?;
  match store.try_add_product(1).await {
    Err(err @ CartError::StockExceeded { .. }) => warn!(error = %err, "Second unit rejected."),
    other => info!("Unexpected outcome: {:?}", other),
  }

  // Notifier-facing operations: failures become toasts in pt-BR.
  store.add_product(1).await;
  store.add_product(404).await;
  store.remove_product(404).await;
  store.update_product_amount(1, 2).await;

  info!("Final cart: {:?}", store.cart());
  Ok(())
}
