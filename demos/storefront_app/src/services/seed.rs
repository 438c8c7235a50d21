// demos/storefront_app/src/services/seed.rs

use cart_store::{ProductDetails, StaticInventory};

/// The demo storefront's catalog with its stock levels, used when no API is configured.
pub fn seeded_inventory() -> StaticInventory {
  let products: [(u64, &str, f64, i64); 6] = [
    (1, "Tênis de Caminhada Leve Confortável", 179.9, 3),
    (2, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 139.9, 5),
    (3, "Tênis Adidas Duramo Lite 2.0", 219.9, 2),
    (4, "Tênis VR Caminhada Confortável Detalhes Couro Feminino", 139.9, 1),
    (5, "Tênis de Corrida Amortecido", 189.9, 5),
    (6, "Tênis Adidas Duramo Lite 3.0", 229.9, 10),
  ];

  let inventory = StaticInventory::new();
  for (id, name, price, stock) in products {
    inventory.insert(
      ProductDetails {
        id,
        name: name.to_string(),
        price,
        image_url: format!("/static/products/{}.jpg", id),
      },
      stock,
    );
  }
  inventory
}
