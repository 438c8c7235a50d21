// demos/storefront_app/src/main.rs

mod config;
mod errors;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::services::{seed::seeded_inventory, FileStorage, HttpInventory, ToastQueue};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use cart_store::{CartServices, CartStore, CatalogService, StockService};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

/// Stock and catalog lookups: the remote API when configured, the seeded catalog otherwise.
fn inventory_services(app_config: &AppConfig) -> AppResult<(Arc<dyn StockService>, Arc<dyn CatalogService>)> {
  match &app_config.api_base_url {
    Some(base_url) => {
      tracing::info!(%base_url, "Using storefront API for stock and catalog lookups.");
      let inventory = Arc::new(HttpInventory::new(base_url.clone(), app_config.http_timeout)?);
      let stock: Arc<dyn StockService> = inventory.clone();
      let catalog: Arc<dyn CatalogService> = inventory;
      Ok((stock, catalog))
    }
    None => {
      tracing::info!("API_BASE_URL not set, serving the seeded in-memory catalog.");
      let inventory = Arc::new(seeded_inventory());
      let stock: Arc<dyn StockService> = inventory.clone();
      let catalog: Arc<dyn CatalogService> = inventory;
      Ok((stock, catalog))
    }
  }
}

#[actix_web::main]
async fn main() -> AppResult<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront application server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e);
    }
  };

  let (stock, catalog) = inventory_services(&app_config)?;
  let toasts = Arc::new(ToastQueue::new(app_config.toast_capacity));
  let services = CartServices {
    stock,
    catalog,
    storage: Arc::new(FileStorage::new(app_config.cart_data_dir.clone())),
    notifier: toasts.clone(),
  };

  // One store for the whole application, restored from the previous session.
  let cart = match CartStore::restore(app_config.cart_config(), services).await {
    Ok(store) => Arc::new(store),
    Err(e) => {
      tracing::error!(error = %e, "Failed to restore the persisted cart.");
      return Err(e.into());
    }
  };
  cart.on_change(|cart| {
    tracing::info!(lines = cart.len(), total_units = cart.total_units(), "Cart updated.");
  });

  let app_state = AppState { cart, toasts };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
