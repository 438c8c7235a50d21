// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use cart_store::{CartConfig, Locale, DEFAULT_STORAGE_KEY};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Base URL of the storefront API serving /stock/{id} and /products/{id}.
  // When unset the app serves a seeded in-memory inventory.
  pub api_base_url: Option<String>,
  pub http_timeout: Duration,

  pub cart_data_dir: PathBuf,
  pub cart_storage_key: String,
  pub cart_locale: Locale,

  // Undelivered toasts kept before the oldest is dropped.
  pub toast_capacity: usize,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let api_base_url = get_env("API_BASE_URL")
      .ok()
      .map(|url| url.trim_end_matches('/').to_string())
      .filter(|url| !url.is_empty());
    let http_timeout_ms = get_env("HTTP_TIMEOUT_MS")
      .unwrap_or_else(|_| "5000".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid HTTP_TIMEOUT_MS: {}", e)))?;

    let cart_data_dir = PathBuf::from(get_env("CART_DATA_DIR").unwrap_or_else(|_| "./data".to_string()));
    let cart_storage_key = get_env("CART_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
    let cart_locale = get_env("CART_LOCALE")
      .unwrap_or_else(|_| "en".to_string())
      .parse::<Locale>()
      .map_err(|e| AppError::Config(format!("Invalid CART_LOCALE: {}", e)))?;

    let toast_capacity = get_env("TOAST_CAPACITY")
      .unwrap_or_else(|_| "32".to_string())
      .parse::<usize>()
      .map_err(|e| AppError::Config(format!("Invalid TOAST_CAPACITY: {}", e)))?;
    if toast_capacity == 0 {
      return Err(AppError::Config("TOAST_CAPACITY must be at least 1".to_string()));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      api_base_url,
      http_timeout: Duration::from_millis(http_timeout_ms),
      cart_data_dir,
      cart_storage_key,
      cart_locale,
      toast_capacity,
    })
  }

  pub fn cart_config(&self) -> CartConfig {
    CartConfig::default()
      .with_storage_key(self.cart_storage_key.clone())
      .with_locale(self.cart_locale)
  }
}
