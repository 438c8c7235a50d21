// demos/storefront_app/src/errors.rs

//! Startup errors. Cart mutations never fail an HTTP request: they are
//! reported to the user through the toast queue instead.

use cart_store::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Cart Error: {source}")]
  Cart {
    #[from]
    source: CartError,
  },

  #[error("Inventory Client Error: {0}")]
  HttpClient(#[from] reqwest::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
