// cart_store/src/error.rs
use anyhow::Error as AnyhowError;
use std::fmt;
use thiserror::Error;

use crate::model::ProductId;

/// The three mutations a `CartStore` exposes. Used to pick the generic
/// per-operation failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
  Add,
  Remove,
  Update,
}

impl fmt::Display for CartOperation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      CartOperation::Add => "add_product",
      CartOperation::Remove => "remove_product",
      CartOperation::Update => "update_product_amount",
    };
    f.write_str(name)
  }
}

#[derive(Debug, Error)]
pub enum CartError {
  /// User-correctable: the requested (or candidate) amount is above available stock.
  #[error("Requested amount {requested} of product {product_id} exceeds available stock {available} ({operation})")]
  StockExceeded {
    operation: CartOperation,
    product_id: ProductId,
    requested: i64,
    available: i64,
  },

  /// Catch-all for lookup failures, missing remove targets and persistence failures.
  #[error("Cart operation {operation} failed. Source: {source}")]
  OperationFailed {
    operation: CartOperation,
    #[source]
    source: AnyhowError,
  },

  /// Persisted state could not be read or parsed at startup.
  #[error("Could not restore cart from storage key '{key}'. Source: {source}")]
  Restore {
    key: String,
    #[source]
    source: AnyhowError,
  },
}

impl CartError {
  pub(crate) fn failed(operation: CartOperation, source: impl Into<AnyhowError>) -> Self {
    CartError::OperationFailed {
      operation,
      source: source.into(),
    }
  }

  /// The operation this error belongs to. `None` for startup errors.
  pub fn operation(&self) -> Option<CartOperation> {
    match self {
      CartError::StockExceeded { operation, .. } | CartError::OperationFailed { operation, .. } => Some(*operation),
      CartError::Restore { .. } => None,
    }
  }

  pub fn is_stock_exceeded(&self) -> bool {
    matches!(self, CartError::StockExceeded { .. })
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
