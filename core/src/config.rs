// cart_store/src/config.rs

//! Store configuration: the persistence key and the language of user-facing messages.

use crate::error::{CartError, CartOperation};
use std::str::FromStr;

/// Storage key used by the storefront client since its first release.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Language of the messages handed to the `Notifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
  #[default]
  En,
  PtBr,
}

impl FromStr for Locale {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "en" | "en-us" | "en_us" => Ok(Locale::En),
      "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
      other => Err(format!("unsupported locale '{}'", other)),
    }
  }
}

/// User-facing message table for one locale.
///
/// Add and update report stock problems from two separate call sites; the
/// pt-BR wording differs between them by a trailing period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
  pub stock_exceeded_on_add: &'static str,
  pub stock_exceeded_on_update: &'static str,
  pub add_failed: &'static str,
  pub remove_failed: &'static str,
  pub update_failed: &'static str,
}

impl Messages {
  pub const EN: Messages = Messages {
    stock_exceeded_on_add: "requested quantity exceeds stock",
    stock_exceeded_on_update: "requested quantity exceeds stock",
    add_failed: "could not add product to cart",
    remove_failed: "could not remove product from cart",
    update_failed: "could not update product in cart",
  };

  pub const PT_BR: Messages = Messages {
    stock_exceeded_on_add: "Quantidade solicitada fora de estoque",
    stock_exceeded_on_update: "Quantidade solicitada fora de estoque.",
    add_failed: "Não foi possível adicionar o produto ao carrinho de compras.",
    remove_failed: "Não foi possível remover o produto do carrinho de compras.",
    update_failed: "Não foi possível atualizar o produto no carrinho de compras.",
  };

  pub fn for_locale(locale: Locale) -> &'static Messages {
    match locale {
      Locale::En => &Messages::EN,
      Locale::PtBr => &Messages::PT_BR,
    }
  }

  /// Picks the message a failed mutation surfaces to the user.
  /// Startup errors have no user-facing message.
  pub fn for_error(&self, err: &CartError) -> Option<&'static str> {
    match err {
      CartError::StockExceeded {
        operation: CartOperation::Update,
        ..
      } => Some(self.stock_exceeded_on_update),
      CartError::StockExceeded { .. } => Some(self.stock_exceeded_on_add),
      CartError::OperationFailed { operation, .. } => Some(self.generic_failure(*operation)),
      CartError::Restore { .. } => None,
    }
  }

  fn generic_failure(&self, operation: CartOperation) -> &'static str {
    match operation {
      CartOperation::Add => self.add_failed,
      CartOperation::Remove => self.remove_failed,
      CartOperation::Update => self.update_failed,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
  pub storage_key: String,
  pub locale: Locale,
}

impl Default for CartConfig {
  fn default() -> Self {
    Self {
      storage_key: DEFAULT_STORAGE_KEY.to_string(),
      locale: Locale::default(),
    }
  }
}

impl CartConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
    self.storage_key = key.into();
    self
  }

  pub fn with_locale(mut self, locale: Locale) -> Self {
    self.locale = locale;
    self
  }

  pub fn messages(&self) -> &'static Messages {
    Messages::for_locale(self.locale)
  }
}
