// cart_store/src/services/notifier.rs

use super::Notifier;
use tracing::{event, Level};

/// Notifier that only writes user-facing errors to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
  fn error(&self, message: &str) {
    event!(Level::WARN, user_message = %message, "Cart error reported to user.");
  }
}
