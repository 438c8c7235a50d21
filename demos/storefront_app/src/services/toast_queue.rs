// demos/storefront_app/src/services/toast_queue.rs

use cart_store::Notifier;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
  pub id: u64,
  pub level: &'static str,
  pub message: String,
}

#[derive(Debug)]
struct Inner {
  next_id: u64,
  pending: VecDeque<Toast>,
}

/// Notifier that queues user-facing messages until the UI fetches them.
///
/// Holds at most `capacity` toasts; when full the oldest one is dropped.
#[derive(Debug)]
pub struct ToastQueue {
  capacity: usize,
  inner: Mutex<Inner>,
}

impl ToastQueue {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity: capacity.max(1),
      inner: Mutex::new(Inner {
        next_id: 1,
        pending: VecDeque::new(),
      }),
    }
  }

  /// Removes and returns every pending toast, oldest first.
  pub fn drain(&self) -> Vec<Toast> {
    self.inner.lock().pending.drain(..).collect()
  }
}

impl Notifier for ToastQueue {
  fn error(&self, message: &str) {
    tracing::warn!(user_message = %message, "Queueing error toast.");
    let mut inner = self.inner.lock();
    let id = inner.next_id;
    inner.next_id += 1;
    if inner.pending.len() == self.capacity {
      inner.pending.pop_front();
    }
    inner.pending.push_back(Toast {
      id,
      level: "error",
      message: message.to_string(),
    });
  }
}
