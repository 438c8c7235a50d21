// demos/storefront_app/src/services/mod.rs

//! Concrete collaborators for the cart store.

pub mod file_storage;
pub mod http_inventory;
pub mod seed;
pub mod toast_queue;

pub use file_storage::FileStorage;
pub use http_inventory::HttpInventory;
pub use toast_queue::{Toast, ToastQueue};
