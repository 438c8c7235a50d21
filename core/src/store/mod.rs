// cart_store/src/store/mod.rs

//! The `CartStore`: construction and listeners in `definition`, the
//! result-returning operations in `execution`, and the notifier-facing
//! operations in `boundary`.

pub mod boundary;
pub mod definition;
pub mod execution;
pub mod state;

pub use definition::{CartServices, CartStore, ChangeListener};
pub use state::CartState;
