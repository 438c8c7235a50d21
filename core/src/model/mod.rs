// cart_store/src/model/mod.rs

//! Data carried by the cart: catalog products, stock figures and the cart itself.

pub mod cart;
pub mod product;

pub use cart::Cart;
pub use product::{Product, ProductDetails, ProductId, Stock};
