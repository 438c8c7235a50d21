// demos/storefront_app/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod toast_handlers;
