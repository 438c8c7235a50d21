// demos/storefront_app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use cart_store::{Cart, ProductId};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct UpdateAmountPayload {
  pub amount: i64,
}

/// Mutations always answer 200 with the current cart. Whether the operation
/// took effect is visible only in the cart itself and in `/toasts`.
fn cart_response(cart: Cart) -> HttpResponse {
  let total_units = cart.total_units();
  HttpResponse::Ok().json(json!({
      "cart": cart,
      "total_units": total_units,
  }))
}

pub async fn get_cart_handler(app_state: web::Data<AppState>) -> HttpResponse {
  cart_response(app_state.cart.cart())
}

#[instrument(name = "handler::add_product", skip(app_state))]
pub async fn add_product_handler(app_state: web::Data<AppState>, path: web::Path<ProductId>) -> HttpResponse {
  let product_id = path.into_inner();
  info!("Add to cart requested for product {}", product_id);
  app_state.cart.add_product(product_id).await;
  cart_response(app_state.cart.cart())
}

#[instrument(name = "handler::remove_product", skip(app_state))]
pub async fn remove_product_handler(app_state: web::Data<AppState>, path: web::Path<ProductId>) -> HttpResponse {
  let product_id = path.into_inner();
  info!("Removal requested for product {}", product_id);
  app_state.cart.remove_product(product_id).await;
  cart_response(app_state.cart.cart())
}

#[instrument(name = "handler::update_product_amount", skip(app_state))]
pub async fn update_product_amount_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  payload: web::Json<UpdateAmountPayload>,
) -> HttpResponse {
  let product_id = path.into_inner();
  info!("Amount {} requested for product {}", payload.amount, product_id);
  app_state.cart.update_product_amount(product_id, payload.amount).await;
  cart_response(app_state.cart.cart())
}
