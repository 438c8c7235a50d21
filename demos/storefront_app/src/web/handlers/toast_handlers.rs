// demos/storefront_app/src/web/handlers/toast_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;

/// Hands pending toasts to the UI. Each toast is delivered once.
pub async fn drain_toasts_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let toasts = app_state.toasts.drain();
  HttpResponse::Ok().json(json!({ "toasts": toasts }))
}
