// demos/storefront_app/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
          .route(
            "/items/{product_id}",
            web::post().to(crate::web::handlers::cart_handlers::add_product_handler),
          )
          .route(
            "/items/{product_id}",
            web::put().to(crate::web::handlers::cart_handlers::update_product_amount_handler),
          )
          .route(
            "/items/{product_id}",
            web::delete().to(crate::web::handlers::cart_handlers::remove_product_handler),
          ),
      )
      // Pending user-facing errors
      .route(
        "/toasts",
        web::get().to(crate::web::handlers::toast_handlers::drain_toasts_handler),
      ),
  );
}
