//! HTTP handlers and route configuration.

mod auth;
mod health;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(health::banner))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                // Auth routes
                .service(web::scope("/auth").route("/login", web::post().to(auth::login))),
        );
}
