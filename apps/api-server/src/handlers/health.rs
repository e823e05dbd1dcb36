//! Banner and liveness endpoints.

use actix_web::HttpResponse;
use flexa_shared::dto::{BannerResponse, HealthResponse};

/// GET /
pub async fn banner() -> HttpResponse {
    HttpResponse::Ok().json(BannerResponse {
        message: "Hello from Fargate!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint - static liveness payload.
///
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}
