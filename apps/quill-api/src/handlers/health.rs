//! Health check endpoint.

use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "quill-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
