// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use crate::services::ListingCache;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

pub async fn health_check(cache: web::Data<Arc<ListingCache>>) -> impl Responder {
    let cache_stats = cache.stats().await;

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "mataem",
        "version": env!("CARGO_PKG_VERSION"),
        "cache": cache_stats
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
