// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, cache, and start the local HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use mataem::config::Config;
use mataem::handlers;
use mataem::services::{start_cleanup_task, ListingCache};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting mataem listing builder...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );
    if !config.places_configured() {
        log::warn!("GOOGLE_API_KEY is not set; fetching will fail until it is configured");
    }
    if !config.wordpress_configured() {
        log::warn!("WordPress credentials are incomplete; publishing is disabled");
    }

    // 4. Initialize cache so preview and publish share one fetch
    let cache = Arc::new(ListingCache::new(config.cache_ttl_seconds));
    log::info!(
        "Initialized listing cache (TTL: {}s)",
        config.cache_ttl_seconds
    );

    // Start background cleanup task (runs every 5 minutes)
    start_cleanup_task(cache.clone(), 300);
    log::info!("Started cache cleanup task (interval: 5 minutes)");

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    log::info!("Open http://{} in a browser to build a listing", server_addr);

    HttpServer::new(move || {
        App::new()
            // Application state (config and cache)
            .app_data(web::Data::new(config_clone.clone()))
            .app_data(web::Data::new(cache.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::listing_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
