// src/handlers/listing.rs
// DOCUMENTATION: HTTP handlers for the listing workflow
// PURPOSE: Parse forms, call services, render pages

use crate::config::Config;
use crate::errors::AppError;
use crate::handlers::pages;
use crate::models::{ListingParams, PublishParams};
use crate::services::{
    post_builder, GooglePlacesClient, ListingCache, ListingService, WordPressClient,
};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// GET /
/// The search form
pub async fn index(config: web::Data<Config>) -> impl Responder {
    html(pages::index_page(&config))
}

/// POST /preview
/// Fetch the listing and render the results table with a card preview
pub async fn preview(
    config: web::Data<Config>,
    cache: web::Data<Arc<ListingCache>>,
    form: web::Form<ListingParams>,
) -> Result<impl Responder, AppError> {
    // Validate request
    if let Err(e) = form.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    if !config.places_configured() {
        return Err(AppError::InvalidInput(
            "GOOGLE_API_KEY is not configured".to_string(),
        ));
    }

    let google_client = GooglePlacesClient::new(config.google_api_key.clone());
    let listing = ListingService::build_listing(&google_client, cache.get_ref(), &form).await?;

    Ok(html(pages::preview_page(&form, &listing)))
}

/// POST /publish
/// Re-read the listing (cached by the preview) and save it as a draft
pub async fn publish(
    config: web::Data<Config>,
    cache: web::Data<Arc<ListingCache>>,
    form: web::Form<PublishParams>,
) -> Result<impl Responder, AppError> {
    // Validate request
    if let Err(e) = form.validate() {
        return Err(AppError::ValidationError(e.to_string()));
    }

    // The length check counts whitespace; the trimmed title is what gets saved
    let title = form.title.trim();
    if title.is_empty() {
        return Err(AppError::ValidationError(
            "title: must not be blank".to_string(),
        ));
    }

    if !config.places_configured() {
        return Err(AppError::InvalidInput(
            "GOOGLE_API_KEY is not configured".to_string(),
        ));
    }
    if !config.wordpress_configured() {
        return Err(AppError::InvalidInput(
            "WordPress credentials are not fully configured (WP_BASE_URL, WP_USER, WP_APP_PASS)"
                .to_string(),
        ));
    }

    let params = form.listing_params();
    let google_client = GooglePlacesClient::new(config.google_api_key.clone());
    let listing = ListingService::build_listing(&google_client, cache.get_ref(), &params).await?;

    if listing.items.is_empty() {
        return Err(AppError::EmptyListing);
    }

    let content_html = post_builder::build_post_html(&listing);
    let wordpress = WordPressClient::new(
        config.wp_base_url.clone(),
        config.wp_user.clone(),
        config.wp_app_pass.clone(),
    );
    let post = wordpress
        .create_or_update_draft(title, &content_html, form.post_id)
        .await?;

    Ok(html(pages::published_page(&post)))
}

/// Configuration for listing routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/preview", web::post().to(preview))
        .route("/publish", web::post().to(publish));
}
