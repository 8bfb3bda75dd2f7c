// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod listing_cache;
pub mod listing_service;
pub mod places_client;
pub mod post_builder;
pub mod wordpress_client;

pub use listing_cache::*;
pub use listing_service::*;
pub use places_client::*;
pub use post_builder::*;
pub use wordpress_client::*;
