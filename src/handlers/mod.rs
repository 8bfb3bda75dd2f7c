// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod listing;
pub mod pages;

pub use health::config as health_config;
pub use listing::config as listing_config;
