// src/lib.rs
// DOCUMENTATION: Library root shared by the server and the publish binary
// PURPOSE: Expose config, models, services and handlers as one crate

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
