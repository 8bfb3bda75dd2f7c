// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod listing;
pub mod presets;

pub use listing::*;
pub use presets::*;
