// src/models/listing.rs
// DOCUMENTATION: Core data structures for restaurant listings
// PURPOSE: Transient records held between fetch, preview and publish

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Decode an optional numeric form field, treating the empty string a
/// browser submits for a blank input as absent
fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// A single restaurant entry in a listing
/// DOCUMENTATION: Built from a Places details response; lives in memory
/// (and the listing cache) for the duration of one interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingItem {
    /// Restaurant display name (Arabic when available)
    pub name: String,

    /// Google rating (0-5)
    pub rating: Option<f32>,

    /// Number of user ratings; listings are filtered and sorted on this
    pub rating_count: u32,

    /// Formatted street address
    pub address: Option<String>,

    /// National phone number
    pub phone: Option<String>,

    /// Restaurant website URL
    pub website: Option<String>,

    /// Google Maps URL for the place
    pub maps_uri: Option<String>,

    /// Localized per-person price tier label (e.g. "25 – 50 ر.س")
    pub price_range: String,

    /// Opening hours for Thursday (start of the weekend rush)
    pub thursday_hours: String,

    /// Editorial field: family friendliness note
    pub family_friendly: String,

    /// Editorial field: signature dish, filled in by the editor
    pub signature_dish: Option<String>,

    /// Editorial field: busy hours note
    pub crowd_note: String,
}

/// A complete fetched listing for one city/category query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// The text query the listing was searched with
    pub query: String,

    /// Arabic display name of the city the search was biased to
    pub city: String,

    /// Filtered and sorted items, highest review count first
    pub items: Vec<ListingItem>,

    /// When the data was fetched from the Places API
    pub fetched_at: DateTime<Utc>,
}

/// Form parameters for building a listing preview
/// DOCUMENTATION: DTO for the search form (and the headless binary);
/// validation bounds match the browser form controls
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListingParams {
    /// City preset key
    pub city: String,

    /// Category preset key
    pub category: String,

    /// Maximum places to fetch (Places caps a single page at 20;
    /// pagination tops out at 60)
    #[serde(default = "default_max_results")]
    #[validate(range(min = 5, max = 60))]
    pub max_results: u32,

    /// Minimum review count an item needs to stay in the listing
    #[serde(default = "default_min_reviews")]
    #[validate(range(min = 0, max = 2000))]
    pub min_reviews: u32,

    /// Optional minimum rating filter
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default, deserialize_with = "optional_number")]
    pub min_rating: Option<f32>,

    /// Optional custom text query overriding the category/city one
    #[serde(default)]
    pub custom_query: Option<String>,
}

fn default_max_results() -> u32 {
    15
}

fn default_min_reviews() -> u32 {
    200
}

impl ListingParams {
    /// Custom query with surrounding whitespace stripped; empty form
    /// inputs count as absent
    pub fn custom_query_trimmed(&self) -> Option<&str> {
        self.custom_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// Form parameters for publishing a listing as a WordPress draft
/// DOCUMENTATION: Carries the same search parameters as ListingParams
/// (field-for-field; form encoding does not support flattening) plus the
/// draft title and an optional existing post id to update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PublishParams {
    pub city: String,

    pub category: String,

    #[serde(default = "default_max_results")]
    #[validate(range(min = 5, max = 60))]
    pub max_results: u32,

    #[serde(default = "default_min_reviews")]
    #[validate(range(min = 0, max = 2000))]
    pub min_reviews: u32,

    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default, deserialize_with = "optional_number")]
    pub min_rating: Option<f32>,

    #[serde(default)]
    pub custom_query: Option<String>,

    /// Draft post title
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Existing WordPress post id to update instead of creating
    #[serde(default, deserialize_with = "optional_number")]
    pub post_id: Option<i64>,
}

impl PublishParams {
    /// The search half of the publish form
    pub fn listing_params(&self) -> ListingParams {
        ListingParams {
            city: self.city.clone(),
            category: self.category.clone(),
            max_results: self.max_results,
            min_reviews: self.min_reviews,
            min_rating: self.min_rating,
            custom_query: self.custom_query.clone(),
        }
    }
}
