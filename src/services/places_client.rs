// src/services/places_client.rs
// DOCUMENTATION: Google Places API (New) client
// PURPOSE: Handle communication with places.googleapis.com for search and details

use crate::errors::AppError;
use crate::models::{CityPreset, ListingItem};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Language every request asks for; listings are Arabic end to end
const LANGUAGE_CODE: &str = "ar";

/// Hard cap the API puts on text search results across all pages
const MAX_SEARCH_RESULTS: u32 = 60;

/// Page size cap for a single searchText request
const MAX_PAGE_SIZE: u32 = 20;

/// Field mask for text search; nextPageToken must be requested
/// explicitly or pagination stops after the first page
const SEARCH_FIELD_MASK: &str =
    "places.id,places.displayName,places.rating,places.userRatingCount,nextPageToken";

/// Field mask for the per-place details lookup
const DETAILS_FIELD_MASK: &str = "id,displayName,formattedAddress,nationalPhoneNumber,\
websiteUri,googleMapsUri,priceLevel,rating,userRatingCount,currentOpeningHours,regularOpeningHours";

/// Google Places API (New) client
/// DOCUMENTATION: Handles authentication and API calls to Google Places
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for the Places API
    base_url: String,
}

/// Localized text wrapper used by the New API
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// Summary entry returned by places:searchText
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    /// Place resource id, used for the details lookup
    pub id: String,
    pub display_name: Option<LocalizedText>,
    /// Rating (0-5)
    pub rating: Option<f32>,
    /// Number of user ratings
    pub user_rating_count: Option<u32>,
}

/// Response envelope for places:searchText
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<PlaceSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Opening hours block; only the human-readable weekday lines are used
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}

/// Detailed place record from GET /v1/places/{id}
/// DOCUMENTATION: Mirrors the details field mask; priceLevel arrives as
/// an enum string (PRICE_LEVEL_INEXPENSIVE .. PRICE_LEVEL_VERY_EXPENSIVE)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    #[serde(default)]
    pub id: String,
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub national_phone_number: Option<String>,
    pub website_uri: Option<String>,
    pub google_maps_uri: Option<String>,
    pub price_level: Option<String>,
    pub rating: Option<f32>,
    pub user_rating_count: Option<u32>,
    pub current_opening_hours: Option<OpeningHours>,
    pub regular_opening_hours: Option<OpeningHours>,
}

/// Request body for places:searchText
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTextRequest<'a> {
    text_query: &'a str,
    language_code: &'a str,
    region_code: &'a str,
    max_result_count: u32,
    location_bias: LocationBias,
    included_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocationBias {
    circle: Circle,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Circle {
    center: LatLng,
    radius: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl GooglePlacesClient {
    /// Create new Places API client
    /// DOCUMENTATION: Initializes client with API key and the production
    /// endpoint; requests time out after 30 seconds
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://places.googleapis.com/v1".to_string())
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Search restaurants with a localized text query
    /// DOCUMENTATION: POST /v1/places:searchText biased to the city's
    /// circle; follows nextPageToken until `max_results` places are
    /// collected (the API caps a page at 20 and the total at 60) or a
    /// page comes back empty
    ///
    /// # Arguments
    /// * `query` - Arabic text query (e.g. "أفضل مطاعم برجر في الرياض")
    /// * `city` - City preset supplying location bias and region code
    /// * `max_results` - Total places to collect across pages
    ///
    /// # Returns
    /// Vector of PlaceSummary results, at most `max_results` long
    pub async fn search_text(
        &self,
        query: &str,
        city: &CityPreset,
        max_results: u32,
    ) -> Result<Vec<PlaceSummary>, AppError> {
        let url = format!("{}/places:searchText", self.base_url);
        let target = max_results.min(MAX_SEARCH_RESULTS);

        let mut places: Vec<PlaceSummary> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let remaining = target - places.len() as u32;
            let body = SearchTextRequest {
                text_query: query,
                language_code: LANGUAGE_CODE,
                region_code: city.region_code,
                max_result_count: remaining.min(MAX_PAGE_SIZE),
                location_bias: LocationBias {
                    circle: Circle {
                        center: LatLng {
                            latitude: city.latitude,
                            longitude: city.longitude,
                        },
                        radius: f64::from(city.radius_m),
                    },
                },
                included_type: "restaurant",
                page_token: page_token.as_deref(),
            };

            log::debug!(
                "Places text search: query='{}', region={}, page_size={}, paging={}",
                query,
                city.region_code,
                body.max_result_count,
                page_token.is_some()
            );

            let response = self
                .client
                .post(&url)
                .header("X-Goog-Api-Key", &self.api_key)
                .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    log::error!("Places search request failed: {}", e);
                    AppError::PlacesApi(format!("Request failed: {}", e))
                })?;

            let page: SearchTextResponse = Self::decode_response(response).await?;
            let fetched = page.places.len();
            places.extend(page.places);

            if places.len() as u32 >= target {
                places.truncate(target as usize);
                break;
            }

            // Stop when a page adds nothing; a stale token would otherwise loop forever
            if fetched == 0 {
                log::warn!(
                    "Places search page was empty at {} of {} results; stopping pagination",
                    places.len(),
                    target
                );
                break;
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        log::info!("Places search returned {} results for '{}'", places.len(), query);
        Ok(places)
    }

    /// Get detailed information about a specific place
    /// DOCUMENTATION: GET /v1/places/{id} with the details field mask,
    /// Arabic language code and the city's region code
    pub async fn place_details(
        &self,
        place_id: &str,
        region_code: Option<&str>,
    ) -> Result<PlaceDetails, AppError> {
        let url = format!("{}/places/{}", self.base_url, place_id);

        let mut params = vec![("languageCode", LANGUAGE_CODE)];
        if let Some(region) = region_code {
            params.push(("regionCode", region));
        }

        log::debug!("Places details lookup: place_id={}", place_id);

        let response = self
            .client
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", DETAILS_FIELD_MASK)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Places details request failed: {}", e);
                AppError::PlacesApi(format!("Request failed: {}", e))
            })?;

        Self::decode_response(response).await
    }

    /// Check status and decode a Places API response body
    async fn decode_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Places API error {}: {}", status, body);
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(AppError::RateLimitExceeded);
            }
            return Err(AppError::PlacesApi(format!("API error {}: {}", status, body)));
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to parse Places API response: {}", e);
            AppError::PlacesApi(format!("Parse error: {}", e))
        })
    }
}

impl PlaceDetails {
    /// Convert a details record into a listing item
    /// DOCUMENTATION: Maps API fields to the card model; fills the
    /// editorial placeholder fields the way published listings expect
    pub fn to_listing_item(&self) -> ListingItem {
        let weekday = self
            .regular_opening_hours
            .as_ref()
            .map(|h| h.weekday_descriptions.as_slice())
            .unwrap_or(&[]);

        ListingItem {
            name: self
                .display_name
                .as_ref()
                .map(|d| d.text.clone())
                .unwrap_or_default(),
            rating: self.rating,
            rating_count: self.user_rating_count.unwrap_or(0),
            address: non_empty(self.formatted_address.clone()),
            phone: non_empty(self.national_phone_number.clone()),
            website: non_empty(self.website_uri.clone()),
            maps_uri: non_empty(self.google_maps_uri.clone()),
            price_range: price_range_label(price_level_rank(self.price_level.as_deref()))
                .to_string(),
            thursday_hours: extract_thursday_hours(weekday),
            family_friendly: "نعم (تقديري)".to_string(),
            signature_dish: None,
            crowd_note: "8:00 م – 11:00 م (تقديري)".to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Map the New API price level enum to the legacy 0-4 rank
pub fn price_level_rank(level: Option<&str>) -> u8 {
    match level {
        Some("PRICE_LEVEL_INEXPENSIVE") => 1,
        Some("PRICE_LEVEL_MODERATE") => 2,
        Some("PRICE_LEVEL_EXPENSIVE") => 3,
        Some("PRICE_LEVEL_VERY_EXPENSIVE") => 4,
        // PRICE_LEVEL_FREE, PRICE_LEVEL_UNSPECIFIED or absent
        _ => 0,
    }
}

/// Per-person price tier label for a 0-4 rank
pub fn price_range_label(rank: u8) -> &'static str {
    match rank {
        0 => "غير محدد",
        1 => "25 – 50 ر.س",
        2 => "50 – 75 ر.س",
        3 => "75 – 120 ر.س",
        _ => "120+ ر.س",
    }
}

/// Extract Thursday opening hours from weekday description lines
/// DOCUMENTATION: Returns the times only (text after the weekday label);
/// falls back to the first line, then to "—" when hours are missing
pub fn extract_thursday_hours(weekday_descriptions: &[String]) -> String {
    let strip_label = |line: &str| -> String {
        match line.split_once(':') {
            Some((_, times)) => times.trim().to_string(),
            None => line.trim().to_string(),
        }
    };

    for line in weekday_descriptions {
        if line.contains("Thursday") || line.contains("الخميس") {
            return strip_label(line);
        }
    }

    weekday_descriptions
        .first()
        .map(|line| strip_label(line))
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_level_rank() {
        assert_eq!(price_level_rank(Some("PRICE_LEVEL_INEXPENSIVE")), 1);
        assert_eq!(price_level_rank(Some("PRICE_LEVEL_MODERATE")), 2);
        assert_eq!(price_level_rank(Some("PRICE_LEVEL_EXPENSIVE")), 3);
        assert_eq!(price_level_rank(Some("PRICE_LEVEL_VERY_EXPENSIVE")), 4);
        assert_eq!(price_level_rank(Some("PRICE_LEVEL_FREE")), 0);
        assert_eq!(price_level_rank(Some("PRICE_LEVEL_UNSPECIFIED")), 0);
        assert_eq!(price_level_rank(None), 0);
    }

    #[test]
    fn test_price_range_label() {
        assert_eq!(price_range_label(0), "غير محدد");
        assert_eq!(price_range_label(1), "25 – 50 ر.س");
        assert_eq!(price_range_label(2), "50 – 75 ر.س");
        assert_eq!(price_range_label(3), "75 – 120 ر.س");
        assert_eq!(price_range_label(4), "120+ ر.س");
        assert_eq!(price_range_label(9), "120+ ر.س");
    }

    #[test]
    fn test_extract_thursday_hours() {
        let arabic = vec![
            "السبت: 1:00 م – 12:00 ص".to_string(),
            "الخميس: 1:00 م – 2:00 ص".to_string(),
        ];
        assert_eq!(extract_thursday_hours(&arabic), "1:00 م – 2:00 ص");

        let english = vec![
            "Monday: 9:00 AM – 10:00 PM".to_string(),
            "Thursday: 9:00 AM – 1:00 AM".to_string(),
        ];
        assert_eq!(extract_thursday_hours(&english), "9:00 AM – 1:00 AM");

        // No Thursday line: fall back to the first entry
        let fallback = vec!["الأحد: 12:00 م – 11:00 م".to_string()];
        assert_eq!(extract_thursday_hours(&fallback), "12:00 م – 11:00 م");

        let unlabeled = vec!["مفتوح 24 ساعة".to_string()];
        assert_eq!(extract_thursday_hours(&unlabeled), "مفتوح 24 ساعة");

        assert_eq!(extract_thursday_hours(&[]), "—");
    }

    #[test]
    fn test_search_response_decoding() {
        let json = r#"{
            "places": [
                {"id": "ChIJabc", "displayName": {"text": "مطعم البيك", "languageCode": "ar"}, "rating": 4.6, "userRatingCount": 12000}
            ],
            "nextPageToken": "tok123"
        }"#;

        let parsed: SearchTextResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.places.len(), 1);
        assert_eq!(parsed.places[0].id, "ChIJabc");
        assert_eq!(parsed.places[0].display_name.as_ref().unwrap().text, "مطعم البيك");
        assert_eq!(parsed.places[0].user_rating_count, Some(12000));
        assert_eq!(parsed.next_page_token.as_deref(), Some("tok123"));

        let empty: SearchTextResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.places.is_empty());
        assert!(empty.next_page_token.is_none());
    }

    #[test]
    fn test_to_listing_item() {
        let details = PlaceDetails {
            id: "ChIJ123".to_string(),
            display_name: Some(LocalizedText {
                text: "مطعم الرومانسية".to_string(),
                language_code: Some("ar".to_string()),
            }),
            formatted_address: Some("طريق الملك فهد، الرياض".to_string()),
            national_phone_number: Some("011 123 4567".to_string()),
            website_uri: Some("https://example.sa".to_string()),
            google_maps_uri: Some("https://maps.google.com/?cid=1".to_string()),
            price_level: Some("PRICE_LEVEL_MODERATE".to_string()),
            rating: Some(4.4),
            user_rating_count: Some(5400),
            current_opening_hours: None,
            regular_opening_hours: Some(OpeningHours {
                weekday_descriptions: vec!["الخميس: 11:00 ص – 2:00 ص".to_string()],
            }),
        };

        let item = details.to_listing_item();
        assert_eq!(item.name, "مطعم الرومانسية");
        assert_eq!(item.rating, Some(4.4));
        assert_eq!(item.rating_count, 5400);
        assert_eq!(item.address.as_deref(), Some("طريق الملك فهد، الرياض"));
        assert_eq!(item.phone.as_deref(), Some("011 123 4567"));
        assert_eq!(item.price_range, "50 – 75 ر.س");
        assert_eq!(item.thursday_hours, "11:00 ص – 2:00 ص");
        assert_eq!(item.family_friendly, "نعم (تقديري)");
        assert!(item.signature_dish.is_none());
    }

    #[test]
    fn test_to_listing_item_sparse_details() {
        let details = PlaceDetails {
            id: "ChIJ456".to_string(),
            website_uri: Some("   ".to_string()),
            ..Default::default()
        };

        let item = details.to_listing_item();
        assert_eq!(item.name, "");
        assert_eq!(item.rating_count, 0);
        assert!(item.website.is_none());
        assert_eq!(item.price_range, "غير محدد");
        assert_eq!(item.thursday_hours, "—");
    }
}
