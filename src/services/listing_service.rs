// src/services/listing_service.rs
// DOCUMENTATION: Business logic for restaurant listings
// PURPOSE: Turn form parameters into a ranked, filtered listing ready for rendering

use crate::errors::AppError;
use crate::models::{build_query, city_preset, CityPreset, Listing, ListingItem, ListingParams};
use crate::services::{GooglePlacesClient, ListingCache};
use chrono::Utc;

pub struct ListingService;

impl ListingService {
    /// Build the listing for a set of form parameters
    /// DOCUMENTATION: Resolves the city and query, serves from cache when
    /// possible, otherwise searches, fetches per-place details, filters by
    /// review count and rating, and ranks by review count descending
    pub async fn build_listing(
        google_client: &GooglePlacesClient,
        cache: &ListingCache,
        params: &ListingParams,
    ) -> Result<Listing, AppError> {
        let (city, query) = Self::resolve_query(params)?;

        let cache_key = ListingCache::generate_key(params);
        if let Some(cached) = cache.get(&cache_key).await {
            match serde_json::from_str::<Listing>(&cached) {
                Ok(listing) => {
                    log::info!("Serving listing from cache: {}", cache_key);
                    return Ok(listing);
                }
                Err(e) => log::warn!("Discarding unreadable cache entry: {}", e),
            }
        }

        let summaries = google_client
            .search_text(&query, city, params.max_results)
            .await?;

        // Detail lookups are sequential; each one is a separately billed request
        let mut items = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            let details = google_client
                .place_details(&summary.id, Some(city.region_code))
                .await?;
            items.push(details.to_listing_item());
        }

        let items = Self::filter_and_rank(items, params.min_reviews, params.min_rating);
        log::info!(
            "Listing for '{}': {} of {} places kept after filtering",
            query,
            items.len(),
            summaries.len()
        );

        let listing = Listing {
            query,
            city: city.name_ar.to_string(),
            items,
            fetched_at: Utc::now(),
        };

        if let Ok(json) = serde_json::to_string(&listing) {
            cache.set(cache_key, json).await;
        }

        Ok(listing)
    }

    /// Resolve the city preset and the search query for the parameters
    /// DOCUMENTATION: A non-blank custom query wins; otherwise the query is
    /// composed from the category and city presets
    pub fn resolve_query(params: &ListingParams) -> Result<(&'static CityPreset, String), AppError> {
        let city = city_preset(&params.city).ok_or_else(|| {
            AppError::InvalidInput(format!("Unknown city '{}'", params.city))
        })?;

        let query = match params.custom_query_trimmed() {
            Some(custom) => custom.to_string(),
            None => build_query(&params.category, &params.city).ok_or_else(|| {
                AppError::InvalidInput(format!("Unknown category '{}'", params.category))
            })?,
        };

        Ok((city, query))
    }

    /// Filter by review count and rating, then rank by review count descending
    pub fn filter_and_rank(
        mut items: Vec<ListingItem>,
        min_reviews: u32,
        min_rating: Option<f32>,
    ) -> Vec<ListingItem> {
        items.retain(|item| item.rating_count >= min_reviews);

        if let Some(min) = min_rating {
            items.retain(|item| item.rating.unwrap_or(0.0) >= min);
        }

        items.sort_by(|a, b| b.rating_count.cmp(&a.rating_count));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, rating: Option<f32>, rating_count: u32) -> ListingItem {
        ListingItem {
            name: name.to_string(),
            rating,
            rating_count,
            address: None,
            phone: None,
            website: None,
            maps_uri: None,
            price_range: "غير محدد".to_string(),
            thursday_hours: "—".to_string(),
            family_friendly: "نعم (تقديري)".to_string(),
            signature_dish: None,
            crowd_note: "8:00 م – 11:00 م (تقديري)".to_string(),
        }
    }

    fn params(city: &str, category: &str) -> ListingParams {
        ListingParams {
            city: city.to_string(),
            category: category.to_string(),
            max_results: 15,
            min_reviews: 200,
            min_rating: None,
            custom_query: None,
        }
    }

    #[test]
    fn test_resolve_query_from_presets() {
        let (city, query) = ListingService::resolve_query(&params("riyadh", "burger")).unwrap();
        assert_eq!(city.key, "riyadh");
        assert_eq!(query, "أفضل مطاعم برجر في الرياض");
    }

    #[test]
    fn test_resolve_query_custom_override() {
        let mut p = params("jeddah", "pizza");
        p.custom_query = Some("  مطاعم على البحر في جدة  ".to_string());
        let (city, query) = ListingService::resolve_query(&p).unwrap();
        assert_eq!(city.key, "jeddah");
        assert_eq!(query, "مطاعم على البحر في جدة");
    }

    #[test]
    fn test_resolve_query_unknown_city() {
        let err = ListingService::resolve_query(&params("atlantis", "burger")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_resolve_query_unknown_category() {
        let err = ListingService::resolve_query(&params("riyadh", "sushi")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        // A custom query makes the category irrelevant
        let mut p = params("riyadh", "sushi");
        p.custom_query = Some("مطاعم سوشي في الرياض".to_string());
        assert!(ListingService::resolve_query(&p).is_ok());
    }

    #[test]
    fn test_filter_and_rank() {
        let items = vec![
            item("quiet", Some(4.8), 50),
            item("popular", Some(4.2), 5000),
            item("mid", Some(4.5), 800),
        ];

        let ranked = ListingService::filter_and_rank(items, 200, None);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "popular");
        assert_eq!(ranked[1].name, "mid");
    }

    #[test]
    fn test_filter_by_rating() {
        let items = vec![
            item("low", Some(3.9), 900),
            item("high", Some(4.6), 700),
            item("unrated", None, 800),
        ];

        let ranked = ListingService::filter_and_rank(items, 0, Some(4.0));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "high");
    }

    #[test]
    fn test_filter_keeps_all_when_thresholds_off() {
        let items = vec![item("a", None, 0), item("b", Some(1.0), 10)];
        let ranked = ListingService::filter_and_rank(items, 0, None);
        assert_eq!(ranked.len(), 2);
        // Still ranked by review count
        assert_eq!(ranked[0].name, "b");
    }
}
