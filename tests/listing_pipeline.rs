// tests/listing_pipeline.rs
// DOCUMENTATION: Integration test for the full fetch pipeline
// PURPOSE: Verify search, details, filtering and caching work together

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mataem::models::ListingParams;
use mataem::services::{GooglePlacesClient, ListingCache, ListingService};

fn details(id: &str, name: &str, count: u32) -> serde_json::Value {
    json!({
        "id": id,
        "displayName": { "text": name, "languageCode": "ar" },
        "formattedAddress": "شارع العليا، الرياض",
        "rating": 4.4,
        "userRatingCount": count,
        "regularOpeningHours": {
            "weekdayDescriptions": ["الخميس: 1:00 م – 12:00 ص"]
        }
    })
}

#[tokio::test]
async fn fetches_filters_and_caches_a_listing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "places": [
                { "id": "a", "displayName": { "text": "مطعم أ" }, "rating": 4.4, "userRatingCount": 900 },
                { "id": "b", "displayName": { "text": "مطعم ب" }, "rating": 4.0, "userRatingCount": 120 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/places/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details("a", "مطعم أ", 900)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/places/b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details("b", "مطعم ب", 120)))
        .expect(1)
        .mount(&server)
        .await;

    let client = GooglePlacesClient::with_base_url("test-key".to_string(), server.uri());
    let cache = ListingCache::new(60);
    let params = ListingParams {
        city: "riyadh".to_string(),
        category: "burger".to_string(),
        max_results: 15,
        min_reviews: 200,
        min_rating: None,
        custom_query: None,
    };

    let listing = ListingService::build_listing(&client, &cache, &params)
        .await
        .unwrap();

    assert_eq!(listing.query, "أفضل مطاعم برجر في الرياض");
    // The listing carries the city's Arabic display name
    assert_eq!(listing.city, "الرياض");
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].name, "مطعم أ");
    assert_eq!(listing.items[0].rating_count, 900);
    assert_eq!(listing.items[0].thursday_hours, "1:00 م – 12:00 ص");

    // Same parameters again: served from the cache, no new upstream calls
    let again = ListingService::build_listing(&client, &cache, &params)
        .await
        .unwrap();
    assert_eq!(again.city, "الرياض");
    assert_eq!(again.items.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}
