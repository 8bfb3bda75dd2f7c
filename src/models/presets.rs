// src/models/presets.rs
// DOCUMENTATION: Preset tables for supported cities and restaurant categories
// PURPOSE: Static reference data driving the search form and query building

/// Search preset for a supported city
/// DOCUMENTATION: Center point, search radius and region for the Places
/// location bias, plus the Arabic display name used in queries and UI
#[derive(Debug, Clone, Copy)]
pub struct CityPreset {
    /// Stable form key (lowercase ASCII)
    pub key: &'static str,
    /// Center point latitude
    pub latitude: f64,
    /// Center point longitude
    pub longitude: f64,
    /// Location bias radius in meters
    pub radius_m: u32,
    /// CLDR region code sent to the Places API
    pub region_code: &'static str,
    /// Arabic display name
    pub name_ar: &'static str,
}

/// Restaurant category preset
/// DOCUMENTATION: Arabic label for the UI and the query phrase injected
/// into the text search (e.g. "مطاعم برجر" -> "أفضل مطاعم برجر في الرياض")
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Stable form key (lowercase ASCII)
    pub key: &'static str,
    /// Arabic label shown in the category select
    pub name_ar: &'static str,
    /// Arabic query phrase (the "what" part of the text query)
    pub query_ar: &'static str,
}

/// Supported cities, in form display order
/// Coordinates and radii are tuned per city; radius stays well under the
/// 50 km cap the Places API puts on circular location bias
pub const CITY_PRESETS: &[CityPreset] = &[
    CityPreset { key: "riyadh", latitude: 24.7136, longitude: 46.6753, radius_m: 30_000, region_code: "SA", name_ar: "الرياض" },
    CityPreset { key: "jeddah", latitude: 21.4858, longitude: 39.1925, radius_m: 30_000, region_code: "SA", name_ar: "جدة" },
    CityPreset { key: "dammam", latitude: 26.4207, longitude: 50.0888, radius_m: 30_000, region_code: "SA", name_ar: "الدمام" },
    CityPreset { key: "dubai", latitude: 25.2048, longitude: 55.2708, radius_m: 30_000, region_code: "AE", name_ar: "دبي" },
    CityPreset { key: "abudhabi", latitude: 24.4539, longitude: 54.3773, radius_m: 30_000, region_code: "AE", name_ar: "أبوظبي" },
    CityPreset { key: "sharjah", latitude: 25.3463, longitude: 55.4209, radius_m: 25_000, region_code: "AE", name_ar: "الشارقة" },
];

/// Supported categories, in form display order ("burger" is the default)
pub const CATEGORIES: &[Category] = &[
    Category { key: "burger", name_ar: "برجر", query_ar: "مطاعم برجر" },
    Category { key: "pizza", name_ar: "بيتزا", query_ar: "مطاعم بيتزا" },
    Category { key: "shawarma", name_ar: "شاورما", query_ar: "مطاعم شاورما" },
    Category { key: "grills", name_ar: "مشويات", query_ar: "مطاعم مشويات" },
    Category { key: "seafood", name_ar: "مأكولات بحرية", query_ar: "مطاعم مأكولات بحرية" },
    Category { key: "italian", name_ar: "إيطالي", query_ar: "مطاعم إيطالية" },
    Category { key: "indian", name_ar: "هندي", query_ar: "مطاعم هندية" },
    Category { key: "lebanese", name_ar: "لبناني", query_ar: "مطاعم لبنانية" },
    Category { key: "breakfast", name_ar: "فطور", query_ar: "مطاعم فطور" },
    Category { key: "coffee", name_ar: "قهوة", query_ar: "كافيهات" },
];

/// Look up a city preset by form key (case-insensitive)
pub fn city_preset(key: &str) -> Option<&'static CityPreset> {
    CITY_PRESETS
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(key.trim()))
}

/// Look up a category by form key (case-insensitive)
pub fn category(key: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(key.trim()))
}

/// Build the default Arabic text query for a category/city pair
/// DOCUMENTATION: Produces "أفضل {category phrase} في {city}", the query
/// listings are searched with when no custom query is given
pub fn build_query(category_key: &str, city_key: &str) -> Option<String> {
    let cat = category(category_key)?;
    let city = city_preset(city_key)?;
    Some(format!("أفضل {} في {}", cat.query_ar, city.name_ar))
}
