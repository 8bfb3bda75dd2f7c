// src/services/post_builder.rs
// DOCUMENTATION: HTML builders for the WordPress post body
// PURPOSE: Render listing items as right-to-left Arabic cards inside a single wrapper

use crate::models::{Listing, ListingItem};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Default draft title for a query
pub fn default_title(query: &str) -> String {
    format!("{} — محدّث آليًا", query)
}

/// Render one restaurant card
/// DOCUMENTATION: Fixed label rows in a dir="rtl" block; inline styles
/// only, so the card renders the same in any WordPress theme
pub fn build_item_card(item: &ListingItem) -> String {
    let name = if item.name.trim().is_empty() {
        "مطعم".into()
    } else {
        encode_text(&item.name)
    };
    let address = encode_text(item.address.as_deref().unwrap_or("—"));
    let thursday = encode_text(&item.thursday_hours);
    let family = encode_text(&item.family_friendly);
    let price = encode_text(&item.price_range);
    let signature = match item.signature_dish.as_deref() {
        Some(dish) if !dish.trim().is_empty() => encode_text(dish),
        _ => "—".into(),
    };
    let crowd = encode_text(&item.crowd_note);

    let phone_html = match item.phone.as_deref() {
        Some(phone) => format!(
            "<a href=\"tel:{}\">{}</a>",
            encode_double_quoted_attribute(phone),
            encode_text(phone)
        ),
        None => "—".to_string(),
    };
    let maps_html = match item.maps_uri.as_deref() {
        Some(uri) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"nofollow noopener\">فتح في خرائط Google</a>",
            encode_double_quoted_attribute(uri)
        ),
        None => "—".to_string(),
    };
    let website_html = match item.website.as_deref() {
        Some(uri) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"nofollow noopener\">زيارة الموقع</a>",
            encode_double_quoted_attribute(uri)
        ),
        None => "—".to_string(),
    };

    format!(
        r#"<div dir="rtl" style="padding:16px;margin-bottom:16px;">
  <h3 style="margin:0 0 8px 0;font-size:20px;">{name}</h3>
  <div style="line-height:1.9;">
    <div><strong>العنوان:</strong> {address}</div>
    <div><strong>الهاتف:</strong> {phone_html}</div>
    <div><strong>الأوقات:</strong> {thursday}</div>
    <div><strong>مناسب للعوائل:</strong> {family}</div>
    <div><strong>السعر للشخص:</strong> {price}</div>
    <div><strong>الطبق المميز:</strong> {signature}</div>
    <div><strong>أوقات الزحمة:</strong> {crowd}</div>
    <div><strong>خرائط Google:</strong> {maps_html}</div>
    <div><strong>الموقع الإلكتروني:</strong> {website_html}</div>
  </div>
</div>"#
    )
}

/// Render the full post body for a listing
/// DOCUMENTATION: Cards wrapped in one dir="rtl" container with a freshness
/// line; the date reflects when the data was fetched, not when it was rendered
pub fn build_post_html(listing: &Listing) -> String {
    let date = listing.fetched_at.format("%Y-%m-%d");
    let cards: Vec<String> = listing.items.iter().map(build_item_card).collect();

    format!(
        "<div dir=\"rtl\">\n  <p>آخر تحديث: {}. المصدر: خرائط Google.</p>\n{}\n</div>",
        date,
        cards.join("\n")
    )
}
