// src/handlers/pages.rs
// DOCUMENTATION: Server-rendered HTML pages
// PURPOSE: Right-to-left Arabic pages for the fetch/preview/publish workflow

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Listing, ListingParams, CATEGORIES, CITY_PRESETS};
use crate::services::post_builder;
use crate::services::wordpress_client::DraftPost;
use html_escape::{encode_double_quoted_attribute, encode_text};

const PAGE_TITLE: &str = "قائمة المطاعم (Google Places → WordPress)";

/// Shared document shell with inline styles; pages are served only on
/// localhost so there are no external assets to load
fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{PAGE_TITLE}</title>
  <style>
    body {{ font-family: "Segoe UI", Tahoma, Arial, sans-serif; background: #f7f7f5; color: #222; margin: 0; }}
    main {{ max-width: 880px; margin: 24px auto; padding: 0 16px; }}
    h1 {{ font-size: 24px; }}
    .panel {{ background: #fff; border: 1px solid #ddd; border-radius: 8px; padding: 20px; margin-bottom: 20px; }}
    .row {{ margin-bottom: 12px; }}
    label {{ display: block; margin-bottom: 4px; font-weight: 600; }}
    input, select {{ padding: 8px; border: 1px solid #ccc; border-radius: 4px; width: 100%; max-width: 320px; box-sizing: border-box; }}
    button {{ background: #1a73e8; color: #fff; border: none; border-radius: 4px; padding: 10px 20px; font-size: 15px; cursor: pointer; }}
    button:hover {{ background: #1558b0; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border: 1px solid #ddd; padding: 8px; text-align: right; font-size: 14px; }}
    th {{ background: #fafafa; }}
    .notice {{ background: #fff3cd; border: 1px solid #ffe08a; border-radius: 4px; padding: 10px 14px; margin-bottom: 16px; }}
    .success {{ background: #d9f2e3; border: 1px solid #9fd8b6; border-radius: 4px; padding: 10px 14px; margin-bottom: 16px; }}
    .error {{ background: #fdecea; border: 1px solid #f5b7b1; border-radius: 4px; padding: 10px 14px; margin-bottom: 16px; }}
    .muted {{ color: #777; font-size: 13px; }}
    a {{ color: #1a73e8; }}
  </style>
</head>
<body>
  <main>
{body}
  </main>
</body>
</html>"#
    )
}

fn hidden_field(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
        name,
        encode_double_quoted_attribute(value)
    )
}

fn link_cell(uri: Option<&str>, label: &str) -> String {
    match uri {
        Some(uri) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            encode_double_quoted_attribute(uri),
            label
        ),
        None => "—".to_string(),
    }
}

/// The search form
/// DOCUMENTATION: City/category selects come from the presets; numeric
/// bounds match the DTO validation so the browser catches bad values first
pub fn index_page(config: &Config) -> String {
    let mut notices = String::new();
    if !config.places_configured() {
        notices.push_str(
            "<div class=\"notice\">لم يتم ضبط GOOGLE_API_KEY — أضفه إلى ملف .env ثم أعد تشغيل الخدمة.</div>\n",
        );
    }
    if !config.wordpress_configured() {
        notices.push_str(
            "<div class=\"notice\">إعدادات ووردبريس غير مكتملة (WP_BASE_URL, WP_USER, WP_APP_PASS) — المعاينة تعمل لكن النشر معطّل.</div>\n",
        );
    }

    let city_options: String = CITY_PRESETS
        .iter()
        .map(|c| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                c.key,
                if c.key == "riyadh" { " selected" } else { "" },
                c.name_ar
            )
        })
        .collect();

    let category_options: String = CATEGORIES
        .iter()
        .map(|c| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                c.key,
                if c.key == "burger" { " selected" } else { "" },
                c.name_ar
            )
        })
        .collect();

    let body = format!(
        r#"<h1>🍽️ قوائم مطاعم تلقائية — Google Places → WordPress (Draft)</h1>
<p>اختر المدينة والفئة، اعرض المعاينة، ثم انشر المقال كمسودة في ووردبريس.</p>
{notices}<div class="panel">
  <form method="post" action="/preview">
    <div class="row">
      <label for="city">المدينة</label>
      <select id="city" name="city">{city_options}</select>
    </div>
    <div class="row">
      <label for="category">الفئة</label>
      <select id="category" name="category">{category_options}</select>
    </div>
    <div class="row">
      <label for="max_results">أقصى عدد نتائج (حتى 60)</label>
      <input type="number" id="max_results" name="max_results" value="15" min="5" max="60" step="1">
    </div>
    <div class="row">
      <label for="min_reviews">أقل عدد مراجعات للاعتماد</label>
      <input type="number" id="min_reviews" name="min_reviews" value="200" min="0" max="2000" step="50">
    </div>
    <div class="row">
      <label for="min_rating">أقل تقييم (اختياري)</label>
      <input type="number" id="min_rating" name="min_rating" min="0" max="5" step="0.1">
    </div>
    <div class="row">
      <label for="custom_query">استعلام مخصص (اختياري)</label>
      <input type="text" id="custom_query" name="custom_query">
    </div>
    <button type="submit">جلب النتائج من خرائط Google</button>
  </form>
</div>"#
    );

    layout(&body)
}

/// Results table, card preview and the publish form
/// DOCUMENTATION: The publish form carries the search parameters back as
/// hidden fields so publishing re-reads the exact cached listing
pub fn preview_page(params: &ListingParams, listing: &Listing) -> String {
    let count = listing.items.len();
    let query = encode_text(&listing.query);

    if listing.items.is_empty() {
        let body = format!(
            r#"<h1>المعاينة</h1>
<p>🔎 <strong>الاستعلام:</strong> {query}</p>
<div class="notice">لم يتم العثور على عناصر بعد شروط الفلترة. جرب خفض حد المراجعات أو زيادة عدد النتائج.</div>
<p><a href="/">عودة إلى النموذج</a></p>"#
        );
        return layout(&body);
    }

    let rows: String = listing
        .items
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                encode_text(&item.name),
                item.rating
                    .map(|r| format!("{:.1}", r))
                    .unwrap_or_else(|| "—".to_string()),
                item.rating_count,
                encode_text(&item.price_range),
                encode_text(item.phone.as_deref().unwrap_or("—")),
                encode_text(item.address.as_deref().unwrap_or("—")),
                link_cell(item.maps_uri.as_deref(), "فتح"),
                link_cell(item.website.as_deref(), "زيارة"),
            )
        })
        .collect();

    let cards = post_builder::build_post_html(listing);
    let default_title = post_builder::default_title(&listing.query);

    let hidden = [
        hidden_field("city", &params.city),
        hidden_field("category", &params.category),
        hidden_field("max_results", &params.max_results.to_string()),
        hidden_field("min_reviews", &params.min_reviews.to_string()),
        hidden_field(
            "min_rating",
            &params
                .min_rating
                .map(|r| r.to_string())
                .unwrap_or_default(),
        ),
        hidden_field("custom_query", params.custom_query.as_deref().unwrap_or("")),
    ]
    .join("\n    ");

    let body = format!(
        r#"<h1>المعاينة</h1>
<div class="success">تم الجلب بنجاح. عدد العناصر بعد الفلترة: {count}</div>
<p>🔎 <strong>الاستعلام:</strong> {query}</p>
<div class="panel">
  <table>
    <tr><th>الاسم</th><th>التقييم</th><th>عدد المراجعات</th><th>السعر للفرد</th><th>الهاتف</th><th>العنوان</th><th>خرائط Google</th><th>الموقع</th></tr>
{rows}  </table>
</div>
<h2>معاينة HTML</h2>
<p class="muted">هذه هي البطاقات التي سيتم حقنها في المقال.</p>
<div class="panel">
{cards}
</div>
<h2>نشر إلى ووردبريس</h2>
<div class="panel">
  <form method="post" action="/publish">
    {hidden}
    <div class="row">
      <label for="title">عنوان المقال</label>
      <input type="text" id="title" name="title" value="{title}" maxlength="200">
    </div>
    <div class="row">
      <label for="post_id">معرّف مقال لتحديثه (اختياري)</label>
      <input type="number" id="post_id" name="post_id" min="1">
    </div>
    <button type="submit">انشر كمسودة في ووردبريس</button>
  </form>
</div>
<p><a href="/">عودة إلى النموذج</a></p>"#,
        title = encode_double_quoted_attribute(&default_title),
    );

    layout(&body)
}

/// Confirmation page after a draft is saved
pub fn published_page(post: &DraftPost) -> String {
    let link = match post.link.as_deref() {
        Some(link) => format!(
            "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">فتح المسودة في الموقع</a></p>\n",
            encode_double_quoted_attribute(link)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>النشر</h1>
<div class="success">تم إنشاء المسودة! المعرف: {id} — الحالة: {status}</div>
{link}<p><a href="/">عودة إلى النموذج</a></p>"#,
        id = post.id,
        status = encode_text(&post.status),
        link = link,
    );

    layout(&body)
}

/// Error page with a localized hint and the technical detail underneath
pub fn error_page(error: &AppError) -> String {
    let hint = match error {
        AppError::EmptyListing => {
            "لم يتم العثور على عناصر بعد شروط الفلترة. جرب خفض حد المراجعات أو زيادة عدد النتائج."
        }
        AppError::RateLimitExceeded => {
            "تم تجاوز حد الطلبات المسموح به لواجهة Google. انتظر قليلًا ثم أعد المحاولة."
        }
        AppError::PlacesApi(_) => "حدث خطأ أثناء الجلب من خرائط Google.",
        AppError::WordPressApi(_) => "فشل النشر إلى ووردبريس.",
        AppError::InvalidInput(_) | AppError::ValidationError(_) => {
            "المدخلات غير صحيحة. تحقق من النموذج وأعد المحاولة."
        }
    };

    let body = format!(
        r#"<h1>حدث خطأ</h1>
<div class="error">{hint}</div>
<p class="muted" dir="ltr">{detail}</p>
<p><a href="/">عودة إلى النموذج</a></p>"#,
        hint = hint,
        detail = encode_text(&error.to_string()),
    );

    layout(&body)
}
