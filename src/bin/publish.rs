// src/bin/publish.rs
use anyhow::bail;
use clap::Parser;
use dotenv::dotenv;
use std::process;
use validator::Validate;

use mataem::config::Config;
use mataem::models::{Listing, ListingParams};
use mataem::services::{
    post_builder, GooglePlacesClient, ListingCache, ListingService, WordPressClient,
};

// --- ANSI colors for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Fetch top restaurants for a city and category, then save an Arabic
/// draft post to WordPress without opening the web form.
#[derive(Parser, Debug)]
#[command(name = "publish", version, about)]
struct Args {
    /// City preset key (riyadh, jeddah, dammam, dubai, abudhabi, sharjah)
    city: String,

    /// Category key (burger, pizza, shawarma, grills, seafood, italian,
    /// indian, lebanese, breakfast, coffee)
    category: String,

    /// Total places to fetch across pages (5-60)
    #[arg(long, default_value_t = 15)]
    max_results: u32,

    /// Minimum review count an item needs to stay in the listing
    #[arg(long, default_value_t = 200)]
    min_reviews: u32,

    /// Minimum rating filter (0-5)
    #[arg(long)]
    min_rating: Option<f32>,

    /// Custom Arabic text query overriding the category/city one
    #[arg(long)]
    query: Option<String>,

    /// Draft title (defaults to the query plus an auto-update suffix)
    #[arg(long)]
    title: Option<String>,

    /// Existing WordPress post id to update instead of creating
    #[arg(long)]
    post_id: Option<i64>,

    /// Fetch and print the generated HTML without saving to WordPress
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::from_env();

    if !config.places_configured() {
        bail!("GOOGLE_API_KEY must be set in .env");
    }

    let params = ListingParams {
        city: args.city.clone(),
        category: args.category.clone(),
        max_results: args.max_results,
        min_reviews: args.min_reviews,
        min_rating: args.min_rating,
        custom_query: args.query.clone(),
    };
    if let Err(e) = params.validate() {
        bail!("Invalid parameters: {}", e);
    }

    print_header();

    let google_client = GooglePlacesClient::new(config.google_api_key.clone());
    let cache = ListingCache::new(config.cache_ttl_seconds);

    println!("{}🔍 Fetching listing from Google Places...{}", CYAN, RESET);
    let listing = ListingService::build_listing(&google_client, &cache, &params).await?;
    println!(
        "{}✅ {} items after filtering for '{}'{}\n",
        GREEN,
        listing.items.len(),
        listing.query,
        RESET
    );

    if listing.items.is_empty() {
        println!(
            "{}⚠️  No items passed the filters. Lower --min-reviews or raise --max-results.{}",
            YELLOW, RESET
        );
        process::exit(1);
    }

    print_table(&listing);

    // A blank --title falls back to the default rather than saving an untitled draft
    let title = args
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .unwrap_or_else(|| post_builder::default_title(&listing.query));
    let content_html = post_builder::build_post_html(&listing);

    if args.dry_run {
        println!("\n{}📄 Dry run: generated post HTML follows{}\n", BOLD, RESET);
        println!("{}", content_html);
        return Ok(());
    }

    if !config.wordpress_configured() {
        bail!("WP_BASE_URL, WP_USER and WP_APP_PASS must be set in .env to publish");
    }

    println!(
        "\n{}🚀 Saving draft '{}' to {}...{}",
        CYAN, title, config.wp_base_url, RESET
    );
    let wordpress = WordPressClient::new(
        config.wp_base_url.clone(),
        config.wp_user.clone(),
        config.wp_app_pass.clone(),
    );
    let post = wordpress
        .create_or_update_draft(&title, &content_html, args.post_id)
        .await?;

    println!(
        "{}✅ Draft saved: id={}, status={}{}",
        GREEN, post.id, post.status, RESET
    );
    if let Some(link) = &post.link {
        println!("   {}", link);
    }

    Ok(())
}

fn print_header() {
    println!("{}╔══════════════════════════════════════════════════════╗{}", CYAN, RESET);
    println!("{}║   🍽️  Mataem Publisher (Google Places → WordPress)   ║{}", CYAN, RESET);
    println!("{}╚══════════════════════════════════════════════════════╝{}", CYAN, RESET);
}

fn print_table(listing: &Listing) {
    println!(
        "{:<4} {:<32} {:>8} {:>10} {:>16}",
        "#", "Name", "Rating", "Reviews", "Price"
    );
    println!("──────────────────────────────────────────────────────────────────────────");

    for (i, item) in listing.items.iter().enumerate() {
        let name: String = item.name.chars().take(30).collect();
        println!(
            "{:<4} {:<32} {:>8} {:>10} {:>16}",
            i + 1,
            name,
            item.rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string()),
            item.rating_count,
            item.price_range,
        );
    }

    println!("──────────────────────────────────────────────────────────────────────────");
}
