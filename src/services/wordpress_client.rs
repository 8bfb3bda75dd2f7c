// src/services/wordpress_client.rs
// DOCUMENTATION: WordPress REST API client
// PURPOSE: Create or update draft posts over wp-json/wp/v2 with application password auth

use crate::errors::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Posts are always saved as drafts for editorial review before publishing
const DRAFT_STATUS: &str = "draft";

/// WordPress REST API client
/// DOCUMENTATION: Authenticates with a username and application password
/// (Users -> Profile -> Application Passwords in wp-admin)
pub struct WordPressClient {
    /// HTTP client for making requests
    client: Client,
    /// Site base URL, e.g. https://example.com
    base_url: String,
    /// WordPress username
    user: String,
    /// Application password for that user
    app_pass: String,
}

/// Request body for the posts endpoint
#[derive(Debug, Serialize)]
struct PostPayload<'a> {
    title: &'a str,
    content: &'a str,
    status: &'a str,
}

/// Relevant slice of the post object WordPress returns
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPost {
    /// Post id; reuse it to update the same draft later
    pub id: i64,
    #[serde(default)]
    pub status: String,
    /// Public permalink (points at a preview while the post is a draft)
    #[serde(default)]
    pub link: Option<String>,
}

impl WordPressClient {
    /// Create new WordPress client
    /// DOCUMENTATION: Initializes client with site credentials; requests
    /// time out after 60 seconds since shared hosts can be slow to save
    pub fn new(base_url: String, user: String, app_pass: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            user,
            app_pass,
        }
    }

    /// Create a draft post, or update an existing one when `post_id` is set
    /// DOCUMENTATION: POST {base}/wp-json/wp/v2/posts[/{id}]; WordPress
    /// treats a POST to an existing post id as an update
    ///
    /// # Arguments
    /// * `title` - Post title
    /// * `content_html` - Full HTML body of the post
    /// * `post_id` - Existing post to update, or None to create
    ///
    /// # Returns
    /// The saved post's id, status and permalink
    pub async fn create_or_update_draft(
        &self,
        title: &str,
        content_html: &str,
        post_id: Option<i64>,
    ) -> Result<DraftPost, AppError> {
        let url = self.posts_url(post_id);
        let payload = PostPayload {
            title,
            content: content_html,
            status: DRAFT_STATUS,
        };

        log::info!(
            "Saving WordPress draft '{}' ({})",
            title,
            post_id.map_or("new post".to_string(), |id| format!("post {}", id))
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.user, Some(&self.app_pass))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("WordPress request failed: {}", e);
                AppError::WordPressApi(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("WordPress API error {}: {}", status, body);
            return Err(AppError::WordPressApi(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let post: DraftPost = response.json().await.map_err(|e| {
            log::error!("Failed to parse WordPress response: {}", e);
            AppError::WordPressApi(format!("Parse error: {}", e))
        })?;

        log::info!("Draft saved: id={}, status={}", post.id, post.status);
        Ok(post)
    }

    /// Build the posts endpoint URL, tolerating a trailing slash on the base
    fn posts_url(&self, post_id: Option<i64>) -> String {
        let base = self.base_url.trim_end_matches('/');
        match post_id {
            Some(id) => format!("{}/wp-json/wp/v2/posts/{}", base, id),
            None => format!("{}/wp-json/wp/v2/posts", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_url() {
        let client = WordPressClient::new(
            "https://example.com".to_string(),
            "admin".to_string(),
            "xxxx yyyy".to_string(),
        );
        assert_eq!(
            client.posts_url(None),
            "https://example.com/wp-json/wp/v2/posts"
        );
        assert_eq!(
            client.posts_url(Some(42)),
            "https://example.com/wp-json/wp/v2/posts/42"
        );
    }

    #[test]
    fn test_posts_url_trailing_slash() {
        let client = WordPressClient::new(
            "https://example.com/".to_string(),
            "admin".to_string(),
            "xxxx yyyy".to_string(),
        );
        assert_eq!(
            client.posts_url(None),
            "https://example.com/wp-json/wp/v2/posts"
        );
    }

    #[test]
    fn test_draft_post_decoding() {
        let json = r#"{"id": 910, "status": "draft", "link": "https://example.com/?p=910", "type": "post"}"#;
        let post: DraftPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 910);
        assert_eq!(post.status, "draft");
        assert_eq!(post.link.as_deref(), Some("https://example.com/?p=910"));

        // link and status may be absent on minimal responses
        let sparse: DraftPost = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(sparse.id, 7);
        assert!(sparse.link.is_none());
    }
}
