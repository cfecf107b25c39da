//! Per-post content retrieval with a two-stage fallback
//!
//! Stage 1 asks the structured per-post endpoint for the rendered body.
//! Stage 2 scrapes the human-rendered page for the article container. The
//! stages are separate fallible functions composed first-success-wins; each
//! miss is logged with its typed error and the next stage tried. Neither
//! stage retries: a single lost post is cheap to skip.

use crate::client::HttpClient;
use crate::error::{Error, Result};
use scraper::{Html, Selector};
use serde::Deserialize;

/// Content-container selectors on the rendered page, in preference order
const CONTAINER_SELECTORS: [&str; 2] = ["div.body", "article"];

/// Structured post payload; only the rendered body is of interest
#[derive(Debug, Deserialize)]
struct ApiPost {
    body_html: Option<String>,
}

/// Fetch the HTML body of a post, or `None` when both stages come up empty
pub async fn fetch_post_body(client: &HttpClient, base_url: &str, slug: &str) -> Option<String> {
    match fetch_structured(client, base_url, slug).await {
        Ok(body) => return Some(body),
        Err(e) => {
            tracing::debug!(error = %e, slug, "structured endpoint miss, scraping the page");
        }
    }

    match fetch_rendered(client, base_url, slug).await {
        Ok(container) => container,
        Err(e) => {
            tracing::debug!(error = %e, slug, "page fetch failed");
            None
        }
    }
}

/// Stage 1: the structured per-post endpoint
///
/// Fails on transport errors, non-success statuses, malformed payloads, and
/// payloads without a body field.
async fn fetch_structured(client: &HttpClient, base_url: &str, slug: &str) -> Result<String> {
    let url = format!("{base_url}/api/v1/posts/{slug}");
    let post: ApiPost = client.get_json(&url).await?;
    post.body_html
        .ok_or_else(|| Error::MissingContent("body_html".to_string()))
}

/// Stage 2: scrape the rendered page for the article container
async fn fetch_rendered(
    client: &HttpClient,
    base_url: &str,
    slug: &str,
) -> Result<Option<String>> {
    let url = format!("{base_url}/p/{slug}");
    let page = client.get_text(&url).await?;
    Ok(extract_container(&page))
}

/// Locate the primary content container in a rendered page
///
/// Tries the publication's body-class selector first, then any article
/// element, returning the first match serialized back to markup.
pub fn extract_container(page: &str) -> Option<String> {
    let document = Html::parse_document(page);
    for selector in CONTAINER_SELECTORS {
        let selector = Selector::parse(selector).ok()?;
        if let Some(element) = document.select(&selector).next() {
            return Some(element.html());
        }
    }
    None
}
