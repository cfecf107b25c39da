//! Archive enumeration over the paginated listing endpoint
//!
//! Pages through the publication's archive API at increasing offsets until a
//! page comes back empty, accumulating every record. The whole listing is
//! drained before returning; nothing is streamed.

use crate::client::HttpClient;
use crate::config::Config;
use serde::Deserialize;

/// A raw record from the archive listing
///
/// The listing returns many more fields per post; only the title and slug
/// matter here, and both default to empty when absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArchiveEntry {
    /// Post title
    #[serde(default)]
    pub title: String,
    /// URL path segment
    #[serde(default)]
    pub slug: String,
}

/// Drain the archive listing page by page
///
/// A listing fetch that still fails after retries ends enumeration the same
/// way an empty page does: callers see a shorter (possibly empty) sequence
/// and cannot tell a dead endpoint from a drained archive. A politeness
/// delay separates page requests.
pub async fn enumerate_all(client: &HttpClient, config: &Config) -> Vec<ArchiveEntry> {
    let mut entries = Vec::new();
    let mut offset = 0;

    loop {
        let url = listing_url(&config.base_url, offset, config.page_size);
        let page: Vec<ArchiveEntry> = match client.get_json_with_retry(&url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, offset, "archive listing failed, ending enumeration");
                break;
            }
        };
        if page.is_empty() {
            break;
        }

        entries.extend(page);
        tracing::info!(fetched = entries.len(), offset, "fetched archive page");
        offset += config.page_size;
        tokio::time::sleep(config.page_delay).await;
    }

    entries
}

fn listing_url(base_url: &str, offset: usize, limit: usize) -> String {
    format!("{base_url}/api/v1/archive?sort=new&search=&offset={offset}&limit={limit}")
}
