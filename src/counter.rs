//! Sequential run orchestration over the discovery and retrieval pipeline
//!
//! [`SeriesCounter`] owns the HTTP client, the title matcher, and a broadcast
//! channel for progress events. A run is a single sequential flow: enumerate
//! the archive (falling back to the catalog when it yields nothing), then
//! fetch and count each post with a politeness delay in between. Per-post
//! failures never escape the loop; they become zero-count results.

use crate::archive;
use crate::catalog;
use crate::client::HttpClient;
use crate::config::Config;
use crate::content;
use crate::error::Result;
use crate::report::RunReport;
use crate::series::SeriesMatcher;
use crate::text;
use crate::types::{DiscoverySource, Event, PostReference, PostResult};
use tokio::sync::broadcast;
use url::Url;

/// Capacity of the progress event channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Discovers the post series and aggregates word counts across it
pub struct SeriesCounter {
    config: Config,
    client: HttpClient,
    matcher: SeriesMatcher,
    events: broadcast::Sender<Event>,
}

impl SeriesCounter {
    /// Create a counter from the given configuration
    ///
    /// # Errors
    /// Returns an error when the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        Url::parse(&config.base_url)?;
        let client = HttpClient::new(&config)?;
        let matcher = SeriesMatcher::new()?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            config,
            client,
            matcher,
            events,
        })
    }

    /// The configuration this counter runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Subscribe to progress events
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    // Events are best-effort; send only fails when nobody is subscribed
    fn emit(&self, event: Event) {
        let _ = self.events.send(event);
    }

    /// Discover the series posts, sorted ascending by number
    ///
    /// Enumerates the archive and filters for series titles. When enumeration
    /// yields zero records the whole fallback catalog is substituted instead;
    /// a partially drained archive is used as-is, without backfilling.
    pub async fn discover_posts(&self) -> Vec<PostReference> {
        let entries = archive::enumerate_all(&self.client, &self.config).await;

        let (source, posts) = if entries.is_empty() {
            tracing::warn!("archive enumeration yielded nothing, using the fallback catalog");
            (
                DiscoverySource::Catalog,
                catalog::references(&self.config.fallback_catalog),
            )
        } else {
            (
                DiscoverySource::Archive,
                self.matcher.select_series_posts(&entries),
            )
        };

        tracing::info!(?source, posts = posts.len(), "discovery complete");
        self.emit(Event::Discovered {
            source,
            posts: posts.len(),
        });
        posts
    }

    /// Fetch and count a single post
    ///
    /// All failure paths resolve to a zero-count result; nothing propagates
    /// past this boundary, which also makes a failed retrieval
    /// indistinguishable from a genuinely empty post.
    pub async fn process_post(&self, post: &PostReference) -> PostResult {
        let body = content::fetch_post_body(&self.client, &self.config.base_url, &post.slug).await;
        let word_count = match body {
            Some(body) => text::word_count(&text::normalize(&body)),
            None => 0,
        };

        PostResult {
            number: post.number,
            title: post.title.clone(),
            slug: post.slug.clone(),
            word_count,
            url: format!("{}/p/{}", self.config.base_url, post.slug),
        }
    }

    /// Run the full pipeline and return the folded report
    ///
    /// Posts are processed one at a time with a fixed politeness delay
    /// between them; there is no cancellation and no global deadline.
    pub async fn run(&self) -> RunReport {
        let posts = self.discover_posts().await;
        let total = posts.len();
        let mut results = Vec::with_capacity(total);

        for (i, post) in posts.iter().enumerate() {
            let index = i + 1;
            self.emit(Event::PostStarted {
                index,
                total,
                number: post.number,
                title: post.title.clone(),
            });

            let result = self.process_post(post).await;
            if result.is_success() {
                tracing::info!(number = %post.number, words = result.word_count, "counted post");
                self.emit(Event::PostCounted {
                    index,
                    total,
                    number: post.number,
                    words: result.word_count,
                });
            } else {
                tracing::warn!(number = %post.number, slug = %post.slug, "post retrieval failed");
                self.emit(Event::PostFailed {
                    index,
                    total,
                    number: post.number,
                });
            }
            results.push(result);

            if index < total {
                tokio::time::sleep(self.config.post_delay).await;
            }
        }

        let report = RunReport::new(results);
        self.emit(Event::Finished {
            summary: report.summary.clone(),
        });
        report
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> Config {
        Config {
            base_url,
            page_delay: Duration::ZERO,
            post_delay: Duration::ZERO,
            retry: RetryConfig {
                initial_delay: Duration::from_millis(10),
                ..RetryConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn rejects_invalid_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(SeriesCounter::new(config).is_err());
    }

    #[tokio::test]
    async fn empty_enumeration_falls_back_to_the_whole_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/archive"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let config = test_config(server.uri());
        let catalog_size = config.fallback_catalog.len();
        let counter = SeriesCounter::new(config).unwrap();
        let mut events = counter.subscribe();

        let posts = counter.discover_posts().await;
        assert_eq!(posts.len(), catalog_size);

        match events.recv().await.unwrap() {
            Event::Discovered { source, posts } => {
                assert_eq!(source, DiscoverySource::Catalog);
                assert_eq!(posts, catalog_size);
            }
            other => panic!("expected Discovered, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn partial_enumeration_is_not_backfilled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/archive"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"title": "AI #1: Sydney and Bing", "slug": "ai-1-sydney-and-bing"},
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/archive"))
            .and(query_param("offset", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let counter = SeriesCounter::new(test_config(server.uri())).unwrap();
        let posts = counter.discover_posts().await;

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "ai-1-sydney-and-bing");
    }

    #[tokio::test]
    async fn failed_post_resolves_to_zero_count_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/posts/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/p/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let counter = SeriesCounter::new(test_config(server.uri())).unwrap();
        let reference = PostReference {
            number: crate::types::PostNumber::new(12),
            title: "AI #12: gone".to_string(),
            slug: "gone".to_string(),
        };

        let result = counter.process_post(&reference).await;
        assert_eq!(result.word_count, 0);
        assert!(!result.is_success());
        assert_eq!(result.number, reference.number);
    }
}
