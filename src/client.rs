//! HTTP client wrapper with browser-like headers and bounded retry
//!
//! One [`reqwest::Client`] is built per run, carrying a fixed browser-like
//! header set on every request (publications block obvious bots) and the
//! per-request timeout. The archive listing is the only call that retries;
//! everything else makes a single attempt and lets the caller fall back.

use crate::config::{Config, RetryConfig};
use crate::error::{Error, Result};
use crate::retry::retry_with_backoff;
use reqwest::Response;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use serde::de::DeserializeOwned;

const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
const ACCEPT_ENCODING_VALUE: &str = "gzip, deflate, br";

/// HTTP client for the publication's endpoints
pub struct HttpClient {
    client: reqwest::Client,
    retry: RetryConfig,
}

impl HttpClient {
    /// Build the client from the run configuration
    ///
    /// # Errors
    /// Returns an error when the configured User-Agent is not a valid header
    /// value or the underlying client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );
        headers.insert(
            ACCEPT_ENCODING,
            HeaderValue::from_static(ACCEPT_ENCODING_VALUE),
        );
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| Error::Config {
            message: format!("invalid User-Agent: {e}"),
            key: Some("user_agent".to_string()),
        })?;
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            retry: config.retry.clone(),
        })
    }

    /// GET a URL and return the response body as text (single attempt)
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get_checked(url).await?;
        Ok(response.text().await?)
    }

    /// GET a URL and deserialize the JSON body (single attempt)
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get_checked(url).await?;
        Ok(response.json().await?)
    }

    /// GET a URL and deserialize the JSON body, retrying transient failures
    ///
    /// Used only for the archive listing: losing enumeration loses the whole
    /// run, so it gets the bounded backoff ladder from [`RetryConfig`].
    pub async fn get_json_with_retry<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        retry_with_backoff(&self.retry, || self.get_json(url)).await
    }

    async fn get_checked(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> Config {
        Config {
            retry: RetryConfig {
                initial_delay: Duration::from_millis(10),
                ..RetryConfig::default()
            },
            ..Config::default()
        }
    }

    #[derive(Debug, Deserialize)]
    struct Greeting {
        message: String,
    }

    #[tokio::test]
    async fn sends_browser_like_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("upgrade-insecure-requests", "1"))
            .and(header("accept-language", "en-US,en;q=0.9"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config()).unwrap();
        let body = client
            .get_text(&format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config()).unwrap();
        let err = client
            .get_text(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        match err {
            Error::HttpStatus { status, .. } => assert_eq!(status, 404),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn retried_fetch_recovers_from_transient_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "hi"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config()).unwrap();
        let greeting: Greeting = client
            .get_json_with_retry(&format!("{}/flaky", server.uri()))
            .await
            .unwrap();
        assert_eq!(greeting.message, "hi");
    }

    #[tokio::test]
    async fn single_attempt_fetch_does_not_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/once"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config()).unwrap();
        let result: Result<Greeting> = client.get_json(&format!("{}/once", server.uri())).await;
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unprintable_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Config::default()
        };
        assert!(HttpClient::new(&config).is_err());
    }
}
