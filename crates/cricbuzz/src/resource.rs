// ABOUTME: Rate-limited HTTP fetching of homepage, summary and scorecard resources.
// ABOUTME: Handles URL validation, the global throttle, content-length limits, and charset decoding.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::error::Error;
use crate::limiter::RateLimiter;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using the charset from the content-type header.
    pub fn text_utf8(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        if let Some(charset) = part.trim().strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Issues GET requests under one shared [`RateLimiter`].
///
/// Clones share the limiter, so the cadence holds across every clone.
/// No retries: a transport failure is returned as a Network error.
#[derive(Debug, Clone)]
pub struct RateLimitedFetcher {
    http: reqwest::Client,
    limiter: Arc<RateLimiter>,
}

impl RateLimitedFetcher {
    pub fn new(http: reqwest::Client, limiter: Arc<RateLimiter>) -> Self {
        Self { http, limiter }
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Fetch the body bytes at `url`.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, Error> {
        Ok(self.fetch_resource(url).await?.body)
    }

    /// Fetch `url`, keeping status and content type alongside the body.
    pub async fn fetch_resource(&self, url: &str) -> Result<FetchResult, Error> {
        // Every call counts against the cadence, including ones that fail validation.
        self.limiter.acquire().await;
        validate_url(url)?;
        debug!(url = %url, "GET");

        let response = self.http.get(url).send().await.map_err(|e| {
            Error::network(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
        })?;

        if let Some(len) = response.content_length() {
            if len as usize > MAX_CONTENT_LENGTH {
                return Err(Error::network(
                    url,
                    "Fetch",
                    Some(anyhow::anyhow!("content too large")),
                ));
            }
        }

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_lowercase());

        let body = response.bytes().await.map_err(|e| {
            Error::network(
                url,
                "Fetch",
                Some(anyhow::anyhow!("failed to read body: {}", e)),
            )
        })?;

        if body.len() > MAX_CONTENT_LENGTH {
            return Err(Error::network(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }

        if !status.is_success() {
            return Err(Error::network(
                url,
                "Fetch",
                Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
            ));
        }

        Ok(FetchResult {
            status: status.as_u16(),
            url: url.to_string(),
            content_type,
            body,
        })
    }
}

fn validate_url(url: &str) -> Result<(), Error> {
    if url.is_empty() {
        return Err(Error::invalid_url(url, "Fetch", None));
    }

    let parsed = url::Url::parse(url).map_err(|e| {
        Error::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(Error::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn create_test_fetcher(interval: Duration) -> RateLimitedFetcher {
        let http = reqwest::Client::builder()
            .user_agent("test-agent")
            .build()
            .unwrap();
        RateLimitedFetcher::new(http, Arc::new(RateLimiter::new(interval)))
    }

    #[tokio::test]
    async fn test_fetch_ok_utf8() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html>hello</html>");
        });

        let fetcher = create_test_fetcher(Duration::from_millis(10));
        let result = fetcher.fetch_resource(&server.url("/test")).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert_eq!(result.text_utf8(), "<html>hello</html>");
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_network_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).body("not found");
        });

        let fetcher = create_test_fetcher(Duration::from_millis(10));
        let err = fetcher
            .fetch(&server.url("/missing"))
            .await
            .expect_err("should fail on 404");
        mock.assert();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_fetch_invalid_urls() {
        let fetcher = create_test_fetcher(Duration::from_millis(10));
        assert!(fetcher.fetch("").await.unwrap_err().is_invalid_url());
        assert!(fetcher.fetch("not a url").await.unwrap_err().is_invalid_url());
        assert!(fetcher
            .fetch("ftp://example.com/file")
            .await
            .unwrap_err()
            .is_invalid_url());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let fetcher = create_test_fetcher(Duration::from_millis(10));
        // Port 9 on localhost (discard) is closed in test environments.
        let err = fetcher
            .fetch("http://127.0.0.1:9/unreachable")
            .await
            .expect_err("connection should be refused");
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_sequential_fetches_respect_interval() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/tick");
            then.status(200).body("ok");
        });

        let interval = Duration::from_millis(80);
        let fetcher = create_test_fetcher(interval);
        let start = std::time::Instant::now();
        for _ in 0..3 {
            fetcher.fetch(&server.url("/tick")).await.unwrap();
        }

        mock.assert_hits(3);
        assert!(start.elapsed() >= interval * 2);
    }

    #[tokio::test]
    async fn test_failed_fetches_still_count() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/boom");
            then.status(500);
        });

        let interval = Duration::from_millis(80);
        let fetcher = create_test_fetcher(interval);
        let start = std::time::Instant::now();
        for _ in 0..3 {
            assert!(fetcher.fetch(&server.url("/boom")).await.is_err());
        }

        mock.assert_hits(3);
        assert!(start.elapsed() >= interval * 2);
    }

    #[tokio::test]
    async fn test_invalid_url_still_counts_against_interval() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/after");
            then.status(200).body("ok");
        });

        let fetcher = create_test_fetcher(Duration::from_millis(80));
        let interval = fetcher.limiter().interval();
        assert_eq!(interval, Duration::from_millis(80));

        let start = std::time::Instant::now();
        assert!(fetcher.fetch("not a url").await.unwrap_err().is_invalid_url());
        fetcher.fetch(&server.url("/after")).await.unwrap();

        mock.assert();
        assert!(start.elapsed() >= interval);
    }

    #[test]
    fn test_max_content_length_constant() {
        assert_eq!(MAX_CONTENT_LENGTH, 10 * 1024 * 1024);
    }

    #[test]
    fn test_extract_charset() {
        assert_eq!(
            extract_charset("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=\"ISO-8859-1\""),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(extract_charset("application/json"), None);
    }

    #[test]
    fn test_decode_body_with_charset() {
        let body: &[u8] = &[0x63, 0x61, 0x66, 0xe9];
        assert_eq!(decode_body(body, Some("text/html; charset=iso-8859-1")), "café");
        assert_eq!(decode_body(b"plain", Some("text/plain; charset=utf-8")), "plain");
    }
}
