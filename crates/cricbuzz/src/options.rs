// ABOUTME: Configuration options for the Cricbuzz client including Endpoints, Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::time::Duration;

use crate::client::Client;

/// Production homepage carrying the live-match navigation.
pub const CRICBUZZ_URL: &str = "https://www.cricbuzz.com";
/// Match summary (JSON) endpoint; the numeric match id is appended.
pub const CRICBUZZ_MATCH_API: &str = "https://www.cricbuzz.com/api/mcenter/comm/";
/// Match scorecard (markup) endpoint; the numeric match id is appended.
pub const CRICBUZZ_SCORECARD_API: &str = "https://www.cricbuzz.com/api/mcenter/scorecard/";

/// Minimum gap between the start of two requests.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(1);

/// The three read-only endpoints the pipeline talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub homepage: String,
    pub match_api: String,
    pub scorecard_api: String,
}

impl Endpoints {
    /// The public Cricbuzz endpoints.
    pub fn cricbuzz() -> Self {
        Self {
            homepage: CRICBUZZ_URL.to_string(),
            match_api: CRICBUZZ_MATCH_API.to_string(),
            scorecard_api: CRICBUZZ_SCORECARD_API.to_string(),
        }
    }

    /// Derives all endpoints from one origin, keeping the Cricbuzz path layout.
    ///
    /// `from_base("http://127.0.0.1:8080/")` gives a homepage of
    /// `http://127.0.0.1:8080` and APIs under `/api/mcenter/...`.
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            homepage: base.to_string(),
            match_api: format!("{}/api/mcenter/comm/", base),
            scorecard_api: format!("{}/api/mcenter/scorecard/", base),
        }
    }

    pub fn match_url(&self, match_id: u32) -> String {
        format!("{}{}", self.match_api, match_id)
    }

    pub fn scorecard_url(&self, match_id: u32) -> String {
        format!("{}{}", self.scorecard_api, match_id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::cricbuzz()
    }
}

/// Configuration options for the Cricbuzz client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub request_interval: Duration,
    pub endpoints: Endpoints,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("crictty/{}", env!("CARGO_PKG_VERSION")),
            request_interval: DEFAULT_REQUEST_INTERVAL,
            endpoints: Endpoints::default(),
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the per-request transport deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the minimum interval between request starts.
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.opts.request_interval = interval;
        self
    }

    /// Point the client at different endpoints.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.opts.endpoints = endpoints;
        self
    }

    /// Shorthand for `endpoints(Endpoints::from_base(base))`.
    pub fn base_url(self, base: &str) -> Self {
        self.endpoints(Endpoints::from_base(base))
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_base_trims_trailing_slash() {
        let e = Endpoints::from_base("http://127.0.0.1:8080/");
        assert_eq!(e.homepage, "http://127.0.0.1:8080");
        assert_eq!(e.match_url(42), "http://127.0.0.1:8080/api/mcenter/comm/42");
        assert_eq!(
            e.scorecard_url(42),
            "http://127.0.0.1:8080/api/mcenter/scorecard/42"
        );
    }

    #[test]
    fn defaults_point_at_cricbuzz() {
        let opts = Options::default();
        assert_eq!(opts.endpoints.homepage, CRICBUZZ_URL);
        assert_eq!(opts.endpoints.match_url(7), "https://www.cricbuzz.com/api/mcenter/comm/7");
        assert_eq!(opts.request_interval, Duration::from_secs(1));
        assert!(opts.user_agent.starts_with("crictty/"));
    }
}
