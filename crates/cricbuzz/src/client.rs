// ABOUTME: The main Client struct that fetches Cricbuzz resources and resolves them into MatchInfo.
// ABOUTME: Provides async summary(), scorecard(), resolve(), discover() and live_matches() methods.

use std::sync::Arc;

use chrono::Utc;
use crictty_scorecard::{
    discover_live_matches, extract_scorecard, InningsRecord, LiveMatchEntry, MatchInfo,
    MatchSummary,
};
use tracing::{debug, warn};

use crate::error::Error;
use crate::limiter::RateLimiter;
use crate::options::{ClientBuilder, Endpoints, Options};
use crate::resource::RateLimitedFetcher;

/// Cricbuzz client. Every request it issues goes through one shared throttle.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    fetcher: RateLimitedFetcher,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .unwrap_or_else(|e| {
                    warn!(error = %e, "falling back to default HTTP client");
                    reqwest::Client::new()
                })
        });

        let limiter = Arc::new(RateLimiter::new(opts.request_interval));
        let fetcher = RateLimitedFetcher::new(http_client, limiter);

        Self { opts, fetcher }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.opts.endpoints
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch and decode the summary JSON for a match.
    pub async fn summary(&self, match_id: u32) -> Result<MatchSummary, Error> {
        let url = self.opts.endpoints.match_url(match_id);
        let body = self.fetcher.fetch(&url).await?;
        serde_json::from_slice(&body).map_err(|e| {
            Error::decode(
                &url,
                "Summary",
                Some(anyhow::anyhow!("invalid summary JSON: {}", e)),
            )
        })
    }

    /// Fetch and extract the innings tables for a match.
    pub async fn scorecard(&self, match_id: u32) -> Result<Vec<InningsRecord>, Error> {
        let url = self.opts.endpoints.scorecard_url(match_id);
        let markup = self.fetcher.fetch_resource(&url).await?.text_utf8();
        extract_scorecard(&markup)
            .map_err(|e| Error::parse(&url, "Scorecard", Some(anyhow::Error::new(e))))
    }

    /// Resolve one match: summary first, then the scorecard.
    ///
    /// A summary failure fails the call. A scorecard failure leaves the
    /// innings list empty.
    pub async fn resolve(&self, match_id: u32) -> Result<MatchInfo, Error> {
        let summary = self.summary(match_id).await?;

        let innings = match self.scorecard(match_id).await {
            Ok(innings) => innings,
            Err(e) => {
                warn!(match_id, error = %e, "scorecard unavailable, continuing without innings");
                Vec::new()
            }
        };

        debug!(match_id, innings = innings.len(), "resolved match");

        Ok(MatchInfo {
            match_id,
            api_link: self.opts.endpoints.match_url(match_id),
            short_name: summary.versus_name(),
            summary,
            innings,
            last_refreshed: Utc::now(),
        })
    }

    /// Fetch the homepage and list the matches it advertises as live.
    pub async fn discover(&self) -> Result<Vec<LiveMatchEntry>, Error> {
        let url = &self.opts.endpoints.homepage;
        let homepage = self.fetcher.fetch_resource(url).await?.text_utf8();
        let entries = discover_live_matches(&homepage);
        debug!(count = entries.len(), "discovered live matches");
        Ok(entries)
    }

    /// Discover and resolve every live match.
    ///
    /// Matches that fail to resolve are skipped. Each resolved match takes its
    /// display name from the navigation entry.
    pub async fn live_matches(&self) -> Result<Vec<MatchInfo>, Error> {
        let entries = self.discover().await?;
        let mut matches = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.resolve(entry.match_id).await {
                Ok(mut info) => {
                    info.short_name = entry.name;
                    matches.push(info);
                }
                Err(e) => {
                    warn!(match_id = entry.match_id, error = %e, "skipping live match");
                }
            }
        }

        Ok(matches)
    }
}
