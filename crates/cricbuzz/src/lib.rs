// ABOUTME: Main library entry point for the Cricbuzz network client.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, LiveBoard, Error, ErrorCode, Endpoints, Options.

//! Network half of crictty.
//!
//! Fetches the Cricbuzz homepage, match summary JSON and scorecard markup
//! under one global request throttle, and resolves them into
//! [`MatchInfo`](crictty_scorecard::MatchInfo) values.
//!
//! # Example
//!
//! ```no_run
//! use crictty_cricbuzz::{Client, Error, LiveBoard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder().build();
//!     let board = LiveBoard::live(client).await?;
//!     for name in board.match_names() {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod client;
pub mod error;
pub mod limiter;
pub mod options;
pub mod resource;

pub use crate::board::{LiveBoard, Tracking};
pub use crate::client::Client;
pub use crate::error::{Error, ErrorCode};
pub use crate::limiter::RateLimiter;
pub use crate::options::{
    ClientBuilder, Endpoints, Options, CRICBUZZ_MATCH_API, CRICBUZZ_SCORECARD_API, CRICBUZZ_URL,
    DEFAULT_REQUEST_INTERVAL,
};
pub use crate::resource::{FetchResult, RateLimitedFetcher, MAX_CONTENT_LENGTH};

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
