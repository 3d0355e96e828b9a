// ABOUTME: Error types for scorecard extraction.
// ABOUTME: Provides ExtractError with a Parse variant for unusable markup structure.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while extracting scorecard data from markup.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The markup structure could not be queried (bad selector, unusable layout).
    #[error("failed to parse scorecard markup: {0}")]
    Parse(String),
}

impl ExtractError {
    /// Creates a Parse error from any displayable cause.
    pub fn parse(err: impl fmt::Display) -> Self {
        ExtractError::Parse(err.to_string())
    }
}
