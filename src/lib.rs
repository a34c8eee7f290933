//! # Repostats - letter statistics for GitHub repositories
//!
//! Fetches the file tree of one repository branch through the GitHub GraphQL
//! API and tallies the letters used across its JavaScript/TypeScript sources.
//!
//! Repostats provides:
//! - A fixed-depth GraphQL tree query builder
//! - A single-shot authenticated fetcher
//! - A tree flattener collecting `.js`/`.ts` blob text by file name
//! - A Unicode-aware letter histogram with descending-frequency output

pub mod config;
pub mod query;
pub mod fetch;
pub mod flatten;
pub mod letters;
pub mod report;
pub mod pipeline;
pub mod ui;

// Re-exports for convenient access
pub use config::RepoConfig;
pub use fetch::GitHubClient;
pub use flatten::FileMap;
pub use letters::LetterCounts;
pub use pipeline::run;

/// Result type alias for Repostats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Repostats operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Response status code does not indicate success: {} ({})", .status.as_u16(), .status.canonical_reason().unwrap_or("Unknown"))]
    Status { status: reqwest::StatusCode },

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing field in response: {0}")]
    MissingField(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
