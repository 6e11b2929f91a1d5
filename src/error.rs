use thiserror::Error;

/// Failures that end a run with exit code 1
#[derive(Error, Debug)]
pub enum ListerError {
    #[error("{0}")]
    Usage(String),
    #[error("Error fetching URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Error fetching URL: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("No video URLs found.")]
    NoResults,
}
