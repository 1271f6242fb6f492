use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid location slug \"{slug}\": {reason}")]
    InvalidSlug { slug: String, reason: String },
}
