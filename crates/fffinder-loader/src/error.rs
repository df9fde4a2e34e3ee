use thiserror::Error;

/// Errors returned while retrieving or parsing the permit dataset.
///
/// Individual malformed rows are not errors; their fields fall back to
/// defaults during normalization.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset could not be reached or its body could not be read.
    /// Displays the underlying cause unchanged.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Failed to fetch data: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("invalid dataset base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
