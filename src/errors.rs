use reqwest::StatusCode;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    /// Backend refused the submission body (http 422)
    #[error("api rejected submission: \"{0}\"")]
    Rejected(String),
    #[error("api returned {status}: \"{error}\"")]
    Api { status: StatusCode, error: String },
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("username must not be empty")]
    Username,
    #[error("series name must not be empty")]
    SeriesName,
    #[error("rating must be a finite number from 0 to 5")]
    Rating,
}
