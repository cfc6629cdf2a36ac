#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Connection failures and unparsable response bodies, straight from
    /// the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not with a usable page.
    #[error("bad response: {0}")]
    BadResponse(String),
}
