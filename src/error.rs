use thiserror::Error;

/// Errors surfaced by the fetch/parse pipeline.
///
/// Transport failures and non-success HTTP statuses are kept apart so
/// callers can tell "the network broke" from "the provider said no", but
/// both abort the request immediately. There is no retry anywhere.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to a provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status.
    #[error("request failed with HTTP {0}")]
    Http(reqwest::StatusCode),

    /// The geocoder returned zero results for the requested city.
    #[error("city '{0}' not found")]
    CityNotFound(String),

    /// Provider payload did not have the expected shape.
    #[error("malformed provider response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
