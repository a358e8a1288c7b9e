pub mod quotes;
pub mod weather;

pub use quotes::Quote;
pub use weather::{CurrentWeather, DailyForecast};

/// Failure talking to an upstream data source. What to do about one —
/// fall back to a default, store a NULL, or surface a 502 — is decided
/// at each call site, never inside the fetch functions.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed upstream response: {0}")]
    Malformed(&'static str),
}
