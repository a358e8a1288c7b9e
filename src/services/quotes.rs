//! Daily wellbeing quote from ZenQuotes.

use serde::{Deserialize, Serialize};

use super::FetchError;
use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Default shown when the upstream is unavailable. Applied by callers,
/// not inside the fetch.
pub fn fallback_quote() -> Quote {
    Quote {
        text: "Knowing yourself is the beginning of all wisdom.".into(),
        author: "Aristotle".into(),
    }
}

#[derive(Debug, Deserialize)]
struct QuoteItem {
    q: String,
    a: String,
}

pub async fn fetch_daily(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Quote, FetchError> {
    let response = client
        .get(&config.quote_api_url)
        .send()
        .await?
        .error_for_status()?;

    let items: Vec<QuoteItem> = response.json().await?;
    let item = items
        .into_iter()
        .next()
        .ok_or(FetchError::Malformed("empty quote list"))?;

    Ok(Quote {
        text: item.q,
        author: item.a,
    })
}
