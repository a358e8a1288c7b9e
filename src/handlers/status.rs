use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::entry::UserQuery;
use crate::models::user::SubscriptionTier;
use crate::services::{quotes, weather, CurrentWeather, Quote};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub tier: SubscriptionTier,
    pub quote: Quote,
    /// Absent when the weather upstream is unavailable.
    pub weather: Option<CurrentWeather>,
}

/// Daily dashboard data: tier, quote of the day, current conditions.
/// Upstream failures degrade to the fallback quote / missing weather
/// instead of failing the request.
pub async fn get_status(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<StatusResponse>> {
    let user = super::users::ensure_user(&state.db, &query.username).await?;

    let quote = match quotes::fetch_daily(&state.http, &state.config).await {
        Ok(quote) => quote,
        Err(e) => {
            tracing::warn!(error = %e, "Quote fetch failed, using fallback");
            quotes::fallback_quote()
        }
    };

    let weather = match weather::fetch_current(&state.http, &state.config).await {
        Ok(current) => Some(current),
        Err(e) => {
            tracing::warn!(error = %e, "Weather fetch failed");
            None
        }
    };

    Ok(Json(StatusResponse {
        tier: user.tier,
        quote,
        weather,
    }))
}
