use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::{weather, DailyForecast};
use crate::AppState;

/// 7-day forecast passthrough. Unlike check-in capture, an upstream
/// failure here has no sensible fallback, so it surfaces as 502.
pub async fn get_forecast(State(state): State<AppState>) -> AppResult<Json<Vec<DailyForecast>>> {
    let days = weather::fetch_forecast(&state.http, &state.config).await?;
    Ok(Json(days))
}
