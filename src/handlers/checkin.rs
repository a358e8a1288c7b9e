use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::entry::{CheckinRequest, WellbeingEntry};
use crate::services::{quotes, weather};
use crate::AppState;

/// Records one check-in: the self-reported inputs are validated at this
/// boundary (the analysis core stays permissive), then current weather
/// and the daily quote are captured best-effort. A failed weather fetch
/// stores a NULL temperature rather than rejecting the check-in.
pub async fn checkin(
    State(state): State<AppState>,
    Json(body): Json<CheckinRequest>,
) -> AppResult<(StatusCode, Json<WellbeingEntry>)> {
    if !(1..=5).contains(&body.mood) {
        return Err(AppError::Validation("Mood must be between 1 and 5".into()));
    }
    if body.sleep_hours < 0.0 || !body.sleep_hours.is_finite() {
        return Err(AppError::Validation(
            "Sleep hours must be a non-negative number".into(),
        ));
    }
    if body.exercise_minutes < 0 {
        return Err(AppError::Validation(
            "Exercise minutes must be non-negative".into(),
        ));
    }

    let user = super::users::ensure_user(&state.db, &body.username).await?;

    let temperature = match weather::fetch_current(&state.http, &state.config).await {
        Ok(current) => Some(current.temperature),
        Err(e) => {
            tracing::warn!(error = %e, "Weather fetch failed, storing entry without temperature");
            None
        }
    };

    let quote = match quotes::fetch_daily(&state.http, &state.config).await {
        Ok(quote) => Some(quote),
        Err(e) => {
            tracing::warn!(error = %e, "Quote fetch failed, storing entry without quote");
            None
        }
    };

    let entry = sqlx::query_as::<_, WellbeingEntry>(
        r#"
        INSERT INTO wellbeing_entries
            (id, user_id, mood_score, sleep_hours, exercise_minutes, city, temperature, quote_text, quote_author)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(body.mood)
    .bind(body.sleep_hours)
    .bind(body.exercise_minutes)
    .bind(&state.config.default_city)
    .bind(temperature)
    .bind(quote.as_ref().map(|q| q.text.as_str()))
    .bind(quote.as_ref().map(|q| q.author.as_str()))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}
