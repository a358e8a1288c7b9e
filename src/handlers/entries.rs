use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::models::entry::{UserQuery, WellbeingEntry};
use crate::AppState;

async fn load_history(state: &AppState, username: &str) -> AppResult<Vec<WellbeingEntry>> {
    let user = super::users::ensure_user(&state.db, username).await?;

    let entries = sqlx::query_as::<_, WellbeingEntry>(
        r#"
        SELECT * FROM wellbeing_entries
        WHERE user_id = $1
        ORDER BY recorded_at ASC
        "#,
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(entries)
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Vec<WellbeingEntry>>> {
    let entries = load_history(&state, &query.username).await?;
    Ok(Json(entries))
}

/// CSV export of the full history, oldest first. Mirrors the columns
/// of the old log-file format.
pub async fn export_entries(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<impl IntoResponse> {
    let entries = load_history(&state, &query.username).await?;

    let mut csv = String::from(
        "recorded_at,mood_score,sleep_hours,exercise_minutes,temperature,city\n",
    );
    for entry in &entries {
        let temperature = entry
            .temperature
            .map(|t| t.to_string())
            .unwrap_or_default();
        let city = entry.city.as_deref().unwrap_or_default();
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            entry.recorded_at.to_rfc3339(),
            entry.mood_score,
            entry.sleep_hours,
            entry.exercise_minutes,
            temperature,
            city,
        ));
    }

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"wellbeing_log.csv\"",
            ),
        ],
        csv,
    ))
}
