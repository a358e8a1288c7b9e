use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::entry::WellbeingEntry;
use crate::models::user::SubscriptionTier;
use crate::report::{self, Report};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    pub username: String,
    /// The user's mood right now, not drawn from history. Deliberately
    /// not range-checked here: the report's label mapping is total.
    pub mood: i32,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub tier: SubscriptionTier,
    pub report: Report,
}

/// Loads the user's full chronological history and hands it to the
/// pure analysis core. Fewer than three entries maps to a 422 carrying
/// the actual count.
pub async fn get_analysis(
    State(state): State<AppState>,
    Query(query): Query<AnalysisQuery>,
) -> AppResult<Json<AnalysisResponse>> {
    let user = super::users::ensure_user(&state.db, &query.username).await?;

    let history = sqlx::query_as::<_, WellbeingEntry>(
        r#"
        SELECT * FROM wellbeing_entries
        WHERE user_id = $1
        ORDER BY recorded_at ASC
        "#,
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    let report = report::generate_report(&history, query.mood, user.tier)?;

    Ok(Json(AnalysisResponse {
        tier: user.tier,
        report,
    }))
}
