use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One self-reported check-in plus the environmental data captured at
/// the same moment. Entries are append-only: once written they are
/// never mutated, deleted, or reordered, and a user's history is always
/// read back in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WellbeingEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub mood_score: i32,
    pub sleep_hours: f64,
    pub exercise_minutes: i32,
    pub city: Option<String>,
    /// Absent when the weather fetch failed at capture time.
    pub temperature: Option<f64>,
    pub quote_text: Option<String>,
    pub quote_author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    pub username: String,
    pub mood: i32,
    pub sleep_hours: f64,
    pub exercise_minutes: i32,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub username: String,
}
