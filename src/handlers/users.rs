use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::user::{UpdateTierRequest, User};
use crate::AppState;

/// Looks a user up by username, creating a free-tier profile on first
/// contact. Check-ins and reports are keyed by username only; there is
/// no separate registration step.
pub async fn ensure_user(db: &PgPool, username: &str) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username)
        VALUES ($1, $2)
        ON CONFLICT (username) DO UPDATE SET username = EXCLUDED.username
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .fetch_one(db)
    .await?;

    Ok(user)
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<User>> {
    let user = ensure_user(&state.db, &username).await?;
    Ok(Json(user))
}

/// Tier is mutable externally; report generation reads it fresh on
/// every request. Unrecognized tier strings deserialize to `free`.
pub async fn update_tier(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(body): Json<UpdateTierRequest>,
) -> AppResult<Json<User>> {
    ensure_user(&state.db, &username).await?;

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET tier = $2, updated_at = NOW()
        WHERE username = $1
        RETURNING *
        "#,
    )
    .bind(&username)
    .bind(body.tier.as_str())
    .fetch_one(&state.db)
    .await?;

    tracing::info!(username = %username, tier = %user.tier.as_str(), "Subscription tier updated");

    Ok(Json(user))
}
