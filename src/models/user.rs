use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub tier: SubscriptionTier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Closed two-variant tier. Anything that is not exactly "premium"
/// normalizes to `Free` on the way in — an unrecognized tier is never
/// an error and never grants premium access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

impl SubscriptionTier {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "premium" => Self::Premium,
            _ => Self::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }

    /// Tier policy for the analysis core: only premium reports carry
    /// computed correlations.
    pub fn includes_correlations(self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl From<String> for SubscriptionTier {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTierRequest {
    pub tier: SubscriptionTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_tier_normalizes_to_free() {
        assert_eq!(SubscriptionTier::parse("premium"), SubscriptionTier::Premium);
        assert_eq!(SubscriptionTier::parse("Premium "), SubscriptionTier::Premium);
        assert_eq!(SubscriptionTier::parse("free"), SubscriptionTier::Free);
        assert_eq!(SubscriptionTier::parse("gold"), SubscriptionTier::Free);
        assert_eq!(SubscriptionTier::parse(""), SubscriptionTier::Free);
    }

    #[test]
    fn only_premium_unlocks_correlations() {
        assert!(SubscriptionTier::Premium.includes_correlations());
        assert!(!SubscriptionTier::Free.includes_correlations());
    }
}
