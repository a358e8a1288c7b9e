//! The analysis core: turns one user's ordered entry history plus the
//! "right now" mood and subscription tier into a wellbeing report.
//!
//! Everything in this module is pure and synchronous. History arrives
//! as an immutable in-memory snapshot from the caller; no I/O, no
//! shared state, no caching between requests. The same inputs always
//! produce the same report.

pub mod correlation;
pub mod stats;
pub mod summary;

use std::collections::BTreeMap;

use serde::Serialize;

pub use correlation::{CorrelationOutcome, Direction, Factor, MoodPairing, Strength};
pub use summary::{EnvironmentSummary, MoodComparison, MoodLabel, MoodSummary, VolatilityLabel};

use crate::models::entry::WellbeingEntry;
use crate::models::user::SubscriptionTier;

/// Hard gate: no report at all below this many entries, regardless of
/// which factors would later be analyzed.
pub const MIN_ENTRIES: usize = 3;

/// Key and message used for the single tier-gated map entry.
pub const UPSELL_KEY: &str = "upgrade";
pub const UPSELL_MESSAGE: &str = "Upgrade to Premium to unlock personalized insights!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReportError {
    /// Recoverable by the caller: prompt the user for more check-ins.
    #[error("Only {count} entries logged. Need a minimum of 3 for analysis.")]
    InsufficientData { count: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// How sleep/exercise series align with the mood series when their
    /// lengths diverge. Defaults to the trailing window used by
    /// historical reports.
    pub pairing: MoodPairing,
}

/// A fresh, purely derived structure produced per request. Holds no
/// identity and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mood_summary: MoodSummary,
    pub environment_summary: EnvironmentSummary,
    /// Per-factor outcomes for premium users, or a single upsell entry
    /// otherwise. Never both.
    pub correlations: BTreeMap<&'static str, CorrelationOutcome>,
}

/// Generates a report with the default pairing strategy.
pub fn generate_report(
    history: &[WellbeingEntry],
    current_mood: i32,
    tier: SubscriptionTier,
) -> Result<Report, ReportError> {
    generate_report_with(history, current_mood, tier, ReportOptions::default())
}

/// Full orchestration: sufficiency gate, descriptive summaries, then
/// correlations if and only if the tier permits them.
///
/// `current_mood` is intentionally not validated against 1..=5; the
/// label mapping is total and out-of-range values degrade to "Bad".
pub fn generate_report_with(
    history: &[WellbeingEntry],
    current_mood: i32,
    tier: SubscriptionTier,
    options: ReportOptions,
) -> Result<Report, ReportError> {
    let count = history.len();
    if count < MIN_ENTRIES {
        return Err(ReportError::InsufficientData { count });
    }

    let moods: Vec<f64> = history.iter().map(|e| f64::from(e.mood_score)).collect();
    let mood_summary = summary::mood_summary(current_mood, &moods);

    // Entries without a captured temperature are excluded entirely,
    // not treated as zero.
    let temperatures: Vec<f64> = history.iter().filter_map(|e| e.temperature).collect();
    let environment_summary = summary::environment_summary(&temperatures);

    let mut correlations = BTreeMap::new();
    if tier.includes_correlations() {
        // Temperature pairs against the moods of the same filtered
        // entries, so both sides stay one-to-one.
        let temperature_moods: Vec<f64> = history
            .iter()
            .filter(|e| e.temperature.is_some())
            .map(|e| f64::from(e.mood_score))
            .collect();
        correlations.insert(
            Factor::Temperature.key(),
            correlation::correlate_aligned(Factor::Temperature, &temperatures, &temperature_moods),
        );

        let sleep: Vec<f64> = history.iter().map(|e| e.sleep_hours).collect();
        correlations.insert(
            Factor::SleepHours.key(),
            correlation::correlate(Factor::SleepHours, &sleep, &moods, options.pairing),
        );

        let exercise: Vec<f64> = history
            .iter()
            .map(|e| f64::from(e.exercise_minutes))
            .collect();
        correlations.insert(
            Factor::ExerciseMinutes.key(),
            correlation::correlate(Factor::ExerciseMinutes, &exercise, &moods, options.pairing),
        );
    } else {
        correlations.insert(
            UPSELL_KEY,
            CorrelationOutcome::UpgradeRequired {
                feedback: UPSELL_MESSAGE.to_string(),
            },
        );
    }

    Ok(Report {
        mood_summary,
        environment_summary,
        correlations,
    })
}
