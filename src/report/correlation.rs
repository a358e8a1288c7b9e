//! Pearson correlation of mood against each secondary factor, plus the
//! qualitative interpretation shown to the user.
//!
//! Each factor is gated independently: a factor without enough paired
//! samples or without variation on both sides yields an informational
//! "not enough variation" outcome, never an error. Results are
//! recomputed from scratch on every request; per-user histories are
//! small enough that caching would buy nothing.

use serde::Serialize;

use super::stats;

/// Minimum paired observations before a factor correlation is attempted.
pub const MIN_FACTOR_SAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Temperature,
    SleepHours,
    ExerciseMinutes,
}

impl Factor {
    /// Key used in the report's correlations map.
    pub fn key(self) -> &'static str {
        match self {
            Factor::Temperature => "temperature",
            Factor::SleepHours => "sleep",
            Factor::ExerciseMinutes => "exercise",
        }
    }

    /// Human-readable name used inside feedback sentences.
    pub fn display_name(self) -> &'static str {
        match self {
            Factor::Temperature => "temperature",
            Factor::SleepHours => "sleep hours",
            Factor::ExerciseMinutes => "exercise minutes",
        }
    }

    fn variation_message(self) -> &'static str {
        match self {
            Factor::Temperature => "Not enough data variation yet to calculate.",
            Factor::SleepHours => "Not enough sleep data variation yet to calculate.",
            Factor::ExerciseMinutes => "Not enough exercise data variation yet to calculate.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryStrong,
    Strong,
    Moderate,
    WeakOrNonExistent,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryStrong => "very strong",
            Strength::Strong => "strong",
            Strength::Moderate => "moderate",
            Strength::WeakOrNonExistent => "weak or non-existent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Positive => "positively",
            Direction::Negative => "negatively",
        }
    }
}

/// One entry in the report's correlations map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrelationOutcome {
    /// A computed coefficient with its interpretation. `direction` is
    /// absent when the strength bucket is weak: the feedback then only
    /// states that no significant correlation exists.
    Correlated {
        coefficient: f64,
        strength: Strength,
        direction: Option<Direction>,
        feedback: String,
    },
    /// Too few pairs, or one of the series is constant. Informational,
    /// not an error.
    InsufficientVariation { feedback: String },
    /// Tier-gated placeholder; never coexists with computed results.
    UpgradeRequired { feedback: String },
}

/// How sleep/exercise series are paired with the mood series when the
/// lengths diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodPairing {
    /// Align the factor series with the most recent moods of the same
    /// length. This silently discards older moods when the series
    /// diverge; kept as the default for compatibility with historical
    /// reports.
    #[default]
    TrailingWindow,
    /// Align both series from the start and truncate the longer tail.
    Chronological,
}

/// Correlates a factor series against the mood series after aligning
/// them per `pairing`. Series of equal length are unaffected by the
/// pairing choice.
pub fn correlate(
    factor: Factor,
    values: &[f64],
    moods: &[f64],
    pairing: MoodPairing,
) -> CorrelationOutcome {
    let n = values.len().min(moods.len());
    let (values, moods) = match pairing {
        MoodPairing::TrailingWindow => (
            &values[values.len() - n..],
            &moods[moods.len() - n..],
        ),
        MoodPairing::Chronological => (&values[..n], &moods[..n]),
    };
    correlate_aligned(factor, values, moods)
}

/// Correlates two already-aligned series of equal length.
pub fn correlate_aligned(factor: Factor, values: &[f64], moods: &[f64]) -> CorrelationOutcome {
    debug_assert_eq!(values.len(), moods.len());

    if values.len() < MIN_FACTOR_SAMPLES
        || !has_variation(values)
        || !has_variation(moods)
    {
        return CorrelationOutcome::InsufficientVariation {
            feedback: factor.variation_message().to_string(),
        };
    }

    match stats::pearson(values, moods) {
        Some(r) => interpret(r, factor),
        // Variance was checked above; an undefined coefficient here can
        // only come from pathological floating-point input.
        None => CorrelationOutcome::InsufficientVariation {
            feedback: factor.variation_message().to_string(),
        },
    }
}

/// Translates a coefficient into its strength bucket and feedback text.
pub fn interpret(r: f64, factor: Factor) -> CorrelationOutcome {
    let strength = strength_of(r);

    if strength == Strength::WeakOrNonExistent {
        return CorrelationOutcome::Correlated {
            coefficient: r,
            strength,
            direction: None,
            feedback: format!(
                "No significant correlation between mood and {}.",
                factor.display_name()
            ),
        };
    }

    let direction = if r > 0.0 {
        Direction::Positive
    } else {
        Direction::Negative
    };

    CorrelationOutcome::Correlated {
        coefficient: r,
        strength,
        direction: Some(direction),
        feedback: format!(
            "A {} correlation (r={:.3}). Mood tends to change {} with {}.",
            strength.label(),
            r,
            direction.label(),
            factor.display_name()
        ),
    }
}

fn strength_of(r: f64) -> Strength {
    let magnitude = r.abs();
    if magnitude >= 0.7 {
        Strength::VeryStrong
    } else if magnitude >= 0.5 {
        Strength::Strong
    } else if magnitude >= 0.3 {
        Strength::Moderate
    } else {
        Strength::WeakOrNonExistent
    }
}

/// True when at least two distinct values are present.
fn has_variation(values: &[f64]) -> bool {
    values
        .first()
        .map(|head| values.iter().any(|v| v != head))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_factor_reports_insufficient_variation() {
        let temps = [10.0, 10.0, 10.0];
        let moods = [3.0, 4.0, 5.0];
        let outcome = correlate_aligned(Factor::Temperature, &temps, &moods);
        assert!(matches!(
            outcome,
            CorrelationOutcome::InsufficientVariation { .. }
        ));
    }

    #[test]
    fn constant_moods_report_insufficient_variation() {
        let sleep = [4.0, 6.0, 8.0];
        let moods = [3.0, 3.0, 3.0];
        let outcome = correlate_aligned(Factor::SleepHours, &sleep, &moods);
        assert!(matches!(
            outcome,
            CorrelationOutcome::InsufficientVariation { .. }
        ));
    }

    #[test]
    fn fewer_than_three_pairs_is_insufficient() {
        let outcome = correlate_aligned(Factor::Temperature, &[1.0, 2.0], &[3.0, 4.0]);
        assert!(matches!(
            outcome,
            CorrelationOutcome::InsufficientVariation { .. }
        ));
    }

    #[test]
    fn trailing_window_pairs_factor_against_most_recent_moods() {
        // Seven moods, five sleep samples: only the last five moods
        // take part in the pairing.
        let moods = [2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 5.0];
        let sleep = [4.0, 5.0, 6.0, 7.0, 8.0];

        let tail = correlate(Factor::SleepHours, &sleep, &moods, MoodPairing::TrailingWindow);
        let expected = correlate_aligned(Factor::SleepHours, &sleep, &[3.0, 4.0, 4.0, 5.0, 5.0]);
        assert_eq!(tail, expected);

        // Pairing head-first over the same data uses the oldest five
        // moods instead.
        let head = correlate(Factor::SleepHours, &sleep, &moods, MoodPairing::Chronological);
        let head_expected =
            correlate_aligned(Factor::SleepHours, &sleep, &[2.0, 3.0, 3.0, 4.0, 4.0]);
        assert_eq!(head, head_expected);
    }

    #[test]
    fn pairing_strategies_can_disagree_on_diverging_series() {
        let moods = [5.0, 1.0, 3.0, 4.0, 2.0, 5.0, 4.0];
        let sleep = [4.0, 5.0, 6.0, 7.0, 8.0];
        let tail = correlate(Factor::SleepHours, &sleep, &moods, MoodPairing::TrailingWindow);
        let head = correlate(Factor::SleepHours, &sleep, &moods, MoodPairing::Chronological);
        assert_ne!(tail, head);
    }

    #[test]
    fn equal_length_series_ignore_pairing_choice() {
        let moods = [2.0, 4.0, 3.0, 5.0];
        let values = [10.0, 20.0, 15.0, 25.0];
        assert_eq!(
            correlate(Factor::ExerciseMinutes, &values, &moods, MoodPairing::TrailingWindow),
            correlate(Factor::ExerciseMinutes, &values, &moods, MoodPairing::Chronological),
        );
    }

    #[test]
    fn interpretation_buckets_at_exact_boundaries() {
        match interpret(0.5, Factor::SleepHours) {
            CorrelationOutcome::Correlated {
                strength,
                direction,
                ..
            } => {
                assert_eq!(strength, Strength::Strong);
                assert_eq!(direction, Some(Direction::Positive));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match interpret(-0.5, Factor::SleepHours) {
            CorrelationOutcome::Correlated {
                strength,
                direction,
                ..
            } => {
                assert_eq!(strength, Strength::Strong);
                assert_eq!(direction, Some(Direction::Negative));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match interpret(0.7, Factor::Temperature) {
            CorrelationOutcome::Correlated { strength, .. } => {
                assert_eq!(strength, Strength::VeryStrong)
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match interpret(0.3, Factor::Temperature) {
            CorrelationOutcome::Correlated { strength, .. } => {
                assert_eq!(strength, Strength::Moderate)
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn weak_coefficient_omits_direction_and_detail() {
        match interpret(0.29, Factor::ExerciseMinutes) {
            CorrelationOutcome::Correlated {
                strength,
                direction,
                feedback,
                ..
            } => {
                assert_eq!(strength, Strength::WeakOrNonExistent);
                assert_eq!(direction, None);
                assert_eq!(
                    feedback,
                    "No significant correlation between mood and exercise minutes."
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn feedback_carries_three_decimal_coefficient() {
        match interpret(0.61234, Factor::SleepHours) {
            CorrelationOutcome::Correlated { feedback, .. } => {
                assert_eq!(
                    feedback,
                    "A strong correlation (r=0.612). Mood tends to change positively with sleep hours."
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
