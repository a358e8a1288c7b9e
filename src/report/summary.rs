//! Descriptive summaries: today's mood in context of the history, and
//! the environmental (temperature) picture.

use serde::{Serialize, Serializer};

use super::stats;

/// Std dev above this reads as a volatile temperature history.
/// Exactly 5.0 is still "consistent".
pub const VOLATILITY_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoodLabel {
    Excellent,
    Good,
    Neutral,
    Poor,
    Bad,
}

/// Total mapping from a raw mood score to its label.
///
/// Anything outside 2..=5 falls through to `Bad`, including negative or
/// out-of-range scores. This is a deliberate permissive default rather
/// than a validated range: validation belongs to the ingestion boundary.
pub fn mood_label(score: i32) -> MoodLabel {
    match score {
        5 => MoodLabel::Excellent,
        4 => MoodLabel::Good,
        3 => MoodLabel::Neutral,
        2 => MoodLabel::Poor,
        _ => MoodLabel::Bad,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoodComparison {
    #[serde(rename = "above average")]
    AboveAverage,
    #[serde(rename = "below average")]
    BelowAverage,
    #[serde(rename = "in line with average")]
    InLineWithAverage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub today_mood: i32,
    pub today_mood_label: MoodLabel,
    /// Kept as the exact mean for comparisons; rendered to one decimal
    /// place on the wire.
    #[serde(serialize_with = "one_decimal")]
    pub average_mood: f64,
    pub comparison: MoodComparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLabel {
    Volatile,
    Consistent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSummary {
    #[serde(serialize_with = "one_decimal")]
    pub average_temperature: f64,
    #[serde(serialize_with = "one_decimal")]
    pub temperature_std_dev: f64,
    pub volatility: VolatilityLabel,
}

/// Builds the mood section from the full historical mood series plus the
/// externally supplied "right now" mood, which is not part of history.
pub fn mood_summary(current_mood: i32, moods: &[f64]) -> MoodSummary {
    let average_mood = stats::mean(moods);
    let current = f64::from(current_mood);

    let comparison = if current > average_mood {
        MoodComparison::AboveAverage
    } else if current < average_mood {
        MoodComparison::BelowAverage
    } else {
        MoodComparison::InLineWithAverage
    };

    MoodSummary {
        today_mood: current_mood,
        today_mood_label: mood_label(current_mood),
        average_mood,
        comparison,
    }
}

/// Builds the environmental section from the temperatures that are
/// actually present. Entries with no captured temperature are excluded
/// upstream; an empty series averages to 0.0 and a single sample has a
/// std dev of 0.0.
pub fn environment_summary(temperatures: &[f64]) -> EnvironmentSummary {
    let average_temperature = stats::mean(temperatures);
    let temperature_std_dev = stats::sample_std_dev(temperatures);

    EnvironmentSummary {
        average_temperature,
        temperature_std_dev,
        volatility: volatility_label(temperature_std_dev),
    }
}

/// Exactly 5.0 is still consistent; only a strictly greater spread
/// reads as volatile.
pub fn volatility_label(std_dev: f64) -> VolatilityLabel {
    if std_dev > VOLATILITY_THRESHOLD {
        VolatilityLabel::Volatile
    } else {
        VolatilityLabel::Consistent
    }
}

fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_label_mapping_is_exact() {
        assert_eq!(mood_label(5), MoodLabel::Excellent);
        assert_eq!(mood_label(4), MoodLabel::Good);
        assert_eq!(mood_label(3), MoodLabel::Neutral);
        assert_eq!(mood_label(2), MoodLabel::Poor);
    }

    #[test]
    fn mood_label_mapping_is_total() {
        for score in [1, 0, -5, 6, 42, i32::MIN, i32::MAX] {
            assert_eq!(mood_label(score), MoodLabel::Bad, "score {score}");
        }
    }

    #[test]
    fn comparison_follows_sign_of_difference() {
        let moods = [3.0, 3.0, 3.0];
        assert_eq!(
            mood_summary(4, &moods).comparison,
            MoodComparison::AboveAverage
        );
        assert_eq!(
            mood_summary(2, &moods).comparison,
            MoodComparison::BelowAverage
        );
        assert_eq!(
            mood_summary(3, &moods).comparison,
            MoodComparison::InLineWithAverage
        );
    }

    #[test]
    fn environment_defaults_when_no_temperatures() {
        let env = environment_summary(&[]);
        assert_eq!(env.average_temperature, 0.0);
        assert_eq!(env.temperature_std_dev, 0.0);
        assert_eq!(env.volatility, VolatilityLabel::Consistent);
    }

    #[test]
    fn single_temperature_has_zero_std_dev() {
        let env = environment_summary(&[17.3]);
        assert!((env.average_temperature - 17.3).abs() < 1e-12);
        assert_eq!(env.temperature_std_dev, 0.0);
    }

    #[test]
    fn volatility_boundary_is_inclusive_on_consistent_side() {
        assert_eq!(volatility_label(4.9), VolatilityLabel::Consistent);
        assert_eq!(volatility_label(5.0), VolatilityLabel::Consistent);
        assert_eq!(volatility_label(5.000001), VolatilityLabel::Volatile);
    }
}
