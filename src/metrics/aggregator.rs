//! Metrics Aggregator
//!
//! Pure functions from a [`RawProfile`] to the score breakdown, language
//! usage and medal counts. Nothing here allocates state or suspends.

use serde::Serialize;

use super::tables::{
    Medal, LANGUAGES, LANGUAGE_PALETTE, MEDALS, POINTS_TARGET, SCORE_CATEGORIES, SOLVED_TARGET,
};
use crate::profile::{fields, RawProfile};

/// One row of the score breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub category: &'static str,
    pub count: i64,
    pub multiplier: i64,
    pub points: i64,
}

/// Score breakdown plus totals and completion percentages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub breakdown: Vec<BreakdownEntry>,
    pub total_points: i64,
    pub solved_programs: i64,
    /// solved / 2000 × 100, two decimals
    pub solved_percentage: f64,
    /// total points / 5000 × 100, two decimals
    pub points_percentage: f64,
}

/// Solved count for one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageUsage {
    pub language: &'static str,
    pub solved: i64,
    /// Share of all listed languages, one decimal
    pub share: f64,
    pub color: &'static str,
}

/// Count for one medal tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedalCount {
    pub medal: Medal,
    pub count: i64,
    pub color: &'static str,
}

/// Compute the weighted score breakdown and completion figures
///
/// Points and totals saturate at `i64::MAX` instead of overflowing.
pub fn calculate_points(profile: &RawProfile) -> DerivedMetrics {
    let breakdown: Vec<BreakdownEntry> = SCORE_CATEGORIES
        .iter()
        .map(|category| {
            let count = profile.count(category.field);
            BreakdownEntry {
                category: category.name,
                count,
                multiplier: category.weight,
                points: count.saturating_mul(category.weight),
            }
        })
        .collect();

    let total_points = breakdown
        .iter()
        .fold(0i64, |total, entry| total.saturating_add(entry.points));
    let solved_programs = profile.count(fields::PROGRAMS_SOLVED);

    DerivedMetrics {
        breakdown,
        total_points,
        solved_programs,
        solved_percentage: percentage(solved_programs, SOLVED_TARGET),
        points_percentage: percentage(total_points, POINTS_TARGET),
    }
}

/// Languages with at least one solved program, in fixed order
pub fn language_usage(profile: &RawProfile) -> Vec<LanguageUsage> {
    let counts: Vec<(&'static str, i64)> = LANGUAGES
        .iter()
        .map(|&language| (language, profile.count(language)))
        .filter(|&(_, solved)| solved > 0)
        .collect();

    let total = counts
        .iter()
        .fold(0i64, |total, &(_, solved)| total.saturating_add(solved));

    counts
        .into_iter()
        .enumerate()
        .map(|(index, (language, solved))| LanguageUsage {
            language,
            solved,
            share: round_to(solved as f64 / total as f64 * 100.0, 1),
            color: LANGUAGE_PALETTE[index % LANGUAGE_PALETTE.len()],
        })
        .collect()
}

/// Gold, Silver and Bronze counts, zeros included
pub fn medal_counts(profile: &RawProfile) -> [MedalCount; 3] {
    MEDALS.map(|medal| MedalCount {
        medal,
        count: profile.count(medal.field()),
        color: medal.color(),
    })
}

fn percentage(part: i64, whole: i64) -> f64 {
    round_to(part as f64 / whole as f64 * 100.0, 2)
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawProfile {
        RawProfile::new()
            .field(fields::CODE_TUTOR, "22")
            .field(fields::CODE_TRACK, "1050")
            .field(fields::DC, "55")
            .field(fields::DT, "102")
            .field(fields::CODE_TEST, "22")
            .field(fields::PROGRAMS_SOLVED, "1251")
    }

    #[test]
    fn test_reference_profile() {
        let metrics = calculate_points(&sample());

        let points: Vec<i64> = metrics.breakdown.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![0, 2100, 110, 2040, 660]);
        assert_eq!(metrics.total_points, 4910);
        assert_eq!(metrics.solved_programs, 1251);
        assert_eq!(metrics.solved_percentage, 62.55);
        assert_eq!(metrics.points_percentage, 98.2);
    }

    #[test]
    fn test_breakdown_order_and_counts() {
        let metrics = calculate_points(&sample());
        let rows: Vec<(&str, i64, i64)> = metrics
            .breakdown
            .iter()
            .map(|e| (e.category, e.count, e.multiplier))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Code Tutor", 22, 0),
                ("Code Track", 1050, 2),
                ("DC", 55, 2),
                ("DT", 102, 20),
                ("Code Test", 22, 30),
            ]
        );
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let metrics = calculate_points(&RawProfile::new());

        assert_eq!(metrics.breakdown.len(), 5);
        assert!(metrics.breakdown.iter().all(|e| e.points == 0));
        assert_eq!(metrics.total_points, 0);
        assert_eq!(metrics.solved_percentage, 0.0);
        assert_eq!(metrics.points_percentage, 0.0);
    }

    #[test]
    fn test_non_numeric_fields_count_as_zero() {
        let profile = RawProfile::new()
            .field(fields::CODE_TRACK, "n/a")
            .field(fields::DT, "3")
            .field(fields::CODE_TEST, "");

        let metrics = calculate_points(&profile);
        assert_eq!(metrics.total_points, 60);
    }

    #[test]
    fn test_total_matches_weighted_sum() {
        let cases = [
            ("0", "0", "0", "0", "0"),
            ("5", "1", "1", "1", "1"),
            ("100", "999", "3", "17", "8"),
            ("x", "12", "y", "4", "2"),
        ];

        for (tutor, track, dc, dt, test) in cases {
            let profile = RawProfile::new()
                .field(fields::CODE_TUTOR, tutor)
                .field(fields::CODE_TRACK, track)
                .field(fields::DC, dc)
                .field(fields::DT, dt)
                .field(fields::CODE_TEST, test);

            let expected = profile.count(fields::CODE_TRACK) * 2
                + profile.count(fields::DC) * 2
                + profile.count(fields::DT) * 20
                + profile.count(fields::CODE_TEST) * 30;

            let metrics = calculate_points(&profile);
            assert_eq!(metrics.total_points, expected);
            assert_eq!(
                metrics.points_percentage,
                round_to(expected as f64 / 5000.0 * 100.0, 2)
            );
        }
    }

    #[test]
    fn test_percentages_round_to_two_decimals() {
        let profile = RawProfile::new().field(fields::PROGRAMS_SOLVED, "1");
        assert_eq!(calculate_points(&profile).solved_percentage, 0.05);

        let profile = RawProfile::new().field(fields::PROGRAMS_SOLVED, "2001");
        assert_eq!(calculate_points(&profile).solved_percentage, 100.05);

        // 7 × 30 = 210 points → 4.2%
        let profile = RawProfile::new().field(fields::CODE_TEST, "7");
        assert_eq!(calculate_points(&profile).points_percentage, 4.2);

        // 1 × 2 = 2 points → 0.04%
        let profile = RawProfile::new().field(fields::DC, "1");
        assert_eq!(calculate_points(&profile).points_percentage, 0.04);
    }

    #[test]
    fn test_language_usage_filters_and_keeps_order() {
        let profile = RawProfile::new()
            .field(fields::C, "10")
            .field(fields::PYTHON3, "0")
            .field(fields::JAVA, "30")
            .field(fields::CPP23, "-2")
            .field(fields::CPP, "60");

        let usage = language_usage(&profile);
        let listed: Vec<(&str, i64)> = usage.iter().map(|u| (u.language, u.solved)).collect();

        assert_eq!(listed, vec![("C", 10), ("Java", 30), ("CPP", 60)]);
        assert!(usage.iter().all(|u| u.solved > 0));
    }

    #[test]
    fn test_language_usage_shares_and_colors() {
        let profile = RawProfile::new()
            .field(fields::C, "10")
            .field(fields::JAVA, "30")
            .field(fields::CPP, "60");

        let usage = language_usage(&profile);
        let shares: Vec<f64> = usage.iter().map(|u| u.share).collect();
        let colors: Vec<&str> = usage.iter().map(|u| u.color).collect();

        assert_eq!(shares, vec![10.0, 30.0, 60.0]);
        assert_eq!(colors, vec!["#0088FE", "#00C49F", "#FFBB28"]);
    }

    #[test]
    fn test_language_usage_empty() {
        assert!(language_usage(&RawProfile::new()).is_empty());
    }

    #[test]
    fn test_medal_counts_always_three() {
        let medals = medal_counts(&RawProfile::new().field(fields::BRONZE, "421"));

        let tiers: Vec<(&str, i64, &str)> = medals
            .iter()
            .map(|m| (m.medal.name(), m.count, m.color))
            .collect();

        assert_eq!(
            tiers,
            vec![
                ("Gold", 0, "#FFD700"),
                ("Silver", 0, "#C0C0C0"),
                ("Bronze", 421, "#CD7F32"),
            ]
        );
    }

    #[test]
    fn test_huge_counters_saturate() {
        let profile = RawProfile::new().field(fields::CODE_TEST, "9223372036854775807");
        let metrics = calculate_points(&profile);
        assert_eq!(metrics.breakdown[4].points, i64::MAX);
        assert_eq!(metrics.total_points, i64::MAX);

        let big = (1i64 << 62).to_string();
        let profile = RawProfile::new()
            .field(fields::CODE_TRACK, big.as_str())
            .field(fields::DC, big.as_str());
        let metrics = calculate_points(&profile);
        assert_eq!(metrics.total_points, i64::MAX);
        assert!(metrics.points_percentage > 0.0);
    }

    #[test]
    fn test_huge_language_counts_saturate() {
        let max = i64::MAX.to_string();
        let profile = RawProfile::new()
            .field(fields::C, max.as_str())
            .field(fields::CPP, max.as_str());

        let usage = language_usage(&profile);
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].solved, i64::MAX);
        assert_eq!(usage[0].share, 100.0);
    }
}
