//! Improvement suggestion generation

use std::collections::HashMap;

use super::standards::dimension_profile;
use crate::domain::value_objects::{
    BenchmarkComparison, ContentType, Difficulty, DimensionScore, ImprovementSuggestion,
    QualityDimension, SuggestionKind,
};

/// Dimensions scoring below this threshold earn a dimension suggestion
pub const IMPROVEMENT_THRESHOLD: f64 = 0.8;

/// Target score a dimension suggestion steers toward
pub const DIMENSION_TARGET: f64 = 0.9;

/// Benchmark gaps above this threshold earn a benchmark suggestion
pub const GAP_THRESHOLD: f64 = 0.1;

/// Derive ranked improvement suggestions from scores and benchmark gaps
///
/// Two sources, merged and ordered by descending expected impact. The sort is
/// stable, so equal-impact suggestions keep their discovery order: dimensions
/// in their profile order first, then benchmark gaps in comparison order.
pub fn suggest_improvements(
    content_type: ContentType,
    scores: &HashMap<QualityDimension, DimensionScore>,
    comparisons: &[BenchmarkComparison],
) -> Vec<ImprovementSuggestion> {
    let mut suggestions = Vec::new();

    // Dimension scores traverse in profile order so discovery order is
    // deterministic across runs; scores from custom registrations outside
    // the profile follow in dimension order.
    let profile = dimension_profile(content_type);
    let mut ordered: Vec<&DimensionScore> = profile
        .iter()
        .filter_map(|entry| scores.get(&entry.dimension))
        .collect();
    let mut extras: Vec<&DimensionScore> = scores
        .values()
        .filter(|s| !profile.iter().any(|entry| entry.dimension == s.dimension))
        .collect();
    extras.sort_by_key(|s| s.dimension);
    ordered.extend(extras);

    for score in ordered {
        if score.score < IMPROVEMENT_THRESHOLD {
            let impact = DIMENSION_TARGET - score.score;
            suggestions.push(ImprovementSuggestion {
                kind: SuggestionKind::DimensionImprovement,
                dimension: Some(score.dimension),
                current_score: score.score,
                target_score: DIMENSION_TARGET,
                expected_impact: impact,
                difficulty: difficulty_for(impact),
                time_estimate: time_estimate_for(impact),
                resources: resources_for(impact),
                summary: format!(
                    "Raise {} from {:.2} toward {:.2}",
                    score.dimension, score.score, DIMENSION_TARGET
                ),
            });
        }
    }

    for comparison in comparisons {
        if comparison.gap > GAP_THRESHOLD {
            suggestions.push(ImprovementSuggestion {
                kind: SuggestionKind::BenchmarkImprovement,
                dimension: None,
                current_score: comparison.aggregate_score,
                target_score: comparison.aggregate_score + comparison.gap,
                expected_impact: comparison.gap,
                difficulty: difficulty_for(comparison.gap),
                time_estimate: time_estimate_for(comparison.gap),
                resources: resources_for(comparison.gap),
                summary: format!(
                    "Close the {:.2} gap against benchmark '{}'",
                    comparison.gap, comparison.benchmark_id
                ),
            });
        }
    }

    // Stable sort preserves discovery order for equal impact.
    suggestions.sort_by(|a, b| {
        b.expected_impact
            .partial_cmp(&a.expected_impact)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions
}

/// A suggestion telling the operator the validator itself needs attention
pub fn maintenance_suggestion(detail: &str) -> ImprovementSuggestion {
    ImprovementSuggestion {
        kind: SuggestionKind::SystemImprovement,
        dimension: None,
        current_score: 0.0,
        target_score: 1.0,
        expected_impact: 1.0,
        difficulty: Difficulty::Substantial,
        time_estimate: "until resolved".to_string(),
        resources: vec!["validator maintainer".to_string()],
        summary: format!("Validation pipeline needs maintenance: {detail}"),
    }
}

fn difficulty_for(impact: f64) -> Difficulty {
    if impact < 0.15 {
        Difficulty::Light
    } else if impact < 0.3 {
        Difficulty::Moderate
    } else {
        Difficulty::Substantial
    }
}

fn time_estimate_for(impact: f64) -> String {
    match difficulty_for(impact) {
        Difficulty::Light => "one revision pass".to_string(),
        Difficulty::Moderate => "two or three revision passes".to_string(),
        Difficulty::Substantial => "a structural rewrite".to_string(),
    }
}

fn resources_for(impact: f64) -> Vec<String> {
    match difficulty_for(impact) {
        Difficulty::Light => vec!["line editor".to_string()],
        Difficulty::Moderate => vec!["story editor".to_string()],
        Difficulty::Substantial => {
            vec!["story editor".to_string(), "script consultant".to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BenchmarkComparison;

    fn score_map(entries: &[(QualityDimension, f64)]) -> HashMap<QualityDimension, DimensionScore> {
        entries
            .iter()
            .map(|(d, v)| (*d, DimensionScore::new(*d, *v, 0.2)))
            .collect()
    }

    fn comparison(id: &str, aggregate: f64, gap: f64) -> BenchmarkComparison {
        BenchmarkComparison {
            benchmark_id: id.to_string(),
            aggregate_score: aggregate,
            metric_scores: HashMap::new(),
            passed: gap == 0.0,
            gap,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    #[test]
    fn low_dimension_yields_one_suggestion_with_expected_impact() {
        let scores = score_map(&[(QualityDimension::DialogueQuality, 0.55)]);
        let suggestions = suggest_improvements(ContentType::EpisodeScript, &scores, &[]);

        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!(s.kind, SuggestionKind::DimensionImprovement);
        assert_eq!(s.dimension, Some(QualityDimension::DialogueQuality));
        assert_eq!(s.target_score, 0.9);
        assert!((s.expected_impact - 0.35).abs() < 1e-9);
    }

    #[test]
    fn dimension_at_threshold_produces_nothing() {
        let scores = score_map(&[(QualityDimension::DialogueQuality, 0.8)]);
        assert!(suggest_improvements(ContentType::EpisodeScript, &scores, &[]).is_empty());
    }

    #[test]
    fn small_benchmark_gap_is_ignored() {
        let comparisons = vec![comparison("b", 0.72, 0.08)];
        let suggestions =
            suggest_improvements(ContentType::EpisodeScript, &HashMap::new(), &comparisons);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn suggestions_are_sorted_by_non_increasing_impact() {
        let scores = score_map(&[
            (QualityDimension::DialogueQuality, 0.7),
            (QualityDimension::NarrativeStructure, 0.45),
        ]);
        let comparisons = vec![comparison("b1", 0.6, 0.2), comparison("b2", 0.5, 0.3)];
        let suggestions = suggest_improvements(ContentType::EpisodeScript, &scores, &comparisons);

        assert_eq!(suggestions.len(), 4);
        for pair in suggestions.windows(2) {
            assert!(pair[0].expected_impact >= pair[1].expected_impact);
        }
        // 0.45 dimension score -> 0.45 impact is the biggest.
        assert_eq!(
            suggestions[0].dimension,
            Some(QualityDimension::NarrativeStructure)
        );
    }

    #[test]
    fn equal_impact_preserves_discovery_order() {
        // A dimension suggestion with impact 0.2 should stay ahead of a
        // benchmark suggestion with the same impact.
        let scores = score_map(&[(QualityDimension::DialogueQuality, 0.7)]);
        let comparisons = vec![comparison("b", 0.6, 0.2)];
        let suggestions = suggest_improvements(ContentType::EpisodeScript, &scores, &comparisons);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].kind, SuggestionKind::DimensionImprovement);
        assert_eq!(suggestions[1].kind, SuggestionKind::BenchmarkImprovement);
    }

    #[test]
    fn equal_impact_dimensions_follow_profile_order() {
        // The storyboard profile lists pacing flow before formatting, even
        // though formatting sorts first in the dimension enum.
        let scores = score_map(&[
            (QualityDimension::FormattingCompliance, 0.7),
            (QualityDimension::PacingFlow, 0.7),
        ]);
        let suggestions = suggest_improvements(ContentType::Storyboard, &scores, &[]);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].dimension, Some(QualityDimension::PacingFlow));
        assert_eq!(
            suggestions[1].dimension,
            Some(QualityDimension::FormattingCompliance)
        );
    }
}
