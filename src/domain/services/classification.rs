//! Quality level classification

use crate::domain::value_objects::{AcceptanceLevel, QualityLevel};

/// Classify an overall score plus an acceptance verdict into a quality level
///
/// A pure total-order classification: for a fixed acceptance level, a higher
/// overall score never classifies lower.
pub fn classify_quality_level(overall_score: f64, acceptance: AcceptanceLevel) -> QualityLevel {
    if overall_score >= 0.95 && acceptance == AcceptanceLevel::Exceptional {
        QualityLevel::Masterpiece
    } else if overall_score >= 0.85 && acceptance != AcceptanceLevel::Unacceptable {
        QualityLevel::Exceptional
    } else if overall_score >= 0.75 {
        QualityLevel::Professional
    } else if overall_score >= 0.6 {
        QualityLevel::Competent
    } else {
        QualityLevel::Amateur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores_classify_as_specified() {
        assert_eq!(
            classify_quality_level(0.95, AcceptanceLevel::Exceptional),
            QualityLevel::Masterpiece
        );
        assert_eq!(
            classify_quality_level(0.95, AcceptanceLevel::Strong),
            QualityLevel::Exceptional
        );
        assert_eq!(
            classify_quality_level(0.85, AcceptanceLevel::Acceptable),
            QualityLevel::Exceptional
        );
        assert_eq!(
            classify_quality_level(0.85, AcceptanceLevel::Unacceptable),
            QualityLevel::Professional
        );
        assert_eq!(
            classify_quality_level(0.75, AcceptanceLevel::Unacceptable),
            QualityLevel::Professional
        );
        assert_eq!(
            classify_quality_level(0.6, AcceptanceLevel::Unacceptable),
            QualityLevel::Competent
        );
        assert_eq!(
            classify_quality_level(0.59, AcceptanceLevel::Exceptional),
            QualityLevel::Amateur
        );
    }

    #[test]
    fn classification_is_monotonic_in_score() {
        for acceptance in [
            AcceptanceLevel::Unacceptable,
            AcceptanceLevel::Marginal,
            AcceptanceLevel::Acceptable,
            AcceptanceLevel::Strong,
            AcceptanceLevel::Exceptional,
        ] {
            let mut previous = QualityLevel::Amateur;
            for step in 0..=100 {
                let score = step as f64 / 100.0;
                let level = classify_quality_level(score, acceptance);
                assert!(
                    level >= previous,
                    "level dropped from {previous:?} to {level:?} at score {score} \
                     with acceptance {acceptance:?}"
                );
                previous = level;
            }
        }
    }
}
