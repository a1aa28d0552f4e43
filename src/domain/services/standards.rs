//! Built-in quality standards
//!
//! Dimension weight profiles, the benchmark catalog, and curated professional
//! criteria. All of it is constructed into a config value at startup and read
//! only afterward.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ContentType, QualityBenchmark, QualityDimension, QualityMetric, StandardTier,
};

/// Key for looking an assessor up in the registry
///
/// Deliberately separate from `QualityDimension`: two dimensions may share an
/// assessor implementation, and a profile can point a dimension at a kind
/// that is not registered, in which case that dimension is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessorKind {
    Dialogue,
    Structure,
    Formatting,
    Character,
    Genre,
    Visual,
    ShotVariety,
    Pacing,
    Roles,
    Casting,
}

/// One dimension of a content type's assessment profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionProfile {
    pub dimension: QualityDimension,
    pub weight: f64,
    pub assessor: AssessorKind,
}

impl DimensionProfile {
    fn new(dimension: QualityDimension, weight: f64, assessor: AssessorKind) -> Self {
        Self {
            dimension,
            weight,
            assessor,
        }
    }
}

/// The fixed, ordered dimension profile for a content type
///
/// Weights within one profile sum to 1.0.
pub fn dimension_profile(content_type: ContentType) -> Vec<DimensionProfile> {
    match content_type {
        ContentType::EpisodeScript => vec![
            DimensionProfile::new(QualityDimension::DialogueQuality, 0.3, AssessorKind::Dialogue),
            DimensionProfile::new(
                QualityDimension::NarrativeStructure,
                0.25,
                AssessorKind::Structure,
            ),
            DimensionProfile::new(
                QualityDimension::FormattingCompliance,
                0.15,
                AssessorKind::Formatting,
            ),
            DimensionProfile::new(
                QualityDimension::CharacterConsistency,
                0.2,
                AssessorKind::Character,
            ),
            DimensionProfile::new(
                QualityDimension::GenreAppropriateness,
                0.1,
                AssessorKind::Genre,
            ),
        ],
        ContentType::Storyboard => vec![
            DimensionProfile::new(QualityDimension::VisualComposition, 0.3, AssessorKind::Visual),
            DimensionProfile::new(
                QualityDimension::NarrativeStructure,
                0.25,
                AssessorKind::Structure,
            ),
            DimensionProfile::new(QualityDimension::ShotVariety, 0.2, AssessorKind::ShotVariety),
            DimensionProfile::new(QualityDimension::PacingFlow, 0.15, AssessorKind::Pacing),
            DimensionProfile::new(
                QualityDimension::FormattingCompliance,
                0.1,
                AssessorKind::Formatting,
            ),
        ],
        ContentType::CastingSheet => vec![
            DimensionProfile::new(QualityDimension::RoleClarity, 0.35, AssessorKind::Roles),
            DimensionProfile::new(
                QualityDimension::CharacterConsistency,
                0.3,
                AssessorKind::Character,
            ),
            DimensionProfile::new(QualityDimension::CastingInsight, 0.2, AssessorKind::Casting),
            DimensionProfile::new(
                QualityDimension::FormattingCompliance,
                0.15,
                AssessorKind::Formatting,
            ),
        ],
    }
}

/// The built-in benchmark catalog
///
/// Two tiers per content type. The first metric of each benchmark carries the
/// pass target for the whole benchmark.
pub fn benchmark_catalog() -> Vec<QualityBenchmark> {
    vec![
        QualityBenchmark {
            id: "script-professional".to_string(),
            name: "Professional Episode Script".to_string(),
            content_type: ContentType::EpisodeScript,
            tier: StandardTier::Professional,
            metrics: vec![
                QualityMetric::new(QualityDimension::DialogueQuality, 0.3, 0.8)
                    .with_industry_reference(0.82),
                QualityMetric::new(QualityDimension::NarrativeStructure, 0.3, 0.8)
                    .with_industry_reference(0.85),
                QualityMetric::new(QualityDimension::CharacterConsistency, 0.25, 0.75)
                    .with_industry_reference(0.8),
                QualityMetric::new(QualityDimension::FormattingCompliance, 0.15, 0.85)
                    .with_industry_reference(0.9),
            ],
        },
        QualityBenchmark {
            id: "script-industry".to_string(),
            name: "Industry Episode Script".to_string(),
            content_type: ContentType::EpisodeScript,
            tier: StandardTier::Industry,
            metrics: vec![
                QualityMetric::new(QualityDimension::DialogueQuality, 0.35, 0.85)
                    .with_industry_reference(0.88),
                QualityMetric::new(QualityDimension::NarrativeStructure, 0.35, 0.85)
                    .with_industry_reference(0.88),
                QualityMetric::new(QualityDimension::GenreAppropriateness, 0.3, 0.8)
                    .with_industry_reference(0.85),
            ],
        },
        QualityBenchmark {
            id: "storyboard-professional".to_string(),
            name: "Professional Storyboard".to_string(),
            content_type: ContentType::Storyboard,
            tier: StandardTier::Professional,
            metrics: vec![
                QualityMetric::new(QualityDimension::VisualComposition, 0.4, 0.8)
                    .with_industry_reference(0.84),
                QualityMetric::new(QualityDimension::ShotVariety, 0.3, 0.75)
                    .with_industry_reference(0.8),
                QualityMetric::new(QualityDimension::PacingFlow, 0.3, 0.75)
                    .with_industry_reference(0.8),
            ],
        },
        QualityBenchmark {
            id: "storyboard-industry".to_string(),
            name: "Industry Storyboard".to_string(),
            content_type: ContentType::Storyboard,
            tier: StandardTier::Industry,
            metrics: vec![
                QualityMetric::new(QualityDimension::VisualComposition, 0.5, 0.85)
                    .with_industry_reference(0.88),
                QualityMetric::new(QualityDimension::NarrativeStructure, 0.5, 0.85)
                    .with_industry_reference(0.87),
            ],
        },
        QualityBenchmark {
            id: "casting-professional".to_string(),
            name: "Professional Casting Sheet".to_string(),
            content_type: ContentType::CastingSheet,
            tier: StandardTier::Professional,
            metrics: vec![
                QualityMetric::new(QualityDimension::RoleClarity, 0.5, 0.8)
                    .with_industry_reference(0.85),
                QualityMetric::new(QualityDimension::CastingInsight, 0.3, 0.75)
                    .with_industry_reference(0.8),
                QualityMetric::new(QualityDimension::CharacterConsistency, 0.2, 0.75)
                    .with_industry_reference(0.8),
            ],
        },
    ]
}

/// A curated industry-standard criterion for the professional evaluator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalCriterion {
    pub name: String,
    pub weight: f64,
}

impl ProfessionalCriterion {
    fn new(name: &str, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
        }
    }
}

/// Curated criteria sets, independent of the generic benchmark catalog
pub fn professional_criteria(content_type: ContentType) -> Vec<ProfessionalCriterion> {
    match content_type {
        ContentType::EpisodeScript => vec![
            ProfessionalCriterion::new("scene economy", 0.25),
            ProfessionalCriterion::new("distinct character voices", 0.25),
            ProfessionalCriterion::new("episode hook and cliffhanger", 0.25),
            ProfessionalCriterion::new("production-ready formatting", 0.25),
        ],
        ContentType::Storyboard => vec![
            ProfessionalCriterion::new("shot readability", 0.35),
            ProfessionalCriterion::new("coverage for the edit", 0.35),
            ProfessionalCriterion::new("camera intent noted", 0.3),
        ],
        ContentType::CastingSheet => vec![
            ProfessionalCriterion::new("castable role definitions", 0.4),
            ProfessionalCriterion::new("actionable audition guidance", 0.3),
            ProfessionalCriterion::new("grounded reference points", 0.3),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_weights_sum_to_one() {
        for content_type in [
            ContentType::EpisodeScript,
            ContentType::Storyboard,
            ContentType::CastingSheet,
        ] {
            let total: f64 = dimension_profile(content_type)
                .iter()
                .map(|p| p.weight)
                .sum();
            assert!(
                (total - 1.0).abs() < 1e-6,
                "{content_type} profile weights sum to {total}"
            );
        }
    }

    #[test]
    fn benchmark_metric_weights_sum_to_one() {
        for benchmark in benchmark_catalog() {
            let total: f64 = benchmark.metrics.iter().map(|m| m.weight).sum();
            assert!(
                (total - 1.0).abs() < 1e-6,
                "benchmark {} metric weights sum to {total}",
                benchmark.id
            );
        }
    }

    #[test]
    fn professional_criteria_weights_sum_to_one() {
        for content_type in [
            ContentType::EpisodeScript,
            ContentType::Storyboard,
            ContentType::CastingSheet,
        ] {
            let total: f64 = professional_criteria(content_type)
                .iter()
                .map(|c| c.weight)
                .sum();
            assert!((total - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn catalog_covers_every_content_type() {
        let catalog = benchmark_catalog();
        for content_type in [
            ContentType::EpisodeScript,
            ContentType::Storyboard,
            ContentType::CastingSheet,
        ] {
            assert!(catalog.iter().any(|b| b.content_type == content_type));
        }
    }
}
