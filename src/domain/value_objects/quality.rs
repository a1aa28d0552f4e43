//! Quality benchmarks, dimension scores, and validation outcomes

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::ContentType;
use super::ids::ValidationId;

/// One independently scored quality axis of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityDimension {
    DialogueQuality,
    NarrativeStructure,
    FormattingCompliance,
    CharacterConsistency,
    GenreAppropriateness,
    VisualComposition,
    ShotVariety,
    PacingFlow,
    RoleClarity,
    CastingInsight,
}

impl QualityDimension {
    pub fn display_name(&self) -> &'static str {
        match self {
            QualityDimension::DialogueQuality => "dialogue quality",
            QualityDimension::NarrativeStructure => "narrative structure",
            QualityDimension::FormattingCompliance => "formatting compliance",
            QualityDimension::CharacterConsistency => "character consistency",
            QualityDimension::GenreAppropriateness => "genre appropriateness",
            QualityDimension::VisualComposition => "visual composition",
            QualityDimension::ShotVariety => "shot variety",
            QualityDimension::PacingFlow => "pacing and flow",
            QualityDimension::RoleClarity => "role clarity",
            QualityDimension::CastingInsight => "casting insight",
        }
    }
}

impl std::fmt::Display for QualityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ordered quality standard tiers a benchmark can represent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StandardTier {
    Student,
    Professional,
    Industry,
    AwardWinning,
}

/// One weighted metric inside a benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetric {
    pub dimension: QualityDimension,
    pub weight: f64,
    pub target_score: f64,
    /// Where typical produced industry work lands on this metric
    pub industry_reference: f64,
}

impl QualityMetric {
    pub fn new(dimension: QualityDimension, weight: f64, target_score: f64) -> Self {
        Self {
            dimension,
            weight,
            target_score,
            industry_reference: target_score,
        }
    }

    pub fn with_industry_reference(mut self, reference: f64) -> Self {
        self.industry_reference = reference;
        self
    }
}

/// A named, weighted bundle of quality metrics
///
/// Benchmarks are loaded once into the validator config and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityBenchmark {
    pub id: String,
    pub name: String,
    pub content_type: ContentType,
    pub tier: StandardTier,
    pub metrics: Vec<QualityMetric>,
}

impl QualityBenchmark {
    /// The aggregate score an artifact must reach to pass
    ///
    /// By convention this is the first metric's target; 0.8 when the metric
    /// list is empty.
    pub fn pass_target(&self) -> f64 {
        self.metrics
            .first()
            .map(|m| m.target_score)
            .unwrap_or(0.8)
    }
}

/// Assessor output for one dimension, produced fresh per validation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: QualityDimension,
    /// Always clamped to [0, 1]
    pub score: f64,
    pub weight: f64,
    pub confidence: f64,
    pub feedback: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl DimensionScore {
    pub fn new(dimension: QualityDimension, score: f64, weight: f64) -> Self {
        Self {
            dimension,
            score: score.clamp(0.0, 1.0),
            weight,
            confidence: 1.0,
            feedback: String::new(),
            improvements: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    pub fn with_improvement(mut self, improvement: impl Into<String>) -> Self {
        self.improvements.push(improvement.into());
        self
    }
}

/// Result of holding dimension scores against one benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub benchmark_id: String,
    pub aggregate_score: f64,
    /// Scores for the metrics that had a matching dimension score
    pub metric_scores: HashMap<QualityDimension, f64>,
    pub passed: bool,
    /// How far below the pass target the aggregate landed; never negative
    pub gap: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// What kind of fix a suggestion proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    DimensionImprovement,
    BenchmarkImprovement,
    SystemImprovement,
}

/// Effort tier for acting on a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Light,
    Moderate,
    Substantial,
}

/// One actionable improvement, ranked by expected impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub kind: SuggestionKind,
    pub dimension: Option<QualityDimension>,
    pub current_score: f64,
    pub target_score: f64,
    pub expected_impact: f64,
    pub difficulty: Difficulty,
    pub time_estimate: String,
    pub resources: Vec<String>,
    pub summary: String,
}

/// Final ordered classification of an artifact
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Amateur,
    Competent,
    Professional,
    Exceptional,
    Masterpiece,
}

/// Industry-acceptance verdict, independent of the overall score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceLevel {
    Unacceptable,
    Marginal,
    Acceptable,
    Strong,
    Exceptional,
}

/// Score for one curated professional criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub score: f64,
    pub note: String,
}

/// The professional evaluator's verdict on an artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalReview {
    pub acceptance: AcceptanceLevel,
    pub industry_ready: bool,
    pub criteria: Vec<CriterionScore>,
    pub craft_notes: Vec<String>,
}

/// Bookkeeping for one validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMetadata {
    pub validation_id: ValidationId,
    pub validated_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub assessors_used: Vec<QualityDimension>,
    pub benchmarks_applied: Vec<String>,
    /// Skipped dimensions, degraded paths, and similar events
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Terminal aggregate of the validation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub content_type: ContentType,
    /// Weight-normalized aggregate of the scored dimensions, in [0, 1]
    pub overall_score: f64,
    pub dimension_scores: HashMap<QualityDimension, DimensionScore>,
    pub benchmark_comparisons: Vec<BenchmarkComparison>,
    pub professional_review: ProfessionalReview,
    pub suggestions: Vec<ImprovementSuggestion>,
    pub quality_level: QualityLevel,
    pub metadata: ValidationMetadata,
}

/// Which variant an A/B comparison favors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredVersion {
    Original,
    Enhanced,
}

/// Outcome of validating an original artifact against an enhanced one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbTestResult {
    pub original_score: f64,
    pub enhanced_score: f64,
    pub absolute_improvement: f64,
    /// Relative improvement; defined as 0 when the original scored 0
    pub percentage_improvement: f64,
    /// Heuristic threshold on |absolute_improvement|, not a statistical test
    pub significant: bool,
    pub preferred: PreferredVersion,
    pub dimension_deltas: HashMap<QualityDimension, f64>,
    pub recommendation: String,
}
