//! Quality validator - the full validation pipeline
//!
//! Assessors run concurrently, failures degrade to skipped dimensions, and
//! even an internally broken pipeline returns a well-formed (if neutral)
//! result. Callers never see an error from `validate`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures_util::future::join_all;

use crate::application::services::assessors::AssessorRegistry;
use crate::application::services::professional::ProfessionalEvaluator;
use crate::domain::services::{
    benchmark_catalog, classify_quality_level, compare_benchmark, dimension_profile,
    maintenance_suggestion, suggest_improvements,
};
use crate::domain::value_objects::{
    AcceptanceLevel, ArtifactPayload, ContentType, DimensionScore, GenerationContext,
    GenerationResult, ProfessionalReview, QualityBenchmark, QualityLevel, ValidationId,
    ValidationMetadata, ValidationResult,
};
use crate::infrastructure::history::ValidationHistory;

/// Explicit, immutable configuration for the validator
///
/// Built once and injected; there is no process-wide registry.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub benchmarks: Vec<QualityBenchmark>,
    pub history_capacity: usize,
}

impl ValidatorConfig {
    /// Built-in benchmark catalog and a 100-entry history per content type
    pub fn standard() -> Self {
        Self {
            benchmarks: benchmark_catalog(),
            history_capacity: 100,
        }
    }
}

/// Internal pipeline faults that trigger the degraded result
#[derive(Debug, thiserror::Error)]
enum PipelineError {
    #[error("assessor registry is empty")]
    EmptyRegistry,
    #[error("no dimension could be scored for {0}")]
    NothingScored(ContentType),
}

/// Runs dimension assessment, benchmark comparison, professional review,
/// and suggestion generation over one artifact
pub struct QualityValidator {
    config: ValidatorConfig,
    registry: AssessorRegistry,
    evaluator: ProfessionalEvaluator,
    history: Arc<ValidationHistory>,
}

impl QualityValidator {
    pub fn new(config: ValidatorConfig, registry: AssessorRegistry) -> Self {
        let history = Arc::new(ValidationHistory::new(config.history_capacity));
        Self {
            config,
            registry,
            evaluator: ProfessionalEvaluator::new(),
            history,
        }
    }

    /// Validator with the built-in config and assessor registry
    pub fn standard() -> Self {
        Self::new(ValidatorConfig::standard(), AssessorRegistry::standard())
    }

    pub fn history(&self) -> &Arc<ValidationHistory> {
        &self.history
    }

    /// Validate a generation result end to end
    pub async fn validate_generation(
        &self,
        generation: &GenerationResult,
        context: &GenerationContext,
    ) -> ValidationResult {
        self.validate(&generation.payload, generation.content_type, context)
            .await
    }

    /// Validate an artifact payload
    ///
    /// Always returns a well-formed result. Expected faults (an assessor
    /// failing or missing) degrade to skipped dimensions; an unusable
    /// pipeline yields the neutral degraded result instead of an error.
    pub async fn validate(
        &self,
        payload: &ArtifactPayload,
        content_type: ContentType,
        context: &GenerationContext,
    ) -> ValidationResult {
        let started = Instant::now();
        let result = match self.validate_inner(payload, content_type, context, started).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(%error, %content_type, "validation pipeline failed, returning degraded result");
                self.degraded_result(content_type, &error, started)
            }
        };

        self.history.append(result.clone());
        result
    }

    async fn validate_inner(
        &self,
        payload: &ArtifactPayload,
        content_type: ContentType,
        context: &GenerationContext,
        started: Instant,
    ) -> Result<ValidationResult, PipelineError> {
        if self.registry.is_empty() {
            return Err(PipelineError::EmptyRegistry);
        }

        let mut notes = Vec::new();
        let profile = dimension_profile(content_type);

        // Dimensions assess concurrently; each only reads the artifact and
        // the context.
        let mut pending = Vec::new();
        for entry in &profile {
            match self.registry.get(entry.assessor) {
                Some(assessor) => {
                    let assessor = Arc::clone(assessor);
                    pending.push(async move {
                        (entry, assessor.assess(payload, context).await)
                    });
                }
                None => {
                    tracing::warn!(kind = ?entry.assessor, dimension = %entry.dimension, "no assessor registered, skipping dimension");
                    notes.push(format!(
                        "skipped {}: no assessor registered for {:?}",
                        entry.dimension, entry.assessor
                    ));
                }
            }
        }

        let mut dimension_scores: HashMap<_, DimensionScore> = HashMap::new();
        for (entry, outcome) in join_all(pending).await {
            match outcome {
                Ok(assessment) => {
                    let score = DimensionScore::new(entry.dimension, assessment.score, entry.weight)
                        .with_confidence(assessment.confidence)
                        .with_feedback(assessment.feedback);
                    let score = assessment
                        .improvements
                        .into_iter()
                        .fold(score, |s, i| s.with_improvement(i));
                    dimension_scores.insert(entry.dimension, score);
                }
                Err(error) => {
                    tracing::warn!(dimension = %entry.dimension, %error, "assessor failed, omitting dimension");
                    notes.push(format!("omitted {}: {error}", entry.dimension));
                }
            }
        }

        if dimension_scores.is_empty() {
            return Err(PipelineError::NothingScored(content_type));
        }

        let total_weight: f64 = dimension_scores.values().map(|s| s.weight).sum();
        let overall_score = dimension_scores
            .values()
            .map(|s| s.score * s.weight)
            .sum::<f64>()
            / total_weight;

        let applicable: Vec<&QualityBenchmark> = self
            .config
            .benchmarks
            .iter()
            .filter(|b| b.content_type == content_type)
            .collect();
        if applicable.is_empty() {
            notes.push(format!("no benchmarks configured for {content_type}"));
        }
        let benchmark_comparisons: Vec<_> = applicable
            .iter()
            .map(|b| compare_benchmark(&dimension_scores, b))
            .collect();

        let professional_review = self.evaluator.evaluate(payload, content_type, context);
        let suggestions =
            suggest_improvements(content_type, &dimension_scores, &benchmark_comparisons);
        let quality_level =
            classify_quality_level(overall_score, professional_review.acceptance);

        let mut assessors_used: Vec<_> = dimension_scores.keys().copied().collect();
        assessors_used.sort();

        tracing::info!(
            %content_type,
            overall_score,
            ?quality_level,
            "validation complete"
        );

        Ok(ValidationResult {
            content_type,
            overall_score,
            dimension_scores,
            benchmark_comparisons,
            professional_review,
            suggestions,
            quality_level,
            metadata: ValidationMetadata {
                validation_id: ValidationId::new(),
                validated_at: Utc::now(),
                duration_ms: started.elapsed().as_millis() as u64,
                assessors_used,
                benchmarks_applied: applicable.iter().map(|b| b.id.clone()).collect(),
                notes,
            },
        })
    }

    /// Neutral placeholder result for an unusable pipeline
    ///
    /// The one degraded state visible to callers: score 0.6, amateur level,
    /// and a suggestion telling the operator the validator needs attention.
    fn degraded_result(
        &self,
        content_type: ContentType,
        error: &PipelineError,
        started: Instant,
    ) -> ValidationResult {
        ValidationResult {
            content_type,
            overall_score: 0.6,
            dimension_scores: HashMap::new(),
            benchmark_comparisons: Vec::new(),
            professional_review: ProfessionalReview {
                acceptance: AcceptanceLevel::Marginal,
                industry_ready: false,
                criteria: Vec::new(),
                craft_notes: Vec::new(),
            },
            suggestions: vec![maintenance_suggestion(&error.to_string())],
            quality_level: QualityLevel::Amateur,
            metadata: ValidationMetadata {
                validation_id: ValidationId::new(),
                validated_at: Utc::now(),
                duration_ms: started.elapsed().as_millis() as u64,
                assessors_used: Vec::new(),
                benchmarks_applied: Vec::new(),
                notes: vec![format!("pipeline failure: {error}")],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::assessors::DialogueAssessor;
    use crate::domain::services::AssessorKind;
    use crate::domain::value_objects::{
        BranchChoice, CharacterBrief, DialogueLine, DialogueStyle, PacingGuidance, PayloadKind,
        QualityDimension, SceneBlock, StoryDirection, StorySeed, SuggestionKind, ToneGuidance,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn context() -> GenerationContext {
        let seed = StorySeed::new("The Drowning Coast", "A keeper finds a hidden secret door")
            .with_genre("mystery")
            .with_character(CharacterBrief::new("Maren", "Keeper"))
            .with_character(CharacterBrief::new("Silas", "Stranger"));
        let direction = StoryDirection::new(
            ToneGuidance::Mysterious,
            PacingGuidance::Measured,
            DialogueStyle::Sparse,
        );
        GenerationContext::new(seed, direction)
    }

    fn solid_script() -> ArtifactPayload {
        let scene = |speaker: &str| SceneBlock {
            heading: "INT. LIGHTHOUSE - NIGHT".to_string(),
            action: "A shadow crosses the hidden door; the secret question hangs.".to_string(),
            dialogue: vec![DialogueLine {
                character: speaker.to_string(),
                line: "It opened on its own.".to_string(),
                parenthetical: None,
            }],
        };
        ArtifactPayload::EpisodeScript {
            title: "The Door".to_string(),
            logline: "A keeper opens what should stay shut.".to_string(),
            scenes: vec![scene("Maren"), scene("Silas"), scene("Maren"), scene("Silas")],
            choices: vec![
                BranchChoice { label: "A".to_string(), consequence_hint: String::new() },
                BranchChoice { label: "B".to_string(), consequence_hint: String::new() },
                BranchChoice { label: "C".to_string(), consequence_hint: String::new() },
            ],
        }
    }

    #[tokio::test]
    async fn validates_a_script_with_scores_in_range() {
        let validator = QualityValidator::standard();
        let result = validator
            .validate(&solid_script(), ContentType::EpisodeScript, &context())
            .await;

        assert!((0.0..=1.0).contains(&result.overall_score));
        assert_eq!(result.dimension_scores.len(), 5);
        for score in result.dimension_scores.values() {
            assert!((0.0..=1.0).contains(&score.score));
        }
        assert_eq!(result.benchmark_comparisons.len(), 2);
        for comparison in &result.benchmark_comparisons {
            assert!(comparison.gap >= 0.0);
            assert_eq!(comparison.passed, comparison.gap == 0.0);
        }
        assert!(!result.metadata.assessors_used.is_empty());
    }

    #[tokio::test]
    async fn suggestions_are_ranked_by_impact() {
        let validator = QualityValidator::standard();
        // The default fallback script scores poorly on several dimensions.
        let weak = ArtifactPayload::default_for(PayloadKind::EpisodeScript);
        let result = validator
            .validate(&weak, ContentType::EpisodeScript, &context())
            .await;

        assert!(!result.suggestions.is_empty());
        for pair in result.suggestions.windows(2) {
            assert!(pair[0].expected_impact >= pair[1].expected_impact);
        }
    }

    #[tokio::test]
    async fn empty_registry_yields_degraded_result() {
        init_tracing();
        let validator =
            QualityValidator::new(ValidatorConfig::standard(), AssessorRegistry::new());
        let result = validator
            .validate(&solid_script(), ContentType::EpisodeScript, &context())
            .await;

        assert!((result.overall_score - 0.6).abs() < 1e-9);
        assert_eq!(result.quality_level, QualityLevel::Amateur);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].kind, SuggestionKind::SystemImprovement);
    }

    #[tokio::test]
    async fn unregistered_kinds_skip_dimensions_with_notes() {
        init_tracing();
        let mut registry = AssessorRegistry::new();
        registry.register(AssessorKind::Dialogue, Arc::new(DialogueAssessor));
        let validator = QualityValidator::new(ValidatorConfig::standard(), registry);

        let result = validator
            .validate(&solid_script(), ContentType::EpisodeScript, &context())
            .await;

        let profile = dimension_profile(ContentType::EpisodeScript);
        assert_eq!(result.dimension_scores.len(), 1);
        assert!(result
            .dimension_scores
            .contains_key(&QualityDimension::DialogueQuality));
        let skipped: Vec<_> = result
            .metadata
            .notes
            .iter()
            .filter(|n| n.starts_with("skipped"))
            .collect();
        assert_eq!(skipped.len(), profile.len() - 1);
        assert!((0.0..=1.0).contains(&result.overall_score));
        assert_eq!(result.metadata.assessors_used, vec![QualityDimension::DialogueQuality]);
    }

    #[tokio::test]
    async fn rejecting_assessors_omit_dimensions_but_pipeline_completes() {
        // Storyboard-only assessors reject a beat sheet; those dimensions are
        // omitted with notes while the rest still score.
        let validator = QualityValidator::standard();
        let beats = ArtifactPayload::default_for(PayloadKind::BeatSheet);
        let result = validator
            .validate(&beats, ContentType::Storyboard, &context())
            .await;

        assert!(result.dimension_scores.len() < dimension_profile(ContentType::Storyboard).len());
        assert!(!result.dimension_scores.is_empty());
        assert!(result.metadata.notes.iter().any(|n| n.starts_with("omitted")));
        assert!((0.0..=1.0).contains(&result.overall_score));
    }

    #[tokio::test]
    async fn history_records_each_validation() {
        let validator = QualityValidator::standard();
        validator
            .validate(&solid_script(), ContentType::EpisodeScript, &context())
            .await;
        validator
            .validate(&solid_script(), ContentType::EpisodeScript, &context())
            .await;

        assert_eq!(validator.history().len(ContentType::EpisodeScript), 2);
    }

    #[tokio::test]
    async fn results_serialize_to_json() {
        let validator = QualityValidator::standard();
        let result = validator
            .validate(&solid_script(), ContentType::EpisodeScript, &context())
            .await;
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("overall_score"));
    }
}
