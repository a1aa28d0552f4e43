//! A/B comparator - original versus enhanced artifact
//!
//! Runs the full validation pipeline over both variants with identical
//! benchmark sets and turns the two results into a comparative verdict. The
//! significance call is a fixed threshold on the absolute score delta, a
//! deliberate heuristic rather than a statistical test.

use crate::application::services::validator::QualityValidator;
use crate::domain::value_objects::{
    AbTestResult, ArtifactPayload, ContentType, GenerationContext, PreferredVersion,
};
use std::collections::HashMap;

/// Score deltas above this magnitude count as significant
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.1;

pub struct AbComparator<'a> {
    validator: &'a QualityValidator,
}

impl<'a> AbComparator<'a> {
    pub fn new(validator: &'a QualityValidator) -> Self {
        Self { validator }
    }

    /// Compare two variants of one artifact
    ///
    /// The two validation passes are independent and run concurrently.
    pub async fn compare(
        &self,
        original: &ArtifactPayload,
        enhanced: &ArtifactPayload,
        content_type: ContentType,
        context: &GenerationContext,
    ) -> AbTestResult {
        let (original_result, enhanced_result) = tokio::join!(
            self.validator.validate(original, content_type, context),
            self.validator.validate(enhanced, content_type, context),
        );

        let original_score = original_result.overall_score;
        let enhanced_score = enhanced_result.overall_score;
        let Outcome {
            absolute_improvement,
            percentage_improvement,
            significant,
            improved,
        } = Outcome::from_scores(original_score, enhanced_score);

        let mut dimension_deltas = HashMap::new();
        for (dimension, score) in &enhanced_result.dimension_scores {
            let before = original_result
                .dimension_scores
                .get(dimension)
                .map_or(0.0, |s| s.score);
            dimension_deltas.insert(*dimension, score.score - before);
        }
        for (dimension, score) in &original_result.dimension_scores {
            dimension_deltas
                .entry(*dimension)
                .or_insert(-score.score);
        }

        AbTestResult {
            original_score,
            enhanced_score,
            absolute_improvement,
            percentage_improvement,
            significant,
            preferred: if improved {
                PreferredVersion::Enhanced
            } else {
                PreferredVersion::Original
            },
            dimension_deltas,
            recommendation: recommendation(improved, significant).to_string(),
        }
    }
}

/// The pure arithmetic of one A/B comparison
#[derive(Debug, Clone, Copy)]
struct Outcome {
    absolute_improvement: f64,
    percentage_improvement: f64,
    significant: bool,
    improved: bool,
}

impl Outcome {
    fn from_scores(original_score: f64, enhanced_score: f64) -> Self {
        let absolute_improvement = enhanced_score - original_score;
        // Guard the division: an original that scored zero has no meaningful
        // relative improvement.
        let percentage_improvement = if original_score == 0.0 {
            0.0
        } else {
            absolute_improvement / original_score
        };
        Self {
            absolute_improvement,
            percentage_improvement,
            significant: absolute_improvement.abs() > SIGNIFICANCE_THRESHOLD,
            improved: enhanced_score > original_score,
        }
    }
}

/// Fixed decision table on (improved, significant)
fn recommendation(improved: bool, significant: bool) -> &'static str {
    match (improved, significant) {
        (true, true) => "Adopt the enhanced version; the improvement is material.",
        (true, false) => "Prefer the enhanced version, though the gain is marginal.",
        (false, true) => "Keep the original; the enhancement measurably regressed.",
        (false, false) => "Keep the original; the enhancement made no measurable difference.",
    }
}
