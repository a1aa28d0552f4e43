//! Quality dimension assessors
//!
//! Each assessor scores one axis of an artifact. The registry is the
//! pluggable seam: the shipped assessors are deterministic feature
//! heuristics, and callers can register their own (including collaborator-
//! backed ones, which is why the trait is async).

mod casting;
mod script;
mod storyboard;

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::services::AssessorKind;
use crate::domain::value_objects::{ArtifactPayload, GenerationContext};

pub use casting::{CastingInsightAssessor, RoleClarityAssessor};
pub use script::{
    CharacterConsistencyAssessor, DialogueAssessor, FormattingAssessor, GenreAssessor,
    StructureAssessor,
};
pub use storyboard::{PacingAssessor, ShotVarietyAssessor, VisualCompositionAssessor};

/// Why an assessor declined to score an artifact
#[derive(Debug, thiserror::Error)]
pub enum AssessorError {
    #[error("assessor does not apply to this payload: {0}")]
    UnsupportedPayload(String),
    #[error("assessor produced an out-of-range score: {0}")]
    OutOfRange(f64),
}

/// Raw assessor output, before the profile weight is attached
#[derive(Debug, Clone)]
pub struct Assessment {
    pub score: f64,
    pub confidence: f64,
    pub feedback: String,
    pub improvements: Vec<String>,
}

impl Assessment {
    pub fn new(score: f64, feedback: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            confidence: 0.7,
            feedback: feedback.into(),
            improvements: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn with_improvement(mut self, improvement: impl Into<String>) -> Self {
        self.improvements.push(improvement.into());
        self
    }
}

/// Scores one quality axis of an artifact
#[async_trait::async_trait]
pub trait DimensionAssessor: Send + Sync {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        context: &GenerationContext,
    ) -> Result<Assessment, AssessorError>;
}

/// Lookup table from assessor kind to implementation
///
/// A kind with no registration causes its dimension to be skipped during
/// validation, never an error.
#[derive(Clone, Default)]
pub struct AssessorRegistry {
    assessors: HashMap<AssessorKind, Arc<dyn DimensionAssessor>>,
}

impl AssessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in heuristic assessor
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(AssessorKind::Dialogue, Arc::new(DialogueAssessor));
        registry.register(AssessorKind::Structure, Arc::new(StructureAssessor));
        registry.register(AssessorKind::Formatting, Arc::new(FormattingAssessor));
        registry.register(AssessorKind::Character, Arc::new(CharacterConsistencyAssessor));
        registry.register(AssessorKind::Genre, Arc::new(GenreAssessor));
        registry.register(AssessorKind::Visual, Arc::new(VisualCompositionAssessor));
        registry.register(AssessorKind::ShotVariety, Arc::new(ShotVarietyAssessor));
        registry.register(AssessorKind::Pacing, Arc::new(PacingAssessor));
        registry.register(AssessorKind::Roles, Arc::new(RoleClarityAssessor));
        registry.register(AssessorKind::Casting, Arc::new(CastingInsightAssessor));
        registry
    }

    pub fn register(&mut self, kind: AssessorKind, assessor: Arc<dyn DimensionAssessor>) {
        self.assessors.insert(kind, assessor);
    }

    pub fn get(&self, kind: AssessorKind) -> Option<&Arc<dyn DimensionAssessor>> {
        self.assessors.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.assessors.is_empty()
    }
}

/// Ratio helper shared by the heuristics; safe on an empty denominator
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::dimension_profile;
    use crate::domain::value_objects::ContentType;

    #[test]
    fn standard_registry_covers_every_profile_kind() {
        let registry = AssessorRegistry::standard();
        for content_type in [
            ContentType::EpisodeScript,
            ContentType::Storyboard,
            ContentType::CastingSheet,
        ] {
            for profile in dimension_profile(content_type) {
                assert!(
                    registry.get(profile.assessor).is_some(),
                    "no assessor registered for {:?}",
                    profile.assessor
                );
            }
        }
    }

    #[test]
    fn assessment_clamps_score() {
        assert_eq!(Assessment::new(1.7, "").score, 1.0);
        assert_eq!(Assessment::new(-0.3, "").score, 0.0);
    }
}
