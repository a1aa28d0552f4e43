//! Value objects - Immutable objects defined by their attributes

mod content;
mod context;
mod direction;
mod generation;
mod ids;
mod quality;

pub use content::{
    ArtifactPayload, Beat, BranchChoice, CastingRole, ContentType, DialogueLine, PayloadKind,
    SceneBlock, StoryboardFrame,
};
pub use context::{CharacterBrief, GenerationContext, StorySeed};
pub use direction::{DialogueStyle, PacingGuidance, StoryDirection, ToneGuidance};
pub use generation::{stages_for, GenerationMetadata, GenerationResult, GenerationStage};
pub use ids::{GenerationId, ValidationId};
pub use quality::{
    AbTestResult, AcceptanceLevel, BenchmarkComparison, CriterionScore, Difficulty,
    DimensionScore, ImprovementSuggestion, PreferredVersion, ProfessionalReview,
    QualityBenchmark, QualityDimension, QualityLevel, QualityMetric, StandardTier,
    SuggestionKind, ValidationMetadata, ValidationResult,
};
