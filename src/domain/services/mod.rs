//! Domain services - Pure scoring and classification logic

mod benchmark;
mod classification;
mod standards;
mod suggestions;

pub use benchmark::compare_benchmark;
pub use classification::classify_quality_level;
pub use standards::{
    benchmark_catalog, dimension_profile, professional_criteria, AssessorKind, DimensionProfile,
    ProfessionalCriterion,
};
pub use suggestions::{
    maintenance_suggestion, suggest_improvements, DIMENSION_TARGET, GAP_THRESHOLD,
    IMPROVEMENT_THRESHOLD,
};
