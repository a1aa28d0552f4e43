//! Application services - Orchestration over the domain and the ports

pub mod ab_comparator;
pub mod assessors;
pub mod context_analyzer;
pub mod professional;
pub mod prompts;
pub mod result_parser;
pub mod staged_generator;
pub mod validator;

pub use ab_comparator::{AbComparator, SIGNIFICANCE_THRESHOLD};
pub use assessors::{Assessment, AssessorError, AssessorRegistry, DimensionAssessor};
pub use context_analyzer::ContextAnalyzer;
pub use professional::ProfessionalEvaluator;
pub use result_parser::parse_payload;
pub use staged_generator::StagedGenerator;
pub use validator::{QualityValidator, ValidatorConfig};
