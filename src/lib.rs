//! ScriptForge - staged generation and quality validation for episodic
//! creative writing
//!
//! The crate has two halves:
//!
//! - a **staged generator** that turns a story seed into structured artifacts
//!   (episode scripts, storyboards, casting sheets) through an ordered
//!   pipeline of collaborator calls, degrading gracefully to deterministic
//!   defaults when a call or a parse fails;
//! - a **quality validator** that scores an artifact along weighted
//!   dimensions, holds it against benchmark and professional standards, and
//!   produces ranked improvement suggestions.
//!
//! ```ignore
//! use std::sync::Arc;
//! use scriptforge::application::services::{ContextAnalyzer, QualityValidator, StagedGenerator};
//! use scriptforge::domain::value_objects::{ContentType, StorySeed};
//! use scriptforge::infrastructure::ollama::OllamaClient;
//!
//! let collaborator = Arc::new(OllamaClient::new("http://localhost:11434/v1", "llama3.2"));
//! let analyzer = ContextAnalyzer::new(collaborator.clone());
//! let generator = StagedGenerator::new(collaborator);
//! let validator = QualityValidator::standard();
//!
//! let seed = StorySeed::new("The Drowning Coast", "A lighthouse keeper finds a door")
//!     .with_genre("mystery")
//!     .with_episode(0, 8);
//!
//! let context = analyzer.analyze(seed).await;
//! let generation = generator.generate_content(&context, ContentType::EpisodeScript).await;
//! let report = validator.validate_generation(&generation, &context).await;
//! println!("{:?} ({:.2})", report.quality_level, report.overall_score);
//! ```
//!
//! Both results are plain serde-serializable data; the crate exposes no
//! network surface of its own beyond the outbound collaborator client.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ports::outbound::{CollaboratorPort, GenerateRequest, GenerateResponse};
pub use application::services::{
    AbComparator, AssessorRegistry, ContextAnalyzer, QualityValidator, StagedGenerator,
    ValidatorConfig,
};
pub use domain::value_objects::{
    AbTestResult, ArtifactPayload, ContentType, GenerationContext, GenerationResult,
    QualityLevel, StorySeed, ValidationResult,
};
