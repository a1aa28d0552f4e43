//! Generation stages, stage pipelines, and the generation result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{ArtifactPayload, ContentType, PayloadKind};
use super::ids::GenerationId;

/// One ordered step of a generation pipeline
///
/// The template is a plain-text brief; the prompt builder appends the story
/// context and the previous stage's output around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStage {
    pub name: String,
    pub prompt_template: String,
    pub expected_shape: PayloadKind,
}

impl GenerationStage {
    pub fn new(
        name: impl Into<String>,
        prompt_template: impl Into<String>,
        expected_shape: PayloadKind,
    ) -> Self {
        Self {
            name: name.into(),
            prompt_template: prompt_template.into(),
            expected_shape,
        }
    }
}

/// The fixed stage pipeline for a content type
///
/// Pipelines are total over `ContentType` and acyclic by construction: each
/// is a plain ordered list.
pub fn stages_for(content_type: ContentType) -> Vec<GenerationStage> {
    match content_type {
        ContentType::EpisodeScript => vec![
            GenerationStage::new(
                "derive_beats",
                "Break this episode into 5-8 narrative beats. Each beat needs a title, \
                 a one-or-two sentence summary, and the emotional turn it lands \
                 (for example: \"safety to dread\").",
                PayloadKind::BeatSheet,
            ),
            GenerationStage::new(
                "expand_script",
                "Expand the beat sheet into a full episode script. Give the episode a \
                 title and a logline. Write one scene per beat with a slugline heading, \
                 action lines, and dialogue. End with exactly three branching choices \
                 for the audience, each with a consequence hint.",
                PayloadKind::EpisodeScript,
            ),
        ],
        ContentType::Storyboard => vec![
            GenerationStage::new(
                "derive_beats",
                "Break this episode into 5-8 visual beats suitable for storyboarding. \
                 Each beat needs a title, a summary of what the camera sees, and the \
                 emotional turn.",
                PayloadKind::BeatSheet,
            ),
            GenerationStage::new(
                "frame_storyboard",
                "Turn the beat sheet into a storyboard. Give it a title and one frame \
                 per key moment (8-15 frames). Each frame needs a shot type, a visual \
                 description, camera notes, and any dialogue or sound cue.",
                PayloadKind::Storyboard,
            ),
        ],
        ContentType::CastingSheet => vec![GenerationStage::new(
            "draft_casting",
            "Produce a casting sheet for this story. For every named character give \
             an age range, the essential quality an actor must bring, an audition \
             note, and one or two reference performances.",
            PayloadKind::CastingSheet,
        )],
    }
}

/// Record of how a generation request went
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub generation_id: GenerationId,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    /// Names of stages that substituted their deterministic default
    pub fallback_stages: Vec<String>,
}

impl GenerationMetadata {
    pub fn used_fallback(&self) -> bool {
        !self.fallback_stages.is_empty()
    }
}

/// Final output of the staged generator, owned by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub content_type: ContentType,
    pub payload: ArtifactPayload,
    pub metadata: GenerationMetadata,
}
