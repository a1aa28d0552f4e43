//! Staged generator - the generation pipeline orchestrator
//!
//! Runs an ordered list of stages, each feeding the next. A stage that fails
//! in any expected way (collaborator timeout, quota, transport fault, or
//! unparseable output) is replaced by its deterministic default and the
//! pipeline continues; `generate` always returns a result.

use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::outbound::{CollaboratorPort, GenerateRequest};
use crate::application::services::prompts::{build_stage_prompt, build_stage_system_prompt};
use crate::application::services::result_parser::parse_payload;
use crate::domain::value_objects::{
    stages_for, ArtifactPayload, ContentType, GenerationContext, GenerationId,
    GenerationMetadata, GenerationResult, GenerationStage,
};

/// Upper bound on collaborator output per stage
const STAGE_MAX_TOKENS: u32 = 2048;

/// Orchestrates sequential generation stages over a collaborator
pub struct StagedGenerator<C: CollaboratorPort> {
    collaborator: Arc<C>,
    model: Option<String>,
    temperature: f32,
}

impl<C: CollaboratorPort> StagedGenerator<C> {
    pub fn new(collaborator: Arc<C>) -> Self {
        Self {
            collaborator,
            model: None,
            temperature: 0.8,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Generate an artifact using the fixed pipeline for its content type
    pub async fn generate_content(
        &self,
        context: &GenerationContext,
        content_type: ContentType,
    ) -> GenerationResult {
        let stages = stages_for(content_type);
        self.generate(context, content_type, &stages).await
    }

    /// Run an explicit stage pipeline
    ///
    /// Stages execute strictly in order; stage i+1's prompt is built from
    /// stage i's parsed payload plus the original context. Never fails for
    /// collaborator or parse faults. An empty stage list is a programmer
    /// error.
    pub async fn generate(
        &self,
        context: &GenerationContext,
        content_type: ContentType,
        stages: &[GenerationStage],
    ) -> GenerationResult {
        assert!(!stages.is_empty(), "stage pipeline must not be empty");

        let system_prompt = build_stage_system_prompt(context);
        let mut previous: Option<ArtifactPayload> = None;
        let mut fallback_stages = Vec::new();
        let mut model = self.model.clone().unwrap_or_else(|| "default".to_string());

        for stage in stages {
            let (payload, used_fallback) = self
                .run_stage(stage, context, previous.as_ref(), &system_prompt, &mut model)
                .await;

            if used_fallback {
                fallback_stages.push(stage.name.clone());
            }
            previous = Some(payload);
        }

        // The loop ran at least once, so previous is set.
        let payload = previous.unwrap_or_else(|| {
            ArtifactPayload::default_for(stages.last().unwrap().expected_shape)
        });

        GenerationResult {
            content_type,
            payload,
            metadata: GenerationMetadata {
                generation_id: GenerationId::new(),
                generated_at: Utc::now(),
                model,
                fallback_stages,
            },
        }
    }

    /// One stage: build prompt, call the collaborator once, parse
    ///
    /// Single-attempt-then-fallback: no retries, every failure path lands on
    /// the deterministic default for the stage's expected shape.
    async fn run_stage(
        &self,
        stage: &GenerationStage,
        context: &GenerationContext,
        previous: Option<&ArtifactPayload>,
        system_prompt: &str,
        model: &mut String,
    ) -> (ArtifactPayload, bool) {
        let prompt = build_stage_prompt(stage, context, previous);

        let mut request = GenerateRequest::new(prompt)
            .with_system_prompt(system_prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(Some(STAGE_MAX_TOKENS));
        if let Some(configured) = &self.model {
            request = request.with_model(configured.clone());
        }

        match self.collaborator.generate(request).await {
            Ok(response) => {
                *model = response.model;
                let (payload, used_fallback) =
                    parse_payload(&response.content, stage.expected_shape);
                if used_fallback {
                    tracing::warn!(stage = %stage.name, "stage output unparseable, used fallback");
                }
                (payload, used_fallback)
            }
            Err(error) => {
                tracing::warn!(stage = %stage.name, %error, "collaborator call failed, used fallback");
                (ArtifactPayload::default_for(stage.expected_shape), true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::GenerateResponse;
    use crate::domain::value_objects::{
        DialogueStyle, PacingGuidance, PayloadKind, StoryDirection, StorySeed, ToneGuidance,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock collaborator replaying a scripted outcome per call
    struct ScriptedCollaborator {
        // None entries simulate a timed-out call.
        outcomes: Vec<Option<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedCollaborator {
        fn new(outcomes: Vec<Option<String>>) -> Self {
            Self {
                outcomes,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl CollaboratorPort for ScriptedCollaborator {
        type Error = std::io::Error;

        async fn generate(
            &self,
            _request: GenerateRequest,
        ) -> Result<GenerateResponse, Self::Error> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcomes.get(index).cloned().flatten() {
                Some(content) => Ok(GenerateResponse {
                    content,
                    model: "mock".to_string(),
                }),
                None => Err(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "collaborator timed out",
                )),
            }
        }
    }

    fn context() -> GenerationContext {
        let seed = StorySeed::new("The Drowning Coast", "A keeper finds a door")
            .with_genre("mystery")
            .with_episode(1, 8);
        let direction = StoryDirection::new(
            ToneGuidance::Mysterious,
            PacingGuidance::Measured,
            DialogueStyle::Sparse,
        );
        GenerationContext::new(seed, direction)
    }

    fn beats_json() -> String {
        r#"{"kind": "beat_sheet", "beats": [{"title": "Hook", "summary": "s", "emotional_turn": "e"}]}"#
            .to_string()
    }

    fn script_json() -> String {
        r#"{"kind": "episode_script", "title": "The Door", "logline": "l", "scenes": [{"heading": "INT. LIGHTHOUSE - NIGHT", "action": "a", "dialogue": []}], "choices": [{"label": "A", "consequence_hint": ""}]}"#
            .to_string()
    }

    #[tokio::test]
    async fn clean_run_records_no_fallbacks() {
        let collaborator = Arc::new(ScriptedCollaborator::new(vec![
            Some(beats_json()),
            Some(script_json()),
        ]));
        let generator = StagedGenerator::new(collaborator);

        let result = generator
            .generate_content(&context(), ContentType::EpisodeScript)
            .await;

        assert!(result.metadata.fallback_stages.is_empty());
        assert_eq!(result.payload.kind(), PayloadKind::EpisodeScript);
        assert_eq!(result.metadata.model, "mock");
        match result.payload {
            ArtifactPayload::EpisodeScript { title, .. } => assert_eq!(title, "The Door"),
            _ => panic!("Expected episode script"),
        }
    }

    #[tokio::test]
    async fn timed_out_stage_falls_back_and_pipeline_continues() {
        // First stage times out; second succeeds. Only the first stage is
        // recorded as a fallback, and its default payload still feeds the
        // second stage.
        let collaborator = Arc::new(ScriptedCollaborator::new(vec![
            None,
            Some(script_json()),
        ]));
        let generator = StagedGenerator::new(collaborator);

        let result = generator
            .generate_content(&context(), ContentType::EpisodeScript)
            .await;

        assert_eq!(result.metadata.fallback_stages, vec!["derive_beats"]);
        assert_eq!(result.payload.kind(), PayloadKind::EpisodeScript);
    }

    #[tokio::test]
    async fn total_failure_still_yields_a_result() {
        let collaborator = Arc::new(ScriptedCollaborator::new(vec![None, None]));
        let generator = StagedGenerator::new(collaborator);

        let result = generator
            .generate_content(&context(), ContentType::EpisodeScript)
            .await;

        assert_eq!(
            result.metadata.fallback_stages,
            vec!["derive_beats", "expand_script"]
        );
        match result.payload {
            ArtifactPayload::EpisodeScript { scenes, choices, .. } => {
                assert!(!scenes.is_empty());
                assert_eq!(choices.len(), 3);
            }
            _ => panic!("Expected episode script"),
        }
    }

    #[tokio::test]
    async fn unparseable_output_counts_as_stage_fallback() {
        let collaborator = Arc::new(ScriptedCollaborator::new(vec![
            Some("no json here".to_string()),
            Some(script_json()),
        ]));
        let generator = StagedGenerator::new(collaborator);

        let result = generator
            .generate_content(&context(), ContentType::EpisodeScript)
            .await;

        assert_eq!(result.metadata.fallback_stages, vec!["derive_beats"]);
    }

    #[tokio::test]
    async fn single_stage_pipeline_works() {
        let collaborator = Arc::new(ScriptedCollaborator::new(vec![Some(
            r#"{"kind": "casting_sheet", "roles": [{"character": "Maren"}]}"#.to_string(),
        )]));
        let generator = StagedGenerator::new(collaborator).with_model("writer-7b");

        let result = generator
            .generate_content(&context(), ContentType::CastingSheet)
            .await;

        assert!(result.metadata.fallback_stages.is_empty());
        assert_eq!(result.payload.kind(), PayloadKind::CastingSheet);
    }
}
