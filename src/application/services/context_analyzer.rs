//! Context analyzer - derives generation parameters from raw story state

use std::sync::Arc;

use crate::application::ports::outbound::{CollaboratorPort, GenerateRequest};
use crate::application::services::prompts::build_stage_goal_prompt;
use crate::domain::value_objects::{
    DialogueStyle, GenerationContext, PacingGuidance, StoryDirection, StorySeed, ToneGuidance,
};

/// Derives tone, pacing, dialogue style, and a stage goal from a story seed
///
/// Tone and pacing come from deterministic heuristics; the stage goal comes
/// from a single collaborator call. A collaborator failure never surfaces:
/// the analyzer substitutes a deterministic goal and carries on.
pub struct ContextAnalyzer<C: CollaboratorPort> {
    collaborator: Arc<C>,
}

impl<C: CollaboratorPort> ContextAnalyzer<C> {
    pub fn new(collaborator: Arc<C>) -> Self {
        Self { collaborator }
    }

    /// Build the immutable generation context for one request
    pub async fn analyze(&self, seed: StorySeed) -> GenerationContext {
        let tone = derive_tone(&seed);
        let pacing = derive_pacing(&seed);
        let dialogue_style = derive_dialogue_style(&seed);

        let stage_goal = match self.request_stage_goal(&seed).await {
            Some(goal) => goal,
            None => {
                tracing::warn!("stage goal generation failed, using deterministic goal");
                default_stage_goal(&seed)
            }
        };

        let direction = StoryDirection::new(tone, pacing, dialogue_style)
            .with_stage_goal(stage_goal)
            .with_director_notes(seed.director_notes.clone());

        GenerationContext::new(seed, direction)
    }

    async fn request_stage_goal(&self, seed: &StorySeed) -> Option<String> {
        let request = GenerateRequest::new(build_stage_goal_prompt(seed))
            .with_temperature(0.6)
            .with_max_tokens(Some(120));

        let response = self.collaborator.generate(request).await.ok()?;
        let goal = response.content.trim();
        (!goal.is_empty()).then(|| goal.lines().next().unwrap_or(goal).trim().to_string())
    }
}

fn derive_tone(seed: &StorySeed) -> ToneGuidance {
    let genre = seed.genre.to_lowercase();
    let premise = seed.premise.to_lowercase();
    let text = format!("{genre} {premise}");

    if contains_any(&text, &["comedy", "sitcom", "whimsical", "heist"]) {
        ToneGuidance::Lighthearted
    } else if contains_any(&text, &["romance", "love", "longing"]) {
        ToneGuidance::Romantic
    } else if contains_any(&text, &["mystery", "secret", "disappear", "noir"]) {
        ToneGuidance::Mysterious
    } else if contains_any(&text, &["thriller", "horror", "chase", "survival"]) {
        ToneGuidance::Tense
    } else if contains_any(&text, &["grief", "loss", "memory", "elegy"]) {
        ToneGuidance::Melancholic
    } else {
        ToneGuidance::Grounded
    }
}

fn derive_pacing(seed: &StorySeed) -> PacingGuidance {
    let planned = seed.planned_episodes.max(1);
    let index = seed.episode_index.min(planned - 1);

    // Openers breathe, the middle tightens, the finale sprints.
    if index == 0 {
        PacingGuidance::Measured
    } else if planned > 1 && index == planned - 1 {
        PacingGuidance::Breakneck
    } else if index * 3 >= planned * 2 {
        PacingGuidance::Brisk
    } else {
        PacingGuidance::Measured
    }
}

fn derive_dialogue_style(seed: &StorySeed) -> DialogueStyle {
    let genre = seed.genre.to_lowercase();
    if contains_any(&genre, &["comedy", "screwball"]) {
        DialogueStyle::Rapid
    } else if contains_any(&genre, &["western", "horror", "survival"]) {
        DialogueStyle::Sparse
    } else if contains_any(&genre, &["melodrama", "fantasy", "period"]) {
        DialogueStyle::Heightened
    } else {
        DialogueStyle::Naturalistic
    }
}

fn default_stage_goal(seed: &StorySeed) -> String {
    match &seed.prior_choice {
        Some(choice) => format!(
            "Play out the consequences of \"{choice}\" and end on a new dilemma."
        ),
        None => format!(
            "Establish the world of \"{}\" and end on a hook that demands a choice.",
            seed.title
        ),
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::GenerateResponse;

    /// Mock collaborator returning a canned response or an error
    struct MockCollaborator {
        response: Option<String>,
    }

    #[async_trait::async_trait]
    impl CollaboratorPort for MockCollaborator {
        type Error = std::io::Error;

        async fn generate(
            &self,
            _request: GenerateRequest,
        ) -> Result<GenerateResponse, Self::Error> {
            match &self.response {
                Some(content) => Ok(GenerateResponse {
                    content: content.clone(),
                    model: "mock".to_string(),
                }),
                None => Err(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "collaborator timed out",
                )),
            }
        }
    }

    fn seed() -> StorySeed {
        StorySeed::new("The Drowning Coast", "A lighthouse keeper uncovers a mystery")
            .with_genre("mystery")
            .with_episode(1, 8)
            .with_prior_choice("Open the door")
    }

    #[tokio::test]
    async fn analyze_uses_collaborator_goal_when_available() {
        let analyzer = ContextAnalyzer::new(Arc::new(MockCollaborator {
            response: Some("Reveal the door's origin.\nExtra line.".to_string()),
        }));

        let context = analyzer.analyze(seed()).await;
        assert_eq!(context.direction.stage_goal, "Reveal the door's origin.");
        assert_eq!(context.direction.tone, ToneGuidance::Mysterious);
    }

    #[tokio::test]
    async fn analyze_falls_back_to_deterministic_goal_on_failure() {
        let analyzer = ContextAnalyzer::new(Arc::new(MockCollaborator { response: None }));

        let context = analyzer.analyze(seed()).await;
        assert!(context.direction.stage_goal.contains("Open the door"));
    }

    #[test]
    fn finale_pacing_is_breakneck() {
        let finale = StorySeed::new("T", "p").with_episode(7, 8);
        assert_eq!(derive_pacing(&finale), PacingGuidance::Breakneck);

        let opener = StorySeed::new("T", "p").with_episode(0, 8);
        assert_eq!(derive_pacing(&opener), PacingGuidance::Measured);
    }

    #[test]
    fn comedy_reads_as_lighthearted_and_rapid() {
        let seed = StorySeed::new("T", "p").with_genre("workplace comedy");
        assert_eq!(derive_tone(&seed), ToneGuidance::Lighthearted);
        assert_eq!(derive_dialogue_style(&seed), DialogueStyle::Rapid);
    }
}
