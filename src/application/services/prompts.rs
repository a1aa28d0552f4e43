//! Prompt building functions for collaborator requests

use crate::domain::value_objects::{
    ArtifactPayload, GenerationContext, GenerationStage, PayloadKind, StorySeed,
};

/// Build the system prompt shared by every stage of one request
pub fn build_stage_system_prompt(context: &GenerationContext) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a staff writer on an episodic interactive series. You produce \
         structured production documents, never prose commentary.\n\n",
    );

    prompt.push_str(&format!("SERIES: {}\n", context.seed.title));
    prompt.push_str(&format!("PREMISE: {}\n", context.seed.premise));
    if !context.seed.genre.is_empty() {
        prompt.push_str(&format!("GENRE: {}\n", context.seed.genre));
    }
    prompt.push_str(&format!(
        "EPISODE: {} of {}\n",
        context.seed.episode_index + 1,
        context.seed.planned_episodes.max(context.seed.episode_index + 1)
    ));

    if !context.seed.characters.is_empty() {
        prompt.push_str("\nCHARACTERS:\n");
        for character in &context.seed.characters {
            prompt.push_str(&format!("- {} ({})", character.name, character.archetype));
            if !character.wants.is_empty() {
                prompt.push_str(&format!(" — wants: {}", character.wants.join(", ")));
            }
            prompt.push('\n');
        }
    }

    prompt.push_str("\n=== DIRECTION ===\n");
    prompt.push_str(&format!("Tone: {}\n", context.direction.tone.description()));
    prompt.push_str(&format!(
        "Pacing: {}\n",
        context.direction.pacing.description()
    ));
    prompt.push_str(&format!(
        "Dialogue: {}\n",
        context.direction.dialogue_style.description()
    ));
    if !context.direction.stage_goal.is_empty() {
        prompt.push_str(&format!("Episode goal: {}\n", context.direction.stage_goal));
    }
    if !context.direction.director_notes.is_empty() {
        prompt.push_str(&format!(
            "Director's notes: {}\n",
            context.direction.director_notes
        ));
    }

    prompt
}

/// Build the user prompt for one stage
///
/// Stage i+1 sees stage i's parsed payload serialized back into the prompt,
/// so each stage builds on structured output rather than raw text.
pub fn build_stage_prompt(
    stage: &GenerationStage,
    context: &GenerationContext,
    previous: Option<&ArtifactPayload>,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(&stage.prompt_template);
    prompt.push_str("\n\n");

    if let Some(choice) = &context.seed.prior_choice {
        prompt.push_str(&format!(
            "The audience chose \"{}\" at the end of the previous episode; this \
             episode follows from that choice.\n\n",
            choice
        ));
    }

    if let Some(payload) = previous {
        // Serialization of our own types does not fail.
        let rendered =
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string());
        prompt.push_str("Work from this previous stage output:\n");
        prompt.push_str(&rendered);
        prompt.push_str("\n\n");
    }

    prompt.push_str(&format_instructions(stage.expected_shape));
    prompt
}

/// Prompt for the context analyzer's single collaborator call
pub fn build_stage_goal_prompt(seed: &StorySeed) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Series: {}\nPremise: {}\n",
        seed.title, seed.premise
    ));
    if let Some(choice) = &seed.prior_choice {
        prompt.push_str(&format!("The audience just chose: \"{}\"\n", choice));
    }
    prompt.push_str(&format!(
        "\nIn one sentence, state what episode {} must accomplish in the larger \
         arc. Reply with the sentence only.",
        seed.episode_index + 1
    ));

    prompt
}

/// JSON shape instructions appended to every stage prompt
fn format_instructions(kind: PayloadKind) -> String {
    let schema = match kind {
        PayloadKind::BeatSheet => {
            r#"{"kind": "beat_sheet", "beats": [{"title": "...", "summary": "...", "emotional_turn": "..."}]}"#
        }
        PayloadKind::EpisodeScript => {
            r#"{"kind": "episode_script", "title": "...", "logline": "...", "scenes": [{"heading": "INT. PLACE - TIME", "action": "...", "dialogue": [{"character": "...", "line": "...", "parenthetical": null}]}], "choices": [{"label": "...", "consequence_hint": "..."}]}"#
        }
        PayloadKind::Storyboard => {
            r#"{"kind": "storyboard", "title": "...", "frames": [{"shot_type": "...", "description": "...", "camera_notes": "...", "dialogue_or_sound": "..."}]}"#
        }
        PayloadKind::CastingSheet => {
            r#"{"kind": "casting_sheet", "roles": [{"character": "...", "age_range": "...", "essence": "...", "audition_note": "...", "reference_performances": ["..."]}]}"#
        }
    };

    format!(
        "RESPONSE FORMAT:\nRespond with a single JSON object and nothing else, \
         shaped exactly like:\n{schema}"
    )
}
