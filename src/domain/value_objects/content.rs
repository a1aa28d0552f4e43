//! Content types and artifact payloads
//!
//! Every artifact the pipeline produces is one variant of a closed tagged
//! union. Intermediate stage output (the beat sheet) is a variant too, so a
//! stage's parsed result and a finished artifact share one type.

use serde::{Deserialize, Serialize};

/// The kinds of finished artifact the pipeline can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    EpisodeScript,
    Storyboard,
    CastingSheet,
}

impl ContentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::EpisodeScript => "episode script",
            ContentType::Storyboard => "storyboard",
            ContentType::CastingSheet => "casting sheet",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structural shape a stage expects back from the collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    BeatSheet,
    EpisodeScript,
    Storyboard,
    CastingSheet,
}

/// One narrative beat in a beat sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Beat {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// How the emotional charge shifts across the beat
    #[serde(default)]
    pub emotional_turn: String,
}

/// One line of dialogue within a scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueLine {
    pub character: String,
    pub line: String,
    #[serde(default)]
    pub parenthetical: Option<String>,
}

/// One scene of an episode script
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneBlock {
    /// Slugline, e.g. "INT. LIGHTHOUSE - NIGHT"
    pub heading: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
}

/// A branching choice offered to the viewer at episode end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchChoice {
    pub label: String,
    #[serde(default)]
    pub consequence_hint: String,
}

/// One frame of a storyboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryboardFrame {
    /// e.g. "wide", "close-up", "over-the-shoulder"
    pub shot_type: String,
    pub description: String,
    #[serde(default)]
    pub camera_notes: String,
    #[serde(default)]
    pub dialogue_or_sound: String,
}

/// One role entry on a casting sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastingRole {
    pub character: String,
    #[serde(default)]
    pub age_range: String,
    /// The essential quality an actor must bring
    #[serde(default)]
    pub essence: String,
    #[serde(default)]
    pub audition_note: String,
    #[serde(default)]
    pub reference_performances: Vec<String>,
}

/// Tagged union of everything a stage or a finished pipeline can yield
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactPayload {
    BeatSheet {
        beats: Vec<Beat>,
    },
    EpisodeScript {
        title: String,
        #[serde(default)]
        logline: String,
        scenes: Vec<SceneBlock>,
        #[serde(default)]
        choices: Vec<BranchChoice>,
    },
    Storyboard {
        title: String,
        frames: Vec<StoryboardFrame>,
    },
    CastingSheet {
        roles: Vec<CastingRole>,
    },
}

impl ArtifactPayload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            ArtifactPayload::BeatSheet { .. } => PayloadKind::BeatSheet,
            ArtifactPayload::EpisodeScript { .. } => PayloadKind::EpisodeScript,
            ArtifactPayload::Storyboard { .. } => PayloadKind::Storyboard,
            ArtifactPayload::CastingSheet { .. } => PayloadKind::CastingSheet,
        }
    }

    /// Minimal structurally valid payload for a kind
    ///
    /// Used when both the collaborator call and the parser fall through. The
    /// defaults are deterministic so a degraded pipeline stays reproducible.
    pub fn default_for(kind: PayloadKind) -> Self {
        match kind {
            PayloadKind::BeatSheet => ArtifactPayload::BeatSheet {
                beats: vec![
                    Beat {
                        title: "Opening image".to_string(),
                        summary: "Establish the protagonist in their ordinary world.".to_string(),
                        emotional_turn: "calm to unease".to_string(),
                    },
                    Beat {
                        title: "Catalyst".to_string(),
                        summary: "An outside event upends the protagonist's plans.".to_string(),
                        emotional_turn: "unease to urgency".to_string(),
                    },
                    Beat {
                        title: "Cliffhanger".to_string(),
                        summary: "The episode ends on an unresolved question.".to_string(),
                        emotional_turn: "urgency to suspense".to_string(),
                    },
                ],
            },
            PayloadKind::EpisodeScript => ArtifactPayload::EpisodeScript {
                title: "Untitled Episode".to_string(),
                logline: "A placeholder episode pending regeneration.".to_string(),
                scenes: vec![SceneBlock {
                    heading: "INT. UNDISCLOSED LOCATION - DAY".to_string(),
                    action: "The story continues. Content for this scene could not be \
                             generated and should be rewritten."
                        .to_string(),
                    dialogue: Vec::new(),
                }],
                choices: vec![
                    BranchChoice {
                        label: "Press forward".to_string(),
                        consequence_hint: "The protagonist confronts the problem directly."
                            .to_string(),
                    },
                    BranchChoice {
                        label: "Seek help".to_string(),
                        consequence_hint: "An ally is drawn into the story.".to_string(),
                    },
                    BranchChoice {
                        label: "Walk away".to_string(),
                        consequence_hint: "The problem grows in the protagonist's absence."
                            .to_string(),
                    },
                ],
            },
            PayloadKind::Storyboard => ArtifactPayload::Storyboard {
                title: "Untitled Storyboard".to_string(),
                frames: vec![StoryboardFrame {
                    shot_type: "wide".to_string(),
                    description: "Placeholder establishing shot pending regeneration."
                        .to_string(),
                    camera_notes: "static".to_string(),
                    dialogue_or_sound: String::new(),
                }],
            },
            PayloadKind::CastingSheet => ArtifactPayload::CastingSheet {
                roles: vec![CastingRole {
                    character: "Lead".to_string(),
                    age_range: "25-40".to_string(),
                    essence: "Grounded presence able to carry the episode.".to_string(),
                    audition_note: "Cold read from the opening scene.".to_string(),
                    reference_performances: Vec::new(),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_payloads_match_requested_kind() {
        for kind in [
            PayloadKind::BeatSheet,
            PayloadKind::EpisodeScript,
            PayloadKind::Storyboard,
            PayloadKind::CastingSheet,
        ] {
            assert_eq!(ArtifactPayload::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn default_episode_script_has_scene_and_three_choices() {
        match ArtifactPayload::default_for(PayloadKind::EpisodeScript) {
            ArtifactPayload::EpisodeScript { scenes, choices, .. } => {
                assert!(!scenes.is_empty());
                assert_eq!(choices.len(), 3);
            }
            _ => panic!("Expected episode script payload"),
        }
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = ArtifactPayload::default_for(PayloadKind::Storyboard);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"kind\":\"storyboard\""));
        let back: ArtifactPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), PayloadKind::Storyboard);
    }
}
