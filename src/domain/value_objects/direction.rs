//! Directorial parameters derived from story state
//!
//! These steer the collaborator without being shown to the audience, the same
//! way a director's notes steer a performance.

use serde::{Deserialize, Serialize};

/// Emotional register the generated content should aim for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneGuidance {
    Lighthearted,
    Grounded,
    Tense,
    Melancholic,
    Mysterious,
    Romantic,
}

impl ToneGuidance {
    pub fn description(&self) -> &'static str {
        match self {
            ToneGuidance::Lighthearted => "Playful and warm; humor lands softly",
            ToneGuidance::Grounded => "Naturalistic and restrained; let subtext carry weight",
            ToneGuidance::Tense => "Coiled and urgent; every scene tightens the screws",
            ToneGuidance::Melancholic => "Wistful and quiet; loss hums under the surface",
            ToneGuidance::Mysterious => "Withholding; answer one question, raise two",
            ToneGuidance::Romantic => "Charged and intimate; attention lingers on small gestures",
        }
    }
}

/// How quickly scenes should turn over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingGuidance {
    Slow,
    Measured,
    Brisk,
    Breakneck,
}

impl PacingGuidance {
    pub fn description(&self) -> &'static str {
        match self {
            PacingGuidance::Slow => "Long scenes, room to breathe, hold on reactions",
            PacingGuidance::Measured => "Steady rhythm; alternate pressure and release",
            PacingGuidance::Brisk => "Short scenes, enter late and leave early",
            PacingGuidance::Breakneck => "Relentless momentum; cut everything inessential",
        }
    }
}

/// Register of the spoken lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStyle {
    Naturalistic,
    Heightened,
    Sparse,
    Rapid,
}

impl DialogueStyle {
    pub fn description(&self) -> &'static str {
        match self {
            DialogueStyle::Naturalistic => "Overlapping, imperfect, the way people actually talk",
            DialogueStyle::Heightened => "Stylized and quotable; characters say the sharp thing",
            DialogueStyle::Sparse => "Few words; silence and action do the talking",
            DialogueStyle::Rapid => "Quick volleys, interruptions, verbal fencing",
        }
    }
}

/// Derived creative parameters for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDirection {
    pub tone: ToneGuidance,
    pub pacing: PacingGuidance,
    pub dialogue_style: DialogueStyle,
    /// What this episode must accomplish in the larger arc
    pub stage_goal: String,
    /// Free-text notes passed through from the writer
    #[serde(default)]
    pub director_notes: String,
}

impl StoryDirection {
    pub fn new(tone: ToneGuidance, pacing: PacingGuidance, dialogue_style: DialogueStyle) -> Self {
        Self {
            tone,
            pacing,
            dialogue_style,
            stage_goal: String::new(),
            director_notes: String::new(),
        }
    }

    pub fn with_stage_goal(mut self, goal: impl Into<String>) -> Self {
        self.stage_goal = goal.into();
        self
    }

    pub fn with_director_notes(mut self, notes: impl Into<String>) -> Self {
        self.director_notes = notes.into();
        self
    }
}
