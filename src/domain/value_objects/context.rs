//! Story state inputs and the immutable generation context

use serde::{Deserialize, Serialize};

use super::direction::StoryDirection;

/// A character as the story bible describes them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterBrief {
    pub name: String,
    #[serde(default)]
    pub archetype: String,
    #[serde(default)]
    pub wants: Vec<String>,
}

impl CharacterBrief {
    pub fn new(name: impl Into<String>, archetype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: archetype.into(),
            wants: Vec::new(),
        }
    }

    pub fn with_want(mut self, want: impl Into<String>) -> Self {
        self.wants.push(want.into());
        self
    }
}

/// Raw story-state document supplied by the surrounding layer
///
/// Read-only input to the context analyzer; nothing in the core mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorySeed {
    pub title: String,
    pub premise: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub characters: Vec<CharacterBrief>,
    /// Zero-based index of the episode being generated
    #[serde(default)]
    pub episode_index: u32,
    /// Total planned episodes, used to place this one in the arc
    #[serde(default)]
    pub planned_episodes: u32,
    /// The branch the audience picked at the end of the prior episode
    #[serde(default)]
    pub prior_choice: Option<String>,
    #[serde(default)]
    pub director_notes: String,
}

impl StorySeed {
    pub fn new(title: impl Into<String>, premise: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            premise: premise.into(),
            genre: String::new(),
            characters: Vec::new(),
            episode_index: 0,
            planned_episodes: 0,
            prior_choice: None,
            director_notes: String::new(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_character(mut self, character: CharacterBrief) -> Self {
        self.characters.push(character);
        self
    }

    pub fn with_episode(mut self, index: u32, planned: u32) -> Self {
        self.episode_index = index;
        self.planned_episodes = planned;
        self
    }

    pub fn with_prior_choice(mut self, choice: impl Into<String>) -> Self {
        self.prior_choice = Some(choice.into());
        self
    }

    pub fn with_director_notes(mut self, notes: impl Into<String>) -> Self {
        self.director_notes = notes.into();
        self
    }
}

/// Everything a generation stage is allowed to know
///
/// Created once per request by the context analyzer and handed to every stage
/// read-only; stages never write back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    pub seed: StorySeed,
    pub direction: StoryDirection,
}

impl GenerationContext {
    pub fn new(seed: StorySeed, direction: StoryDirection) -> Self {
        Self { seed, direction }
    }

    /// Character names as a lookup list for consistency checks
    pub fn character_names(&self) -> Vec<&str> {
        self.seed
            .characters
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }
}
