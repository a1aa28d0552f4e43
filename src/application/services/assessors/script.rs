//! Heuristic assessors for script-like artifacts

use super::{ratio, Assessment, AssessorError, DimensionAssessor};
use crate::domain::value_objects::{ArtifactPayload, GenerationContext, SceneBlock};

/// Scores dialogue coverage, speaker spread, and line economy
pub struct DialogueAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for DialogueAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        _context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let ArtifactPayload::EpisodeScript { scenes, .. } = payload else {
            return Err(AssessorError::UnsupportedPayload(
                "dialogue assessment needs an episode script".to_string(),
            ));
        };

        let scenes_with_dialogue = scenes.iter().filter(|s| !s.dialogue.is_empty()).count();
        let coverage = ratio(scenes_with_dialogue, scenes.len());

        let mut speakers: Vec<&str> = scenes
            .iter()
            .flat_map(|s| s.dialogue.iter().map(|d| d.character.as_str()))
            .collect();
        let total_lines = speakers.len();
        speakers.sort_unstable();
        speakers.dedup();
        let speaker_spread = if total_lines == 0 {
            0.0
        } else {
            (speakers.len() as f64 / total_lines as f64).min(0.5) * 2.0
        };

        // Overlong speeches read as monologue; reward lines under ~40 words.
        let tight_lines = scenes
            .iter()
            .flat_map(|s| &s.dialogue)
            .filter(|d| d.line.split_whitespace().count() <= 40)
            .count();
        let economy = ratio(tight_lines, total_lines.max(1));

        let score = 0.45 * coverage + 0.3 * speaker_spread + 0.25 * economy;
        let mut assessment = Assessment::new(
            score,
            format!(
                "{scenes_with_dialogue} of {} scenes carry dialogue across {} distinct voices",
                scenes.len(),
                speakers.len()
            ),
        )
        .with_confidence(0.75);

        if coverage < 0.5 {
            assessment = assessment
                .with_improvement("Give more scenes spoken exchanges instead of pure action");
        }
        if speakers.len() < 2 && total_lines > 0 {
            assessment =
                assessment.with_improvement("Spread dialogue across more than one character");
        }
        Ok(assessment)
    }
}

/// Scores beat/scene architecture: count, logline, branching choices
pub struct StructureAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for StructureAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        _context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        match payload {
            ArtifactPayload::EpisodeScript {
                logline,
                scenes,
                choices,
                ..
            } => {
                let scene_count_score = band_score(scenes.len(), 3, 12);
                let logline_score = if logline.trim().is_empty() { 0.0 } else { 1.0 };
                let choice_score = if choices.len() == 3 {
                    1.0
                } else if choices.is_empty() {
                    0.0
                } else {
                    0.6
                };
                let score = 0.5 * scene_count_score + 0.2 * logline_score + 0.3 * choice_score;

                let mut assessment = Assessment::new(
                    score,
                    format!("{} scenes, {} branching choices", scenes.len(), choices.len()),
                );
                if choices.len() != 3 {
                    assessment = assessment
                        .with_improvement("Offer exactly three branching choices at episode end");
                }
                if scenes.len() < 3 {
                    assessment =
                        assessment.with_improvement("Build the episode out to at least three scenes");
                }
                Ok(assessment)
            }
            ArtifactPayload::BeatSheet { beats } => {
                let count_score = band_score(beats.len(), 5, 8);
                let turns = beats
                    .iter()
                    .filter(|b| !b.emotional_turn.trim().is_empty())
                    .count();
                let turn_score = ratio(turns, beats.len());
                Ok(Assessment::new(
                    0.6 * count_score + 0.4 * turn_score,
                    format!("{} beats, {turns} with an emotional turn", beats.len()),
                ))
            }
            ArtifactPayload::Storyboard { frames, .. } => {
                let count_score = band_score(frames.len(), 8, 15);
                Ok(Assessment::new(
                    count_score,
                    format!("{} frames against an 8-15 frame target", frames.len()),
                ))
            }
            _ => Err(AssessorError::UnsupportedPayload(
                "structure assessment needs a narrative artifact".to_string(),
            )),
        }
    }
}

/// Scores adherence to production formatting conventions
pub struct FormattingAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for FormattingAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        _context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        match payload {
            ArtifactPayload::EpisodeScript { title, scenes, .. } => {
                let title_score = if title.trim().is_empty() { 0.0 } else { 1.0 };
                let slugline_hits = scenes.iter().filter(|s| well_formed_slugline(s)).count();
                let slugline_score = ratio(slugline_hits, scenes.len());
                let named_speakers = scenes
                    .iter()
                    .flat_map(|s| &s.dialogue)
                    .filter(|d| !d.character.trim().is_empty())
                    .count();
                let total_lines = scenes.iter().map(|s| s.dialogue.len()).sum::<usize>();
                let speaker_score = if total_lines == 0 {
                    1.0
                } else {
                    ratio(named_speakers, total_lines)
                };

                let score = 0.2 * title_score + 0.5 * slugline_score + 0.3 * speaker_score;
                let mut assessment = Assessment::new(
                    score,
                    format!("{slugline_hits} of {} sluglines well formed", scenes.len()),
                )
                .with_confidence(0.85);
                if slugline_score < 1.0 {
                    assessment = assessment.with_improvement(
                        "Open every scene with an INT./EXT. slugline naming place and time",
                    );
                }
                Ok(assessment)
            }
            ArtifactPayload::Storyboard { title, frames } => {
                let title_score = if title.trim().is_empty() { 0.0 } else { 1.0 };
                let complete = frames
                    .iter()
                    .filter(|f| !f.shot_type.trim().is_empty() && !f.description.trim().is_empty())
                    .count();
                Ok(Assessment::new(
                    0.2 * title_score + 0.8 * ratio(complete, frames.len()),
                    format!("{complete} of {} frames fully specified", frames.len()),
                ))
            }
            ArtifactPayload::CastingSheet { roles } => {
                let complete = roles
                    .iter()
                    .filter(|r| !r.character.trim().is_empty() && !r.age_range.trim().is_empty())
                    .count();
                Ok(Assessment::new(
                    ratio(complete, roles.len()),
                    format!("{complete} of {} roles carry character and age range", roles.len()),
                ))
            }
            ArtifactPayload::BeatSheet { beats } => {
                let titled = beats.iter().filter(|b| !b.title.trim().is_empty()).count();
                Ok(Assessment::new(
                    ratio(titled, beats.len()),
                    format!("{titled} of {} beats titled", beats.len()),
                ))
            }
        }
    }
}

/// Scores whether named speakers and roles stay inside the story bible
pub struct CharacterConsistencyAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for CharacterConsistencyAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let known = context.character_names();

        let names: Vec<&str> = match payload {
            ArtifactPayload::EpisodeScript { scenes, .. } => scenes
                .iter()
                .flat_map(|s| s.dialogue.iter().map(|d| d.character.as_str()))
                .collect(),
            ArtifactPayload::CastingSheet { roles } => {
                roles.iter().map(|r| r.character.as_str()).collect()
            }
            _ => {
                return Err(AssessorError::UnsupportedPayload(
                    "character consistency needs named characters".to_string(),
                ))
            }
        };

        if known.is_empty() || names.is_empty() {
            // Nothing to check against; low-confidence neutral score.
            return Ok(Assessment::new(0.7, "no character roster to check against")
                .with_confidence(0.3));
        }

        let matched = names
            .iter()
            .filter(|name| known.iter().any(|k| k.eq_ignore_ascii_case(name)))
            .count();
        let score = ratio(matched, names.len());

        let mut assessment = Assessment::new(
            score,
            format!("{matched} of {} character references match the story bible", names.len()),
        )
        .with_confidence(0.8);
        if score < 1.0 {
            assessment = assessment
                .with_improvement("Keep speakers and roles within the established character roster");
        }
        Ok(assessment)
    }
}

/// Scores fit between the artifact's text and the declared genre
pub struct GenreAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for GenreAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let genre = context.seed.genre.to_lowercase();
        if genre.is_empty() {
            return Ok(Assessment::new(0.7, "no genre declared").with_confidence(0.3));
        }

        let text = flatten_text(payload).to_lowercase();
        let lexicon = genre_lexicon(&genre);
        if lexicon.is_empty() {
            return Ok(Assessment::new(0.7, format!("no lexicon for genre '{genre}'"))
                .with_confidence(0.3));
        }

        let hits = lexicon.iter().filter(|word| text.contains(*word)).count();
        // A third of the lexicon present reads as fully on-genre.
        let score = (3.0 * ratio(hits, lexicon.len())).min(1.0);

        let mut assessment = Assessment::new(
            score,
            format!("{hits} of {} genre markers present", lexicon.len()),
        )
        .with_confidence(0.6);
        if score < 0.5 {
            assessment = assessment.with_improvement(format!(
                "Lean harder into {genre} conventions in action and dialogue"
            ));
        }
        Ok(assessment)
    }
}

/// 1.0 inside [low, high], linear falloff outside
fn band_score(count: usize, low: usize, high: usize) -> f64 {
    if count == 0 {
        0.0
    } else if count < low {
        count as f64 / low as f64
    } else if count <= high {
        1.0
    } else {
        (high as f64 / count as f64).max(0.4)
    }
}

fn well_formed_slugline(scene: &SceneBlock) -> bool {
    let heading = scene.heading.trim();
    (heading.starts_with("INT.") || heading.starts_with("EXT.")) && heading.contains(" - ")
}

fn flatten_text(payload: &ArtifactPayload) -> String {
    match payload {
        ArtifactPayload::BeatSheet { beats } => beats
            .iter()
            .map(|b| format!("{} {} {}", b.title, b.summary, b.emotional_turn))
            .collect::<Vec<_>>()
            .join(" "),
        ArtifactPayload::EpisodeScript {
            title,
            logline,
            scenes,
            ..
        } => {
            let mut text = format!("{title} {logline}");
            for scene in scenes {
                text.push(' ');
                text.push_str(&scene.action);
                for line in &scene.dialogue {
                    text.push(' ');
                    text.push_str(&line.line);
                }
            }
            text
        }
        ArtifactPayload::Storyboard { title, frames } => {
            let mut text = title.clone();
            for frame in frames {
                text.push(' ');
                text.push_str(&frame.description);
            }
            text
        }
        ArtifactPayload::CastingSheet { roles } => roles
            .iter()
            .map(|r| format!("{} {}", r.essence, r.audition_note))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn genre_lexicon(genre: &str) -> Vec<&'static str> {
    if genre.contains("mystery") || genre.contains("noir") {
        vec!["secret", "clue", "shadow", "question", "hidden", "truth"]
    } else if genre.contains("comedy") {
        vec!["laugh", "awkward", "joke", "ridiculous", "deadpan", "absurd"]
    } else if genre.contains("horror") || genre.contains("thriller") {
        vec!["dread", "dark", "scream", "blood", "fear", "run"]
    } else if genre.contains("romance") {
        vec!["heart", "touch", "glance", "longing", "kiss", "tender"]
    } else if genre.contains("sci") || genre.contains("fantasy") {
        vec!["world", "power", "ancient", "machine", "magic", "beyond"]
    } else {
        Vec::new()
    }
}
