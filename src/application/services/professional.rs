//! Professional benchmark evaluator
//!
//! Scores an artifact against curated industry-standard criteria,
//! independent of the generic benchmark catalog, and issues the acceptance
//! verdict the quality-level classification consumes.

use crate::domain::services::professional_criteria;
use crate::domain::value_objects::{
    AcceptanceLevel, ArtifactPayload, ContentType, CriterionScore, GenerationContext,
    ProfessionalReview,
};

/// Evaluator applying curated per-content-type criteria sets
#[derive(Debug, Clone, Default)]
pub struct ProfessionalEvaluator;

impl ProfessionalEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        payload: &ArtifactPayload,
        content_type: ContentType,
        context: &GenerationContext,
    ) -> ProfessionalReview {
        let criteria = professional_criteria(content_type);
        let raw_scores = match content_type {
            ContentType::EpisodeScript => score_script(payload, context),
            ContentType::Storyboard => score_storyboard(payload),
            ContentType::CastingSheet => score_casting(payload),
        };

        let mut weighted = 0.0;
        let mut scored = Vec::new();
        let mut craft_notes = Vec::new();

        for (criterion, (score, note)) in criteria.iter().zip(raw_scores) {
            let score = score.clamp(0.0, 1.0);
            weighted += score * criterion.weight;
            if score < 0.6 {
                craft_notes.push(format!("{}: {}", criterion.name, note));
            }
            scored.push(CriterionScore {
                criterion: criterion.name.clone(),
                score,
                note,
            });
        }

        let acceptance = acceptance_for(weighted);
        ProfessionalReview {
            acceptance,
            industry_ready: acceptance >= AcceptanceLevel::Strong,
            criteria: scored,
            craft_notes,
        }
    }
}

fn acceptance_for(score: f64) -> AcceptanceLevel {
    if score >= 0.9 {
        AcceptanceLevel::Exceptional
    } else if score >= 0.8 {
        AcceptanceLevel::Strong
    } else if score >= 0.65 {
        AcceptanceLevel::Acceptable
    } else if score >= 0.5 {
        AcceptanceLevel::Marginal
    } else {
        AcceptanceLevel::Unacceptable
    }
}

/// Criterion scores in the same order as the script criteria set
fn score_script(payload: &ArtifactPayload, context: &GenerationContext) -> Vec<(f64, String)> {
    let ArtifactPayload::EpisodeScript { scenes, choices, .. } = payload else {
        return mismatch(4);
    };

    // Scene economy: enough scenes to tell the story, no bloated action.
    let count_ok = (3..=12).contains(&scenes.len());
    let lean_scenes = scenes
        .iter()
        .filter(|s| s.action.split_whitespace().count() <= 80)
        .count();
    let economy = if scenes.is_empty() {
        0.0
    } else {
        (if count_ok { 0.5 } else { 0.2 }) + 0.5 * (lean_scenes as f64 / scenes.len() as f64)
    };

    // Distinct voices: at least two on-bible speakers trading lines.
    let mut speakers: Vec<&str> = scenes
        .iter()
        .flat_map(|s| s.dialogue.iter().map(|d| d.character.as_str()))
        .collect();
    speakers.sort_unstable();
    speakers.dedup();
    let known = context.character_names();
    let on_bible = speakers
        .iter()
        .filter(|s| known.iter().any(|k| k.eq_ignore_ascii_case(s)))
        .count();
    let voices = ((speakers.len() as f64 / 3.0).min(1.0) * 0.6)
        + if on_bible >= 2 { 0.4 } else { 0.0 };

    // Hook and cliffhanger: an opening scene plus exactly three choices.
    let hook = if scenes.is_empty() { 0.0 } else { 0.5 }
        + if choices.len() == 3 { 0.5 } else { 0.0 };

    // Production formatting: sluglines follow convention.
    let sluglines = scenes
        .iter()
        .filter(|s| {
            let h = s.heading.trim();
            (h.starts_with("INT.") || h.starts_with("EXT.")) && h.contains(" - ")
        })
        .count();
    let formatting = if scenes.is_empty() {
        0.0
    } else {
        sluglines as f64 / scenes.len() as f64
    };

    vec![
        (economy, format!("{} scenes, {lean_scenes} lean", scenes.len())),
        (voices, format!("{} distinct speakers, {on_bible} on bible", speakers.len())),
        (hook, format!("{} branching choices", choices.len())),
        (formatting, format!("{sluglines} of {} sluglines conventional", scenes.len())),
    ]
}

/// Criterion scores in the same order as the storyboard criteria set
fn score_storyboard(payload: &ArtifactPayload) -> Vec<(f64, String)> {
    let ArtifactPayload::Storyboard { frames, .. } = payload else {
        return mismatch(3);
    };
    if frames.is_empty() {
        return vec![
            (0.0, "no frames".to_string()),
            (0.0, "no frames".to_string()),
            (0.0, "no frames".to_string()),
        ];
    }

    let readable = frames
        .iter()
        .filter(|f| f.description.split_whitespace().count() >= 8)
        .count();
    let readability = readable as f64 / frames.len() as f64;

    let mut shots: Vec<String> = frames
        .iter()
        .map(|f| f.shot_type.trim().to_lowercase())
        .collect();
    shots.sort_unstable();
    shots.dedup();
    let count_score = if (8..=15).contains(&frames.len()) { 0.5 } else { 0.2 };
    let coverage = count_score + 0.5 * (shots.len() as f64 / 4.0).min(1.0);

    let with_camera = frames
        .iter()
        .filter(|f| !f.camera_notes.trim().is_empty())
        .count();
    let camera = with_camera as f64 / frames.len() as f64;

    vec![
        (readability, format!("{readable} of {} frames readable", frames.len())),
        (coverage, format!("{} frames, {} shot types", frames.len(), shots.len())),
        (camera, format!("{with_camera} of {} frames note camera intent", frames.len())),
    ]
}

/// Criterion scores in the same order as the casting criteria set
fn score_casting(payload: &ArtifactPayload) -> Vec<(f64, String)> {
    let ArtifactPayload::CastingSheet { roles } = payload else {
        return mismatch(3);
    };
    if roles.is_empty() {
        return vec![
            (0.0, "no roles".to_string()),
            (0.0, "no roles".to_string()),
            (0.0, "no roles".to_string()),
        ];
    }

    let castable = roles
        .iter()
        .filter(|r| {
            !r.age_range.trim().is_empty() && r.essence.split_whitespace().count() >= 4
        })
        .count();
    let with_notes = roles
        .iter()
        .filter(|r| !r.audition_note.trim().is_empty())
        .count();
    let with_refs = roles
        .iter()
        .filter(|r| !r.reference_performances.is_empty())
        .count();
    let total = roles.len() as f64;

    vec![
        (castable as f64 / total, format!("{castable} of {} roles castable", roles.len())),
        (with_notes as f64 / total, format!("{with_notes} roles carry audition notes")),
        (with_refs as f64 / total, format!("{with_refs} roles cite references")),
    ]
}

fn mismatch(criteria: usize) -> Vec<(f64, String)> {
    vec![(0.0, "payload does not match content type".to_string()); criteria]
}
