//! Heuristic assessors for storyboard artifacts

use super::{ratio, Assessment, AssessorError, DimensionAssessor};
use crate::domain::value_objects::{ArtifactPayload, GenerationContext, PacingGuidance};

/// Scores how much each frame gives an artist to draw
pub struct VisualCompositionAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for VisualCompositionAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        _context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let ArtifactPayload::Storyboard { frames, .. } = payload else {
            return Err(AssessorError::UnsupportedPayload(
                "visual composition needs a storyboard".to_string(),
            ));
        };

        // A drawable frame describes the image in at least a sentence and
        // says what the camera is doing.
        let descriptive = frames
            .iter()
            .filter(|f| f.description.split_whitespace().count() >= 8)
            .count();
        let with_camera = frames
            .iter()
            .filter(|f| !f.camera_notes.trim().is_empty())
            .count();

        let score = 0.6 * ratio(descriptive, frames.len()) + 0.4 * ratio(with_camera, frames.len());
        let mut assessment = Assessment::new(
            score,
            format!(
                "{descriptive} of {} frames are drawable, {with_camera} carry camera intent",
                frames.len()
            ),
        )
        .with_confidence(0.75);

        if descriptive < frames.len() {
            assessment = assessment
                .with_improvement("Describe each frame concretely enough for an artist to draw");
        }
        Ok(assessment)
    }
}

/// Scores the spread of shot types across the board
pub struct ShotVarietyAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for ShotVarietyAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        _context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let ArtifactPayload::Storyboard { frames, .. } = payload else {
            return Err(AssessorError::UnsupportedPayload(
                "shot variety needs a storyboard".to_string(),
            ));
        };

        let mut shot_types: Vec<String> = frames
            .iter()
            .map(|f| f.shot_type.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        shot_types.sort_unstable();
        shot_types.dedup();

        // Four distinct shot types is full marks; an all-wide board is flat.
        let score = (shot_types.len() as f64 / 4.0).min(1.0);
        let mut assessment = Assessment::new(
            score,
            format!("{} distinct shot types across {} frames", shot_types.len(), frames.len()),
        );
        if shot_types.len() < 3 {
            assessment = assessment.with_improvement(
                "Mix wides, mediums, and close-ups instead of repeating one framing",
            );
        }
        Ok(assessment)
    }
}

/// Scores rhythm against the requested pacing
pub struct PacingAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for PacingAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let ArtifactPayload::Storyboard { frames, .. } = payload else {
            return Err(AssessorError::UnsupportedPayload(
                "pacing assessment needs a storyboard".to_string(),
            ));
        };
        if frames.is_empty() {
            return Ok(Assessment::new(0.0, "no frames to pace"));
        }

        let mean_words = frames
            .iter()
            .map(|f| f.description.split_whitespace().count())
            .sum::<usize>() as f64
            / frames.len() as f64;

        // Faster pacing wants terser frames; slower pacing can hold longer.
        let ideal = match context.direction.pacing {
            PacingGuidance::Slow => 25.0,
            PacingGuidance::Measured => 18.0,
            PacingGuidance::Brisk => 12.0,
            PacingGuidance::Breakneck => 8.0,
        };
        let deviation = (mean_words - ideal).abs() / ideal;
        let score = (1.0 - deviation).clamp(0.0, 1.0);

        let mut assessment = Assessment::new(
            score,
            format!(
                "mean frame length {mean_words:.1} words against an ideal of {ideal:.0} for {:?} pacing",
                context.direction.pacing
            ),
        )
        .with_confidence(0.6);
        if score < 0.6 {
            assessment = assessment.with_improvement(
                "Rebalance frame density to match the episode's pacing guidance",
            );
        }
        Ok(assessment)
    }
}
