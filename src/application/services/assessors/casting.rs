//! Heuristic assessors for casting sheet artifacts

use super::{ratio, Assessment, AssessorError, DimensionAssessor};
use crate::domain::value_objects::{ArtifactPayload, GenerationContext};

/// Scores whether each role is defined sharply enough to cast
pub struct RoleClarityAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for RoleClarityAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let ArtifactPayload::CastingSheet { roles } = payload else {
            return Err(AssessorError::UnsupportedPayload(
                "role clarity needs a casting sheet".to_string(),
            ));
        };

        let complete = roles
            .iter()
            .filter(|r| {
                !r.character.trim().is_empty()
                    && !r.age_range.trim().is_empty()
                    && r.essence.split_whitespace().count() >= 4
            })
            .count();
        let completeness = ratio(complete, roles.len());

        // Every story-bible character should have a role on the sheet.
        let known = context.character_names();
        let covered = known
            .iter()
            .filter(|name| {
                roles
                    .iter()
                    .any(|r| r.character.eq_ignore_ascii_case(name))
            })
            .count();
        let coverage = if known.is_empty() {
            1.0
        } else {
            ratio(covered, known.len())
        };

        let score = 0.6 * completeness + 0.4 * coverage;
        let mut assessment = Assessment::new(
            score,
            format!(
                "{complete} of {} roles fully defined, {covered} of {} bible characters covered",
                roles.len(),
                known.len()
            ),
        )
        .with_confidence(0.8);

        if completeness < 1.0 {
            assessment = assessment
                .with_improvement("Give every role an age range and a substantive essence line");
        }
        if coverage < 1.0 {
            assessment =
                assessment.with_improvement("Add sheet entries for uncovered story-bible characters");
        }
        Ok(assessment)
    }
}

/// Scores the usefulness of audition guidance and references
pub struct CastingInsightAssessor;

#[async_trait::async_trait]
impl DimensionAssessor for CastingInsightAssessor {
    async fn assess(
        &self,
        payload: &ArtifactPayload,
        _context: &GenerationContext,
    ) -> Result<Assessment, AssessorError> {
        let ArtifactPayload::CastingSheet { roles } = payload else {
            return Err(AssessorError::UnsupportedPayload(
                "casting insight needs a casting sheet".to_string(),
            ));
        };

        let with_notes = roles
            .iter()
            .filter(|r| !r.audition_note.trim().is_empty())
            .count();
        let with_references = roles
            .iter()
            .filter(|r| !r.reference_performances.is_empty())
            .count();

        let score = 0.6 * ratio(with_notes, roles.len()) + 0.4 * ratio(with_references, roles.len());
        let mut assessment = Assessment::new(
            score,
            format!(
                "{with_notes} of {} roles carry audition notes, {with_references} cite references",
                roles.len()
            ),
        );
        if with_references < roles.len() {
            assessment = assessment
                .with_improvement("Anchor each role with one or two reference performances");
        }
        Ok(assessment)
    }
}
