//! Bounded validation history
//!
//! Per-content-type ring buffers of recent validation results. Capacity is
//! fixed at construction; appending past it drops the oldest entry, so the
//! history cannot grow without bound under sustained load.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::domain::value_objects::{ContentType, ValidationResult};

pub struct ValidationHistory {
    capacity: usize,
    entries: Mutex<HashMap<ContentType, VecDeque<ValidationResult>>>,
}

impl ValidationHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn append(&self, result: ValidationResult) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let buffer = entries.entry(result.content_type).or_default();
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(result);
    }

    /// Most recent results for a content type, newest last
    pub fn recent(&self, content_type: ContentType, limit: usize) -> Vec<ValidationResult> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&content_type)
            .map(|buffer| {
                buffer
                    .iter()
                    .rev()
                    .take(limit)
                    .rev()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self, content_type: ContentType) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&content_type).map_or(0, VecDeque::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        AcceptanceLevel, ProfessionalReview, QualityLevel, ValidationId, ValidationMetadata,
    };
    use chrono::Utc;
    use std::collections::HashMap as StdHashMap;

    fn result(content_type: ContentType, score: f64) -> ValidationResult {
        ValidationResult {
            content_type,
            overall_score: score,
            dimension_scores: StdHashMap::new(),
            benchmark_comparisons: Vec::new(),
            professional_review: ProfessionalReview {
                acceptance: AcceptanceLevel::Acceptable,
                industry_ready: false,
                criteria: Vec::new(),
                craft_notes: Vec::new(),
            },
            suggestions: Vec::new(),
            quality_level: QualityLevel::Competent,
            metadata: ValidationMetadata {
                validation_id: ValidationId::new(),
                validated_at: Utc::now(),
                duration_ms: 0,
                assessors_used: Vec::new(),
                benchmarks_applied: Vec::new(),
                notes: Vec::new(),
            },
        }
    }

    #[test]
    fn capacity_evicts_oldest() {
        let history = ValidationHistory::new(2);
        for score in [0.1, 0.2, 0.3] {
            history.append(result(ContentType::EpisodeScript, score));
        }

        assert_eq!(history.len(ContentType::EpisodeScript), 2);
        let recent = history.recent(ContentType::EpisodeScript, 10);
        assert!((recent[0].overall_score - 0.2).abs() < 1e-9);
        assert!((recent[1].overall_score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn content_types_are_isolated() {
        let history = ValidationHistory::new(4);
        history.append(result(ContentType::EpisodeScript, 0.5));
        history.append(result(ContentType::Storyboard, 0.6));

        assert_eq!(history.len(ContentType::EpisodeScript), 1);
        assert_eq!(history.len(ContentType::Storyboard), 1);
        assert!(history.recent(ContentType::CastingSheet, 5).is_empty());
    }
}
