//! Benchmark comparison - pure scoring against a quality benchmark

use std::collections::HashMap;

use crate::domain::value_objects::{
    BenchmarkComparison, DimensionScore, QualityBenchmark, QualityDimension,
};

/// Hold a set of dimension scores against one benchmark
///
/// Only metrics with a matching dimension score participate: an unmatched
/// metric contributes nothing to the sum and its weight is excluded from the
/// normalization denominator. The gap is never negative, and a comparison
/// passes exactly when the gap is zero.
pub fn compare_benchmark(
    scores: &HashMap<QualityDimension, DimensionScore>,
    benchmark: &QualityBenchmark,
) -> BenchmarkComparison {
    let mut weighted_sum = 0.0;
    let mut matched_weight = 0.0;
    let mut metric_scores = HashMap::new();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for metric in &benchmark.metrics {
        let Some(score) = scores.get(&metric.dimension) else {
            continue;
        };
        weighted_sum += score.score * metric.weight;
        matched_weight += metric.weight;
        metric_scores.insert(metric.dimension, score.score);

        if score.score >= metric.target_score {
            strengths.push(format!(
                "{} meets the {} target ({:.2} >= {:.2})",
                metric.dimension, benchmark.name, score.score, metric.target_score
            ));
        } else {
            weaknesses.push(format!(
                "{} falls short of the {} target ({:.2} < {:.2})",
                metric.dimension, benchmark.name, score.score, metric.target_score
            ));
        }
    }

    let aggregate_score = if matched_weight > 0.0 {
        weighted_sum / matched_weight
    } else {
        0.0
    };

    let target = benchmark.pass_target();
    let gap = (target - aggregate_score).max(0.0);

    BenchmarkComparison {
        benchmark_id: benchmark.id.clone(),
        aggregate_score,
        metric_scores,
        passed: gap == 0.0,
        gap,
        strengths,
        weaknesses,
    }
}
