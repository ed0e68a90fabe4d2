//! Batch evaluation of predicted content areas against ground truth.

use crate::crop::with_cropped_variants;
use crate::error::{EcaError, Result};
use crate::hausdorff::{content_area_hausdorff_with, HausdorffOptions};
use crate::stats::EvaluationStats;
use crate::threshold::{generate_threshold_range, rates_at_thresholds, validate_threshold};
use crate::types::{
    AnnotationSet, AreaAnnotation, EvaluationSummary, HausdorffScore, SampleKey, SampleScore,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Configuration for a batch evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Options passed to every Hausdorff computation
    pub hausdorff: HausdorffOptions,
    /// Also score the cropped sample derived from each circular ground truth
    pub include_cropped: bool,
    /// Distances at which the fraction of samples within is reported
    pub distance_thresholds: Vec<f64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            hausdorff: HausdorffOptions::default(),
            include_cropped: false,
            // Default distance thresholds: 0:10:100 (reference pixels)
            distance_thresholds: generate_threshold_range(0.0, 100.0, 11).unwrap_or_default(),
        }
    }
}

impl EvaluationConfig {
    /// Check the options and thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        self.hausdorff.validate()?;
        for &threshold in &self.distance_thresholds {
            validate_threshold(threshold)?;
        }
        Ok(())
    }
}

/// Evaluate predicted content areas against ground truth.
///
/// Predictions are paired with ground truth by image id and crop. Each pair is
/// scored with the content-area Hausdorff distance, in parallel. Samples that
/// cannot be paired or scored are counted in the returned statistics and
/// logged rather than failing the whole evaluation.
///
/// # Arguments
///
/// * `ground_truth` - Annotation set with the true content areas
/// * `predictions` - Annotation set with the predicted content areas
/// * `config` - Scoring options, cropping and reporting thresholds
///
/// # Returns
///
/// Returns an `EvaluationSummary` with per-sample scores and aggregates.
///
/// # Errors
///
/// Returns an error if the config is invalid or the ground truth is empty.
pub fn evaluate(
    ground_truth: &AnnotationSet,
    predictions: &AnnotationSet,
    config: &EvaluationConfig,
) -> Result<EvaluationSummary> {
    config.validate()?;

    if ground_truth.is_empty() {
        return Err(EcaError::EmptyDataset(
            "Ground truth must contain at least one annotation".to_string(),
        ));
    }

    let mut stats = EvaluationStats::new();

    let ground_truth = if config.include_cropped {
        let (expanded, uncroppable) = with_cropped_variants(ground_truth);
        for (key, err) in &uncroppable {
            stats.skip_uncroppable();
            warn!(image_id = key.image_id, error = %err, "no cropped sample for ground truth");
        }
        stats.cropped_samples = expanded.len() - ground_truth.len();
        Cow::Owned(expanded)
    } else {
        Cow::Borrowed(ground_truth)
    };

    stats.total_ground_truth = ground_truth.len();
    stats.total_predictions = predictions.len();

    let predictions_by_key: HashMap<SampleKey, &AreaAnnotation> = predictions
        .annotations
        .iter()
        .map(|ann| (ann.key(), ann))
        .collect();

    // Pair every ground truth sample with its prediction
    let mut pairs: Vec<(&AreaAnnotation, &AreaAnnotation)> =
        Vec::with_capacity(ground_truth.len());
    for truth in &ground_truth.annotations {
        match predictions_by_key.get(&truth.key()) {
            None => {
                stats.skip_missing_prediction();
                warn!(image_id = truth.image_id, crop = ?truth.crop, "no prediction for sample");
            }
            Some(prediction) if prediction.frame_size != truth.frame_size => {
                stats.skip_frame_mismatch();
                warn!(
                    image_id = truth.image_id,
                    expected = ?truth.frame_size,
                    found = ?prediction.frame_size,
                    "prediction frame size does not match ground truth"
                );
            }
            Some(prediction) => pairs.push((truth, prediction)),
        }
    }

    let truth_keys: HashSet<SampleKey> =
        ground_truth.annotations.iter().map(AreaAnnotation::key).collect();
    for prediction in &predictions.annotations {
        if !truth_keys.contains(&prediction.key()) {
            stats.skip_unmatched_prediction();
            warn!(
                image_id = prediction.image_id,
                crop = ?prediction.crop,
                "prediction has no ground truth"
            );
        }
    }

    let results: Vec<(SampleKey, Result<HausdorffScore>)> = pairs
        .par_iter()
        .map(|(truth, prediction)| {
            (truth.key(), score_sample(truth, prediction, &config.hausdorff))
        })
        .collect();

    let mut summary = EvaluationSummary::new();
    for (key, result) in results {
        match result {
            Ok(score) => {
                stats.add_scored();
                summary.scores.push(SampleScore {
                    key,
                    distance: score.distance,
                    closest_pair: score.closest_pair,
                });
            }
            Err(err) => {
                stats.skip_failed_score();
                warn!(
                    image_id = key.image_id,
                    crop = ?key.crop,
                    error = %err,
                    "failed to score sample"
                );
            }
        }
    }
    summary.scores.sort_by_key(|score| score.key);

    let distances: Vec<f64> = summary.scores.iter().map(|score| score.distance).collect();
    summary.mean_distance = mean(&distances);
    summary.median_distance = median(&distances);
    summary.max_distance = distances.iter().copied().fold(0.0, f64::max);
    summary.within_thresholds = rates_at_thresholds(&distances, &config.distance_thresholds)?;

    stats.log_summary();
    info!(
        mean = summary.mean_distance,
        median = summary.median_distance,
        max = summary.max_distance,
        "content-area evaluation complete"
    );
    summary.stats = stats;

    Ok(summary)
}

/// Score one prediction against its ground truth.
///
/// The frame size of the ground truth is used for both.
pub fn score_sample(
    ground_truth: &AreaAnnotation,
    prediction: &AreaAnnotation,
    options: &HausdorffOptions,
) -> Result<HausdorffScore> {
    content_area_hausdorff_with(
        ground_truth.content_area,
        prediction.content_area,
        ground_truth.frame_size,
        options,
    )
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
