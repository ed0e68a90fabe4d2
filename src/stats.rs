/// Statistics tracking for batch evaluation
///
/// This module provides the counters collected while pairing predictions
/// with ground truth and scoring them.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Statistics collected during a batch evaluation
///
/// Tracks how many samples were scored and why the others were skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Number of ground-truth samples, including derived cropped samples
    pub total_ground_truth: usize,

    /// Number of prediction samples
    pub total_predictions: usize,

    /// Number of cropped samples derived from circular ground truth
    pub cropped_samples: usize,

    /// Circular ground-truth samples too small to derive a cropped sample
    pub uncroppable_samples: usize,

    /// Ground-truth samples without a prediction
    pub missing_predictions: usize,

    /// Predictions without a ground-truth sample
    pub unmatched_predictions: usize,

    /// Pairs skipped because the frame sizes disagree
    pub frame_mismatches: usize,

    /// Pairs whose geometry could not be scored
    pub failed_scores: usize,

    /// Pairs scored successfully
    pub scored_samples: usize,
}

impl EvaluationStats {
    /// Create a new `EvaluationStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a circular ground-truth sample with no cropped sample
    pub fn skip_uncroppable(&mut self) {
        self.uncroppable_samples += 1;
    }

    /// Record a ground-truth sample without a prediction
    pub fn skip_missing_prediction(&mut self) {
        self.missing_predictions += 1;
    }

    /// Record a prediction without ground truth
    pub fn skip_unmatched_prediction(&mut self) {
        self.unmatched_predictions += 1;
    }

    /// Record a pair with disagreeing frame sizes
    pub fn skip_frame_mismatch(&mut self) {
        self.frame_mismatches += 1;
    }

    /// Record a pair that failed to score
    pub fn skip_failed_score(&mut self) {
        self.failed_scores += 1;
    }

    /// Record a successfully scored pair
    pub fn add_scored(&mut self) {
        self.scored_samples += 1;
    }

    /// Total number of skipped samples and predictions
    pub fn total_skipped(&self) -> usize {
        self.uncroppable_samples
            + self.missing_predictions
            + self.unmatched_predictions
            + self.frame_mismatches
            + self.failed_scores
    }

    /// Fraction of ground-truth samples that were scored
    pub fn coverage(&self) -> f64 {
        if self.total_ground_truth == 0 {
            return 0.0;
        }
        self.scored_samples as f64 / self.total_ground_truth as f64
    }

    /// Log a summary of the statistics at info level
    pub fn log_summary(&self) {
        info!(
            total_ground_truth = self.total_ground_truth,
            total_predictions = self.total_predictions,
            cropped_samples = self.cropped_samples,
            uncroppable_samples = self.uncroppable_samples,
            scored = self.scored_samples,
            missing_predictions = self.missing_predictions,
            unmatched_predictions = self.unmatched_predictions,
            frame_mismatches = self.frame_mismatches,
            failed_scores = self.failed_scores,
            "evaluation statistics"
        );
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "EvaluationStats {{ ground_truth: {}, predictions: {}, scored: {}, skipped: {}, \
             coverage: {:.3} }}",
            self.total_ground_truth,
            self.total_predictions,
            self.scored_samples,
            self.total_skipped(),
            self.coverage()
        )
    }
}
