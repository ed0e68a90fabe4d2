//! Distance thresholding utilities.

use crate::error::{EcaError, Result};

/// Generate a range of distance thresholds.
///
/// # Arguments
///
/// * `start` - Starting threshold value (inclusive)
/// * `end` - Ending threshold value (inclusive)
/// * `steps` - Number of threshold values to generate
///
/// # Returns
///
/// Returns a vector of evenly-spaced threshold values.
///
/// # Example
///
/// ```
/// use eca_eval::threshold::generate_threshold_range;
///
/// let thresholds = generate_threshold_range(0.0, 100.0, 11).unwrap();
/// assert_eq!(thresholds.len(), 11);
/// assert_eq!(thresholds[0], 0.0);
/// assert_eq!(thresholds[10], 100.0);
/// ```
pub fn generate_threshold_range(start: f64, end: f64, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(EcaError::InvalidThreshold(
            "Number of steps must be greater than 0".to_string()
        ));
    }

    validate_threshold(start)?;
    validate_threshold(end)?;

    if start > end {
        return Err(EcaError::InvalidThreshold(
            format!("Start threshold ({}) must be <= end threshold ({})", start, end)
        ));
    }

    if steps == 1 {
        return Ok(vec![start]);
    }

    let step_size = (end - start) / (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| start + step_size * i as f64)
        .collect())
}

/// Fraction of `distances` that are at most `threshold`.
///
/// Returns 0.0 for an empty slice.
pub fn fraction_within(distances: &[f64], threshold: f64) -> f64 {
    if distances.is_empty() {
        return 0.0;
    }
    let within = distances.iter().filter(|&&d| d <= threshold).count();
    within as f64 / distances.len() as f64
}

/// Fraction of `distances` within each threshold, as `(threshold, fraction)` pairs.
///
/// # Errors
///
/// Returns an error if any threshold is negative or not finite.
pub fn rates_at_thresholds(distances: &[f64], thresholds: &[f64]) -> Result<Vec<(f64, f64)>> {
    thresholds
        .iter()
        .map(|&threshold| {
            validate_threshold(threshold)?;
            Ok((threshold, fraction_within(distances, threshold)))
        })
        .collect()
}

/// Validate that a threshold is a finite, non-negative distance.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(EcaError::InvalidThreshold(
            format!("Threshold must be a finite distance >= 0.0, got {}", threshold)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_threshold_range() {
        let thresholds = generate_threshold_range(0.0, 50.0, 11).unwrap();
        assert_eq!(thresholds.len(), 11);
        assert!((thresholds[0] - 0.0).abs() < 1e-10);
        assert!((thresholds[10] - 50.0).abs() < 1e-10);
        assert!((thresholds[5] - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_range() {
        assert!(generate_threshold_range(0.0, 1.0, 0).is_err());
        assert!(generate_threshold_range(-1.0, 1.0, 5).is_err());
        assert!(generate_threshold_range(5.0, 1.0, 5).is_err());
        assert!(generate_threshold_range(0.0, f64::INFINITY, 5).is_err());
    }

    #[test]
    fn test_fraction_within() {
        let distances = [0.0, 5.0, 10.0, 20.0];
        assert_eq!(fraction_within(&distances, 10.0), 0.75);
        assert_eq!(fraction_within(&distances, -1.0), 0.0);
        assert_eq!(fraction_within(&[], 10.0), 0.0);
    }

    #[test]
    fn test_rates_at_thresholds() {
        let distances = [1.0, 2.0, 3.0, 4.0];
        let rates = rates_at_thresholds(&distances, &[0.0, 2.0, 10.0]).unwrap();
        assert_eq!(rates, vec![(0.0, 0.0), (2.0, 0.5), (10.0, 1.0)]);
        assert!(rates_at_thresholds(&distances, &[f64::NAN]).is_err());
    }
}
