//! Hausdorff distance between the boundaries of two content areas.

use crate::error::{EcaError, Result};
use crate::geometry::{build_boundary, nearest_point, sample_boundary, Boundary};
use crate::types::{Circle, FrameSize, HausdorffScore, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resolution that normalised scores are expressed in.
pub const REFERENCE_FRAME: FrameSize = FrameSize::new(1080, 1920);

/// Default number of boundary sample points.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Options for the content-area Hausdorff distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HausdorffOptions {
    /// Approximate number of points sampled along each boundary.
    pub point_count: usize,
    /// Scale the distance to [`REFERENCE_FRAME`].
    pub normalise: bool,
}

impl Default for HausdorffOptions {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            normalise: true,
        }
    }
}

impl HausdorffOptions {
    /// Check the options can be used for scoring.
    pub fn validate(&self) -> Result<()> {
        if self.point_count == 0 {
            return Err(EcaError::InvalidPointCount(
                "Number of sample points must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Compute the Hausdorff distance between two content areas with default
/// options (100 sample points, normalised).
///
/// See [`content_area_hausdorff_with`].
///
/// # Example
///
/// ```
/// use eca_eval::hausdorff::content_area_hausdorff;
/// use eca_eval::types::{Circle, FrameSize};
///
/// let frame = FrameSize::new(1080, 1920);
/// let truth = Circle::new(960.0, 540.0, 400.0);
/// let predicted = Circle::new(960.0, 540.0, 450.0);
///
/// let score = content_area_hausdorff(Some(truth), Some(predicted), frame).unwrap();
/// assert!((score.distance - 50.0).abs() < 1e-6);
/// ```
pub fn content_area_hausdorff(
    circle_a: Option<Circle>,
    circle_b: Option<Circle>,
    frame: FrameSize,
) -> Result<HausdorffScore> {
    content_area_hausdorff_with(circle_a, circle_b, frame, &HausdorffOptions::default())
}

/// Compute the Hausdorff distance between two content areas.
///
/// Each content area is `frame` clipped by an optional circle (`None` means the
/// whole frame). Both boundaries are sampled, every sample is matched to the
/// closest point of the other boundary, and the largest such distance in either
/// direction is returned together with the pair of points realising it.
///
/// When `options.normalise` is set the distance is scaled by
/// `‖(1080, 1920)‖ / ‖(height, width)‖` so scores are comparable across frame
/// sizes. The returned point pair stays in frame pixels.
///
/// # Errors
///
/// Returns an error if the frame or a circle is malformed, a circle does not
/// overlap the frame, or `options.point_count` is zero.
pub fn content_area_hausdorff_with(
    circle_a: Option<Circle>,
    circle_b: Option<Circle>,
    frame: FrameSize,
    options: &HausdorffOptions,
) -> Result<HausdorffScore> {
    frame.validate()?;
    options.validate()?;
    for circle in [circle_a, circle_b].iter().flatten() {
        circle.validate()?;
    }

    if circle_a == circle_b {
        return Ok(HausdorffScore::zero());
    }

    let boundary_a = build_boundary(frame, circle_a)?;
    let boundary_b = build_boundary(frame, circle_b)?;

    let points_a = sample_boundary(&boundary_a, options.point_count)?;
    let points_b = sample_boundary(&boundary_b, options.point_count)?;

    let mut score = HausdorffScore::zero();
    farthest_nearest(&points_b, &boundary_a, &mut score);
    farthest_nearest(&points_a, &boundary_b, &mut score);

    debug!(
        distance = score.distance,
        samples_a = points_a.len(),
        samples_b = points_b.len(),
        "computed content-area hausdorff distance"
    );

    if options.normalise {
        score.distance *= normalisation_factor(frame);
    }

    Ok(score)
}

/// Ratio of the reference frame diagonal to the diagonal of `frame`.
pub fn normalisation_factor(frame: FrameSize) -> f64 {
    REFERENCE_FRAME.diagonal() / frame.diagonal()
}

/// Raise `score` to the largest distance from `points` to `boundary`.
///
/// Only strictly larger distances replace the running maximum, so the first
/// pair found wins ties.
fn farthest_nearest(points: &[Point], boundary: &Boundary, score: &mut HausdorffScore) {
    for &point in points {
        let nearest = nearest_point(boundary, point);
        if nearest.distance > score.distance {
            score.distance = nearest.distance;
            score.closest_pair = Some((point, nearest.point));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: FrameSize = FrameSize::new(270, 480);

    fn raw() -> HausdorffOptions {
        HausdorffOptions {
            normalise: false,
            ..HausdorffOptions::default()
        }
    }

    #[test]
    fn test_identical_areas_short_circuit() {
        let score = content_area_hausdorff(None, None, FRAME).unwrap();
        assert_eq!(score, HausdorffScore::zero());

        let circle = Some(Circle::new(10.0, 10.0, 5.0));
        let score = content_area_hausdorff(circle, circle, FRAME).unwrap();
        assert_eq!(score.distance, 0.0);
        assert!(score.closest_pair.is_none());
    }

    #[test]
    fn test_identical_disjoint_circles_short_circuit() {
        let far = Some(Circle::new(-500.0, -500.0, 10.0));
        assert_eq!(content_area_hausdorff(far, far, FRAME).unwrap().distance, 0.0);
    }

    #[test]
    fn test_concentric_interior_circles() {
        let a = Some(Circle::new(240.0, 135.0, 50.0));
        let b = Some(Circle::new(240.0, 135.0, 100.0));
        let score = content_area_hausdorff_with(a, b, FRAME, &raw()).unwrap();
        assert!((score.distance - 50.0).abs() < 1e-9);

        let (sampled, closest) = score.closest_pair.unwrap();
        assert!((sampled.distance(closest) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalisation_scales_to_reference() {
        // (1080, 1920) is exactly four times (270, 480).
        assert!((normalisation_factor(FRAME) - 4.0).abs() < 1e-12);

        let a = Some(Circle::new(240.0, 135.0, 50.0));
        let b = Some(Circle::new(240.0, 135.0, 100.0));
        let score = content_area_hausdorff(a, b, FRAME).unwrap();
        assert!((score.distance - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_covering_circle_matches_whole_frame() {
        // Both boundaries are the frame edges.
        let covering = Some(Circle::new(240.0, 135.0, 1000.0));
        let score = content_area_hausdorff(None, covering, FRAME).unwrap();
        assert_eq!(score.distance, 0.0);
        assert!(score.closest_pair.is_none());
    }

    #[test]
    fn test_whole_frame_against_clipped_circle() {
        // The far top-right corner is 420.27 px from the center, 220.27 px
        // outside the circle.
        let circle = Some(Circle::new(135.0, 240.0, 200.0));
        let score = content_area_hausdorff_with(None, circle, FRAME, &raw()).unwrap();
        let expected = 345.0f64.hypot(240.0) - 200.0;
        assert!((score.distance - expected).abs() < 1e-6);

        let (sampled, _) = score.closest_pair.unwrap();
        assert_eq!(sampled, Point::new(480.0, 0.0));
    }

    #[test]
    fn test_invalid_inputs_fail_fast() {
        assert!(matches!(
            content_area_hausdorff(None, None, FrameSize::new(0, 480)),
            Err(EcaError::InvalidFrameSize(_))
        ));
        let negative = Some(Circle::new(1.0, 1.0, -3.0));
        assert!(matches!(
            content_area_hausdorff(negative, negative, FRAME),
            Err(EcaError::InvalidCircle(_))
        ));
        let options = HausdorffOptions {
            point_count: 0,
            normalise: true,
        };
        let small = Some(Circle::new(1.0, 1.0, 3.0));
        assert!(content_area_hausdorff_with(None, small, FRAME, &options).is_err());
    }

    #[test]
    fn test_disjoint_circle_is_error() {
        let far = Some(Circle::new(-500.0, -500.0, 10.0));
        assert!(matches!(
            content_area_hausdorff(None, far, FRAME),
            Err(EcaError::DisjointContentArea(_))
        ));
    }
}
