//! Discretization of a boundary into sample points.

use super::polygon::Boundary;
use super::segment::Segment;
use crate::error::{EcaError, Result};
use crate::types::Point;

/// Sample roughly `point_count` points along `boundary`.
///
/// The sampling step is the total boundary length divided by `point_count`.
/// Straight segments only contribute their end point, which is also a vertex
/// of the loop. Curved segments of length `L` contribute `floor(L / step)`
/// points, ordered from the segment end back toward its start. The returned
/// count is therefore approximate.
///
/// # Errors
///
/// Returns an error if `point_count` is zero.
///
/// # Example
///
/// ```
/// use eca_eval::geometry::{build_boundary, sample_boundary};
/// use eca_eval::types::{Circle, FrameSize};
///
/// let boundary = build_boundary(FrameSize::new(270, 480), None).unwrap();
/// let points = sample_boundary(&boundary, 100).unwrap();
/// assert_eq!(points.len(), 4);
/// ```
pub fn sample_boundary(boundary: &Boundary, point_count: usize) -> Result<Vec<Point>> {
    if point_count == 0 {
        return Err(EcaError::InvalidPointCount(
            "Number of sample points must be greater than 0".to_string(),
        ));
    }

    let step = boundary.total_length() / point_count as f64;
    let mut points = Vec::with_capacity(point_count + boundary.len());

    for segment in boundary {
        match segment {
            Segment::Line(line) => points.push(line.b),
            curved => {
                let count = if step > 0.0 {
                    (curved.length() / step).floor() as usize
                } else {
                    0
                };
                points.extend(
                    (1..=count)
                        .rev()
                        .map(|i| curved.point_at(i as f64 / count as f64)),
                );
            }
        }
    }

    // A zero-radius circle has no length to divide.
    if points.is_empty() {
        points.extend(boundary.iter().map(|segment| segment.point_at(1.0)));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_boundary;
    use crate::types::{Circle, FrameSize};

    const FRAME: FrameSize = FrameSize::new(270, 480);

    #[test]
    fn test_rectangle_samples_corners_only() {
        let boundary = build_boundary(FRAME, None).unwrap();
        let points = sample_boundary(&boundary, 100).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(480.0, 0.0),
                Point::new(480.0, 270.0),
                Point::new(0.0, 270.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_full_circle_samples_on_circle() {
        let circle = Circle::new(240.0, 135.0, 50.0);
        let boundary = build_boundary(FRAME, Some(circle)).unwrap();
        let points = sample_boundary(&boundary, 100).unwrap();
        assert!(points.len() >= 99 && points.len() <= 100);
        for p in &points {
            assert!((p.distance(circle.center()) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arc_samples_run_from_end_to_start() {
        let circle = Circle::new(135.0, 240.0, 200.0);
        let boundary = build_boundary(FRAME, Some(circle)).unwrap();
        let points = sample_boundary(&boundary, 100).unwrap();

        // Two line end points, then the arc from its end back toward its start.
        let arc = boundary.segments()[2];
        assert_eq!(points[2], arc.point_at(1.0));
        let count = points.len() - 2;
        assert!(count > 10);
        assert!(points[points.len() - 1].distance(arc.point_at(0.0)) > 0.0);
        for p in &points[2..] {
            assert!((p.distance(circle.center()) - 200.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_more_points_means_denser_arcs() {
        let circle = Circle::new(135.0, 240.0, 200.0);
        let boundary = build_boundary(FRAME, Some(circle)).unwrap();
        let coarse = sample_boundary(&boundary, 20).unwrap();
        let fine = sample_boundary(&boundary, 400).unwrap();
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_zero_points_is_error() {
        let boundary = build_boundary(FRAME, None).unwrap();
        assert!(matches!(
            sample_boundary(&boundary, 0),
            Err(EcaError::InvalidPointCount(_))
        ));
    }

    #[test]
    fn test_zero_radius_circle_yields_its_center() {
        let circle = Circle::new(100.0, 100.0, 0.0);
        let boundary = build_boundary(FRAME, Some(circle)).unwrap();
        let points = sample_boundary(&boundary, 100).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].distance(circle.center()) < 1e-12);
    }
}
