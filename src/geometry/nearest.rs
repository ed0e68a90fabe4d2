//! Nearest-point queries against a boundary.

use super::polygon::Boundary;
use crate::types::Point;

/// Closest boundary point to a query and its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    pub distance: f64,
    pub point: Point,
}

/// Find the point of `boundary` closest to `query`.
///
/// Brute-force scan over the segments; boundaries have at most a handful of
/// them. On ties the earlier segment wins.
pub fn nearest_point(boundary: &Boundary, query: Point) -> NearestPoint {
    boundary.iter().fold(
        NearestPoint {
            distance: f64::INFINITY,
            point: query,
        },
        |best, segment| {
            let closest = segment.closest_point(query);
            let distance = query.distance(closest);
            if distance < best.distance {
                NearestPoint {
                    distance,
                    point: closest,
                }
            } else {
                best
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_boundary;
    use crate::types::{Circle, FrameSize};

    #[test]
    fn test_nearest_on_rectangle() {
        let boundary = build_boundary(FrameSize::new(100, 200), None).unwrap();
        let nearest = nearest_point(&boundary, Point::new(50.0, 10.0));
        assert!((nearest.distance - 10.0).abs() < 1e-12);
        assert_eq!(nearest.point, Point::new(50.0, 0.0));

        let outside = nearest_point(&boundary, Point::new(230.0, 140.0));
        assert!((outside.distance - 50.0).abs() < 1e-12);
        assert_eq!(outside.point, Point::new(200.0, 100.0));
    }

    #[test]
    fn test_nearest_on_full_circle() {
        let circle = Circle::new(100.0, 50.0, 20.0);
        let boundary = build_boundary(FrameSize::new(100, 200), Some(circle)).unwrap();
        let nearest = nearest_point(&boundary, Point::new(100.0, 50.0));
        assert!((nearest.distance - 20.0).abs() < 1e-12);

        let nearest = nearest_point(&boundary, Point::new(100.0, 0.0));
        assert!((nearest.distance - 30.0).abs() < 1e-12);
        assert!(nearest.point.distance(Point::new(100.0, 30.0)) < 1e-12);
    }

    #[test]
    fn test_point_on_boundary_has_zero_distance() {
        let circle = Circle::new(135.0, 240.0, 200.0);
        let boundary = build_boundary(FrameSize::new(270, 480), Some(circle)).unwrap();
        for segment in &boundary {
            let p = segment.point_at(0.3);
            assert!(nearest_point(&boundary, p).distance < 1e-9);
        }
    }
}
