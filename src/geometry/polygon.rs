//! Construction of the closed boundary of a content area.
//!
//! The content area is the frame rectangle intersected with an optional disk.
//! Its boundary is walked clockwise (on screen) starting from the top-left
//! corner and is made of frame edges and circle arcs that meet where the
//! circle crosses the frame.

use super::segment::{Arc, FullCircle, Line, Segment};
use crate::error::{EcaError, Result};
use crate::types::{Circle, FrameSize, Point};
use tracing::debug;

/// Frame distance below which two boundary vertices are treated as one point.
///
/// Crossings within this distance of a corner are snapped onto the corner.
const COINCIDENT_VERTICES: f64 = 1e-9;

/// An ordered, closed loop of segments with contiguous end points.
///
/// Never empty: every constructor produces at least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    segments: Vec<Segment>,
}

impl Boundary {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of the segment lengths.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}

impl<'a> IntoIterator for &'a Boundary {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Build the boundary of the content area of `frame` clipped by `circle`.
///
/// An absent circle yields the four frame edges (top, right, bottom, left).
/// A circle inside the frame that crosses no edge yields a single full circle,
/// and a circle covering the whole frame yields the frame edges.
///
/// # Errors
///
/// Returns an error if the frame or circle is malformed, or if the circle does
/// not overlap the frame at all.
///
/// # Example
///
/// ```
/// use eca_eval::geometry::build_boundary;
/// use eca_eval::types::{Circle, FrameSize};
///
/// let frame = FrameSize::new(270, 480);
/// assert_eq!(build_boundary(frame, None).unwrap().len(), 4);
///
/// let inside = Circle::new(240.0, 135.0, 50.0);
/// assert_eq!(build_boundary(frame, Some(inside)).unwrap().len(), 1);
/// ```
pub fn build_boundary(frame: FrameSize, circle: Option<Circle>) -> Result<Boundary> {
    frame.validate()?;
    let perimeter = Perimeter::new(frame);

    let Some(circle) = circle else {
        return Ok(perimeter.rectangle());
    };
    circle.validate()?;

    let mut vertices: Vec<Vertex> = Vec::with_capacity(12);
    let mut crossings = 0usize;
    for edge in perimeter.edges() {
        if circle.contains(edge.start) {
            vertices.push(Vertex {
                position: edge.offset,
                point: edge.start,
            });
        }
        for along in edge.crossings(&circle) {
            vertices.push(Vertex {
                position: edge.offset + along,
                point: edge.point_at(along),
            });
            crossings += 1;
        }
    }

    merge_coincident(&mut vertices, perimeter.total_length);
    if vertices.len() < 2 {
        return uncrossed_boundary(&circle, frame);
    }

    // Between two consecutive vertices the frame path is either wholly inside
    // the disk (follow the edge) or wholly outside it (follow the circle).
    let segments: Vec<Segment> = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(from, to)| {
            let mut end = to.position;
            if end <= from.position {
                end += perimeter.total_length;
            }
            let midpoint = perimeter.point_at(0.5 * (from.position + end));
            if circle.contains(midpoint) {
                return Segment::Line(Line::new(from.point, to.point));
            }
            // The arc can never be longer than the frame path it replaces. A
            // longer one is a rounding flip of a vanishing arc.
            let arc = Arc::new(circle.center(), circle.radius, from.point, to.point);
            if arc.length() <= end - from.position + COINCIDENT_VERTICES {
                Segment::Arc(arc)
            } else {
                Segment::Line(Line::new(from.point, to.point))
            }
        })
        .collect();

    debug!(
        crossings,
        segments = segments.len(),
        "built clipped content-area boundary"
    );

    Ok(Boundary { segments })
}

/// Drop vertices within [`COINCIDENT_VERTICES`] of the previous one along the
/// perimeter, including across the wrap from the last vertex to the first.
///
/// `vertices` must be sorted by position.
fn merge_coincident(vertices: &mut Vec<Vertex>, total_length: f64) {
    vertices.dedup_by(|next, kept| next.position - kept.position <= COINCIDENT_VERTICES);
    if let [first, .., last] = vertices.as_slice() {
        if first.position + total_length - last.position <= COINCIDENT_VERTICES {
            vertices.pop();
        }
    }
}

/// Boundary for a circle that meets the frame in at most one point.
fn uncrossed_boundary(circle: &Circle, frame: FrameSize) -> Result<Boundary> {
    let (width, height) = (f64::from(frame.width), f64::from(frame.height));
    let inside = circle.x - circle.radius >= 0.0
        && circle.x + circle.radius <= width
        && circle.y - circle.radius >= 0.0
        && circle.y + circle.radius <= height;
    if inside {
        debug!(radius = circle.radius, "content area is a full circle");
        return Ok(Boundary {
            segments: vec![Segment::FullCircle(FullCircle::new(
                circle.center(),
                circle.radius,
            ))],
        });
    }

    Err(EcaError::DisjointContentArea(format!(
        "circle ({}, {}, {}) does not overlap the {}x{} frame",
        circle.x, circle.y, circle.radius, frame.height, frame.width
    )))
}

/// A boundary vertex with its clockwise arc-length position on the frame.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    position: f64,
    point: Point,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    start: Point,
    end: Point,
    offset: f64,
    length: f64,
}

impl Edge {
    fn direction(&self) -> Point {
        let delta = self.end - self.start;
        Point::new(delta.x / self.length, delta.y / self.length)
    }

    fn point_at(&self, along: f64) -> Point {
        self.start + self.direction() * along
    }

    /// Distances along the edge where the circle crosses it, in increasing order.
    ///
    /// Crossings a rounding error past either corner are clamped onto it, so a
    /// circle through a corner always yields that corner as a vertex. A
    /// tangent circle does not cross.
    fn crossings(&self, circle: &Circle) -> Vec<f64> {
        let center = circle.center();
        let along = (center - self.start).dot(self.direction());
        let gap = center.distance(self.point_at(along));
        if gap >= circle.radius {
            return Vec::new();
        }
        let half_chord = (circle.radius * circle.radius - gap * gap).sqrt();
        [along - half_chord, along + half_chord]
            .into_iter()
            .filter(|&t| t >= -COINCIDENT_VERTICES && t <= self.length + COINCIDENT_VERTICES)
            .map(|t| t.clamp(0.0, self.length))
            .collect()
    }
}

/// The frame rectangle, walked clockwise from the top-left corner.
#[derive(Debug, Clone)]
struct Perimeter {
    corners: [Point; 4],
    total_length: f64,
}

impl Perimeter {
    fn new(frame: FrameSize) -> Self {
        let (w, h) = (f64::from(frame.width), f64::from(frame.height));
        Self {
            corners: [
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ],
            total_length: 2.0 * (w + h),
        }
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let mut offset = 0.0;
        (0..4).map(move |i| {
            let start = self.corners[i];
            let end = self.corners[(i + 1) % 4];
            let length = start.distance(end);
            let edge = Edge {
                start,
                end,
                offset,
                length,
            };
            offset += length;
            edge
        })
    }

    /// Point at clockwise arc-length `position`, wrapping around.
    fn point_at(&self, position: f64) -> Point {
        let position = position.rem_euclid(self.total_length);
        let mut last = None;
        for edge in self.edges() {
            if position <= edge.offset + edge.length {
                return edge.point_at(position - edge.offset);
            }
            last = Some(edge);
        }
        last.map_or(self.corners[0], |edge| edge.end)
    }

    fn rectangle(&self) -> Boundary {
        Boundary {
            segments: self
                .edges()
                .map(|edge| Segment::Line(Line::new(edge.start, edge.end)))
                .collect(),
        }
    }
}
