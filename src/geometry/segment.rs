//! Parametrized boundary primitives: straight lines, circular arcs and full circles.

use crate::types::Point;
use std::f64::consts::TAU;

/// A straight segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.a + (self.b - self.a) * t
    }

    /// Projection of `p` onto the segment, clamped to its end points.
    pub fn closest_point(&self, p: Point) -> Point {
        let length = self.length();
        if length == 0.0 {
            return self.a;
        }
        let direction = (self.b - self.a) * (1.0 / length);
        let along = (p - self.a).dot(direction).clamp(0.0, length);
        self.a + direction * along
    }
}

/// A circular arc traversed from `start` to `end` in the positive angle
/// direction (clockwise on screen, since y points down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point,
    radius: f64,
    start: Point,
    end: Point,
    span: f64,
}

impl Arc {
    /// Build an arc; the span is the positive angle from `start` to `end`.
    ///
    /// Coincident end points give a full turn, so the span is always in (0, 2π].
    pub fn new(center: Point, radius: f64, start: Point, end: Point) -> Self {
        let mut arc = Self {
            center,
            radius,
            start,
            end,
            span: TAU,
        };
        let span = arc.angle_from_start(end);
        if span > 0.0 {
            arc.span = span;
        }
        arc
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Angle swept from `start` to `end`, in radians.
    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn length(&self) -> f64 {
        self.radius * self.span
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.center + (self.start - self.center).rotate(t * self.span)
    }

    /// Closest point on the arc to `p`.
    ///
    /// Inside the angular span this is the radial projection; outside it the
    /// nearer end point wins.
    pub fn closest_point(&self, p: Point) -> Point {
        let angle = self.angle_from_start(p);
        if angle <= self.span {
            return self.point_at(angle / self.span);
        }
        if angle - self.span <= TAU - angle {
            self.end
        } else {
            self.start
        }
    }

    /// Angle of `p` around the center, measured from `start`, in [0, 2π).
    fn angle_from_start(&self, p: Point) -> f64 {
        let angle = (p - self.center).angle() - (self.start - self.center).angle();
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }
}

/// A complete circle, used when the content area lies inside the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullCircle {
    pub center: Point,
    pub radius: f64,
}

impl FullCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn length(&self) -> f64 {
        TAU * self.radius
    }

    pub fn point_at(&self, t: f64) -> Point {
        let (sin, cos) = (t * TAU).sin_cos();
        self.center + Point::new(cos, sin) * self.radius
    }

    /// Radial projection of `p`; the center itself maps to the angle-0 point.
    pub fn closest_point(&self, p: Point) -> Point {
        let offset = p - self.center;
        let norm = offset.norm();
        if norm == 0.0 {
            return self.point_at(0.0);
        }
        self.center + offset * (self.radius / norm)
    }
}

/// One piece of a content-area boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Line),
    Arc(Arc),
    FullCircle(FullCircle),
}

impl Segment {
    /// Arc length of the segment.
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(line) => line.length(),
            Segment::Arc(arc) => arc.length(),
            Segment::FullCircle(circle) => circle.length(),
        }
    }

    /// Point at normalised parameter `t` in [0, 1].
    pub fn point_at(&self, t: f64) -> Point {
        match self {
            Segment::Line(line) => line.point_at(t),
            Segment::Arc(arc) => arc.point_at(t),
            Segment::FullCircle(circle) => circle.point_at(t),
        }
    }

    /// Closest point on the segment to `p`.
    pub fn closest_point(&self, p: Point) -> Point {
        match self {
            Segment::Line(line) => line.closest_point(p),
            Segment::Arc(arc) => arc.closest_point(p),
            Segment::FullCircle(circle) => circle.closest_point(p),
        }
    }

    /// Whether the segment is curved and needs interior samples.
    pub fn is_curved(&self) -> bool {
        !matches!(self, Segment::Line(_))
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Segment::Arc(arc)
    }
}

impl From<FullCircle> for Segment {
    fn from(circle: FullCircle) -> Self {
        Segment::FullCircle(circle)
    }
}
