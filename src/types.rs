//! Core data types for content-area annotations and scores.

use crate::error::{EcaError, Result};
use crate::stats::EvaluationStats;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in pixel space.
///
/// The origin is the top-left corner of the frame, x grows rightward and
/// y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the point seen as a vector from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).norm()
    }

    /// Dot product of the two points seen as vectors.
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle of the vector in radians, as returned by `atan2`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate the vector by `angle` radians (positive is clockwise on screen).
    pub fn rotate(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// A circular content area `(x, y, radius)` in pixel space.
///
/// Serialized as the array `[x, y, radius]`. An absent circle
/// (`Option::None`) means the whole frame is content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Center of the circle.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `point` lies in the closed disk.
    pub fn contains(&self, point: Point) -> bool {
        let d = point - self.center();
        d.dot(d) <= self.radius * self.radius
    }

    /// Check the circle has a finite center and a finite, non-negative radius.
    pub fn validate(&self) -> Result<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(EcaError::InvalidCircle(format!(
                "center ({}, {}) is not finite",
                self.x, self.y
            )));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(EcaError::InvalidCircle(format!(
                "radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

impl From<[f64; 3]> for Circle {
    fn from([x, y, radius]: [f64; 3]) -> Self {
        Self { x, y, radius }
    }
}

impl From<Circle> for [f64; 3] {
    fn from(circle: Circle) -> Self {
        [circle.x, circle.y, circle.radius]
    }
}

/// Frame dimensions in pixels.
///
/// Row-major like image arrays: serialized as `[height, width]`, the
/// opposite axis order to [`Circle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct FrameSize {
    pub height: u32,
    pub width: u32,
}

impl FrameSize {
    /// Create a new frame size from `(height, width)`.
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Euclidean norm of `(height, width)`.
    pub fn diagonal(&self) -> f64 {
        f64::from(self.height).hypot(f64::from(self.width))
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Check both dimensions are positive.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(EcaError::InvalidFrameSize(format!(
                "dimensions must be positive, got {}x{} (height x width)",
                self.height, self.width
            )));
        }
        Ok(())
    }
}

impl From<[u32; 2]> for FrameSize {
    fn from([height, width]: [u32; 2]) -> Self {
        Self { height, width }
    }
}

impl From<FrameSize> for [u32; 2] {
    fn from(frame: FrameSize) -> Self {
        [frame.height, frame.width]
    }
}

/// An integer crop rectangle `(left, top, right, bottom)`, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    /// Create a new crop box.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Size of the cropped frame.
    pub fn frame_size(&self) -> FrameSize {
        FrameSize::new(
            self.bottom.saturating_sub(self.top),
            self.right.saturating_sub(self.left),
        )
    }

    /// Whether the box is non-empty and lies inside `frame`.
    pub fn fits(&self, frame: FrameSize) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= frame.width
            && self.bottom <= frame.height
    }
}

/// A content-area annotation for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaAnnotation {
    pub image_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Frame size as `[height, width]`; for cropped samples this is the crop size.
    pub frame_size: FrameSize,
    /// Circle as `[x, y, radius]`, or `null` when the whole frame is content.
    pub content_area: Option<Circle>,
    /// Crop applied to the source frame, if this is a cropped sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropBox>,
}

impl AreaAnnotation {
    /// Create an uncropped annotation.
    pub fn new(image_id: u64, frame_size: FrameSize, content_area: Option<Circle>) -> Self {
        Self {
            image_id,
            file_name: None,
            frame_size,
            content_area,
            crop: None,
        }
    }

    /// Key identifying the sample this annotation belongs to.
    pub fn key(&self) -> SampleKey {
        SampleKey {
            image_id: self.image_id,
            crop: self.crop,
        }
    }
}

/// Identifies one scored sample: a source image and an optional crop of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SampleKey {
    pub image_id: u64,
    pub crop: Option<CropBox>,
}

/// A set of content-area annotations, either ground truth or predictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    pub annotations: Vec<AreaAnnotation>,
}

impl AnnotationSet {
    /// Create a set from annotations.
    pub fn new(annotations: Vec<AreaAnnotation>) -> Self {
        Self { annotations }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Result of a content-area Hausdorff computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HausdorffScore {
    /// Hausdorff distance, normalised to the reference resolution if requested.
    pub distance: f64,
    /// `(sampled point, closest point on the other boundary)` realising the
    /// distance in frame pixels. `None` when the boundaries coincide.
    pub closest_pair: Option<(Point, Point)>,
}

impl HausdorffScore {
    /// The score of two identical content areas.
    pub const fn zero() -> Self {
        Self {
            distance: 0.0,
            closest_pair: None,
        }
    }
}

/// Score of one prediction against its ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleScore {
    pub key: SampleKey,
    pub distance: f64,
    pub closest_pair: Option<(Point, Point)>,
}

/// Aggregated results of a batch evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Per-sample scores sorted by key.
    pub scores: Vec<SampleScore>,
    /// Mean distance over scored samples
    pub mean_distance: f64,
    /// Median distance over scored samples
    pub median_distance: f64,
    /// Largest distance over scored samples
    pub max_distance: f64,
    /// Fraction of scored samples within each distance threshold
    pub within_thresholds: Vec<(f64, f64)>,
    pub stats: EvaluationStats,
}

impl EvaluationSummary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_serializes_as_array() {
        let circle = Circle::new(240.0, 135.0, 100.0);
        let json = serde_json::to_string(&circle).unwrap();
        assert_eq!(json, "[240.0,135.0,100.0]");

        let back: Circle = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(back, Circle::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_frame_size_is_row_major() {
        let frame: FrameSize = serde_json::from_str("[270, 480]").unwrap();
        assert_eq!(frame.height, 270);
        assert_eq!(frame.width, 480);
        assert!((frame.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_validation() {
        assert!(Circle::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(Circle::new(0.0, 0.0, -1.0).validate().is_err());
        assert!(Circle::new(f64::NAN, 0.0, 1.0).validate().is_err());
        assert!(Circle::new(0.0, 0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_point_rotation() {
        let p = Point::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_crop_box_frame_size() {
        let crop = CropBox::new(10, 20, 110, 70);
        assert_eq!(crop.frame_size(), FrameSize::new(50, 100));
        assert!(crop.fits(FrameSize::new(70, 110)));
        assert!(!crop.fits(FrameSize::new(69, 110)));
    }
}
