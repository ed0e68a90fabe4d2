//! Boundary geometry of content areas.

pub mod segment;
pub mod polygon;
pub mod sampling;
pub mod nearest;

pub use segment::{Arc, FullCircle, Line, Segment};
pub use polygon::{build_boundary, Boundary};
pub use sampling::sample_boundary;
pub use nearest::{nearest_point, NearestPoint};
