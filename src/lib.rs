//! # eca-eval
//!
//! A Rust library for scoring endoscopic content-area (ECA) annotations.
//!
//! A content area is the part of a video frame that holds valid image data:
//! the frame rectangle, optionally clipped by the circular field of view of
//! the endoscope. This library compares a predicted content area with the
//! ground truth using a symmetric Hausdorff distance between their boundaries:
//!
//! - **Boundary construction**: frame edges and circle arcs meeting where the
//!   circle crosses the frame
//! - **Sampling**: points along the boundary, subdividing only curved pieces
//! - **Hausdorff distance**: largest nearest-point distance in either direction
//! - **Normalisation**: distances scaled to a 1080x1920 reference frame
//!
//! ## Features
//!
//! - Exact arc/line nearest-point queries, no rasterisation
//! - Load ground truth and predictions from JSON
//! - Derive the optimal crop of a circular content area
//! - Evaluate whole datasets in parallel with summary statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use eca_eval::hausdorff::content_area_hausdorff;
//! use eca_eval::types::{Circle, FrameSize};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Frame sizes are (height, width); circles are (x, y, radius)
//! let frame = FrameSize::new(1080, 1920);
//! let truth = Some(Circle::new(960.0, 540.0, 600.0));
//! let predicted = Some(Circle::new(980.0, 540.0, 590.0));
//!
//! let score = content_area_hausdorff(truth, predicted, frame)?;
//! println!("Hausdorff distance: {:.2}", score.distance);
//!
//! // No circle means the whole frame is content
//! let score = content_area_hausdorff(None, predicted, frame)?;
//! assert!(score.distance > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Annotation Format
//!
//! ```json
//! {
//!   "annotations": [
//!     {
//!       "image_id": 1,
//!       "file_name": "frame_0001.png",
//!       "frame_size": [1080, 1920],
//!       "content_area": [960, 540, 600]
//!     },
//!     {
//!       "image_id": 2,
//!       "frame_size": [1080, 1920],
//!       "content_area": null
//!     }
//!   ]
//! }
//! ```

pub mod error;
pub mod types;
pub mod geometry;
pub mod hausdorff;
pub mod crop;
pub mod loader;
pub mod threshold;
pub mod stats;
pub mod evaluator;

// Re-export commonly used types and functions
pub use error::{EcaError, Result};
pub use types::{
    AnnotationSet, AreaAnnotation, Circle, CropBox, EvaluationSummary, FrameSize,
    HausdorffScore, Point, SampleKey, SampleScore,
};
pub use hausdorff::{content_area_hausdorff, content_area_hausdorff_with, HausdorffOptions};
pub use loader::{load_from_file, load_from_string};
pub use evaluator::{evaluate, EvaluationConfig};
pub use crop::calculate_optimal_crop;
