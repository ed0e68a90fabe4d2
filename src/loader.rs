//! JSON loading utilities for content-area annotations and evaluation config.

use crate::error::{EcaError, Result};
use crate::evaluator::EvaluationConfig;
use crate::types::AnnotationSet;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a content-area annotation set from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the annotation JSON file
///
/// # Returns
///
/// Returns an `AnnotationSet` containing one annotation per sample.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if an
/// annotation is invalid.
///
/// # Example
///
/// ```no_run
/// use eca_eval::loader::load_from_file;
///
/// let set = load_from_file("ground_truth.json").unwrap();
/// println!("Loaded {} annotations", set.annotations.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AnnotationSet> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let set: AnnotationSet = serde_json::from_reader(reader)?;

    validate_annotations(&set)?;

    Ok(set)
}

/// Load a content-area annotation set from a JSON string.
///
/// Frame sizes are `[height, width]` and circles are `[x, y, radius]`, or
/// `null` when the whole frame is content.
///
/// # Example
///
/// ```
/// use eca_eval::loader::load_from_string;
///
/// let json = r#"{
///     "annotations": [
///         {"image_id": 1, "frame_size": [270, 480], "content_area": [240, 135, 100]},
///         {"image_id": 2, "frame_size": [270, 480], "content_area": null}
///     ]
/// }"#;
/// let set = load_from_string(json).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
pub fn load_from_string(json_str: &str) -> Result<AnnotationSet> {
    let set: AnnotationSet = serde_json::from_str(json_str)?;
    validate_annotations(&set)?;
    Ok(set)
}

/// Load an evaluation config from a JSON file.
///
/// Missing fields take their default values.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<EvaluationConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: EvaluationConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Load an evaluation config from a JSON string.
///
/// # Example
///
/// ```
/// use eca_eval::loader::load_config_from_str;
///
/// let config = load_config_from_str(r#"{"hausdorff": {"point_count": 400}}"#).unwrap();
/// assert_eq!(config.hausdorff.point_count, 400);
/// assert!(config.hausdorff.normalise);
/// ```
pub fn load_config_from_str(json_str: &str) -> Result<EvaluationConfig> {
    let config: EvaluationConfig = serde_json::from_str(json_str)?;
    config.validate()?;
    Ok(config)
}

/// Validate that every annotation describes a well-formed sample.
fn validate_annotations(set: &AnnotationSet) -> Result<()> {
    let mut seen = HashSet::with_capacity(set.len());

    for annotation in &set.annotations {
        let invalid = |err: EcaError| {
            EcaError::InvalidAnnotation(format!(
                "Annotation for image {}: {}",
                annotation.image_id, err
            ))
        };
        annotation.frame_size.validate().map_err(invalid)?;

        if let Some(circle) = &annotation.content_area {
            circle.validate().map_err(invalid)?;
        }

        // A cropped sample's frame is the crop itself.
        if let Some(crop) = &annotation.crop {
            if crop.left >= crop.right || crop.top >= crop.bottom {
                return Err(EcaError::InvalidAnnotation(format!(
                    "Annotation for image {} has an empty crop", annotation.image_id
                )));
            }
            if crop.frame_size() != annotation.frame_size {
                return Err(EcaError::InvalidAnnotation(format!(
                    "Annotation for image {} has frame size {:?} but crop size {:?}",
                    annotation.image_id, annotation.frame_size, crop.frame_size()
                )));
            }
        }

        if !seen.insert(annotation.key()) {
            return Err(EcaError::InvalidAnnotation(format!(
                "Duplicate annotation for image {} (crop {:?})",
                annotation.image_id, annotation.crop
            )));
        }
    }

    Ok(())
}
