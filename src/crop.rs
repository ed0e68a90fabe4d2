//! Crops that remove everything outside a circular content area.
//!
//! A cropped sample is the largest frame-aspect rectangle inside the circle;
//! its content area is the whole (cropped) frame.

use crate::error::{EcaError, Result};
use crate::types::{AnnotationSet, AreaAnnotation, Circle, CropBox, FrameSize, SampleKey};

/// Safety margin in pixels kept between the crop and the circle.
pub const CROP_MARGIN: f64 = 2.0;

/// Calculate the largest crop with the frame's aspect ratio that fits inside
/// `circle` (shrunk by [`CROP_MARGIN`]) and inside the frame.
///
/// # Errors
///
/// Returns an error if the frame or circle is malformed, or if no crop of at
/// least one pixel fits.
///
/// # Example
///
/// ```
/// use eca_eval::crop::calculate_optimal_crop;
/// use eca_eval::types::{Circle, CropBox, FrameSize};
///
/// let circle = Circle::new(240.0, 135.0, 100.0);
/// let crop = calculate_optimal_crop(&circle, FrameSize::new(270, 480)).unwrap();
/// assert_eq!(crop, CropBox::new(155, 87, 325, 183));
/// ```
pub fn calculate_optimal_crop(circle: &Circle, frame: FrameSize) -> Result<CropBox> {
    frame.validate()?;
    circle.validate()?;

    let (frame_width, frame_height) = (f64::from(frame.width), f64::from(frame.height));
    let aspect_ratio = frame.aspect_ratio();

    // Rectangle of the frame's aspect ratio inscribed in the shrunk circle.
    let inscribed_height =
        2.0 * (circle.radius - CROP_MARGIN) / (1.0 + aspect_ratio * aspect_ratio).sqrt();
    let inscribed_width = inscribed_height * aspect_ratio;

    let left = (circle.x - inscribed_width / 2.0).max(0.0);
    let right = (circle.x + inscribed_width / 2.0).min(frame_width);
    let top = (circle.y - inscribed_height / 2.0).max(0.0);
    let bottom = (circle.y + inscribed_height / 2.0).min(frame_height);

    // Largest width whose aspect-correct height still fits the clamped box.
    let scale = (right - left).min((bottom - top) * aspect_ratio);
    let width = scale.floor();
    let height = (scale / aspect_ratio).floor();
    if width < 1.0 || height < 1.0 {
        return Err(EcaError::InvalidCrop(format!(
            "no crop fits inside circle ({}, {}, {}) on a {}x{} frame",
            circle.x, circle.y, circle.radius, frame.height, frame.width
        )));
    }

    let x = (left + (right - left) / 2.0 - width / 2.0).trunc();
    let y = (top + (bottom - top) / 2.0 - height / 2.0).trunc();

    let crop = CropBox::new(x as u32, y as u32, (x + width) as u32, (y + height) as u32);
    if !crop.fits(frame) {
        return Err(EcaError::InvalidCrop(format!(
            "crop {:?} does not fit the {}x{} frame",
            crop, frame.height, frame.width
        )));
    }

    Ok(crop)
}

/// Derive the cropped sample of a circular annotation.
///
/// Returns `None` for annotations without a circle or that are already
/// cropped. The cropped sample has the crop's frame size and no circle, since
/// the whole crop is content.
pub fn cropped_annotation(annotation: &AreaAnnotation) -> Result<Option<AreaAnnotation>> {
    if annotation.crop.is_some() {
        return Ok(None);
    }
    let Some(circle) = annotation.content_area else {
        return Ok(None);
    };

    let crop = calculate_optimal_crop(&circle, annotation.frame_size)?;
    Ok(Some(AreaAnnotation {
        image_id: annotation.image_id,
        file_name: annotation.file_name.clone(),
        frame_size: crop.frame_size(),
        content_area: None,
        crop: Some(crop),
    }))
}

/// Return every annotation of `set`, each circular one followed by its
/// cropped sample.
///
/// Circles too small to hold a crop keep their annotation but get no cropped
/// sample. Their keys and errors are returned alongside the expanded set.
pub fn with_cropped_variants(set: &AnnotationSet) -> (AnnotationSet, Vec<(SampleKey, EcaError)>) {
    let mut annotations = Vec::with_capacity(set.len() * 2);
    let mut uncroppable = Vec::new();
    for annotation in &set.annotations {
        annotations.push(annotation.clone());
        match cropped_annotation(annotation) {
            Ok(Some(cropped)) => annotations.push(cropped),
            Ok(None) => {}
            Err(err) => uncroppable.push((annotation.key(), err)),
        }
    }
    (AnnotationSet::new(annotations), uncroppable)
}
