//! Basic scoring example demonstrating core functionality.

use eca_eval::{
    calculate_optimal_crop,
    content_area_hausdorff, content_area_hausdorff_with,
    geometry::{build_boundary, sample_boundary, Segment},
    Circle, FrameSize, HausdorffOptions,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Content-Area Scoring Example ===\n");

    let frame = FrameSize::new(270, 480);

    // Example 1: Boundary of a clipped content area
    println!("1. Boundary Construction");
    let circle = Circle::new(240.0, 135.0, 200.0);
    let boundary = build_boundary(frame, Some(circle))?;
    for segment in &boundary {
        let kind = match segment {
            Segment::Line(_) => "line",
            Segment::Arc(_) => "arc",
            Segment::FullCircle(_) => "full circle",
        };
        println!("   {:<11} length {:>8.2}", kind, segment.length());
    }
    let samples = sample_boundary(&boundary, 100)?;
    println!("   {} sample points along {:.2} pixels", samples.len(), boundary.total_length());
    println!();

    // Example 2: Raw and normalised distances
    println!("2. Hausdorff Distance");
    let truth = Some(Circle::new(240.0, 135.0, 100.0));
    let predicted = Some(Circle::new(250.0, 135.0, 110.0));
    let raw = HausdorffOptions {
        normalise: false,
        ..HausdorffOptions::default()
    };
    let raw_score = content_area_hausdorff_with(truth, predicted, frame, &raw)?;
    let score = content_area_hausdorff(truth, predicted, frame)?;
    println!("   Raw distance:        {:.2} px", raw_score.distance);
    println!("   Normalised distance: {:.2} px at 1080x1920", score.distance);
    if let Some((sampled, closest)) = score.closest_pair {
        println!(
            "   Realised between ({:.1}, {:.1}) and ({:.1}, {:.1})",
            sampled.x, sampled.y, closest.x, closest.y
        );
    }
    println!();

    // Example 3: Whole frame against a circle
    println!("3. Whole Frame vs Circle");
    let score = content_area_hausdorff(None, Some(Circle::new(135.0, 240.0, 200.0)), frame)?;
    println!("   Normalised distance: {:.2}", score.distance);
    println!();

    // Example 4: Optimal crop
    println!("4. Optimal Crop");
    let crop = calculate_optimal_crop(&Circle::new(240.0, 135.0, 100.0), frame)?;
    let cropped = crop.frame_size();
    println!(
        "   Crop ({}, {}) to ({}, {}), {}x{} pixels",
        crop.left, crop.top, crop.right, crop.bottom, cropped.height, cropped.width
    );

    Ok(())
}
