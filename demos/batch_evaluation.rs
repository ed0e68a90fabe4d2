//! Batch evaluation of predicted content areas against ground truth.
//!
//! Run with `RUST_LOG=eca_eval=info` to see the evaluation statistics.

use eca_eval::{evaluate, load_from_string, loader::load_config_from_str};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ground_truth = load_from_string(
        r#"{
            "annotations": [
                {"image_id": 1, "file_name": "video01/0001.png", "frame_size": [1080, 1920], "content_area": [960, 540, 600]},
                {"image_id": 2, "file_name": "video01/0002.png", "frame_size": [1080, 1920], "content_area": [955, 545, 610]},
                {"image_id": 3, "file_name": "video02/0001.png", "frame_size": [1080, 1920], "content_area": null},
                {"image_id": 4, "file_name": "video03/0001.png", "frame_size": [1080, 1920], "content_area": [960, 540, 1200]}
            ]
        }"#,
    )?;
    let predictions = load_from_string(
        r#"{
            "annotations": [
                {"image_id": 1, "frame_size": [1080, 1920], "content_area": [962, 538, 598]},
                {"image_id": 2, "frame_size": [1080, 1920], "content_area": [940, 550, 640]},
                {"image_id": 3, "frame_size": [1080, 1920], "content_area": [960, 540, 700]},
                {"image_id": 4, "frame_size": [1080, 1920], "content_area": null}
            ]
        }"#,
    )?;
    let config = load_config_from_str(
        r#"{
            "hausdorff": {"point_count": 200},
            "distance_thresholds": [5.0, 10.0, 25.0, 50.0]
        }"#,
    )?;

    println!("=== Content-Area Evaluation ===\n");
    let summary = evaluate(&ground_truth, &predictions, &config)?;

    println!("Per-sample distances:");
    for score in &summary.scores {
        println!("   image {:>3}: {:>8.2}", score.key.image_id, score.distance);
    }
    println!();

    println!("Mean:   {:.2}", summary.mean_distance);
    println!("Median: {:.2}", summary.median_distance);
    println!("Max:    {:.2}", summary.max_distance);
    println!();

    println!("Fraction within threshold:");
    for (threshold, rate) in &summary.within_thresholds {
        println!("   <= {:>5.1}: {:.1}%", threshold, rate * 100.0);
    }
    println!();

    println!("{}", summary.stats.summary_string());

    Ok(())
}
