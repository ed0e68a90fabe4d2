//! Stress tests over dense grids of circles and a dataset-sized evaluation.

use eca_eval::evaluator::{evaluate, EvaluationConfig};
use eca_eval::hausdorff::{content_area_hausdorff_with, HausdorffOptions};
use eca_eval::types::{AnnotationSet, AreaAnnotation, Circle, FrameSize};

/// Circles centred on a grid inside the frame, with radii from tiny to covering.
fn circle_grid(frame: FrameSize) -> Vec<Option<Circle>> {
    let (w, h) = (f64::from(frame.width), f64::from(frame.height));
    let radii = [0.0, 1.0, h / 4.0, h / 2.0, w / 2.0, frame.diagonal() / 2.0, frame.diagonal()];

    let mut circles = vec![None];
    for i in 0..=4 {
        for j in 0..=4 {
            for &radius in &radii {
                circles.push(Some(Circle::new(w * i as f64 / 4.0, h * j as f64 / 4.0, radius)));
            }
        }
    }
    circles
}

#[test]
fn test_all_pairs_on_grid_are_scored() {
    let options = HausdorffOptions {
        point_count: 50,
        normalise: true,
    };

    for frame in [FrameSize::new(270, 480), FrameSize::new(480, 270), FrameSize::new(100, 100)] {
        let circles = circle_grid(frame);
        let max_distance = frame.diagonal() * eca_eval::hausdorff::normalisation_factor(frame);

        for &a in &circles {
            for &b in &circles {
                let score = content_area_hausdorff_with(a, b, frame, &options)
                    .unwrap_or_else(|err| panic!("{:?} vs {:?} on {:?}: {}", a, b, frame, err));
                assert!(score.distance.is_finite());
                assert!(score.distance >= 0.0);
                assert!(score.distance <= max_distance + 1e-6);
            }
        }
    }
}

#[test]
fn test_large_dataset_evaluation() {
    let frame = FrameSize::new(1080, 1920);
    let count = 2_000u64;

    let ground_truth: Vec<AreaAnnotation> = (0..count)
        .map(|id| {
            let content_area = (id % 5 != 0).then(|| {
                let (dx, dy, dr) = ((id % 17) as f64, (id % 11) as f64, (id % 300) as f64);
                Circle::new(960.0 + dx, 540.0 - dy, 500.0 + dr)
            });
            AreaAnnotation::new(id, frame, content_area)
        })
        .collect();
    let predictions: Vec<AreaAnnotation> = ground_truth
        .iter()
        .map(|truth| {
            let content_area = truth
                .content_area
                .map(|c| Circle::new(c.x + 4.0, c.y - 3.0, c.radius + (truth.image_id % 7) as f64));
            AreaAnnotation::new(truth.image_id, frame, content_area)
        })
        .collect();

    let config = EvaluationConfig {
        include_cropped: true,
        ..EvaluationConfig::default()
    };
    let summary = evaluate(
        &AnnotationSet::new(ground_truth),
        &AnnotationSet::new(predictions),
        &config,
    )
    .unwrap();

    let circular = (count - count / 5) as usize;
    assert_eq!(summary.stats.cropped_samples, circular);
    assert_eq!(summary.stats.scored_samples, count as usize);
    assert_eq!(summary.stats.missing_predictions, circular);
    assert_eq!(summary.stats.failed_scores, 0);
    assert!(summary.scores.windows(2).all(|pair| pair[0].key < pair[1].key));
    assert!(summary.mean_distance.is_finite());
    assert!(summary.max_distance < 100.0);
}
