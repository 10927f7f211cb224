//! Tests for the cosmetic progress animation.

use rand::SeedableRng;
use topoviz::progress::PROGRESS_MAX;
use topoviz::{ProgressConfig, TrainingProgress};

#[test]
fn test_runs_to_completion() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let mut progress = TrainingProgress::default();

    let mut ticks = 0;
    while !progress.is_finished() {
        progress.tick(&mut rng);
        ticks += 1;
        assert!(ticks < 10_000, "animation never finished");
    }

    // Average step is 1.5, so roughly 67 ticks
    assert!(ticks >= 34);
    assert_eq!(progress.percent(), PROGRESS_MAX);
    assert_eq!(progress.label(), "100%");
    assert_eq!(progress.width_css(), "100%");
}

#[test]
fn test_monotonic_and_clamped() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    let mut progress = TrainingProgress::default();

    let mut prev = 0.0;
    for _ in 0..500 {
        let p = progress.tick(&mut rng);
        assert!(p >= prev);
        assert!(p <= PROGRESS_MAX);
        prev = p;
    }
    assert!(progress.is_finished());
}

#[test]
fn test_ticks_after_finish_are_noops() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let config = ProgressConfig {
        tick_interval_ms: 10,
        max_step: 500.0,
    };
    let mut progress = TrainingProgress::new(&config);

    // One large step is very likely to finish; keep ticking to be sure
    while !progress.is_finished() {
        progress.tick(&mut rng);
    }
    let snapshot = progress.clone();
    progress.tick(&mut rng);
    assert_eq!(progress, snapshot);
}

#[test]
fn test_label_rounds() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2);
    let mut progress = TrainingProgress::default();
    progress.tick(&mut rng);

    let expected = format!("{}%", progress.percent().round() as u32);
    assert_eq!(progress.label(), expected);
    assert!(progress.width_css().ends_with('%'));
}
