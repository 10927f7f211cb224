//! TrainingProgress - cosmetic progress-bar animation.
//!
//! Purely decorative: it shares no state with the topology model and no
//! training happens. The host calls [`TrainingProgress::tick`] on a periodic
//! timer (every `tick_interval_ms`); each tick advances the bar by a random
//! amount in `[0, max_step)` until it reaches 100, after which it is finished
//! and further ticks do nothing.
//!
//! # Examples
//!
//! ```
//! use topoviz::progress::{ProgressConfig, TrainingProgress};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let mut progress = TrainingProgress::new(&ProgressConfig::default());
//!
//! while !progress.is_finished() {
//!     progress.tick(&mut rng);
//! }
//! assert_eq!(progress.label(), "100%");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Completion value at which the animation stops.
pub const PROGRESS_MAX: f64 = 100.0;

/// Timer settings for the progress animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Host timer period between ticks
    pub tick_interval_ms: u32,
    /// Upper bound (exclusive) of the per-tick advance
    pub max_step: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            max_step: 3.0,
        }
    }
}

/// State of one progress-bar run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingProgress {
    percent: f64,
    max_step: f64,
    finished: bool,
}

impl TrainingProgress {
    /// Start a new run at 0%.
    ///
    /// A `max_step` that is not positive would never finish; the default step
    /// is used instead.
    pub fn new(config: &ProgressConfig) -> Self {
        let max_step = if config.max_step > 0.0 && config.max_step.is_finite() {
            config.max_step
        } else {
            log::warn!("invalid progress max_step {}, using default", config.max_step);
            ProgressConfig::default().max_step
        };

        Self {
            percent: 0.0,
            max_step,
            finished: false,
        }
    }

    /// Advance by `uniform(0, 1) * max_step`, clamping at 100.
    ///
    /// Returns the new percentage. No-op once finished.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> f64 {
        if self.finished {
            return self.percent;
        }

        self.percent += rng.gen::<f64>() * self.max_step;
        if self.percent >= PROGRESS_MAX {
            self.percent = PROGRESS_MAX;
            self.finished = true;
            log::debug!("progress animation finished");
        }

        self.percent
    }

    /// Restart from 0%.
    pub fn reset(&mut self) {
        self.percent = 0.0;
        self.finished = false;
    }

    #[inline]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Bar width as a CSS percentage, unrounded.
    pub fn width_css(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Text label, rounded to a whole percent.
    pub fn label(&self) -> String {
        format!("{}%", self.percent.round() as u32)
    }
}

impl Default for TrainingProgress {
    fn default() -> Self {
        Self::new(&ProgressConfig::default())
    }
}
