//! Widget configuration.
//!
//! `WidgetConfig` collects the tunable settings of the widget: RNG seed,
//! starting connectivity mode, the size range used for randomly sized layers,
//! drawing style and progress timer. It never carries layers or weights; a
//! diagram is always built interactively.
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```
//! use topoviz::{ConnectivityMode, WidgetConfig};
//!
//! let config = WidgetConfig::from_json(r#"{ "seed": 7, "connectivity_mode": "cascade" }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.connectivity_mode, ConnectivityMode::Cascade);
//! assert_eq!(config.style.neuron_radius, 10.0);
//! ```

use crate::progress::ProgressConfig;
use crate::render::RenderStyle;
use crate::{ConnectivityMode, Result, TopovizError};
use serde::{Deserialize, Serialize};

/// Smallest layer produced by a random layer addition.
pub const DEFAULT_LAYER_SIZE_MIN: usize = 2;

/// Largest layer produced by a random layer addition.
pub const DEFAULT_LAYER_SIZE_MAX: usize = 6;

/// Complete widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Version of the configuration format
    pub version: String,

    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Connectivity mode the model starts in
    pub connectivity_mode: ConnectivityMode,

    /// Inclusive size range for `add_random_layer`
    pub layer_size_min: usize,
    pub layer_size_max: usize,

    pub style: RenderStyle,

    pub progress: ProgressConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed: None,
            connectivity_mode: ConnectivityMode::default(),
            layer_size_min: DEFAULT_LAYER_SIZE_MIN,
            layer_size_max: DEFAULT_LAYER_SIZE_MAX,
            style: RenderStyle::default(),
            progress: ProgressConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting connectivity mode.
    pub fn with_mode(mut self, mode: ConnectivityMode) -> Self {
        self.connectivity_mode = mode;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.layer_size_min > self.layer_size_max {
            return Err(TopovizError::InvalidParameter(format!(
                "layer_size_min ({}) must be <= layer_size_max ({})",
                self.layer_size_min, self.layer_size_max
            )));
        }
        if !(self.style.neuron_radius >= 0.0) {
            return Err(TopovizError::InvalidParameter(
                "neuron_radius must be >= 0".to_string(),
            ));
        }
        if !(self.style.max_edge_width >= 0.0) {
            return Err(TopovizError::InvalidParameter(
                "max_edge_width must be >= 0".to_string(),
            ));
        }
        if self.progress.tick_interval_ms == 0 {
            return Err(TopovizError::InvalidParameter(
                "tick_interval_ms must be > 0".to_string(),
            ));
        }
        if !(self.progress.max_step > 0.0) {
            return Err(TopovizError::InvalidParameter(
                "progress max_step must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TopovizError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layer_size_min, 2);
        assert_eq!(config.layer_size_max, 6);
        assert_eq!(config.progress.tick_interval_ms, 100);
    }

    #[test]
    fn test_json_round_trip() {
        let config = WidgetConfig::default()
            .with_seed(42)
            .with_mode(ConnectivityMode::Rbf);

        let json = config.to_json().unwrap();
        let restored = WidgetConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_inverted_size_range_rejected() {
        let err = WidgetConfig::from_json(r#"{ "layer_size_min": 5, "layer_size_max": 3 }"#)
            .unwrap_err();
        assert!(matches!(err, TopovizError::InvalidParameter(_)));
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let config = WidgetConfig::from_json(r#"{ "connectivity_mode": "hopfield" }"#).unwrap();
        assert_eq!(config.connectivity_mode, ConnectivityMode::Feedforward);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = WidgetConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, TopovizError::Config(_)));
    }
}
