//! TopologyModel - the layered diagram and its derived edge list.
//!
//! The model owns three pieces of state: the layer sequence, the edge list and
//! the connectivity mode. The edge list is derived: every layer addition and
//! every mode change discards it and rebuilds it from scratch with fresh random
//! weights. Layers and edges are identified only by position, so any index a
//! caller holds goes stale after a mutation and must be re-read.
//!
//! Mutations raise a redraw request that the host collects with
//! [`TopologyModel::take_redraw_request`] before calling
//! [`TopologyModel::render`] or [`TopologyModel::draw_to`].
//!
//! # Examples
//!
//! ```
//! use topoviz::{ConnectivityMode, TopologyModel};
//!
//! let mut model = TopologyModel::with_seed(42);
//! model.add_layer(3);
//! model.add_layer(4);
//! model.add_layer(2);
//! assert_eq!(model.edges().len(), 3 * 4 + 4 * 2);
//!
//! model.set_connectivity_mode(ConnectivityMode::Cascade);
//! assert_eq!(model.edges().len(), 3 * 4 + 3 * 2 + 4 * 2);
//!
//! // Unknown names fall back to feedforward
//! model.set_connectivity_mode("hopfield");
//! assert_eq!(model.connectivity_mode(), ConnectivityMode::Feedforward);
//! ```

use crate::config::WidgetConfig;
use crate::connectivity::{generate_edges, Edge};
use crate::render::{self, DrawCommand, DrawSurface, RenderStyle};
use crate::utils::rand_size;
use crate::{ConnectivityMode, Layer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Startup diagram: input, one hidden layer, output.
pub const DEFAULT_LAYERS: [usize; 3] = [3, 4, 2];

/// Layered diagram with derived, randomly weighted edges.
#[derive(Debug, Clone)]
pub struct TopologyModel {
    layers: Vec<Layer>,
    edges: Vec<Edge>,
    mode: ConnectivityMode,

    rng: StdRng,
    style: RenderStyle,
    layer_size_range: (usize, usize),
    redraw_pending: bool,
}

impl TopologyModel {
    /// Create an empty model seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), &WidgetConfig::default())
    }

    /// Create an empty model with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), &WidgetConfig::default())
    }

    /// Create an empty model from widget configuration.
    ///
    /// The configuration's connectivity mode is applied up front; no layers are
    /// added. An inverted random-layer size range is reordered rather than
    /// rejected.
    pub fn from_config(config: &WidgetConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config)
    }

    /// Create the startup diagram `[3, 4, 2]` seeded from entropy.
    pub fn with_default_layers() -> Self {
        let mut model = Self::new();
        model.add_default_layers();
        model
    }

    fn with_rng(rng: StdRng, config: &WidgetConfig) -> Self {
        let (min, max) = (config.layer_size_min, config.layer_size_max);
        Self {
            layers: Vec::new(),
            edges: Vec::new(),
            mode: config.connectivity_mode,
            rng,
            style: config.style.clone(),
            layer_size_range: (min.min(max), min.max(max)),
            redraw_pending: false,
        }
    }

    /// Append the startup layers `[3, 4, 2]`.
    pub fn add_default_layers(&mut self) {
        for &count in DEFAULT_LAYERS.iter() {
            self.add_layer(count);
        }
    }

    /// Select the connectivity mode and rebuild all edges.
    ///
    /// Accepts a `ConnectivityMode` or a mode name; unknown names select
    /// feedforward. Rebuilds even when the mode is unchanged.
    pub fn set_connectivity_mode<M: Into<ConnectivityMode>>(&mut self, mode: M) {
        self.mode = mode.into();
        self.recompute_edges();
    }

    /// Append a layer of `neuron_count` neurons and rebuild all edges.
    ///
    /// Zero is accepted and produces an empty layer.
    pub fn add_layer(&mut self, neuron_count: usize) {
        if neuron_count == 0 {
            log::debug!("adding empty layer at index {}", self.layers.len());
        }
        self.layers.push(Layer::new(neuron_count));
        self.recompute_edges();
    }

    /// Append a layer with a random size from the configured range.
    ///
    /// Returns the chosen size.
    pub fn add_random_layer(&mut self) -> usize {
        let (min, max) = self.layer_size_range;
        let count = rand_size(min, max, &mut self.rng);
        self.add_layer(count);
        count
    }

    fn recompute_edges(&mut self) {
        self.edges = generate_edges(&self.layers, self.mode, &mut self.rng);
        self.redraw_pending = true;

        log::debug!(
            "recomputed {} edges for {} layers ({})",
            self.edges.len(),
            self.layers.len(),
            self.mode
        );
    }

    /// Current layers, in order.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Current edges, in generation order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn connectivity_mode(&self) -> ConnectivityMode {
        self.mode
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// One line per layer for the layer-list display.
    ///
    /// ```
    /// let mut model = topoviz::TopologyModel::with_seed(0);
    /// model.add_layer(3);
    /// assert_eq!(model.layer_summary(), vec!["Layer 1: 3 neurons".to_string()]);
    /// ```
    pub fn layer_summary(&self) -> Vec<String> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| format!("Layer {}: {} neurons", i + 1, layer.neuron_count()))
            .collect()
    }

    /// True if a mutation happened since the last `take_redraw_request`.
    #[inline]
    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Collect and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Draw commands for a `width` x `height` surface.
    ///
    /// Pure: weights are not regenerated and no state changes.
    pub fn render(&self, width: f64, height: f64) -> Vec<DrawCommand> {
        render::render(&self.layers, &self.edges, &self.style, width, height)
    }

    /// Clear `surface` and draw the diagram at its current size.
    ///
    /// Call again after the surface is resized to re-lay out the same edges.
    pub fn draw_to<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let (width, height) = surface.size();
        surface.clear();
        render::replay(&self.render(width, height), surface);
    }
}

impl Default for TopologyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_empty() {
        let model = TopologyModel::with_seed(0);
        assert!(model.layers().is_empty());
        assert!(model.edges().is_empty());
        assert_eq!(model.connectivity_mode(), ConnectivityMode::Feedforward);
        assert!(!model.redraw_pending());
    }

    #[test]
    fn test_default_layers() {
        let model = TopologyModel::with_default_layers();
        let sizes: Vec<usize> = model.layers().iter().map(Layer::neuron_count).collect();
        assert_eq!(sizes, vec![3, 4, 2]);
        assert_eq!(model.edges().len(), 20);
    }

    #[test]
    fn test_redraw_request_cycle() {
        let mut model = TopologyModel::with_seed(0);
        model.add_layer(2);
        assert!(model.take_redraw_request());
        assert!(!model.take_redraw_request());

        model.set_connectivity_mode(ConnectivityMode::Rbf);
        assert!(model.redraw_pending());
    }

    #[test]
    fn test_mode_change_regenerates_weights() {
        let mut model = TopologyModel::with_seed(9);
        model.add_layer(3);
        model.add_layer(3);
        let before: Vec<f64> = model.edges().iter().map(|e| e.weight).collect();

        model.set_connectivity_mode(ConnectivityMode::Feedforward);
        let after: Vec<f64> = model.edges().iter().map(|e| e.weight).collect();

        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
    }

    #[test]
    fn test_random_layer_in_range() {
        let mut model = TopologyModel::with_seed(5);
        for _ in 0..20 {
            let n = model.add_random_layer();
            assert!((2..=6).contains(&n));
        }
        assert_eq!(model.num_layers(), 20);
    }

    #[test]
    fn test_from_config_applies_mode() {
        let config = WidgetConfig::default()
            .with_seed(1)
            .with_mode(ConnectivityMode::Cascade);
        let mut model = TopologyModel::from_config(&config);
        model.add_default_layers();
        assert_eq!(model.edges().len(), 26);
    }
}
