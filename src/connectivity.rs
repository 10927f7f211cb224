//! Connectivity - edge generation for the three diagram topologies.
//!
//! Every recomputation starts from an empty edge list and rebuilds it from the
//! current layer sequence. Each edge receives an independent random weight in
//! [-1, 1], so rebuilding an unchanged topology still produces new weights.
//!
//! # Modes
//!
//! - **Feedforward**: every neuron in layer `i` to every neuron in layer `i + 1`
//! - **Cascade**: every neuron in layer `i` to every neuron in every layer `j > i`
//! - **Rbf**: input layer to every hidden layer, every hidden layer to the
//!   output layer; no direct input-output or hidden-hidden edges
//!
//! # Examples
//!
//! ```
//! use topoviz::{connectivity::generate_edges, ConnectivityMode, Layer};
//! use rand::SeedableRng;
//!
//! let layers = vec![Layer::new(3), Layer::new(4), Layer::new(2)];
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//!
//! let edges = generate_edges(&layers, ConnectivityMode::Cascade, &mut rng);
//! assert_eq!(edges.len(), 3 * 4 + 3 * 2 + 4 * 2);
//! ```

use crate::utils::random_weight;
use crate::Layer;
use itertools::{iproduct, Itertools};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm choice governing which neuron pairs receive an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ConnectivityMode {
    /// Adjacent layers only
    #[default]
    Feedforward,
    /// Every layer to every later layer
    Cascade,
    /// Input to hidden, hidden to output
    Rbf,
}

impl ConnectivityMode {
    /// Parse a host-supplied mode name.
    ///
    /// Never fails: any name other than `"cascade"` or `"rbf"` selects
    /// `Feedforward`.
    ///
    /// ```
    /// use topoviz::ConnectivityMode;
    ///
    /// assert_eq!(ConnectivityMode::from_name("rbf"), ConnectivityMode::Rbf);
    /// assert_eq!(ConnectivityMode::from_name("hopfield"), ConnectivityMode::Feedforward);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "feedforward" => ConnectivityMode::Feedforward,
            "cascade" => ConnectivityMode::Cascade,
            "rbf" => ConnectivityMode::Rbf,
            other => {
                log::warn!("unknown connectivity mode '{}', using feedforward", other);
                ConnectivityMode::Feedforward
            }
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectivityMode::Feedforward => "feedforward",
            ConnectivityMode::Cascade => "cascade",
            ConnectivityMode::Rbf => "rbf",
        }
    }
}

impl From<&str> for ConnectivityMode {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ConnectivityMode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for ConnectivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a neuron: layer index and index within the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NeuronRef {
    pub layer: usize,
    pub neuron: usize,
}

impl NeuronRef {
    #[inline]
    pub fn new(layer: usize, neuron: usize) -> Self {
        Self { layer, neuron }
    }
}

/// Directed, weighted connection between two neurons in different layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: NeuronRef,
    pub target: NeuronRef,
    /// Uniform in [-1, 1]; only modulates stroke alpha and width
    pub weight: f64,
}

/// Build the full edge list for `layers` under `mode`.
///
/// Returns an empty list when there are fewer than two layers, whatever the
/// mode.
pub fn generate_edges<R: Rng>(layers: &[Layer], mode: ConnectivityMode, rng: &mut R) -> Vec<Edge> {
    let mut edges = Vec::new();

    match mode {
        ConnectivityMode::Cascade => connect_cascade(layers, rng, &mut edges),
        ConnectivityMode::Rbf => connect_rbf(layers, rng, &mut edges),
        ConnectivityMode::Feedforward => connect_feedforward(layers, rng, &mut edges),
    }

    edges
}

/// Number of edges `generate_edges` would produce, without drawing weights.
pub fn expected_edge_count(layers: &[Layer], mode: ConnectivityMode) -> usize {
    let size = |i: usize| layers[i].neuron_count();

    match mode {
        ConnectivityMode::Feedforward => (0..layers.len())
            .tuple_windows()
            .map(|(i, j)| size(i) * size(j))
            .sum(),
        ConnectivityMode::Cascade => (0..layers.len())
            .tuple_combinations()
            .map(|(i, j)| size(i) * size(j))
            .sum(),
        ConnectivityMode::Rbf => {
            if layers.len() < 3 {
                return 0;
            }
            let last = layers.len() - 1;
            (1..last)
                .map(|h| size(0) * size(h) + size(h) * size(last))
                .sum()
        }
    }
}

fn connect_feedforward<R: Rng>(layers: &[Layer], rng: &mut R, edges: &mut Vec<Edge>) {
    for (from, to) in (0..layers.len()).tuple_windows() {
        connect_all(layers, from, to, rng, edges);
    }
}

fn connect_cascade<R: Rng>(layers: &[Layer], rng: &mut R, edges: &mut Vec<Edge>) {
    for (from, to) in (0..layers.len()).tuple_combinations() {
        connect_all(layers, from, to, rng, edges);
    }
}

fn connect_rbf<R: Rng>(layers: &[Layer], rng: &mut R, edges: &mut Vec<Edge>) {
    // Needs an input, an output and at least one hidden layer in between
    if layers.len() < 3 {
        return;
    }
    let output = layers.len() - 1;

    for hidden in 1..output {
        connect_all(layers, 0, hidden, rng, edges);
    }
    for hidden in 1..output {
        connect_all(layers, hidden, output, rng, edges);
    }
}

/// Append an all-to-all block from layer `from` to layer `to`.
fn connect_all<R: Rng>(layers: &[Layer], from: usize, to: usize, rng: &mut R, edges: &mut Vec<Edge>) {
    let sources = layers[from].neuron_count();
    let targets = layers[to].neuron_count();

    edges.extend(iproduct!(0..sources, 0..targets).map(|(i, j)| Edge {
        source: NeuronRef::new(from, i),
        target: NeuronRef::new(to, j),
        weight: random_weight(rng),
    }));
}
