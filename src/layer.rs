//! Layer - one column of neurons in the diagram.

use serde::Serialize;

/// An ordered group of neurons at one depth of the diagram.
///
/// `outputs` holds one zeroed placeholder per neuron. Nothing in the crate
/// reads or updates it; it is carried as inert per-neuron state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    neuron_count: usize,
    outputs: Vec<f64>,
}

impl Layer {
    /// Create a layer with `neuron_count` neurons.
    ///
    /// A count of zero is accepted and yields an empty layer that contributes
    /// no edges and no circles.
    pub fn new(neuron_count: usize) -> Self {
        Self {
            neuron_count,
            outputs: vec![0.0; neuron_count],
        }
    }

    /// Number of neurons in this layer.
    #[inline]
    pub fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    /// Per-neuron output placeholders (always zero).
    #[inline]
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// True when the layer has no neurons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neuron_count == 0
    }
}
