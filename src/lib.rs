//! Topoviz - Interactive Layered Network-Topology Diagrams
//!
//! Topoviz models a layered neural-network diagram that a user builds one
//! layer at a time, derives its connections under one of three connectivity
//! patterns, and renders it as a list of primitive draw commands. Edge
//! weights are random noise that only modulate line opacity and width; there
//! is no training, inference or persistence.
//!
//! # Architecture
//!
//! - **TopologyModel**: layers, derived edges and connectivity mode
//! - **Connectivity**: feedforward, cascade and RBF edge generation
//! - **Render**: layout formula and backend-neutral `DrawCommand`s
//! - **TrainingProgress**: cosmetic progress-bar animation
//! - **wasm_interface** (feature `wasm`): canvas-backed browser widget
//!
//! # Examples
//!
//! ```
//! use topoviz::{ConnectivityMode, DrawCommand, TopologyModel};
//!
//! let mut model = TopologyModel::with_seed(42);
//! model.add_default_layers(); // [3, 4, 2]
//! model.set_connectivity_mode(ConnectivityMode::Rbf);
//! assert_eq!(model.edges().len(), 3 * 4 + 4 * 2);
//!
//! let commands = model.render(800.0, 600.0);
//! let circles = commands
//!     .iter()
//!     .filter(|c| matches!(c, DrawCommand::Circle { .. }))
//!     .count();
//! assert_eq!(circles, 9);
//! ```

// Module declarations
pub mod config;
pub mod connectivity;
pub mod error;
pub mod layer;
pub mod model;
pub mod progress;
pub mod render;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm_interface;

// Re-exports for convenient access
pub use config::WidgetConfig;
pub use connectivity::{ConnectivityMode, Edge, NeuronRef};
pub use error::{Result, TopovizError};
pub use layer::Layer;
pub use model::{TopologyModel, DEFAULT_LAYERS};
pub use progress::{ProgressConfig, TrainingProgress};
pub use render::{DrawCommand, DrawSurface, Point, RenderStyle, Rgba};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Topoviz";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
