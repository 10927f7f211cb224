//! Render - maps layers and edges to backend-neutral draw commands.
//!
//! Layers are spaced evenly across the surface width and neurons evenly down
//! the height, with a margin on every side:
//!
//! - layer `i` of `L`: `x = (i + 1) * W / (L + 1)`
//! - neuron `k` of `n`: `y = (k + 1) * H / (n + 1)`
//!
//! Edges are emitted first as straight lines whose alpha is `|weight|` and
//! whose width is `|weight| * 2`, so near-zero weights are almost invisible.
//! Neuron circles follow, so they sit on top of the lines.
//!
//! Rendering reads the model and never regenerates weights: the same state and
//! the same dimensions always produce the same command list.

use crate::connectivity::{Edge, NeuronRef};
use crate::Layer;
use serde::{Deserialize, Serialize};

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Stroke colour with alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// CSS `rgba(...)` string, e.g. `rgba(52, 152, 219, 0.5)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One primitive drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    /// Straight stroked line
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    /// Filled and outlined circle
    Circle {
        center: Point,
        radius: f64,
        fill: String,
        stroke: String,
    },
}

/// Colours and sizes used by [`render`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Edge colour; alpha comes from the edge weight
    pub edge_rgb: [u8; 3],
    /// Width of an edge with |weight| = 1
    pub max_edge_width: f64,
    pub neuron_radius: f64,
    pub neuron_fill: String,
    pub neuron_stroke: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            edge_rgb: [52, 152, 219],
            max_edge_width: 2.0,
            neuron_radius: 10.0,
            neuron_fill: "#e74c3c".to_string(),
            neuron_stroke: "#c0392b".to_string(),
        }
    }
}

/// Horizontal centre of layer `layer` out of `num_layers`.
#[inline]
pub fn layer_x(layer: usize, num_layers: usize, width: f64) -> f64 {
    (layer + 1) as f64 * (width / (num_layers + 1) as f64)
}

/// Vertical centre of neuron `neuron` in a layer of `num_neurons`.
#[inline]
pub fn neuron_y(neuron: usize, num_neurons: usize, height: f64) -> f64 {
    (neuron + 1) as f64 * (height / (num_neurons + 1) as f64)
}

/// Surface position of a neuron, or `None` if `at.layer` is not in `layers`.
pub fn neuron_position(layers: &[Layer], at: NeuronRef, width: f64, height: f64) -> Option<Point> {
    let layer = layers.get(at.layer)?;
    Some(Point {
        x: layer_x(at.layer, layers.len(), width),
        y: neuron_y(at.neuron, layer.neuron_count(), height),
    })
}

/// Produce the full draw list: every edge line, then every neuron circle.
///
/// Edges whose endpoints name a layer outside `layers` are skipped.
///
/// # Examples
///
/// ```
/// use topoviz::render::{render, DrawCommand, RenderStyle};
/// use topoviz::Layer;
///
/// let layers = vec![Layer::new(1)];
/// let cmds = render(&layers, &[], &RenderStyle::default(), 200.0, 100.0);
///
/// match &cmds[0] {
///     DrawCommand::Circle { center, radius, .. } => {
///         assert_eq!((center.x, center.y), (100.0, 50.0));
///         assert_eq!(*radius, 10.0);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn render(
    layers: &[Layer],
    edges: &[Edge],
    style: &RenderStyle,
    width: f64,
    height: f64,
) -> Vec<DrawCommand> {
    let num_neurons: usize = layers.iter().map(Layer::neuron_count).sum();
    let mut commands = Vec::with_capacity(edges.len() + num_neurons);

    let [r, g, b] = style.edge_rgb;
    for edge in edges {
        let (Some(from), Some(to)) = (
            neuron_position(layers, edge.source, width, height),
            neuron_position(layers, edge.target, width, height),
        ) else {
            log::warn!("skipping edge outside the layer sequence: {:?}", edge);
            continue;
        };
        let strength = edge.weight.abs();
        commands.push(DrawCommand::Line {
            from,
            to,
            color: Rgba { r, g, b, a: strength },
            width: strength * style.max_edge_width,
        });
    }

    for (layer_idx, layer) in layers.iter().enumerate() {
        for neuron in 0..layer.neuron_count() {
            commands.push(DrawCommand::Circle {
                center: Point {
                    x: layer_x(layer_idx, layers.len(), width),
                    y: neuron_y(neuron, layer.neuron_count(), height),
                },
                radius: style.neuron_radius,
                fill: style.neuron_fill.clone(),
                stroke: style.neuron_stroke.clone(),
            });
        }
    }

    log::trace!(
        "rendered {} commands at {}x{}",
        commands.len(),
        width,
        height
    );
    commands
}

/// Drawing backend that draw commands are replayed onto.
pub trait DrawSurface {
    /// Current (width, height) of the surface.
    fn size(&self) -> (f64, f64);

    /// Erase everything on the surface.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, color: &Rgba, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &str);
}

/// Issue `commands` against `surface` in order.
pub fn replay<S: DrawSurface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match command {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => surface.stroke_line(*from, *to, color, *width),
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => surface.fill_circle(*center, *radius, fill, stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layer_x_margins() {
        assert_relative_eq!(layer_x(0, 3, 400.0), 100.0);
        assert_relative_eq!(layer_x(2, 3, 400.0), 300.0);
    }

    #[test]
    fn test_neuron_y_margins() {
        assert_relative_eq!(neuron_y(0, 4, 500.0), 100.0);
        assert_relative_eq!(neuron_y(3, 4, 500.0), 400.0);
    }

    #[test]
    fn test_rgba_css() {
        let c = Rgba {
            r: 52,
            g: 152,
            b: 219,
            a: 0.5,
        };
        assert_eq!(c.to_css(), "rgba(52, 152, 219, 0.5)");
    }

    #[test]
    fn test_edge_styling_follows_weight() {
        let layers = vec![Layer::new(1), Layer::new(1)];
        let edges = vec![Edge {
            source: NeuronRef::new(0, 0),
            target: NeuronRef::new(1, 0),
            weight: -0.25,
        }];

        let cmds = render(&layers, &edges, &RenderStyle::default(), 300.0, 300.0);
        assert_eq!(cmds.len(), 3);

        match &cmds[0] {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                assert_relative_eq!(from.x, 100.0);
                assert_relative_eq!(to.x, 200.0);
                assert_relative_eq!(from.y, 150.0);
                assert_relative_eq!(color.a, 0.25);
                assert_relative_eq!(*width, 0.5);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_model_renders_nothing() {
        assert!(render(&[], &[], &RenderStyle::default(), 640.0, 480.0).is_empty());
    }
}
