//! WebAssembly interface for running the topology widget in the browser.
//!
//! This module provides JavaScript-friendly bindings around [`TopologyModel`]
//! and [`TrainingProgress`], plus a [`CanvasSurface`] that replays draw
//! commands onto an HTML canvas. DOM event wiring stays in the host page: its
//! handlers call these methods, and every mutation redraws the attached canvas.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::render::{DrawSurface, Point, Rgba};
use crate::{TopologyModel, TopovizError, TrainingProgress, WidgetConfig};

fn to_js(err: TopovizError) -> JsValue {
    let msg = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&msg));
    JsValue::from_str(&msg)
}

fn element_by_id(id: &str) -> crate::Result<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| TopovizError::Surface(format!("no element with id '{}'", id)))
}

/// `DrawSurface` backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a `<canvas>` by element id and acquire its 2D context.
    pub fn from_element_id(id: &str) -> crate::Result<Self> {
        let canvas = element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| TopovizError::Surface(format!("element '{}' is not a canvas", id)))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| TopovizError::Surface(format!("{:?}", e)))?
            .ok_or_else(|| TopovizError::Surface("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| TopovizError::Surface("unexpected context type".to_string()))?;

        Ok(Self { canvas, ctx })
    }

    /// Match the drawing buffer to the element's laid-out size.
    pub fn fit_to_layout(&self) {
        self.canvas.set_width(self.canvas.offset_width().max(0) as u32);
        self.canvas.set_height(self.canvas.offset_height().max(0) as u32);
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &Rgba, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &str) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0)
            .is_err()
        {
            // Negative radius; nothing to draw
            return;
        }
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.stroke();
    }
}

/// WASM-friendly wrapper around a `TopologyModel`.
///
/// # Example (JavaScript)
/// ```javascript
/// const net = new WasmTopology();   // starts as [3, 4, 2]
/// net.attach_canvas("networkCanvas");
/// net.set_connectivity_mode("cascade");
/// window.addEventListener("resize", () => net.draw());
/// ```
#[wasm_bindgen]
pub struct WasmTopology {
    model: TopologyModel,
    surface: Option<CanvasSurface>,
}

#[wasm_bindgen]
impl WasmTopology {
    /// Create the startup diagram `[3, 4, 2]`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic messages in browser console
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            model: TopologyModel::with_default_layers(),
            surface: None,
        }
    }

    /// Create the startup diagram using a JSON `WidgetConfig`.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const net = WasmTopology.with_config('{"seed": 42, "connectivity_mode": "rbf"}');
    /// ```
    pub fn with_config(config_json: &str) -> Result<WasmTopology, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = WidgetConfig::from_json(config_json).map_err(to_js)?;
        let mut model = TopologyModel::from_config(&config);
        model.add_default_layers();

        Ok(Self {
            model,
            surface: None,
        })
    }

    /// Bind to a `<canvas>` element and draw immediately.
    pub fn attach_canvas(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        let surface = CanvasSurface::from_element_id(canvas_id).map_err(to_js)?;
        self.surface = Some(surface);
        self.draw();
        Ok(())
    }

    /// Append a layer. Counts of zero or below produce an empty layer.
    pub fn add_layer(&mut self, neuron_count: i32) {
        if neuron_count <= 0 {
            log::warn!("neuron count {} gives an empty layer", neuron_count);
        }
        self.model.add_layer(neuron_count.max(0) as usize);
        self.redraw_if_needed();
    }

    /// Append a layer of random size (2 to 6 neurons by default).
    ///
    /// Returns the chosen size.
    pub fn add_random_layer(&mut self) -> usize {
        let count = self.model.add_random_layer();
        self.redraw_if_needed();
        count
    }

    /// Select `"feedforward"`, `"cascade"` or `"rbf"`; anything else is feedforward.
    pub fn set_connectivity_mode(&mut self, mode: &str) {
        self.model.set_connectivity_mode(mode);
        self.redraw_if_needed();
    }

    pub fn connectivity_mode(&self) -> String {
        self.model.connectivity_mode().to_string()
    }

    /// Resize the canvas to its layout size and redraw.
    ///
    /// Hook this to the window `resize` event.
    pub fn draw(&mut self) {
        self.model.take_redraw_request();
        if let Some(surface) = self.surface.as_mut() {
            surface.fit_to_layout();
            self.model.draw_to(surface);
        }
    }

    /// Neuron count of each layer.
    pub fn layer_sizes(&self) -> Vec<u32> {
        self.model
            .layers()
            .iter()
            .map(|l| l.neuron_count() as u32)
            .collect()
    }

    /// `"Layer i: n neurons"` lines for the layer list.
    pub fn layer_summary(&self) -> js_sys::Array {
        self.model
            .layer_summary()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    pub fn num_edges(&self) -> usize {
        self.model.edges().len()
    }

    /// Draw commands for a `width` x `height` surface as a JSON array.
    pub fn render_json(&self, width: f64, height: f64) -> Result<String, JsValue> {
        serde_json::to_string(&self.model.render(width, height))
            .map_err(|e| to_js(TopovizError::from(e)))
    }

    fn redraw_if_needed(&mut self) {
        if self.model.redraw_pending() {
            self.draw();
        }
    }
}

impl Default for WasmTopology {
    fn default() -> Self {
        Self::new()
    }
}

/// WASM-friendly wrapper around `TrainingProgress`.
///
/// # Example (JavaScript)
/// ```javascript
/// const progress = new WasmProgress();
/// const timer = setInterval(() => {
///     progress.tick();
///     progress.apply_to("progressBar", "progressText");
///     if (progress.is_finished()) clearInterval(timer);
/// }, progress.tick_interval_ms());
/// ```
#[wasm_bindgen]
pub struct WasmProgress {
    progress: TrainingProgress,
    rng: StdRng,
    tick_interval_ms: u32,
}

#[wasm_bindgen]
impl WasmProgress {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = WidgetConfig::default();
        Self {
            progress: TrainingProgress::new(&config.progress),
            rng: StdRng::from_entropy(),
            tick_interval_ms: config.progress.tick_interval_ms,
        }
    }

    /// Advance one timer tick; returns the new percentage.
    pub fn tick(&mut self) -> f64 {
        self.progress.tick(&mut self.rng)
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }

    pub fn reset(&mut self) {
        self.progress.reset();
    }

    pub fn label(&self) -> String {
        self.progress.label()
    }

    pub fn width_css(&self) -> String {
        self.progress.width_css()
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Write bar width and label into the given elements.
    pub fn apply_to(&self, bar_id: &str, text_id: &str) -> Result<(), JsValue> {
        let bar = element_by_id(bar_id)
            .map_err(to_js)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| to_js(TopovizError::Surface(format!("'{}' is not an HTML element", bar_id))))?;
        bar.style().set_property("width", &self.progress.width_css())?;

        let text = element_by_id(text_id).map_err(to_js)?;
        text.set_text_content(Some(&self.progress.label()));
        Ok(())
    }
}

impl Default for WasmProgress {
    fn default() -> Self {
        Self::new()
    }
}
