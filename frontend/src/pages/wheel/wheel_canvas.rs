use prize_wheel::constants::CANVAS_DIAMETER;
use prize_wheel::{Label, Pointer, Wedge, WheelSurface};
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

const LABEL_FONT: &str = "bold 16px system-ui";
const LABEL_FONT_PX: f64 = 16.0;
// Fraction of the text box sitting on the label point, as the demo wheel's
// text anchor. Pulls labels in towards the hub.
const LABEL_ANCHOR: f64 = 0.8;
const RIM_COLOR: &str = "rgba(130, 100, 255, 0.5)";
const POINTER_FILL: &str = "#f59e0b";
const POINTER_STROKE: &str = "#e69500";
const POINTER_WIDTH: f64 = 30.0;
const POINTER_DEPTH: f64 = 40.0;

/// Retained-mode wheel drawing on a 2D canvas.
///
/// The engine describes the scene once and then only changes rotation and
/// wedge alpha, so the surface keeps the display list and repaints it in
/// `paint`, which the frame loop calls after every tick.
pub struct CanvasSurface {
    canvas_ref: NodeRef,
    wedges: Vec<Wedge>,
    labels: Vec<Label>,
    pointer: Option<Pointer>,
    alphas: Vec<f64>,
    rotation: f64,
    dirty: bool,
}

impl CanvasSurface {
    pub fn new(canvas_ref: NodeRef) -> Self {
        Self {
            canvas_ref,
            wedges: Vec::new(),
            labels: Vec::new(),
            pointer: None,
            alphas: Vec::new(),
            rotation: 0.0,
            dirty: true,
        }
    }

    fn context(&self) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some((canvas, context))
    }

    fn alpha(&self, index: usize) -> f64 {
        self.alphas.get(index).copied().unwrap_or(1.0)
    }

    pub fn paint(&mut self) {
        if !self.dirty {
            return;
        }
        let (canvas, context) = match self.context() {
            Some(found) => found,
            None => return,
        };

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let scale = width.min(height) / CANVAS_DIAMETER;

        context.clear_rect(0.0, 0.0, width, height);
        context.save();
        let _ = context.translate(width / 2.0, height / 2.0);
        let _ = context.scale(scale, scale);

        // Rotating container: wedges and labels.
        context.save();
        let _ = context.rotate(self.rotation);
        for wedge in &self.wedges {
            context.set_global_alpha(self.alpha(wedge.index));
            context.begin_path();
            context.move_to(0.0, 0.0);
            let _ = context.arc(0.0, 0.0, wedge.radius, wedge.start_angle, wedge.end_angle);
            context.close_path();
            context.set_fill_style_str(&wedge.fill);
            context.fill();
        }
        context.set_global_alpha(1.0);

        context.set_font(LABEL_FONT);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        for label in &self.labels {
            context.save();
            let _ = context.translate(label.transform.x, label.transform.y);
            let _ = context.rotate(label.transform.rotation);
            context.set_fill_style_str(&label.color);
            let text_width = context
                .measure_text(&label.text)
                .map(|metrics| metrics.width())
                .unwrap_or(0.0);
            let (dx, dy) = anchor_offset(text_width, LABEL_FONT_PX);
            let _ = context.fill_text(&label.text, dx, dy);
            context.restore();
        }
        context.restore();

        if let Some(pointer) = self.pointer {
            draw_rim(&context, pointer.radius);
            draw_pointer(&context, &pointer);
        }

        context.restore();
        self.dirty = false;
    }
}

// Offset from a centred, middle-baseline draw to one anchored at LABEL_ANCHOR.
fn anchor_offset(width: f64, height: f64) -> (f64, f64) {
    ((0.5 - LABEL_ANCHOR) * width, (0.5 - LABEL_ANCHOR) * height)
}

fn draw_rim(context: &CanvasRenderingContext2d, radius: f64) {
    context.begin_path();
    context.set_stroke_style_str(RIM_COLOR);
    context.set_line_width(4.0);
    let _ = context.arc(0.0, 0.0, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();
}

// Triangle on the rim, tip pointing at the wheel centre.
fn draw_pointer(context: &CanvasRenderingContext2d, pointer: &Pointer) {
    let (sin, cos) = pointer.angle.sin_cos();
    let tip = pointer.radius - POINTER_DEPTH * 0.4;
    let base = pointer.radius + POINTER_DEPTH * 0.6;
    let half = POINTER_WIDTH / 2.0;

    context.begin_path();
    context.move_to(tip * cos, tip * sin);
    context.line_to(base * cos - half * sin, base * sin + half * cos);
    context.line_to(base * cos + half * sin, base * sin - half * cos);
    context.close_path();
    context.set_fill_style_str(POINTER_FILL);
    context.fill();
    context.set_stroke_style_str(POINTER_STROKE);
    context.set_line_width(1.5);
    context.stroke();
}

impl WheelSurface for CanvasSurface {
    fn clear(&mut self) {
        self.wedges.clear();
        self.labels.clear();
        self.pointer = None;
        self.alphas.clear();
        self.dirty = true;
    }

    fn draw_wedge(&mut self, wedge: &Wedge) {
        self.wedges.push(wedge.clone());
        self.dirty = true;
    }

    fn draw_label(&mut self, label: &Label) {
        self.labels.push(label.clone());
        self.dirty = true;
    }

    fn draw_pointer(&mut self, pointer: &Pointer) {
        self.pointer = Some(*pointer);
        self.dirty = true;
    }

    fn set_rotation(&mut self, rotation: f64) {
        if rotation != self.rotation {
            self.rotation = rotation;
            self.dirty = true;
        }
    }

    fn set_sector_alpha(&mut self, index: usize, alpha: f64) {
        if self.alphas.len() <= index {
            self.alphas.resize(index + 1, 1.0);
        }
        if self.alphas[index] != alpha {
            self.alphas[index] = alpha;
            self.dirty = true;
        }
    }
}
