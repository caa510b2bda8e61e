use crate::constants::CANVAS_ELEMENT_ID;
use crate::core::{Canvas2d, DisableReason};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `#cursor-canvas` and its 2D context.
pub struct WebCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn acquire(document: &web::Document) -> Result<Self, DisableReason> {
        let canvas = document
            .get_element_by_id(CANVAS_ELEMENT_ID)
            .ok_or(DisableReason::MissingCanvas)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| DisableReason::MissingCanvas)?;

        let opts = js_sys::Object::new();
        _ = js_sys::Reflect::set(&opts, &JsValue::from_str("alpha"), &JsValue::TRUE);
        let ctx = canvas
            .get_context_with_context_options("2d", &opts)
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(DisableReason::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl Canvas2d for WebCanvas {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_css_size(&mut self, width: f32, height: f32) {
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", width));
        _ = style.set_property("height", &format!("{}px", height));
    }

    fn set_scale_transform(&mut self, scale: f64) {
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn set_round_strokes(&mut self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn global_alpha(&self) -> f64 {
        self.ctx.global_alpha()
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_source_over(&mut self) {
        _ = self.ctx.set_global_composite_operation("source-over");
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_disc(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc_with_anticlockwise(x, y, radius.max(0.0), 0.0, TAU, true);
        self.ctx.fill();
    }
}
