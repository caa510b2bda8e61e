// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]

use orbit_cursor::core::{Canvas2d, Environment, FrameHandle, Viewport};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    BackingSize(u32, u32),
    CssSize(f32, f32),
    Scale(f64),
    RoundStrokes,
    Clear(f64, f64, f64, f64),
    Alpha(f64),
    SourceOver,
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke { alpha: f64 },
    Disc { x: f64, y: f64, r: f64, alpha: f64, color: String },
}

/// Canvas that records every call and tracks alpha/fill the way a real context does.
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    alpha: f64,
    fill: String,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            alpha: 1.0,
            fill: String::new(),
        }
    }

    pub fn discs(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Disc { .. }))
            .collect()
    }

    pub fn last(&self) -> Option<&Op> {
        self.ops.last()
    }
}

impl Canvas2d for RecordingCanvas {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.ops.push(Op::BackingSize(width, height));
    }
    fn set_css_size(&mut self, width: f32, height: f32) {
        self.ops.push(Op::CssSize(width, height));
    }
    fn set_scale_transform(&mut self, scale: f64) {
        self.ops.push(Op::Scale(scale));
    }
    fn set_round_strokes(&mut self) {
        self.ops.push(Op::RoundStrokes);
    }
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::Clear(x, y, width, height));
    }
    fn global_alpha(&self) -> f64 {
        self.alpha
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.ops.push(Op::Alpha(alpha));
    }
    fn set_source_over(&mut self) {
        self.ops.push(Op::SourceOver);
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(Op::StrokeStyle(color.to_string()));
    }
    fn set_fill_style(&mut self, color: &str) {
        self.fill = color.to_string();
        self.ops.push(Op::FillStyle(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke { alpha: self.alpha });
    }
    fn fill_disc(&mut self, x: f64, y: f64, r: f64) {
        self.ops.push(Op::Disc {
            x,
            y,
            r,
            alpha: self.alpha,
            color: self.fill.clone(),
        });
    }
}

/// Scripted host: fixed capabilities, editable theme, counted frame requests.
pub struct FakeEnv {
    pub fine_pointer: bool,
    pub reduced_motion: bool,
    pub viewport: Viewport,
    pub theme: HashMap<String, String>,
    pub refuse_frames: bool,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub next_handle: i32,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self {
            fine_pointer: true,
            reduced_motion: false,
            viewport: Viewport::new(800.0, 600.0, 2.0),
            theme: HashMap::new(),
            refuse_frames: false,
            requested: Vec::new(),
            cancelled: Vec::new(),
            next_handle: 1,
        }
    }

    pub fn with_theme(mut self, pairs: &[(&str, &str)]) -> Self {
        for (k, v) in pairs {
            self.theme.insert(k.to_string(), v.to_string());
        }
        self
    }
}

impl Environment for FakeEnv {
    fn supports_fine_pointer(&self) -> bool {
        self.fine_pointer
    }
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
    fn viewport(&self) -> Viewport {
        self.viewport
    }
    fn theme_color(&self, slot: &str) -> Option<String> {
        self.theme.get(slot).cloned()
    }
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse_frames {
            return None;
        }
        let h = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.requested.push(h);
        Some(h)
    }
    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
