use super::field::ParticleField;
use crate::constants::LINE_COLOR;

/// Logical viewport size (CSS pixels) and device pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: if pixel_ratio.is_finite() {
                pixel_ratio.max(1.0)
            } else {
                1.0
            },
        }
    }

    #[inline]
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Backing store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width as f64 * self.pixel_ratio).floor() as u32,
            (self.height as f64 * self.pixel_ratio).floor() as u32,
        )
    }
}

/// The subset of an immediate-mode 2D context the cursor draws with.
pub trait Canvas2d {
    fn set_backing_size(&mut self, width: u32, height: u32);
    fn set_css_size(&mut self, width: f32, height: f32);
    /// Replace the current transform with a uniform scale.
    fn set_scale_transform(&mut self, scale: f64);
    fn set_round_strokes(&mut self);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn global_alpha(&self) -> f64;
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_source_over(&mut self);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill_disc(&mut self, x: f64, y: f64, radius: f64);
}

/// Run `draw` with the global alpha set to `alpha`, then put the old value back.
pub fn with_alpha<C, F>(ctx: &mut C, alpha: f64, draw: F)
where
    C: Canvas2d + ?Sized,
    F: FnOnce(&mut C),
{
    let prev = ctx.global_alpha();
    ctx.set_global_alpha(alpha);
    draw(ctx);
    ctx.set_global_alpha(prev);
}

pub struct SurfaceManager<C: Canvas2d> {
    canvas: C,
    viewport: Viewport,
}

impl<C: Canvas2d> SurfaceManager<C> {
    pub fn new(canvas: C, viewport: Viewport) -> Self {
        Self { canvas, viewport }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Match the backing store to the viewport at device resolution while
    /// keeping draw coordinates in logical pixels.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let (w_px, h_px) = viewport.backing_size();
        self.canvas.set_backing_size(w_px, h_px);
        self.canvas.set_css_size(viewport.width, viewport.height);
        // setting the backing size resets the context state
        self.canvas.set_scale_transform(viewport.pixel_ratio);
        self.canvas.set_round_strokes();
        log::debug!(
            "[surface] resize {}x{} @{:.2} -> {}x{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            w_px,
            h_px
        );
    }

    pub fn clear(&mut self) {
        let vp = self.viewport;
        self.canvas
            .clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);
    }

    pub fn render(&mut self, field: &ParticleField) {
        self.canvas.set_source_over();
        self.canvas.set_global_alpha(1.0);
        self.clear();

        let particles = field.particles();
        let layout = field.layout();
        let cfg = &field.config;

        // connecting lines, one stroked path for the whole ring
        with_alpha(&mut self.canvas, cfg.line_alpha, |ctx| {
            ctx.set_stroke_style(LINE_COLOR);
            ctx.set_line_width(cfg.line_width);
            ctx.begin_path();
            for (i, outer) in particles.iter().enumerate().take(layout.outer) {
                let Some(inner) = field.partner_index(i).and_then(|j| particles.get(j)) else {
                    continue;
                };
                ctx.move_to(outer.position.x as f64, outer.position.y as f64);
                ctx.line_to(inner.position.x as f64, inner.position.y as f64);
            }
            ctx.stroke();
        });

        // dots on top
        for p in particles {
            with_alpha(&mut self.canvas, p.alpha as f64, |ctx| {
                ctx.set_fill_style(&p.fill_color);
                ctx.fill_disc(
                    p.position.x as f64,
                    p.position.y as f64,
                    p.radius as f64 / 2.0,
                );
            });
        }

        self.canvas.set_global_alpha(1.0);
    }
}
