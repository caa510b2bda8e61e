//! Frame loop and lifecycle for the particle cursor.
//!
//! The driver owns every piece of mutable state (pointer, field, palette,
//! surface) and is the only thing host callbacks talk to. Host access goes
//! through [`Environment`], so the same state machine runs against the
//! browser and against a scripted fake in tests.

use super::config::CursorConfig;
use super::field::{FrameInput, ParticleField};
use super::palette::Palette;
use super::surface::{Canvas2d, SurfaceManager, Viewport};
use rand::Rng;
use thiserror::Error;

/// Opaque id of a pending "before next paint" callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// What the driver needs from its host.
pub trait Environment {
    fn supports_fine_pointer(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
    fn viewport(&self) -> Viewport;
    /// Raw value of a named theme color slot, if the theme defines it.
    fn theme_color(&self, slot: &str) -> Option<String>;
    /// Ask for one frame callback. `None` when the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Why the effect switched itself off at startup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DisableReason {
    #[error("no fine pointer available")]
    CoarsePointer,
    #[error("reduced motion preferred")]
    ReducedMotion,
    #[error("cursor canvas element missing")]
    MissingCanvas,
    #[error("2d context unavailable")]
    NoContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Disabled(DisableReason),
    Running,
    Paused,
}

struct Live<C: Canvas2d> {
    field: ParticleField,
    surface: SurfaceManager<C>,
    palette: Palette,
    input: FrameInput,
    pending: Option<FrameHandle>,
}

pub struct AnimationDriver<E: Environment, C: Canvas2d, R: Rng> {
    env: E,
    rng: R,
    state: DriverState,
    live: Option<Live<C>>,
}

impl<E: Environment, C: Canvas2d, R: Rng> AnimationDriver<E, C, R> {
    /// Check capabilities, acquire the surface and start running.
    ///
    /// `acquire` is only called once the pointer and motion checks pass. Any
    /// failure leaves the driver permanently disabled; nothing is reported to
    /// the page beyond a log line.
    pub fn start<F>(env: E, config: CursorConfig, mut rng: R, acquire: F) -> Self
    where
        F: FnOnce() -> Result<C, DisableReason>,
    {
        let acquired = if !env.supports_fine_pointer() {
            Err(DisableReason::CoarsePointer)
        } else if env.prefers_reduced_motion() {
            Err(DisableReason::ReducedMotion)
        } else {
            acquire()
        };
        let canvas = match acquired {
            Ok(c) => c,
            Err(reason) => {
                log::info!("[cursor] disabled: {}", reason);
                return Self {
                    env,
                    rng,
                    state: DriverState::Disabled(reason),
                    live: None,
                };
            }
        };

        let viewport = env.viewport();
        let palette = Palette::from_theme(|slot| env.theme_color(slot));
        let input = FrameInput {
            pointer: viewport.center(),
            pointer_down: false,
        };
        let field = ParticleField::new(config, input.pointer, &palette, &mut rng);
        let mut surface = SurfaceManager::new(canvas, viewport);
        surface.resize(viewport);

        let mut driver = Self {
            env,
            rng,
            state: DriverState::Running,
            live: Some(Live {
                field,
                surface,
                palette,
                input,
                pending: None,
            }),
        };
        driver.refresh_palette();
        driver.schedule();
        log::info!(
            "[cursor] running with {} particles",
            driver.field().map_or(0, |f| f.particles().len())
        );
        driver
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn env(&self) -> &E {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.live.as_ref().map(|l| &l.field)
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.live.as_ref().map(|l| &l.palette)
    }

    pub fn surface(&self) -> Option<&SurfaceManager<C>> {
        self.live.as_ref().map(|l| &l.surface)
    }

    pub fn input(&self) -> Option<FrameInput> {
        self.live.as_ref().map(|l| l.input)
    }

    /// Handle of the outstanding frame request, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.live.as_ref().and_then(|l| l.pending)
    }

    /// Body of the frame callback: step, draw, ask for the next one.
    ///
    /// Callbacks that arrive while paused, or with no request outstanding,
    /// are dropped so a frame queued before a pause can never advance state.
    pub fn frame(&mut self) {
        if self.state != DriverState::Running {
            return;
        }
        let Some(live) = self.live.as_mut() else {
            return;
        };
        if live.pending.take().is_none() {
            return;
        }
        let viewport = live.surface.viewport();
        live.field.step(&live.input, viewport, &mut self.rng);
        live.surface.render(&live.field);
        self.schedule();
    }

    pub fn pause(&mut self) {
        if self.state != DriverState::Running {
            return;
        }
        let Some(live) = self.live.as_mut() else {
            return;
        };
        if let Some(handle) = live.pending.take() {
            self.env.cancel_frame(handle);
        }
        live.surface.clear();
        self.state = DriverState::Paused;
        log::info!("[cursor] paused");
    }

    /// Reduced motion is deliberately not re-checked here.
    pub fn resume(&mut self) {
        if self.state != DriverState::Paused {
            return;
        }
        self.state = DriverState::Running;
        self.schedule();
        log::info!("[cursor] resumed");
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn on_reduced_motion_change(&mut self, reduce: bool) {
        if reduce {
            self.pause();
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(live) = self.live.as_mut() {
            live.input.pointer = glam::Vec2::new(x, y);
        }
    }

    pub fn on_pointer_down(&mut self) {
        if let Some(live) = self.live.as_mut() {
            live.input.pointer_down = true;
        }
    }

    /// Also used for pointer cancellation.
    pub fn on_pointer_up(&mut self) {
        if let Some(live) = self.live.as_mut() {
            live.input.pointer_down = false;
        }
    }

    pub fn on_resize(&mut self) {
        let viewport = self.env.viewport();
        if let Some(live) = self.live.as_mut() {
            live.surface.resize(viewport);
        }
    }

    /// Theme attributes or color scheme changed.
    pub fn on_theme_change(&mut self) {
        self.refresh_palette();
    }

    /// Re-read the theme palette and recolor every particle from it.
    pub fn refresh_palette(&mut self) {
        let env = &self.env;
        let Some(live) = self.live.as_mut() else {
            return;
        };
        live.palette = Palette::from_theme(|slot| env.theme_color(slot));
        live.field.recolor(&live.palette, &mut self.rng);
        log::debug!("[cursor] palette refreshed ({} colors)", live.palette.len());
    }

    fn schedule(&mut self) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        if live.pending.is_some() {
            return;
        }
        live.pending = self.env.request_frame();
        if live.pending.is_none() {
            log::warn!("[cursor] frame request refused");
        }
    }
}
