use super::config::{CursorConfig, SizeRange};
use super::palette::Palette;
use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleClass {
    /// Evenly spaced on the full-radius ring.
    Outer,
    /// Random angle and orbit factor, wobbling near the center.
    Inner,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub class: ParticleClass,
    pub radius: f32,
    pub target_radius: f32,
    pub size: SizeRange,
    pub alpha: f32,
    pub position: Vec2,
    pub previous: Vec2,
    pub shift: Vec2,
    pub offset: Vec2,
    pub speed: f32,
    pub fill_color: String,
    pub base_angle: f32,
    pub orbit_factor: f32,
    pub wobble: f32,
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

impl Particle {
    /// Build the particle for slot `index`; slots below `outer_count` belong to the ring.
    pub fn new<R: Rng + ?Sized>(
        index: usize,
        outer_count: usize,
        origin: Vec2,
        config: &CursorConfig,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let class = if index < outer_count {
            ParticleClass::Outer
        } else {
            ParticleClass::Inner
        };
        let (base_angle, size, alpha) = match class {
            ParticleClass::Outer => (
                index as f32 / outer_count as f32 * TAU,
                config.outer_size,
                config.outer_alpha,
            ),
            ParticleClass::Inner => (rng.gen::<f32>() * TAU, config.inner_size, config.inner_alpha),
        };
        let radius = uniform(rng, size.min, size.max);
        let target_radius = uniform(rng, size.min, size.max);
        let speed = uniform(rng, config.speed_min, config.speed_max);
        let fill_color = palette.pick(rng).to_string();
        let (orbit_factor, wobble) = match class {
            ParticleClass::Outer => (1.0, 0.0),
            ParticleClass::Inner => (
                uniform(rng, INNER_ORBIT_FACTOR_MIN, INNER_ORBIT_FACTOR_MAX),
                uniform(rng, INNER_WOBBLE_MIN, INNER_WOBBLE_MAX),
            ),
        };
        Self {
            class,
            radius,
            target_radius,
            size,
            alpha,
            position: origin,
            previous: origin,
            shift: origin,
            offset: Vec2::ZERO,
            speed,
            fill_color,
            base_angle,
            orbit_factor,
            wobble,
        }
    }

    #[inline]
    pub fn is_outer(&self) -> bool {
        self.class == ParticleClass::Outer
    }

    /// Angle of this particle around its shift center for the given ring rotation.
    pub fn angle(&self, global_rotation: f32) -> f32 {
        let jitter = if self.wobble != 0.0 {
            (self.offset.x * WOBBLE_FREQUENCY).sin() * WOBBLE_AMPLITUDE
        } else {
            0.0
        };
        self.base_angle + global_rotation + jitter
    }

    /// Ease the drawn radius toward its target, re-rolling the target once reached.
    pub fn ease_size<R: Rng + ?Sized>(&mut self, ease: f32, rng: &mut R) {
        self.radius += (self.target_radius - self.radius) * ease;
        if (self.target_radius - self.radius).abs() < SIZE_REROLL_EPSILON {
            self.target_radius = uniform(rng, self.size.min, self.size.max);
        }
    }

    pub fn recolor<R: Rng + ?Sized>(&mut self, palette: &Palette, rng: &mut R) {
        self.fill_color = palette.pick(rng).to_string();
    }
}
