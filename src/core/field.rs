use super::config::{CursorConfig, ParticleLayout};
use super::palette::Palette;
use super::particle::Particle;
use super::surface::Viewport;
use glam::Vec2;
use rand::Rng;

/// Pointer state sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub pointer_down: bool,
}

/// Fixed-size set of particles: the ring first, then the cluster.
pub struct ParticleField {
    pub config: CursorConfig,
    particles: Vec<Particle>,
    layout: ParticleLayout,
    radius_scale: f32,
    global_rotation: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        config: CursorConfig,
        origin: Vec2,
        palette: &Palette,
        rng: &mut R,
    ) -> Self {
        let layout = config.layout();
        let particles = (0..layout.total())
            .map(|i| Particle::new(i, layout.outer, origin, &config, palette, rng))
            .collect();
        Self {
            radius_scale: config.radius_scale_min,
            config,
            particles,
            layout,
            global_rotation: 0.0,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn layout(&self) -> ParticleLayout {
        self.layout
    }

    #[inline]
    pub fn radius_scale(&self) -> f32 {
        self.radius_scale
    }

    #[inline]
    pub fn global_rotation(&self) -> f32 {
        self.global_rotation
    }

    /// Inner particle the outer particle at `outer_index` is tied to.
    ///
    /// Pairing cycles over the configured inner count, so several ring
    /// particles share a partner when the ring is larger than the cluster.
    /// When the field holds fewer particles than the configured split asks
    /// for, the missing partners yield `None` and those lines are skipped.
    pub fn partner_index(&self, outer_index: usize) -> Option<usize> {
        if outer_index >= self.layout.outer {
            return None;
        }
        let j = self.layout.outer + outer_index % self.config.inner_count.max(1);
        (j < self.particles.len()).then_some(j)
    }

    /// Ease the global orbit multiplier toward its pressed/released target.
    pub fn update_radius_scale(&mut self, pointer_down: bool) {
        let cfg = &self.config;
        if pointer_down {
            self.radius_scale += (cfg.radius_scale_max - self.radius_scale) * cfg.radius_ease;
        } else {
            self.radius_scale -= (self.radius_scale - cfg.radius_scale_min) * cfg.radius_ease;
        }
        self.radius_scale = self.radius_scale.min(cfg.radius_scale_max);
    }

    /// Advance the simulation by one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, input: &FrameInput, viewport: Viewport, rng: &mut R) {
        self.update_radius_scale(input.pointer_down);

        let follow = self.config.follow_ease;
        let size_ease = self.config.size_ease;
        let ring = self.config.base_radius * self.radius_scale;
        let rotation = self.global_rotation;
        for p in &mut self.particles {
            p.previous = p.position;
            p.offset += Vec2::splat(p.speed);
            p.shift += (input.pointer - p.shift) * follow;

            let angle = p.angle(rotation);
            let orbit = ring * p.orbit_factor;
            let pos = p.shift + Vec2::new(angle.cos(), angle.sin()) * orbit;
            p.position = Vec2::new(
                pos.x.min(viewport.width).max(0.0),
                pos.y.min(viewport.height).max(0.0),
            );

            p.ease_size(size_ease, rng);
        }

        self.global_rotation += self.config.rotation_speed;
    }

    /// Give every particle a fresh, independently chosen color.
    pub fn recolor<R: Rng + ?Sized>(&mut self, palette: &Palette, rng: &mut R) {
        for p in &mut self.particles {
            p.recolor(palette, rng);
        }
    }
}
