use crate::constants::*;

/// Inclusive size range a particle's target radius is re-rolled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Clone, Debug)]
pub struct CursorConfig {
    pub quantity: usize,
    pub inner_count: usize,
    pub base_radius: f32,
    pub radius_scale_min: f32,
    pub radius_scale_max: f32,
    pub radius_ease: f32,
    pub follow_ease: f32,
    pub rotation_speed: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub outer_size: SizeRange,
    pub inner_size: SizeRange,
    pub size_ease: f32,
    pub outer_alpha: f32,
    pub inner_alpha: f32,
    pub line_width: f64,
    pub line_alpha: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            inner_count: DEFAULT_INNER_COUNT,
            base_radius: BASE_RADIUS,
            radius_scale_min: RADIUS_SCALE_MIN,
            radius_scale_max: RADIUS_SCALE_MAX,
            radius_ease: RADIUS_EASE,
            follow_ease: FOLLOW_EASE,
            rotation_speed: ROTATION_SPEED,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            outer_size: SizeRange {
                min: OUTER_SIZE_MIN,
                max: OUTER_SIZE_MAX,
            },
            inner_size: SizeRange {
                min: INNER_SIZE_MIN,
                max: INNER_SIZE_MAX,
            },
            size_ease: SIZE_EASE,
            outer_alpha: OUTER_ALPHA,
            inner_alpha: INNER_ALPHA,
            line_width: LINE_WIDTH,
            line_alpha: LINE_ALPHA,
        }
    }
}

/// How the particle slots are split between the ring and the cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleLayout {
    pub outer: usize,
    pub inner: usize,
}

impl ParticleLayout {
    #[inline]
    pub fn total(&self) -> usize {
        self.outer + self.inner
    }
}

impl CursorConfig {
    /// Resolve the outer/inner split of exactly `quantity` particles.
    ///
    /// The ring gets at least [`MIN_OUTER_COUNT`] particles; when the
    /// requested inner count leaves fewer than that, the cluster shrinks to
    /// whatever is left. A quantity below the ring minimum is all ring.
    pub fn layout(&self) -> ParticleLayout {
        let outer = self
            .quantity
            .saturating_sub(self.inner_count)
            .max(MIN_OUTER_COUNT)
            .min(self.quantity);
        ParticleLayout {
            outer,
            inner: self.quantity - outer,
        }
    }
}
