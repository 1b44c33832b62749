//! Circle entity and its growth state machine
//!
//! A circle never moves. Its radius walks up or down by a fixed step each
//! time its refresh interval elapses, and its life drains according to the
//! configured fade policy.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::sampler::sample;
use crate::settings::{FadePolicy, SimConfig};

/// Stable identity of a circle within a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CircleId(pub u32);

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a 0xRRGGBB literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::from_hex(0xaaaaaa)
    }
}

/// A circle on the canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub center: DVec2,
    pub radius: f64,
    pub is_growing: bool,
    pub color: Rgb,
    /// Remaining life; the circle is removed once this reaches zero
    pub life: f32,
    /// Timestamp of creation (seconds)
    pub birth: f64,
    /// When the boundary was last sampled
    #[serde(skip)]
    last_sampled: Option<f64>,
    /// Boundary as of the last sample (may lag `radius`)
    #[serde(skip)]
    points: Vec<IVec2>,
}

impl Circle {
    /// A freshly spawned circle: small, growing, full life
    pub fn new(id: CircleId, center: DVec2, color: Rgb, birth: f64, config: &SimConfig) -> Self {
        Self {
            id,
            center,
            radius: config.spawn_radius,
            is_growing: true,
            color,
            life: config.initial_life,
            birth,
            last_sampled: None,
            points: Vec::new(),
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_growing(mut self, is_growing: bool) -> Self {
        self.is_growing = is_growing;
        self
    }

    pub fn with_life(mut self, life: f32) -> Self {
        self.life = life;
        self
    }

    /// Advance radius and resample the boundary if the refresh interval has
    /// elapsed. Calling this again inside the same window is a no-op.
    ///
    /// Returns true when a resample happened.
    pub fn refresh(&mut self, now: f64, config: &SimConfig) -> bool {
        let due = match self.last_sampled {
            None => true,
            Some(last) => now > last + config.update_interval,
        };
        if !due {
            return false;
        }

        if self.is_growing {
            self.radius += config.growth_speed;
        } else {
            self.radius -= config.growth_speed;
        }
        debug_assert!(
            self.radius >= 0.0,
            "circle {:?} shrank to negative radius {} (missed bounce)",
            self.id,
            self.radius
        );

        self.points = sample(self.center, self.radius, config.sparseness);
        self.last_sampled = Some(now);

        if let FadePolicy::AgeGated { after, per_refresh } = config.fade {
            if self.age(now) > after {
                self.life -= per_refresh;
            }
        }
        true
    }

    /// Per-frame fade, independent of the refresh interval
    pub fn fade_step(&mut self, config: &SimConfig) {
        if let FadePolicy::Continuous { per_step } = config.fade {
            self.life -= per_step;
        }
    }

    /// Reverse the growth direction
    pub fn bounce(&mut self) {
        debug_assert!(
            self.radius >= 0.0,
            "circle {:?} bounced at negative radius {}",
            self.id,
            self.radius
        );
        self.is_growing = !self.is_growing;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Opacity used for rendering, in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }

    /// Seconds since birth
    pub fn age(&self, now: f64) -> f64 {
        now - self.birth
    }

    /// Cached boundary (empty until the first refresh or when degenerate)
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    pub fn last_sampled(&self) -> Option<f64> {
        self.last_sampled
    }

    pub fn collides_with(&self, other: &Circle, tolerance: f64) -> bool {
        collides(self.center, self.radius, other.center, other.radius, tolerance)
    }
}
