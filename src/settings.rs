//! Simulation configuration
//!
//! Stored as JSON. Every field has a default so partial files load cleanly.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rgb;

/// How a circle's life drains over time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FadePolicy {
    /// Drain `per_refresh` on each boundary resample once the circle is
    /// older than `after` seconds
    AgeGated { after: f64, per_refresh: f32 },
    /// Drain `per_step` on every simulation step from birth
    Continuous { per_step: f32 },
}

impl Default for FadePolicy {
    fn default() -> Self {
        FadePolicy::AgeGated {
            after: FADE_AFTER,
            per_refresh: FADE_RATE,
        }
    }
}

/// A circle placed at startup, bypassing admission control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedCircle {
    pub center: DVec2,
    pub radius: f64,
    pub color: Rgb,
}

impl Default for SeedCircle {
    fn default() -> Self {
        Self {
            center: DVec2::new(100.0, 100.0),
            radius: 100.0,
            color: Rgb::default(),
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Canvas ===
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Outer redraw rate driving `Registry::step`
    pub tick_rate_hz: f64,

    // === Circle growth ===
    /// Minimum seconds between boundary resamples of one circle
    pub update_interval: f64,
    /// Radius change per resample
    pub growth_speed: f64,
    /// Arc length between sampled boundary points
    pub sparseness: f64,
    /// Collision tolerance band
    pub contact_tolerance: f64,
    /// Shrinking circles below this radius bounce back
    pub min_radius: f64,
    pub spawn_radius: f64,
    pub initial_life: f32,
    pub fade: FadePolicy,

    // === Spawning ===
    /// Seconds between spontaneous spawns (None disables them)
    pub spawn_interval: Option<f64>,
    pub seed_circle: Option<SeedCircle>,
    pub rng_seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,

            update_interval: UPDATE_INTERVAL,
            growth_speed: GROWTH_SPEED,
            sparseness: SPARSENESS,
            contact_tolerance: CONTACT_TOLERANCE,
            min_radius: MIN_RADIUS,
            spawn_radius: SPAWN_RADIUS,
            initial_life: INITIAL_LIFE,
            fade: FadePolicy::default(),

            spawn_interval: Some(SPAWN_INTERVAL),
            seed_circle: Some(SeedCircle::default()),
            rng_seed: 0x5eed,
        }
    }
}

impl SimConfig {
    /// Seconds between outer ticks
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }

    /// List every problem with this config (empty means valid)
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            problems.push("canvas dimensions must be positive".to_string());
        }
        if !(self.tick_rate_hz > 0.0) {
            problems.push("tick_rate_hz must be positive".to_string());
        }
        if !(self.update_interval >= 0.0) {
            problems.push("update_interval must not be negative".to_string());
        }
        if !(self.growth_speed > 0.0) {
            problems.push("growth_speed must be positive".to_string());
        }
        // A shrinking circle must bounce before one more step can take it below zero
        if self.growth_speed >= self.min_radius {
            problems.push(format!(
                "growth_speed ({}) must be smaller than min_radius ({})",
                self.growth_speed, self.min_radius
            ));
        }
        if !(self.sparseness > 0.0) {
            problems.push("sparseness must be positive".to_string());
        }
        if !(self.contact_tolerance > 0.0) {
            problems.push("contact_tolerance must be positive".to_string());
        }
        if !(self.spawn_radius > 0.0) {
            problems.push("spawn_radius must be positive".to_string());
        }
        if !(self.initial_life > 0.0) {
            problems.push("initial_life must be positive".to_string());
        }
        if let Some(interval) = self.spawn_interval {
            if !(interval > 0.0) {
                problems.push("spawn_interval must be positive".to_string());
            }
        }
        problems
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load config from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using default config", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                let problems = config.validate();
                if problems.is_empty() {
                    log::info!("Loaded config from {}", path.display());
                    config
                } else {
                    for problem in &problems {
                        log::warn!("Invalid config {}: {}", path.display(), problem);
                    }
                    Self::default()
                }
            }
            Err(e) => {
                log::warn!("Could not parse {}: {}, using default config", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}
