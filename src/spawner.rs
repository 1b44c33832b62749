//! Spawn requests from the outside world
//!
//! Clicks and a periodic timer become spawn requests against the registry.
//! All randomness lives here (seeded, so runs are reproducible); the registry
//! only accepts or rejects.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Registry, Rgb};

/// Default cycling palette for new circles
pub const PALETTE: [Rgb; 12] = [
    Rgb::from_hex(0x5026a7),
    Rgb::from_hex(0x8d448b),
    Rgb::from_hex(0xcc6a87),
    Rgb::from_hex(0xeccd8f),
    Rgb::from_hex(0x42b883),
    Rgb::from_hex(0x347474),
    Rgb::from_hex(0x35495e),
    Rgb::from_hex(0xff7e67),
    Rgb::from_hex(0xc70d3a),
    Rgb::from_hex(0xed5107),
    Rgb::from_hex(0x230338),
    Rgb::from_hex(0x02383c),
];

/// Endless color cycle
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
    index: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PALETTE.to_vec())
    }
}

impl Palette {
    /// An empty color list falls back to the default palette
    pub fn new(colors: Vec<Rgb>) -> Self {
        let colors = if colors.is_empty() {
            PALETTE.to_vec()
        } else {
            colors
        };
        Self { colors, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Next color, wrapping around after the last one
    pub fn next_color(&mut self) -> Rgb {
        let color = self.colors[self.index];
        self.index = (self.index + 1) % self.colors.len();
        color
    }
}

/// Turns pointer clicks and timer ticks into spawn requests
#[derive(Debug, Clone)]
pub struct Spawner {
    palette: Palette,
    rng: Pcg32,
    /// Time of the next spontaneous spawn (None until the first tick)
    next_spawn: Option<f64>,
    pub accepted: u32,
    pub rejected: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self::with_palette(seed, Palette::default())
    }

    pub fn with_palette(seed: u64, palette: Palette) -> Self {
        Self {
            palette,
            rng: Pcg32::seed_from_u64(seed),
            next_spawn: None,
            accepted: 0,
            rejected: 0,
        }
    }

    fn record(&mut self, accepted: bool) -> bool {
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        accepted
    }

    /// Pointer press at (x, y). Uses the palette unless a color is given.
    pub fn click(&mut self, registry: &mut Registry, x: f64, y: f64, color: Option<Rgb>) -> bool {
        let color = color.unwrap_or_else(|| self.palette.next_color());
        let accepted = registry.spawn(x, y, color);
        self.record(accepted)
    }

    /// Random position inside the canvas
    pub fn random_position(&mut self, width: f64, height: f64) -> DVec2 {
        DVec2::new(
            self.rng.random_range(0.0..width),
            self.rng.random_range(0.0..height),
        )
    }

    /// Timer-driven spontaneous spawn.
    ///
    /// Returns `None` when no spawn was due (or timer spawning is disabled),
    /// otherwise whether the registry admitted the new circle.
    pub fn tick(&mut self, registry: &mut Registry, now: f64) -> Option<bool> {
        let interval = registry.config().spawn_interval?;
        let due = *self.next_spawn.get_or_insert(now + interval);
        if now < due {
            return None;
        }
        // At most one spawn per tick; missed intervals are skipped
        let mut next = due + interval;
        while next <= now {
            next += interval;
        }
        self.next_spawn = Some(next);

        let (width, height) = (registry.config().canvas_width, registry.config().canvas_height);
        let pos = self.random_position(width, height);
        let color = self.palette.next_color();
        let accepted = registry.spawn(pos.x, pos.y, color);
        log::debug!(
            "Timer spawn at ({:.0}, {:.0}): {}",
            pos.x,
            pos.y,
            if accepted { "accepted" } else { "rejected" }
        );
        Some(self.record(accepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;

    fn registry() -> Registry {
        Registry::new(SimConfig {
            seed_circle: None,
            ..SimConfig::default()
        })
    }

    #[test]
    fn test_palette_cycles() {
        let mut palette = Palette::default();
        let first: Vec<_> = (0..12).map(|_| palette.next_color()).collect();
        assert_eq!(first, PALETTE.to_vec());
        assert_eq!(palette.next_color(), PALETTE[0]);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let palette = Palette::new(Vec::new());
        assert_eq!(palette.len(), 12);
    }

    #[test]
    fn test_click_uses_palette_then_explicit_color() {
        let mut registry = registry();
        let mut spawner = Spawner::new(1);
        assert!(spawner.click(&mut registry, 100.0, 100.0, None));
        assert!(spawner.click(&mut registry, 500.0, 500.0, Some(Rgb::new(1, 2, 3))));
        assert_eq!(registry.circles()[0].color, PALETTE[0]);
        assert_eq!(registry.circles()[1].color, Rgb::new(1, 2, 3));
        assert_eq!(spawner.accepted, 2);
    }

    #[test]
    fn test_click_on_existing_circle_is_rejected() {
        let mut registry = registry();
        let mut spawner = Spawner::new(1);
        assert!(spawner.click(&mut registry, 100.0, 100.0, None));
        // Two unit circles 2 apart touch externally
        assert!(!spawner.click(&mut registry, 102.0, 100.0, None));
        assert_eq!(registry.len(), 1);
        assert_eq!(spawner.rejected, 1);
    }

    #[test]
    fn test_timer_spawns_on_interval() {
        let mut registry = registry();
        let mut spawner = Spawner::new(3);

        // First tick arms the timer
        assert_eq!(spawner.tick(&mut registry, 0.0), None);
        assert_eq!(spawner.tick(&mut registry, 0.5), None);
        assert!(spawner.tick(&mut registry, 1.0).is_some());
        assert_eq!(spawner.tick(&mut registry, 1.5), None);
        assert!(spawner.tick(&mut registry, 2.0).is_some());

        for c in registry.circles() {
            assert!(c.center.x >= 0.0 && c.center.x < 1400.0);
            assert!(c.center.y >= 0.0 && c.center.y < 1000.0);
        }
    }

    #[test]
    fn test_timer_skips_missed_intervals() {
        let mut registry = registry();
        let mut spawner = Spawner::new(3);

        assert_eq!(spawner.tick(&mut registry, 0.0), None);
        // A long stall yields a single spawn, then the cadence resumes
        assert_eq!(spawner.tick(&mut registry, 5.0), Some(true));
        assert_eq!(spawner.tick(&mut registry, 5.0), None);
        assert_eq!(spawner.tick(&mut registry, 5.5), None);
        assert!(spawner.tick(&mut registry, 6.0).is_some());
        assert_eq!(spawner.tick(&mut registry, 6.5), None);
        assert_eq!(spawner.accepted + spawner.rejected, 2);
    }

    #[test]
    fn test_timer_disabled() {
        let mut registry = Registry::new(SimConfig {
            spawn_interval: None,
            ..SimConfig::default()
        });
        let mut spawner = Spawner::new(3);
        assert_eq!(spawner.tick(&mut registry, 100.0), None);
    }

    #[test]
    fn test_determinism() {
        // Same seed, same spawn positions
        let mut a = Spawner::new(99999);
        let mut b = Spawner::new(99999);
        for _ in 0..10 {
            assert_eq!(
                a.random_position(1400.0, 1000.0),
                b.random_position(1400.0, 1000.0)
            );
        }
    }
}
