//! The live circle collection and its per-frame step
//!
//! A step evaluates every verdict (dead circles, bounces) against one
//! snapshot of the collection and only then mutates it, so pair order never
//! changes the outcome.

use std::collections::BTreeSet;

use glam::{DVec2, IVec2};

use super::circle::{Circle, CircleId, Rgb};
use super::collision::collides;
use crate::settings::SimConfig;

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Circles dropped because their life ran out
    pub removed: Vec<CircleId>,
    /// Circles whose growth direction flipped (sorted by id)
    pub bounced: Vec<CircleId>,
}

/// Read-only view of a circle for the render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderCircle<'a> {
    pub id: CircleId,
    pub points: &'a [IVec2],
    pub color: Rgb,
    pub alpha: f32,
}

/// Owns every live circle
#[derive(Debug, Clone)]
pub struct Registry {
    config: SimConfig,
    /// Insertion order; new circles go to the tail
    circles: Vec<Circle>,
    /// Latest timestamp seen by `step`, used as birth time for spawns
    now: f64,
    next_id: u32,
}

impl Registry {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            circles: Vec::new(),
            now: 0.0,
            next_id: 1,
        }
    }

    /// Create a registry holding the configured seed circle (if any)
    pub fn with_seed_circle(config: SimConfig) -> Self {
        let seed = config.seed_circle;
        let mut registry = Self::new(config);
        if let Some(seed) = seed {
            let circle = Circle::new(CircleId(0), seed.center, seed.color, 0.0, &registry.config)
                .with_radius(seed.radius);
            let id = registry.insert(circle);
            log::debug!("Seed circle {:?} at {} r={}", id, seed.center, seed.radius);
        }
        registry
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn get(&self, id: CircleId) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == id)
    }

    fn next_circle_id(&mut self) -> CircleId {
        let id = CircleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a circle without admission control. The circle gets a fresh id.
    pub fn insert(&mut self, mut circle: Circle) -> CircleId {
        let id = self.next_circle_id();
        circle.id = id;
        self.circles.push(circle);
        id
    }

    /// Admission-controlled spawn; returns false (and creates nothing) if the
    /// new circle would touch a live circle on arrival.
    pub fn spawn(&mut self, x: f64, y: f64, color: Rgb) -> bool {
        self.try_spawn(DVec2::new(x, y), color).is_some()
    }

    /// Like `spawn`, but returns the id of the admitted circle
    pub fn try_spawn(&mut self, center: DVec2, color: Rgb) -> Option<CircleId> {
        let radius = self.config.spawn_radius;
        let tolerance = self.config.contact_tolerance;

        if let Some(blocker) = self
            .circles
            .iter()
            .filter(|c| c.is_alive())
            .find(|c| collides(center, radius, c.center, c.radius, tolerance))
        {
            log::debug!("Spawn at {} rejected: touches {:?}", center, blocker.id);
            return None;
        }

        let id = self.next_circle_id();
        self.circles.push(Circle::new(id, center, color, self.now, &self.config));
        log::debug!("Spawned {:?} at {}", id, center);
        Some(id)
    }

    /// Advance the simulation by one outer tick
    pub fn step(&mut self, now: f64) -> StepReport {
        debug_assert!(now >= self.now, "time went backwards: {} < {}", now, self.now);
        self.now = now;

        // Phase 1: drop the dead
        let mut removed = Vec::new();
        self.circles.retain(|c| {
            if c.is_alive() {
                true
            } else {
                removed.push(c.id);
                false
            }
        });
        if !removed.is_empty() {
            log::debug!("Removed {} faded circles", removed.len());
        }

        // Phase 2: grow/shrink on each circle's own cadence
        for circle in &mut self.circles {
            circle.refresh(now, &self.config);
            circle.fade_step(&self.config);
        }

        // Phase 3: verdicts from the post-refresh snapshot
        let bounced = self.collect_bounces();

        // Phase 4: one flip per marked circle
        for circle in &mut self.circles {
            if bounced.contains(&circle.id) {
                circle.bounce();
            }
        }

        if !bounced.is_empty() {
            log::trace!("t={:.3}: {} bounces", now, bounced.len());
        }

        StepReport {
            removed,
            bounced: bounced.into_iter().collect(),
        }
    }

    /// Decide which circles flip this step without mutating anything.
    ///
    /// A shrinking circle below `min_radius` always flips. Below that radius a
    /// circle's direction is decided by that rule alone, so contacts only mark
    /// the other circle of the pair.
    fn collect_bounces(&self) -> BTreeSet<CircleId> {
        let tolerance = self.config.contact_tolerance;
        let min_radius = self.config.min_radius;
        let mut bounced = BTreeSet::new();

        for (i, a) in self.circles.iter().enumerate() {
            let a_small = a.radius < min_radius;
            if a_small && !a.is_growing {
                bounced.insert(a.id);
            }
            for b in &self.circles[i + 1..] {
                if !a.collides_with(b, tolerance) {
                    continue;
                }
                if !a_small {
                    bounced.insert(a.id);
                }
                if b.radius >= min_radius {
                    bounced.insert(b.id);
                }
            }
        }
        bounced
    }

    /// Render feed: boundary points, color and alpha of each living circle
    pub fn live_circles(&self) -> impl Iterator<Item = RenderCircle<'_>> + '_ {
        self.circles
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| RenderCircle {
                id: c.id,
                points: c.points(),
                color: c.color,
                alpha: c.alpha(),
            })
    }
}
