//! Bubble Bounce - growing circles that reverse when their edges touch
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (sampling, collisions, circle registry)
//! - `settings`: Serializable simulation configuration
//! - `spawner`: Turns clicks and timer ticks into admission-controlled spawns
//! - `renderer`: Thin render feed (vertices + surface trait)

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod spawner;

pub use settings::{FadePolicy, SeedCircle, SimConfig};
pub use sim::{Circle, CircleId, Registry, RenderCircle, Rgb, StepReport};
pub use spawner::{Palette, Spawner};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Outer redraw rate (frames per second)
    pub const TICK_RATE_HZ: f64 = 30.0;
    /// Minimum time between geometry recomputations of one circle
    pub const UPDATE_INTERVAL: f64 = 0.07;

    /// Radius change per refresh
    pub const GROWTH_SPEED: f64 = 0.7;
    /// Distance between sampled points along the circumference
    pub const SPARSENESS: f64 = 3.0;
    /// Contact tolerance band (epsilon) for the collision test
    pub const CONTACT_TOLERANCE: f64 = 1.0;
    /// Circles smaller than this are forced back to growing
    pub const MIN_RADIUS: f64 = 1.0;

    /// Radius of a freshly spawned circle
    pub const SPAWN_RADIUS: f64 = 1.0;
    /// Starting life (also the maximum alpha)
    pub const INITIAL_LIFE: f32 = 1.0;

    /// Age (seconds) after which age-gated fading kicks in
    pub const FADE_AFTER: f64 = 10.0;
    /// Life lost per fade decrement
    pub const FADE_RATE: f32 = 0.002;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f64 = 1400.0;
    pub const CANVAS_HEIGHT: f64 = 1000.0;

    /// Seconds between spontaneous spawns
    pub const SPAWN_INTERVAL: f64 = 1.0;
}

/// Convert polar (r, theta) to cartesian (x, y) around `center`
#[inline]
pub fn polar_to_cartesian(center: DVec2, r: f64, theta: f64) -> DVec2 {
    center + DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Euclidean distance between two centers
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a - b).length()
}
