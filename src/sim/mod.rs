//! Circle simulation module
//!
//! All growth, collision and lifecycle logic lives here. This module must be
//! pure and frame-synchronous:
//! - Time is supplied by the caller, never read from a clock
//! - No randomness (spawn positions come from the caller)
//! - Stable iteration order (insertion order, ids allocated monotonically)
//! - No rendering or platform dependencies

pub mod circle;
pub mod collision;
pub mod registry;
pub mod sampler;

pub use circle::{Circle, CircleId, Rgb};
pub use collision::{Contact, collides, contact};
pub use registry::{Registry, RenderCircle, StepReport};
pub use sampler::sample;
