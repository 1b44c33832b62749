//! Bubble Bounce entry point
//!
//! Headless driver: runs the outer redraw tick against a simulated clock,
//! feeding timer spawns into the registry and rendering onto a counting
//! surface.
//!
//! Usage: `bubble-bounce [config.json] [frames]`

use bubble_bounce::renderer::{HeadlessSurface, render_frame};
use bubble_bounce::{Registry, SimConfig, Spawner};

/// Frames simulated when no count is given (20 s at 30 Hz)
const DEFAULT_FRAMES: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Bubble Bounce (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(path),
        None => SimConfig::default(),
    };
    let frames = match args.next() {
        Some(n) => n.parse().unwrap_or_else(|_| {
            log::warn!("Invalid frame count '{}', using {}", n, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    };

    let dt = config.frame_dt();
    let mut spawner = Spawner::new(config.rng_seed);
    let mut registry = Registry::with_seed_circle(config);
    let mut surface = HeadlessSurface::default();
    let mut bounces = 0usize;
    let mut removed = 0usize;

    for frame in 0..frames {
        let now = frame as f64 * dt;
        spawner.tick(&mut registry, now);
        let report = registry.step(now);
        bounces += report.bounced.len();
        removed += report.removed.len();
        render_frame(&mut surface, &registry);

        if frame % 150 == 0 {
            log::info!(
                "t={:.1}s circles={} points={}",
                now,
                registry.len(),
                surface.last_frame_points
            );
        }
    }

    log::info!(
        "Done: {} frames, {} circles alive, {} spawned, {} rejected, {} bounces, {} faded out",
        surface.frames,
        registry.len(),
        spawner.accepted,
        spawner.rejected,
        bounces,
        removed
    );
}
