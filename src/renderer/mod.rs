//! Rendering interface
//!
//! The simulation only produces point vertices. A `RenderSurface` owns the
//! actual drawing API (window, GL context, blending) and is supplied by the
//! host.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::sim::Registry;

/// Something that can draw point lists
pub trait RenderSurface {
    /// Start a new frame
    fn clear(&mut self);
    /// Draw one circle's boundary as points
    fn draw_points(&mut self, vertices: &[Vertex]);
    /// Finish the frame
    fn present(&mut self);
}

/// Draw every living circle of `registry` onto `surface`
pub fn render_frame<S: RenderSurface + ?Sized>(surface: &mut S, registry: &Registry) {
    surface.clear();
    for circle in registry.live_circles() {
        if circle.points.is_empty() {
            continue;
        }
        surface.draw_points(&shapes::circle_points(&circle));
    }
    surface.present();
}

/// Surface that draws nothing and keeps counts
#[derive(Debug, Default, Clone)]
pub struct HeadlessSurface {
    pub frames: u64,
    /// Points drawn in the last presented frame
    pub last_frame_points: usize,
    /// Point lists drawn in the last presented frame
    pub last_frame_circles: usize,
    pending_points: usize,
    pending_circles: usize,
}

impl RenderSurface for HeadlessSurface {
    fn clear(&mut self) {
        self.pending_points = 0;
        self.pending_circles = 0;
    }

    fn draw_points(&mut self, vertices: &[Vertex]) {
        self.pending_points += vertices.len();
        self.pending_circles += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        self.last_frame_points = self.pending_points;
        self.last_frame_circles = self.pending_circles;
    }
}
