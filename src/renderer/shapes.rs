//! Vertex generation from the render feed

use super::vertex::Vertex;
use crate::sim::RenderCircle;

/// One point vertex per sampled boundary point, tinted with the circle's
/// color and faded by its alpha
pub fn circle_points(circle: &RenderCircle<'_>) -> Vec<Vertex> {
    let color = circle.color.to_rgba(circle.alpha);
    circle
        .points
        .iter()
        .map(|p| Vertex::new(p.x as f32, p.y as f32, color))
        .collect()
}
