//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::color::Rgba;

/// Segments used to approximate the ball outline
pub const CIRCLE_SEGMENTS: usize = 32;

/// Axis-aligned rectangle from its top-left corner (two triangles)
pub fn rect(top_left: Vec2, size: Vec2, color: Rgba) -> [Vertex; 6] {
    let tl = top_left;
    let tr = top_left + Vec2::new(size.x, 0.0);
    let bl = top_left + Vec2::new(0.0, size.y);
    let br = top_left + size;

    [
        Vertex::at(tl, color),
        Vertex::at(bl, color),
        Vertex::at(tr, color),
        Vertex::at(tr, color),
        Vertex::at(bl, color),
        Vertex::at(br, color),
    ]
}

/// Filled circle as a fan of `segments` triangles around the centre
pub fn circle(centre: Vec2, radius: f32, segments: usize, color: Rgba) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments * 3);

    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let p0 = centre + Vec2::new(a0.cos(), a0.sin()) * radius;
        let p1 = centre + Vec2::new(a1.cos(), a1.sin()) * radius;

        vertices.push(Vertex::at(centre, color));
        vertices.push(Vertex::at(p0, color));
        vertices.push(Vertex::at(p1, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), Rgba::default());
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_points_on_radius() {
        let centre = Vec2::new(100.0, 100.0);
        let verts = circle(centre, 25.0, 16, Rgba::default());
        assert_eq!(verts.len(), 16 * 3);
        for tri in verts.chunks(3) {
            assert_eq!(Vec2::from(tri[0].position), centre);
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(centre);
                assert!((d - 25.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_circle_minimum_segments() {
        assert_eq!(circle(Vec2::ZERO, 1.0, 0, Rgba::default()).len(), 9);
    }
}
