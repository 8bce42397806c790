//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::color::Rgba;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(position: Vec2, color: Rgba) -> Self {
        Self::new(position.x, position.y, color)
    }

    /// Byte distance between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use crate::color::{Rgb, Rgba};

    pub const BACKGROUND: Rgba = Rgb::BLACK.with_alpha(1.0);
    pub const PADDLE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
}
