//! Colour values
//!
//! `Rgba` embeds an `Rgb` rather than extending it; both are plain `Pod`
//! data so they can go straight into vertex buffers.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Opaque colour, channels in [0, 1]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba { rgb: self, a }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colour with alpha
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            a,
        }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.rgb.r, self.rgb.g, self.rgb.b, self.a]
    }
}

impl Add for Rgba {
    type Output = Rgba;

    fn add(self, other: Rgba) -> Rgba {
        Rgba::new(
            self.rgb.r + other.rgb.r,
            self.rgb.g + other.rgb.g,
            self.rgb.b + other.rgb.b,
            self.a + other.a,
        )
    }
}

impl Sub for Rgba {
    type Output = Rgba;

    fn sub(self, other: Rgba) -> Rgba {
        Rgba::new(
            self.rgb.r - other.rgb.r,
            self.rgb.g - other.rgb.g,
            self.rgb.b - other.rgb.b,
            self.a - other.a,
        )
    }
}

impl AddAssign for Rgba {
    fn add_assign(&mut self, other: Rgba) {
        *self = *self + other;
    }
}

impl SubAssign for Rgba {
    fn sub_assign(&mut self, other: Rgba) {
        *self = *self - other;
    }
}
