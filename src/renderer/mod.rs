//! Rendering side of the simulation
//!
//! Turns a `Frame` (previous state, current state, blend) into interpolated
//! positions and then into a triangle list. No graphics API lives here; a
//! platform uploads `RenderFrame::vertices()` however it likes.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::color::Rgb;
use crate::consts::*;
use crate::math::lerp;
use crate::sim::Frame;
use vertex::colors;

/// Positions blended between two simulation steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball: Vec2,
    /// Always the current colour, never blended
    pub ball_colour: Rgb,
}

/// Interpolate paddle and ball positions for display
pub fn interpolate(frame: &Frame<'_>) -> RenderFrame {
    let (prev, curr, blend) = (frame.previous, frame.current, frame.blend);
    RenderFrame {
        left_paddle: lerp(prev.left_paddle, curr.left_paddle, blend),
        right_paddle: lerp(prev.right_paddle, curr.right_paddle, blend),
        ball: lerp(prev.ball.position, curr.ball.position, blend),
        ball_colour: curr.ball.colour,
    }
}

impl RenderFrame {
    /// Background, both paddles, then the ball
    pub fn vertices(&self) -> Vec<Vertex> {
        let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let mut out = Vec::with_capacity(18 + shapes::CIRCLE_SEGMENTS * 3);

        out.extend(shapes::rect(
            Vec2::ZERO,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            colors::BACKGROUND,
        ));
        out.extend(shapes::rect(self.left_paddle, paddle_size, colors::PADDLE));
        out.extend(shapes::rect(self.right_paddle, paddle_size, colors::PADDLE));
        out.extend(shapes::circle(
            self.ball,
            BALL_RADIUS,
            shapes::CIRCLE_SEGMENTS,
            self.ball_colour.with_alpha(1.0),
        ));
        out
    }
}
