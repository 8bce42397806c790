//! Simulation state
//!
//! `SimulationState` is the whole of the simulated truth. It is `Copy`: the
//! driver keeps a previous and a current value for interpolation and the two
//! never share anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::{RandomSource, random_angle_degrees, random_horizontal_sign};
use crate::color::Rgb;
use crate::consts::*;
use crate::math::Vec2Ext;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre of the ball
    pub position: Vec2,
    /// Approximately unit length; rotation lets it drift slightly
    pub direction: Vec2,
    pub colour: Rgb,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            colour: Rgb::WHITE,
        }
    }
}

impl Ball {
    /// Put the ball back in the middle of the screen heading in a random
    /// horizontal direction, tilted by up to 45 degrees
    pub fn serve<R: RandomSource>(&mut self, rng: &mut R) {
        self.position = screen_centre();
        let sign = random_horizontal_sign(rng);
        self.direction = Vec2::new(sign, 0.0).rotated_degrees(random_angle_degrees(rng));
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Top-left corner of the left paddle
    pub left_paddle: Vec2,
    /// Top-left corner of the right paddle
    pub right_paddle: Vec2,
    pub ball: Ball,
    /// Seconds until the ball respawns; 0 means the ball is live
    pub timeout: f32,
    /// Scales ball speed; grows on paddle hits, back to 1 on respawn
    pub speed_multiplier: f32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            left_paddle: Vec2::ZERO,
            right_paddle: Vec2::ZERO,
            ball: Ball::default(),
            timeout: 0.0,
            speed_multiplier: 1.0,
        }
    }
}

impl SimulationState {
    /// Fresh state already passed through `setup`
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut state = Self::default();
        setup(&mut state, rng);
        state
    }

    /// Ball is frozen waiting to respawn
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.timeout > 0.0
    }

    /// Start the respawn countdown
    pub fn restart(&mut self) {
        self.timeout = RESPAWN_TIMEOUT;
    }

    /// Serve a new ball and reset its speed
    pub fn respawn<R: RandomSource>(&mut self, rng: &mut R) {
        self.ball.serve(rng);
        self.speed_multiplier = 1.0;
    }
}

/// Centre of the playfield
#[inline]
pub fn screen_centre() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Highest valid paddle y (top-left corner)
#[inline]
pub fn max_paddle_y() -> f32 {
    SCREEN_HEIGHT - PADDLE_HEIGHT
}

/// Place paddles and serve the first ball
pub fn setup<R: RandomSource>(state: &mut SimulationState, rng: &mut R) {
    let start_y = SCREEN_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
    state.left_paddle = Vec2::new(0.0, start_y);
    state.right_paddle = Vec2::new(SCREEN_WIDTH - PADDLE_WIDTH, start_y);

    state.ball.serve(rng);
    state.speed_multiplier = 1.0;
}
