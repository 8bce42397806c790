//! Simple Pong - two paddles, one ball, fixed-timestep physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, fixed-timestep driver)
//! - `renderer`: Interpolation of simulation snapshots into drawable geometry
//! - `platform`: Clock/input/presentation collaborators and the outer loop
//! - `settings`: JSON settings for the native binary

pub mod color;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::{Rgb, Rgba};
pub use math::{Vec2Ext, Vector2, lerp};
pub use settings::Settings;

/// Game configuration constants
///
/// Shared by physics and rendering; both sides must agree on these.
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Fixed simulation timestep as a duration, used by the accumulator
    pub const SIM_STEP: Duration = Duration::from_nanos(16_666_667);

    /// Playfield dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 250.0;
    pub const PADDLE_SPEED: f32 = 1080.0 * 1.2;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 25.0;
    pub const BALL_SPEED: f32 = 800.0;

    /// Seconds the ball stays frozen after leaving the playfield
    pub const RESPAWN_TIMEOUT: f32 = 2.0;
    /// Added to the speed multiplier on every paddle hit
    pub const PADDLE_HIT_SPEEDUP: f32 = 0.1;
    /// Bounce/serve angles are whole degrees in [-MAX_BOUNCE_DEGREES, MAX_BOUNCE_DEGREES)
    pub const MAX_BOUNCE_DEGREES: i32 = 45;

    /// Easter egg colour channels are drawn from [MIN, MIN + 0.5]
    pub const EASTER_EGG_CHANNEL_MIN: f32 = 0.25;
}
