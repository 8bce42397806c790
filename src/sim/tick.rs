//! Fixed timestep simulation step
//!
//! Advances the state by exactly one `dt`. Given the same state, input, `dt`
//! and random draws the result is always the same.

use glam::Vec2;

use super::collision::{
    BallBounds, Hits, Side, end_wall_overlap, paddle_overlap, penetration_fraction,
    side_wall_overlap,
};
use super::input::InputVector;
use super::rng::{RandomSource, random_angle_degrees, random_colour};
use super::state::{SimulationState, max_paddle_y};
use crate::consts::*;
use crate::math::Vec2Ext;

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Ball bounced off this paddle
    pub paddle_hit: Option<Side>,
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball left the playfield through this side and froze
    pub out_of_bounds: Option<Side>,
    /// Countdown expired and a new ball was served
    pub respawned: bool,
    /// Corner hit recoloured the ball
    pub colour_changed: bool,
}

impl StepReport {
    /// Combine reports from several steps (later values win)
    pub fn merge(&mut self, other: StepReport) {
        self.paddle_hit = other.paddle_hit.or(self.paddle_hit);
        self.wall_bounce |= other.wall_bounce;
        self.out_of_bounds = other.out_of_bounds.or(self.out_of_bounds);
        self.respawned |= other.respawned;
        self.colour_changed |= other.colour_changed;
    }

    pub fn is_empty(&self) -> bool {
        *self == StepReport::default()
    }
}

/// Advance the simulation by one fixed timestep
pub fn advance_one_step<R: RandomSource>(
    state: &mut SimulationState,
    input: &InputVector,
    dt: f32,
    rng: &mut R,
) -> StepReport {
    let mut report = StepReport::default();

    move_paddle(&mut state.left_paddle, PADDLE_SPEED * input.left_paddle * dt);
    move_paddle(&mut state.right_paddle, PADDLE_SPEED * input.right_paddle * dt);

    if state.timeout > 0.0 {
        state.timeout = (state.timeout - dt).max(0.0);
        if state.timeout == 0.0 {
            state.respawn(rng);
            report.respawned = true;
        }
        return report;
    }

    update_ball(state, dt, rng, &mut report);
    report
}

/// Move a paddle vertically and keep it on screen
fn move_paddle(paddle: &mut Vec2, y_motion: f32) {
    paddle.y = (paddle.y + y_motion).clamp(0.0, max_paddle_y());
}

fn update_ball<R: RandomSource>(
    state: &mut SimulationState,
    dt: f32,
    rng: &mut R,
    report: &mut StepReport,
) {
    let left_paddle = state.left_paddle;
    let right_paddle = state.right_paddle;
    let ball = &mut state.ball;

    let speed = BALL_SPEED * state.speed_multiplier * dt;
    let candidate = ball.position + ball.direction * speed;
    let bounds = BallBounds::at(candidate);
    let hits = Hits::classify(&bounds, left_paddle, right_paddle);

    // Corner shot easter egg, judged on the unresolved candidate
    if hits.is_corner() {
        ball.colour = random_colour(rng);
        report.colour_changed = true;
    }

    if let Some(side) = hits.paddle() {
        let penetration = penetration_fraction(
            paddle_overlap(&bounds, side, left_paddle, right_paddle),
            speed,
        );

        ball.position += ball.direction * speed * (1.0 - penetration);
        let away = match side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        ball.direction = Vec2::new(away, 0.0).rotated_degrees(random_angle_degrees(rng));
        ball.position += ball.direction * speed * penetration;

        state.speed_multiplier += PADDLE_HIT_SPEEDUP;
        report.paddle_hit = Some(side);
    } else if let Some(side) = hits.side_wall() {
        let penetration = penetration_fraction(side_wall_overlap(&bounds, side), speed);

        // Coast up to the wall; direction is replaced on respawn
        ball.position += ball.direction * speed * (1.0 - penetration);
        state.restart();
        report.out_of_bounds = Some(side);
    } else if hits.y_out_of_bounds() {
        let penetration = penetration_fraction(end_wall_overlap(&bounds, &hits), speed);

        ball.position += ball.direction * speed * (1.0 - penetration);
        ball.direction.y = -ball.direction.y;
        ball.position += ball.direction * speed * penetration;
        report.wall_bounce = true;
    } else {
        ball.position = candidate;
    }
}
