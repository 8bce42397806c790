//! Fixed-timestep driver
//!
//! Turns wall-clock frame deltas into whole simulation steps. Each step copies
//! the current state into `previous` before advancing, so the renderer can
//! blend between the two at any display rate.

use std::time::Duration;

use super::input::InputVector;
use super::rng::{GameRng, RandomSource};
use super::state::SimulationState;
use super::tick::{StepReport, advance_one_step};
use crate::consts::SIM_STEP;

/// Read-only view handed to the renderer once per display frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub previous: &'a SimulationState,
    pub current: &'a SimulationState,
    /// Progress from `previous` to `current`, in [0, 1)
    pub blend: f32,
}

/// Result of one `update` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Fixed steps run this frame
    pub steps: u32,
    /// Paddle hits across all steps
    pub paddle_hits: u32,
    /// Respawns across all steps
    pub respawns: u32,
    /// Merged step reports
    pub events: StepReport,
}

/// Owns the simulation and advances it in fixed increments
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = GameRng> {
    previous: SimulationState,
    current: SimulationState,
    input: InputVector,
    rng: R,
    step: Duration,
    accumulator: Duration,
    last_time: Option<Duration>,
    speed: i32,
}

impl Simulation<GameRng> {
    /// Seeded simulation with the default 60 Hz step
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(rng: R) -> Self {
        Self::with_step(rng, SIM_STEP)
    }

    /// Simulation with a custom fixed step. A zero step is replaced by
    /// `SIM_STEP`.
    pub fn with_step(mut rng: R, step: Duration) -> Self {
        let step = if step.is_zero() {
            log::warn!("Zero simulation step, using {:?}", SIM_STEP);
            SIM_STEP
        } else {
            step
        };
        let current = SimulationState::new(&mut rng);
        Self {
            previous: current,
            current,
            input: InputVector::default(),
            rng,
            step,
            accumulator: Duration::ZERO,
            last_time: None,
            speed: 1,
        }
    }

    pub fn current(&self) -> &SimulationState {
        &self.current
    }

    pub fn previous(&self) -> &SimulationState {
        &self.previous
    }

    pub fn step_duration(&self) -> Duration {
        self.step
    }

    /// Banked time not yet consumed by a step
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Input used by every step until replaced
    pub fn set_input(&mut self, input: InputVector) {
        self.input = input;
    }

    pub fn input(&self) -> InputVector {
        self.input
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        if speed != self.speed {
            log::debug!("Simulation speed {} -> {}", self.speed, speed);
            self.speed = speed;
        }
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.speed.saturating_add(1));
    }

    pub fn slow_down(&mut self) {
        self.set_speed(self.speed.saturating_sub(1));
    }

    /// Advance to monotonic time `now`.
    ///
    /// The first call only records the time origin. Later calls bank the
    /// elapsed time scaled by the speed and run as many fixed steps as fit.
    pub fn update(&mut self, now: Duration) -> UpdateReport {
        let elapsed = match self.last_time {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        self.last_time = Some(now);
        self.advance(elapsed)
    }

    /// Bank `elapsed` wall-clock time and run the steps it pays for.
    ///
    /// Zero speed banks nothing. Negative speed drains the bank toward zero;
    /// it never runs the simulation backwards.
    pub fn advance(&mut self, elapsed: Duration) -> UpdateReport {
        let scaled = elapsed.saturating_mul(self.speed.unsigned_abs());
        if self.speed >= 0 {
            self.accumulator = self.accumulator.saturating_add(scaled);
        } else {
            self.accumulator = self.accumulator.saturating_sub(scaled);
        }

        let dt = self.step.as_secs_f32();
        let mut report = UpdateReport::default();
        while self.accumulator >= self.step {
            self.previous = self.current;
            let events = advance_one_step(&mut self.current, &self.input, dt, &mut self.rng);
            self.accumulator -= self.step;

            if events.out_of_bounds.is_some() {
                log::debug!("Ball out of bounds: {:?}", events.out_of_bounds);
            }
            if events.respawned {
                log::debug!("Ball respawned");
                report.respawns += 1;
            }
            if events.paddle_hit.is_some() {
                report.paddle_hits += 1;
            }
            report.events.merge(events);
            report.steps += 1;
        }

        if report.steps > 1 {
            log::trace!("Caught up {} steps in one frame", report.steps);
        }
        report
    }

    /// Snapshots and blend factor for the renderer
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            previous: &self.previous,
            current: &self.current,
            blend: self.blend(),
        }
    }

    pub fn blend(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.step.as_secs_f32()
    }
}
