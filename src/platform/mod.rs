//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or clock directly. A
//! `Platform` supplies:
//! - Monotonic time
//! - Speed/exit commands
//! - Raw key state
//! - Presentation of each interpolated frame

use std::time::Duration;

use crate::sim::{Frame, InputVector, KeyState, RandomSource, Simulation};

/// Commands from the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the simulation one notch faster
    SpeedUp,
    /// Run the simulation one notch slower (can reach zero and below)
    SlowDown,
    Exit,
}

/// External collaborators driven by `run`
pub trait Platform {
    /// Monotonic time since an arbitrary origin
    fn now(&mut self) -> Duration;
    /// Push any pending commands into `out`
    fn poll_commands(&mut self, out: &mut Vec<Command>);
    /// Which paddle keys are held right now
    fn key_state(&mut self) -> KeyState;
    /// Draw one display frame
    fn present(&mut self, frame: &Frame<'_>);
}

/// Summary of a finished `run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub steps: u64,
    pub paddle_hits: u64,
    pub respawns: u64,
}

/// Outer loop: commands, input, fixed steps, present. Returns once an
/// `Exit` command has been seen; the current iteration still completes.
pub fn run<P, R>(platform: &mut P, simulation: &mut Simulation<R>) -> RunStats
where
    P: Platform,
    R: RandomSource,
{
    let mut stats = RunStats::default();
    let mut commands = Vec::new();
    let mut should_close = false;

    while !should_close {
        commands.clear();
        platform.poll_commands(&mut commands);
        for command in &commands {
            match command {
                Command::Exit => should_close = true,
                Command::SpeedUp => simulation.speed_up(),
                Command::SlowDown => simulation.slow_down(),
            }
        }

        simulation.set_input(InputVector::from_keys(platform.key_state()));

        let report = simulation.update(platform.now());
        stats.frames += 1;
        stats.steps += u64::from(report.steps);
        stats.paddle_hits += u64::from(report.paddle_hits);
        stats.respawns += u64::from(report.respawns);

        platform.present(&simulation.frame());
    }

    log::info!(
        "Stopped after {} frames, {} steps",
        stats.frames,
        stats.steps
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-rate fake display that exits after a number of frames
    struct FakePlatform {
        time: Duration,
        frame_time: Duration,
        frames_left: u32,
        script: Vec<(u32, Command)>,
        frame_index: u32,
        keys: KeyState,
        blends: Vec<f32>,
    }

    impl FakePlatform {
        fn new(frames: u32, frame_time: Duration) -> Self {
            Self {
                time: Duration::ZERO,
                frame_time,
                frames_left: frames,
                script: Vec::new(),
                frame_index: 0,
                keys: KeyState::default(),
                blends: Vec::new(),
            }
        }
    }

    impl Platform for FakePlatform {
        fn now(&mut self) -> Duration {
            let now = self.time;
            self.time += self.frame_time;
            now
        }

        fn poll_commands(&mut self, out: &mut Vec<Command>) {
            for (frame, command) in &self.script {
                if *frame == self.frame_index {
                    out.push(*command);
                }
            }
            if self.frames_left == 0 {
                out.push(Command::Exit);
            } else {
                self.frames_left -= 1;
            }
            self.frame_index += 1;
        }

        fn key_state(&mut self) -> KeyState {
            self.keys
        }

        fn present(&mut self, frame: &Frame<'_>) {
            self.blends.push(frame.blend);
        }
    }

    #[test]
    fn test_run_until_exit() {
        let mut platform = FakePlatform::new(60, Duration::from_millis(10));
        let mut sim = Simulation::with_seed(5);
        let stats = run(&mut platform, &mut sim);

        // The exit frame still runs and presents
        assert_eq!(stats.frames, 61);
        assert_eq!(platform.blends.len(), 61);
        // 600ms of time at 60 Hz
        assert_eq!(stats.steps, 35);
        assert!(platform.blends.iter().all(|b| (0.0..1.0).contains(b)));
    }

    #[test]
    fn test_stats_count_each_step() {
        // One long frame at high speed runs many steps in a single burst
        let mut platform = FakePlatform::new(1, Duration::from_secs(1));
        let mut sim = Simulation::new(crate::sim::ScriptedRandom::new(vec![1, 0], vec![]));
        sim.set_speed(60);
        let stats = run(&mut platform, &mut sim);

        assert_eq!(stats.frames, 2);
        assert!(stats.paddle_hits >= 2);
    }

    #[test]
    fn test_speed_commands() {
        let mut platform = FakePlatform::new(3, Duration::from_millis(10));
        platform.script = vec![(0, Command::SpeedUp), (1, Command::SpeedUp), (2, Command::SlowDown)];
        let mut sim = Simulation::with_seed(5);
        run(&mut platform, &mut sim);
        assert_eq!(sim.speed(), 2);
    }

    #[test]
    fn test_keys_reach_simulation() {
        let mut platform = FakePlatform::new(10, Duration::from_millis(20));
        platform.keys = KeyState {
            right_down: true,
            ..Default::default()
        };
        let mut sim = Simulation::with_seed(5);
        let start = sim.current().right_paddle.y;
        run(&mut platform, &mut sim);
        assert!(sim.current().right_paddle.y > start);
        assert_eq!(sim.input().right_paddle, 1.0);
    }
}
