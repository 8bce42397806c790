//! Simple Pong entry point
//!
//! Windowing and keyboard backends live outside this crate. The native binary
//! drives the simulation through a headless platform: a simulated display
//! clock, scripted key presses and CPU-side vertex generation.

use std::path::PathBuf;
use std::time::Duration;

use simple_pong::Settings;
use simple_pong::platform::{self, Command, Platform};
use simple_pong::renderer;
use simple_pong::sim::{Frame, KeyState, Simulation};

/// Pretend display running at a fixed refresh rate
struct HeadlessPlatform {
    frame_time: Duration,
    elapsed: Duration,
    frames_left: u64,
    frame: u64,
    vertices: usize,
}

impl HeadlessPlatform {
    fn new(settings: &Settings) -> Self {
        Self {
            frame_time: Duration::from_secs_f32(settings.frame_seconds()),
            elapsed: Duration::ZERO,
            frames_left: settings.frame_count(),
            frame: 0,
            vertices: 0,
        }
    }
}

impl Platform for HeadlessPlatform {
    fn now(&mut self) -> Duration {
        self.elapsed
    }

    fn poll_commands(&mut self, out: &mut Vec<Command>) {
        if self.frames_left == 0 {
            out.push(Command::Exit);
        } else {
            self.frames_left -= 1;
        }
    }

    fn key_state(&mut self) -> KeyState {
        // Sweep each paddle up and down on its own period
        let t = self.elapsed.as_secs_f32();
        let left = (t * 1.3).sin();
        let right = (t * 0.9 + 1.0).sin();
        KeyState {
            left_up: left < -0.2,
            left_down: left > 0.2,
            right_up: right < -0.2,
            right_down: right > 0.2,
        }
    }

    fn present(&mut self, frame: &Frame<'_>) {
        let rendered = renderer::interpolate(frame);
        self.vertices = rendered.vertices().len();

        let per_second = (1.0 / self.frame_time.as_secs_f32()).round().max(1.0) as u64;
        if self.frame % per_second == 0 {
            log::debug!(
                "frame {}: ball ({:.1}, {:.1}) speed x{:.1} timeout {:.2} ({} vertices)",
                self.frame,
                rendered.ball.x,
                rendered.ball.y,
                frame.current.speed_multiplier,
                frame.current.timeout,
                self.vertices,
            );
        }
        self.frame += 1;
        self.elapsed += self.frame_time;
    }
}

fn main() {
    env_logger::init();
    log::info!("Simple Pong (headless) starting...");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = settings.effective_seed();
    log::info!("Seed: {}", seed);

    let mut simulation = Simulation::with_seed(seed);
    simulation.set_speed(settings.simulation_speed);

    let mut headless = HeadlessPlatform::new(&settings);
    let stats = platform::run(&mut headless, &mut simulation);

    let state = simulation.current();
    log::info!(
        "Paddle hits: {}, respawns: {}, final speed multiplier: {:.1}",
        stats.paddle_hits,
        stats.respawns,
        state.speed_multiplier
    );
    println!(
        "{} frames, {} steps, {} paddle hits, {} respawns",
        stats.frames, stats.steps, stats.paddle_hits, stats.respawns
    );
}
