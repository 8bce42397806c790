//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected random source only
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod input;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{BallBounds, Hits, Side};
pub use driver::{Frame, Simulation, UpdateReport};
pub use input::{InputVector, KeyState};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use state::{Ball, SimulationState, setup};
pub use tick::{StepReport, advance_one_step};
