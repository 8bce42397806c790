//! Random source used by serve, bounce and the colour easter egg
//!
//! Every random decision in the simulation goes through `RandomSource`, so a
//! seeded `GameRng` replays a match exactly and tests can script the draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Rgb;
use crate::consts::{EASTER_EGG_CHANNEL_MIN, MAX_BOUNCE_DEGREES};

/// Source of uniform random numbers
pub trait RandomSource {
    /// Uniform float in [0, 1)
    fn next_f32(&mut self) -> f32;
    /// Uniform integer in [low, high)
    fn range_i32(&mut self, low: i32, high: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }

    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        (**self).range_i32(low, high)
    }
}

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..high)
    }
}

/// Replays fixed sequences of draws, cycling when exhausted
///
/// An empty sequence yields `0.0` for floats and `low` for integers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    floats: Vec<f32>,
    ints: Vec<i32>,
    next_float: usize,
    next_int: usize,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<i32>, floats: Vec<f32>) -> Self {
        Self {
            floats,
            ints,
            next_float: 0,
            next_int: 0,
        }
    }

    /// Number of integer draws made so far
    pub fn int_draws(&self) -> usize {
        self.next_int
    }

    /// Number of float draws made so far
    pub fn float_draws(&self) -> usize {
        self.next_float
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        if self.floats.is_empty() {
            self.next_float += 1;
            return 0.0;
        }
        let value = self.floats[self.next_float % self.floats.len()];
        self.next_float += 1;
        value
    }

    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if self.ints.is_empty() {
            self.next_int += 1;
            return low;
        }
        let value = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        value.clamp(low, high - 1)
    }
}

/// Whole-degree bounce angle in [-45, 45)
pub fn random_angle_degrees<R: RandomSource>(rng: &mut R) -> f32 {
    rng.range_i32(-MAX_BOUNCE_DEGREES, MAX_BOUNCE_DEGREES) as f32
}

/// -1 or +1 with equal probability
pub fn random_horizontal_sign<R: RandomSource>(rng: &mut R) -> f32 {
    if rng.range_i32(0, 2) == 0 { -1.0 } else { 1.0 }
}

/// Muted colour for the corner-hit easter egg, channels in [0.25, 0.75]
pub fn random_colour<R: RandomSource>(rng: &mut R) -> Rgb {
    let r = EASTER_EGG_CHANNEL_MIN + rng.next_f32() / 2.0;
    let g = EASTER_EGG_CHANNEL_MIN + rng.next_f32() / 2.0;
    let b = EASTER_EGG_CHANNEL_MIN + rng.next_f32() / 2.0;
    Rgb::new(r, g, b)
}
