//! Seeded per-agent and simulation-level RNG wrappers.
//!
//! # Seeding strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents never share RNG state, so the order in which the host ticks them
//! does not change what any single agent draws.  This is a testing aid, not a
//! replay guarantee: wall-clock timestamps still come from the host.

use std::f32::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent RNG.  Owned by the agent; never shared.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed from the session's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniform draw in `[0, 1)`.  Decision tables and message pickers are
    /// written against this so tests can substitute fixed draws.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// A uniform heading in `[0, 2π)`.
    #[inline]
    pub fn heading(&mut self) -> f32 {
        self.0.gen_range(0.0..TAU)
    }

    /// `true` with probability `p` (clamped to [0, 1]; NaN counts as 0).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for spawn decisions (profile roll, initial position).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.0.r#gen()
    }
}
