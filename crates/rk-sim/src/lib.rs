//! `rk-sim` — the host-facing simulation runner.
//!
//! # Tick phases
//!
//! ```text
//! Sim::tick(now):
//!   ① Press-hold  — a press held long enough becomes a drag.
//!   ② Agents      — Agent::update for every agent, in spawn order.
//!   ③ Collisions  — one snapshot of all positions, every pair resolved
//!                   from it (rk_mobility::resolve_collisions).
//!   ④ Clamp       — pushes never leave an agent outside the arena.
//!   ⑤ Render      — one RenderState per agent, handed to the observer
//!                   and returned to the host.
//! ```
//!
//! Spawn, reset, resize, and pointer events arrive between ticks.  The host
//! owns the loop and the clock: `Sim` never reads the time itself.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rk_core::Timestamp;
//! use rk_sim::{SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build();
//! sim.spawn(Timestamp(0));
//! for frame in 1..=600 {
//!     let states = sim.tick(Timestamp(frame * 16));
//!     // draw `states`
//! }
//! ```

pub mod builder;
pub mod config;
pub mod drag;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use drag::{DragController, DragPhase, ReleaseOutcome};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
