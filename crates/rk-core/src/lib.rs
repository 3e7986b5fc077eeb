//! `rk-core` — foundational types for the ratkin agent simulation.
//!
//! This crate is a dependency of every other `rk-*` crate.  It has no `rk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Vec2`, `Facing`, `Arena`                             |
//! | [`time`]        | `Timestamp` (host wall clock, milliseconds)           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (spawn-level)        |
//! | [`config`]      | `BehaviorConfig` — every tunable constant             |
//! | [`error`]       | `RkError`, `RkResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BehaviorConfig;
pub use error::{RkError, RkResult};
pub use geo::{Arena, Facing, Vec2};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Timestamp;
