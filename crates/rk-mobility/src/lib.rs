//! `rk-mobility` — how agents move and bump into each other.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`state`]      | `Kinematics` — position, velocity, facing                    |
//! | [`integrator`] | `integrate` (walls reflect), `idle_flip` (resting agents)     |
//! | [`collision`]  | `Collider`, `BodyRole`, `resolve_collisions`, `separation`   |
//!
//! # Movement model (per-frame Euler)
//!
//! Velocity is in arena units per tick; `integrate` adds it once per tick.
//! There is no `dt` scaling: the host's frame rate is the simulation rate.
//! Walls reflect the offending velocity component and clamp the position.
//!
//! # Collisions
//!
//! All pairs are tested (O(n²)).  Agent counts are in the tens, so a spatial
//! index would cost more than it saves; past a few hundred agents this is the
//! first thing to replace.

pub mod collision;
pub mod integrator;
pub mod state;


pub use collision::{BodyRole, Collider, Contact, resolve_collisions, separation};
pub use integrator::{Bounce, idle_flip, integrate};
pub use state::Kinematics;
