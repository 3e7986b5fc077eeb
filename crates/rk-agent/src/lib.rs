//! `rk-agent` — one simulated creature and its state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`agent`]     | `Agent` — timers, decisions, drag hooks, speech triggering  |
//! | [`animation`] | `Animation` — two-frame sprite timer                        |
//! | [`render`]    | `RenderState` — what the host draws each frame               |
//!
//! # Per-tick order
//!
//! ```text
//! Agent::update(now, arena, scale):
//!   held by pointer → animate, expire speech, stop
//!   ① deadline reached   → roll a new Decision
//!   ② resting            → idle_flip     moving → integrate (walls reflect)
//!   ③ expire speech, animate
//!   ④ maybe speak unprompted
//! ```
//!
//! Collisions are not resolved here.  They need every agent at once, so the
//! owner of the collection runs them after all agents have updated.

pub mod agent;
pub mod animation;
pub mod render;


pub use agent::Agent;
pub use animation::Animation;
pub use render::RenderState;
