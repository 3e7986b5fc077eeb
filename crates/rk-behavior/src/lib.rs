//! `rk-behavior` — what an agent decides to do and what it says.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`state`]    | `AgentState` — the five mutually exclusive behaviour states      |
//! | [`profile`]  | `Profile` — default vs. devout tables and their overrides        |
//! | [`decision`] | `Decision`, `decide` — weighted random behaviour policy          |
//! | [`speech`]   | `SpeechSlot`, `Utterance`, `Placement` — transient speech bubbles |
//!
//! # Design notes
//!
//! The devout creature is not a subtype.  Every place where it behaves
//! differently is a `match` on [`Profile`], so adding a behaviour hook means
//! the compiler points at every profile that has to answer it.
//!
//! All random choices take explicit uniform draws in `[0, 1)`.  Callers pass
//! `rng.draw()`; tests pass constants.

pub mod decision;
pub mod profile;
pub mod speech;
pub mod state;


pub use decision::{Decision, decide};
pub use profile::Profile;
pub use speech::{Line, Placement, SpeechRequest, SpeechSlot, SpeechTopic, Utterance, compose};
pub use state::AgentState;
