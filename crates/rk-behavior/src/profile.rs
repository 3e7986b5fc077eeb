//! Behaviour profiles.
//!
//! A [`Profile`] picks the decision table, the message table, and a handful
//! of drag/animation overrides.  The state machine itself is shared.

use std::fmt;

use rk_core::BehaviorConfig;

use crate::AgentState;

/// Which behaviour and message tables an agent uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Profile {
    /// Wanders, runs, idles, chatters.
    #[default]
    Standard,
    /// Never runs; occasionally stops to contemplate and preaches about it.
    Devout,
}

impl Profile {
    /// Profile for a fresh spawn given a uniform draw in `[0, 1)`.
    pub fn for_spawn(draw: f64, cfg: &BehaviorConfig) -> Profile {
        if draw < cfg.devout_spawn_chance {
            Profile::Devout
        } else {
            Profile::Standard
        }
    }

    /// State entered when the pointer lets go, and how long it lasts before
    /// the next autonomous decision.
    pub fn after_drop(self, cfg: &BehaviorConfig) -> (AgentState, u64) {
        match self {
            Profile::Standard => (AgentState::Idle, cfg.drop_idle_ms),
            Profile::Devout => (AgentState::Contemplating, cfg.drop_contemplate_ms),
        }
    }

    /// Independent drag-utterance rolls made when a drag begins.  The devout
    /// pleads on top of the shared roll, so it rolls twice.
    pub fn drag_speech_rolls(self) -> u32 {
        match self {
            Profile::Standard => 1,
            Profile::Devout => 2,
        }
    }

    /// Whether the agent may speak unprompted while in `state`.
    pub fn speaks_unprompted(self, state: AgentState) -> bool {
        match self {
            Profile::Standard => true,
            Profile::Devout => state != AgentState::Contemplating,
        }
    }

    /// Whether `state` uses a single-frame pose for this profile.
    pub fn pins_frame(self, state: AgentState) -> bool {
        match self {
            Profile::Standard => false,
            Profile::Devout => matches!(state, AgentState::Contemplating | AgentState::Dragging),
        }
    }

    /// Sprite-sheet key the renderer should show for `state`.
    pub fn sprite(self, state: AgentState) -> &'static str {
        match (self, state) {
            (Profile::Standard, AgentState::Walk) => "walk",
            (Profile::Standard, AgentState::Run | AgentState::Dragging) => "run",
            (Profile::Standard, AgentState::Idle | AgentState::Contemplating) => "idle",
            (Profile::Devout, AgentState::Contemplating | AgentState::Dragging) => "devout_pray",
            (Profile::Devout, _) => "devout_walk",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Profile::Standard => "standard",
            Profile::Devout => "devout",
        };
        f.write_str(s)
    }
}
