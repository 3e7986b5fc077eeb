//! The behaviour state enum.

use std::fmt;

/// What an agent is doing.  Exactly one holds at any instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Walk,
    Run,
    Idle,
    /// Held by the pointer.  Autonomous logic is suspended.
    Dragging,
    /// Devout-only resting state.
    Contemplating,
}

impl AgentState {
    /// States that integrate velocity into position.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, AgentState::Walk | AgentState::Run)
    }

    /// States that stand still and periodically flip facing.  Collisions push
    /// these agents but never give them velocity.
    #[inline]
    pub fn is_resting(self) -> bool {
        matches!(self, AgentState::Idle | AgentState::Contemplating)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Walk => "walk",
            AgentState::Run => "run",
            AgentState::Idle => "idle",
            AgentState::Dragging => "dragging",
            AgentState::Contemplating => "contemplating",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
