//! Strongly typed agent identifier.
//!
//! Ids are handed out sequentially by the simulation and never reused, even
//! across a reset, so a stale id held by the host can never alias a newer
//! agent.

use std::fmt;

/// Opaque identity of one agent.  Assigned at spawn, immutable afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    pub const FIRST: AgentId = AgentId(0);

    /// The id following `self`.  Wraps at `u32::MAX`, which no session reaches.
    #[inline]
    pub fn next(self) -> AgentId {
        AgentId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
