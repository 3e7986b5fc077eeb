//! Pointer press-hold-move-release handling.
//!
//! ```text
//!            press(agent)                 poll(now ≥ fires_at)
//!   Free ─────────────────▶ Pressed ──────────────────────▶ Dragging
//!    ▲                        │  │                              │
//!    │   release → Tap        │  │ leave / cancel               │ release → Drop
//!    └────────────────────────┘  └──────────▶ Free ◀────────────┘
//! ```
//!
//! The controller only tracks which agent the pointer is bound to.  It does
//! not own agents: the [`Sim`](crate::Sim) applies each transition to the
//! agent, and tolerates the agent having vanished in the meantime.

use rk_core::{AgentId, Timestamp, Vec2};

/// Where the single pointer is in its gesture.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Free,
    /// Button down on `agent`; becomes a drag at `fires_at` unless released
    /// or cancelled first.
    Pressed {
        agent:    AgentId,
        pointer:  Vec2,
        fires_at: Timestamp,
    },
    Dragging {
        agent: AgentId,
    },
}

/// What a release means for the bound agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The pointer was not bound to anything.
    Nothing,
    /// Released before the hold elapsed: a click.
    Tap(AgentId),
    /// Released while dragging.
    Drop(AgentId),
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The agent currently bound to the pointer, pressed or dragging.
    pub fn target(&self) -> Option<AgentId> {
        match self.phase {
            DragPhase::Free => None,
            DragPhase::Pressed { agent, .. } | DragPhase::Dragging { agent } => Some(agent),
        }
    }

    /// The agent being dragged, if the hold has elapsed.
    pub fn dragging(&self) -> Option<AgentId> {
        match self.phase {
            DragPhase::Dragging { agent } => Some(agent),
            _ => None,
        }
    }

    /// Arm the press-hold timer.  Ignored (returns `false`) unless the pointer
    /// is free: there is one pointer and it can hold one agent.
    pub fn press(&mut self, agent: AgentId, pointer: Vec2, now: Timestamp, hold_ms: u64) -> bool {
        if self.phase != DragPhase::Free {
            return false;
        }
        self.phase = DragPhase::Pressed {
            agent,
            pointer,
            fires_at: now.offset_ms(hold_ms),
        };
        true
    }

    /// Fire the press-hold timer if due.  Returns the agent and the pointer
    /// position recorded at press time.
    pub fn poll(&mut self, now: Timestamp) -> Option<(AgentId, Vec2)> {
        match self.phase {
            DragPhase::Pressed { agent, pointer, fires_at } if now.reached(fires_at) => {
                self.phase = DragPhase::Dragging { agent };
                Some((agent, pointer))
            }
            _ => None,
        }
    }

    /// Button up.  Always leaves the pointer free.
    pub fn release(&mut self) -> ReleaseOutcome {
        let outcome = match self.phase {
            DragPhase::Free => ReleaseOutcome::Nothing,
            DragPhase::Pressed { agent, .. } => ReleaseOutcome::Tap(agent),
            DragPhase::Dragging { agent } => ReleaseOutcome::Drop(agent),
        };
        self.phase = DragPhase::Free;
        outcome
    }

    /// The pointer left the agent before the hold elapsed: disarm.  An
    /// active drag is unaffected, it follows the pointer anywhere.
    pub fn leave(&mut self) {
        if matches!(self.phase, DragPhase::Pressed { .. }) {
            self.phase = DragPhase::Free;
        }
    }

    /// Forget everything, e.g. on reset.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Free;
    }
}
