//! Two-frame sprite animation.

use rk_behavior::{AgentState, Profile};
use rk_core::BehaviorConfig;

/// Counts ticks and toggles between frame 0 and frame 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    frame: u8,
    timer: u32,
}

impl Animation {
    #[inline]
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Advance by one tick.
    ///
    /// Running and dragged agents toggle every `run_frame_interval + 1` ticks,
    /// everyone else every `walk_frame_interval + 1`.  A pinned pose (see
    /// [`Profile::pins_frame`]) holds frame 0 and does not count.
    pub fn advance(&mut self, profile: Profile, state: AgentState, cfg: &BehaviorConfig) {
        if profile.pins_frame(state) {
            self.frame = 0;
            return;
        }
        self.timer += 1;
        let interval = match state {
            AgentState::Run | AgentState::Dragging => cfg.run_frame_interval,
            _ => cfg.walk_frame_interval,
        };
        if self.timer > interval {
            self.frame = 1 - self.frame;
            self.timer = 0;
        }
    }
}
