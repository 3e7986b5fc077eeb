//! The weighted random decision policy.
//!
//! ```text
//! Standard:  [0, idle)          → idle    (no velocity, idle_duration)
//!            [idle, threshold)  → walk    (walk_speed, decision_interval)
//!            [threshold, 1)     → run     (run_speed,  decision_interval)
//!
//! Devout:    [0, idle)          → contemplating (no velocity, contemplate_duration)
//!            [idle, 1)          → walk
//! ```
//!
//! With the stock config the thresholds are 0.10 and 0.73.

use rk_core::{BehaviorConfig, Vec2};

use crate::{AgentState, Profile};

/// The outcome of one decision: a state and its parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    pub state: AgentState,
    pub speed: f32,
    pub duration_ms: u64,
    /// Heading in radians, `None` for stationary states.
    pub heading: Option<f32>,
}

impl Decision {
    /// Velocity implied by heading and speed; zero for stationary states.
    pub fn velocity(&self) -> Vec2 {
        self.heading
            .map(|angle| Vec2::from_angle(angle, self.speed))
            .unwrap_or(Vec2::ZERO)
    }

    /// Entering this state forces an utterance (devout contemplation).
    pub fn speaks_on_entry(&self) -> bool {
        self.state == AgentState::Contemplating
    }
}

/// Map a uniform `draw` in `[0, 1)` to a decision for `profile`.
///
/// `heading` (radians, normally uniform in `[0, 2π)`) is attached only to
/// moving states.  Pure: the same inputs always give the same decision.
pub fn decide(profile: Profile, draw: f64, heading: f32, cfg: &BehaviorConfig) -> Decision {
    let moving = |state, speed| Decision {
        state,
        speed,
        duration_ms: cfg.decision_interval_ms,
        heading: Some(heading),
    };

    match profile {
        Profile::Standard => {
            if draw < cfg.idle_probability {
                Decision {
                    state:       AgentState::Idle,
                    speed:       0.0,
                    duration_ms: cfg.idle_duration_ms,
                    heading:     None,
                }
            } else if draw < cfg.walk_threshold {
                moving(AgentState::Walk, cfg.walk_speed)
            } else {
                moving(AgentState::Run, cfg.run_speed)
            }
        }
        Profile::Devout => {
            if draw < cfg.idle_probability {
                Decision {
                    state:       AgentState::Contemplating,
                    speed:       0.0,
                    duration_ms: cfg.contemplate_duration_ms,
                    heading:     None,
                }
            } else {
                moving(AgentState::Walk, cfg.walk_speed)
            }
        }
    }
}
