//! Per-frame output handed to the rendering collaborator.

use rk_behavior::{AgentState, Profile, Utterance};
use rk_core::{AgentId, Facing, Vec2};

/// Everything the host needs to draw one agent.  A snapshot: holding it does
/// not borrow the agent.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub id: AgentId,
    /// Top-left anchor of the sprite.
    pub position: Vec2,
    pub facing: Facing,
    pub state: AgentState,
    pub profile: Profile,
    /// Sprite-sheet key, see [`Profile::sprite`].
    pub sprite: &'static str,
    /// 0 or 1.
    pub frame: u8,
    /// Live speech bubble, if any.
    pub utterance: Option<Utterance>,
}

impl RenderState {
    /// Text of the live bubble.
    pub fn speech(&self) -> Option<&'static str> {
        self.utterance.as_ref().map(|u| u.text)
    }
}
