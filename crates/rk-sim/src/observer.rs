//! Simulation observer trait for logging and data collection.

use rk_agent::{Agent, RenderState};
use rk_behavior::Utterance;
use rk_core::{AgentId, Timestamp};
use rk_mobility::Contact;

/// Callbacks invoked by [`Sim`][crate::Sim] as things happen.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — speech log
///
/// ```rust,ignore
/// struct SpeechLog(Vec<(AgentId, &'static str)>);
///
/// impl SimObserver for SpeechLog {
///     fn on_utterance(&mut self, agent: AgentId, utterance: &Utterance) {
///         self.0.push((agent, utterance.text));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _now: Timestamp) {}

    /// Called after an agent is created and has rolled its first decision.
    fn on_spawn(&mut self, _agent: &Agent) {}

    /// Called after a reset removed `removed` agents.
    fn on_reset(&mut self, _removed: usize) {}

    /// Called whenever an agent starts a new utterance, whether from a tick,
    /// a decision, or a pointer event.
    fn on_utterance(&mut self, _agent: AgentId, _utterance: &Utterance) {}

    /// Called when a tick's collision pass found overlapping pairs.  Indices
    /// refer to [`Sim::agents`][crate::Sim::agents].
    fn on_contacts(&mut self, _now: Timestamp, _contacts: &[Contact]) {}

    /// Called at the end of each tick with what the host is about to draw.
    fn on_tick_end(&mut self, _now: Timestamp, _agents: &[RenderState]) {}
}

/// A [`SimObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
