//! The `Sim` struct and its tick loop.

use rk_agent::{Agent, RenderState};
use rk_behavior::Profile;
use rk_core::{AgentId, AgentRng, Arena, BehaviorConfig, SimRng, Timestamp, Vec2};
use rk_mobility::resolve_collisions;
use tracing::{debug, info, trace};

use crate::drag::{DragController, DragPhase, ReleaseOutcome};
use crate::{NoopObserver, SimConfig, SimError, SimObserver, SimResult};

/// The simulation runner.
///
/// Owns the agent collection exclusively.  Membership changes only through
/// [`spawn`](Self::spawn) and [`reset`](Self::reset), both called between
/// ticks, so the collision pass always sees a stable set.
///
/// Pointer coordinates are arena coordinates: the host subtracts the arena's
/// on-screen origin and does hit-testing before calling [`press`](Self::press).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<O: SimObserver = NoopObserver> {
    pub(crate) config:   SimConfig,
    pub(crate) arena:    Arena,
    pub(crate) scale:    f32,
    /// Spawn order.  Ids are never reused, even across a reset.
    pub(crate) agents:   Vec<Agent>,
    pub(crate) next_id:  AgentId,
    pub(crate) rng:      SimRng,
    pub(crate) drag:     DragController,
    pub(crate) observer: O,
}

impl<O: SimObserver> Sim<O> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn behavior(&self) -> &BehaviorConfig {
        &self.config.behavior
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Create one agent, devout with probability `devout_spawn_chance`.
    pub fn spawn(&mut self, now: Timestamp) -> AgentId {
        let profile = Profile::for_spawn(self.rng.draw(), &self.config.behavior);
        self.spawn_profile(profile, now)
    }

    /// Create one agent of `profile` at a uniformly random valid position,
    /// with a freshly rolled decision.
    pub fn spawn_profile(&mut self, profile: Profile, now: Timestamp) -> AgentId {
        let cfg = &self.config.behavior;
        let max = self.arena.max_position(cfg.scaled_size(self.scale));
        let position = Vec2::new(
            (self.rng.draw() * f64::from(max.x)) as f32,
            (self.rng.draw() * f64::from(max.y)) as f32,
        );

        let id = self.next_id;
        self.next_id = id.next();

        let mut agent = Agent::new(id, profile, position, AgentRng::new(self.config.seed, id));
        let spoken = agent.decide(now, self.arena, cfg);
        info!(agent = %id, %profile, %position, state = %agent.state(), "spawn");

        self.observer.on_spawn(&agent);
        if let Some(u) = spoken {
            self.observer.on_utterance(id, &u);
        }
        self.agents.push(agent);
        id
    }

    /// Remove every agent.  Their timers go with them, and an in-progress
    /// press or drag is forgotten.
    pub fn reset(&mut self) {
        let removed = self.agents.len();
        self.agents.clear();
        self.drag.cancel();
        info!(removed, "reset");
        self.observer.on_reset(removed);
    }

    // ── Host inputs ───────────────────────────────────────────────────────

    /// The arena changed size.  Agents are clamped into the new bounds now,
    /// not on their next move.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        debug!(width = self.arena.width, height = self.arena.height, "resize");
        self.clamp_all();
    }

    /// The global scale changed.  Clamped into the configured range; affects
    /// sprite bounds and collision radius for every agent immediately.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = self.config.behavior.clamp_scale(scale);
        debug!(requested = scale, scale = self.scale, "scale");
        self.clamp_all();
    }

    fn clamp_all(&mut self) {
        let cfg = &self.config.behavior;
        for agent in &mut self.agents {
            agent.clamp_into(self.arena, self.scale, cfg);
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every agent by one frame and return what to draw.
    pub fn tick(&mut self, now: Timestamp) -> Vec<RenderState> {
        self.observer.on_tick_start(now);

        // ── Phase 1: press-hold timer ─────────────────────────────────────
        self.poll_drag(now);

        // ── Phase 2: per-agent update ─────────────────────────────────────
        let cfg = &self.config.behavior;
        for agent in &mut self.agents {
            if let Some(u) = agent.update(now, self.arena, self.scale, cfg) {
                self.observer.on_utterance(agent.id(), &u);
            }
        }

        // ── Phase 3: collisions from one post-movement snapshot ───────────
        let radius = cfg.collision_radius(self.scale);
        let contacts = resolve_collisions(&mut self.agents, radius);
        if !contacts.is_empty() {
            for c in &contacts {
                trace!(
                    a = %self.agents[c.first].id(),
                    b = %self.agents[c.second].id(),
                    distance = c.distance,
                    "contact"
                );
            }
            self.observer.on_contacts(now, &contacts);
        }

        // ── Phase 4: clamp ────────────────────────────────────────────────
        self.clamp_all();

        // ── Phase 5: render ───────────────────────────────────────────────
        let states: Vec<RenderState> = self.agents.iter().map(|a| a.render_state(now)).collect();
        self.observer.on_tick_end(now, &states);
        states
    }

    /// Run `frames` ticks, `frame_ms` apart, the first at `start`.  Returns
    /// the render states of the last tick and the time after it.
    pub fn run_frames(
        &mut self,
        start:    Timestamp,
        frame_ms: u64,
        frames:   u64,
    ) -> (Vec<RenderState>, Timestamp) {
        let mut now = start;
        let mut states = Vec::new();
        for _ in 0..frames {
            states = self.tick(now);
            now = now.offset_ms(frame_ms);
        }
        (states, now)
    }

    // ── Pointer events ────────────────────────────────────────────────────

    /// Button down on `agent` at `pointer`.
    ///
    /// Errors if `agent` does not exist.  A press while another gesture is in
    /// progress, or on an agent already held, is ignored.
    pub fn press(&mut self, agent: AgentId, pointer: Vec2, now: Timestamp) -> SimResult<()> {
        let held = self
            .agent(agent)
            .ok_or(SimError::AgentNotFound(agent))?
            .is_manual();
        if held {
            return Ok(());
        }
        if self.drag.press(agent, pointer, now, self.config.behavior.press_hold_ms) {
            debug!(%agent, %pointer, %now, "press");
        }
        Ok(())
    }

    /// Pointer moved.  Only matters while dragging.
    pub fn pointer_move(&mut self, pointer: Vec2) {
        let Some(id) = self.drag.dragging() else {
            return;
        };
        let (arena, scale) = (self.arena, self.scale);
        let cfg = &self.config.behavior;
        if let Some(agent) = find_mut(&mut self.agents, id) {
            agent.drag_to(pointer, arena, scale, cfg);
        }
    }

    /// Button up, anywhere.
    ///
    /// A hold that has already elapsed counts as a drag even if no tick ran
    /// in between.  A target that vanished (reset) is silently skipped.
    pub fn release(&mut self, now: Timestamp) {
        self.poll_drag(now);
        let outcome = self.drag.release();
        let arena = self.arena;
        let cfg = &self.config.behavior;
        let (id, spoken) = match outcome {
            ReleaseOutcome::Nothing => return,
            ReleaseOutcome::Tap(id) => {
                (id, find_mut(&mut self.agents, id).and_then(|a| a.tap(now, arena, cfg)))
            }
            ReleaseOutcome::Drop(id) => {
                (id, find_mut(&mut self.agents, id).and_then(|a| a.drop(now, arena, cfg)))
            }
        };
        debug!(?outcome, %now, "release");
        if let Some(u) = spoken {
            self.observer.on_utterance(id, &u);
        }
    }

    /// Pointer left the pressed agent before the hold elapsed.
    pub fn pointer_leave(&mut self) {
        self.drag.leave();
    }

    fn poll_drag(&mut self, now: Timestamp) {
        let Some((id, pointer)) = self.drag.poll(now) else {
            return;
        };
        let arena = self.arena;
        let cfg = &self.config.behavior;
        let Some(agent) = find_mut(&mut self.agents, id) else {
            self.drag.cancel();
            return;
        };
        if let Some(u) = agent.begin_drag(pointer, now, arena, cfg) {
            self.observer.on_utterance(id, &u);
        }
    }
}

fn find_mut(agents: &mut [Agent], id: AgentId) -> Option<&mut Agent> {
    agents.iter_mut().find(|a| a.id() == id)
}
