//! The `Agent` entity.
//!
//! # Timers
//!
//! An agent owns three absolute timestamps and nothing else that expires:
//!
//! - `deadline`: when the current state ends and [`Agent::decide`] runs.
//! - `state_since`: start of the current state; the idle-flip phase is
//!   measured from it.
//! - the live utterance's `expires_at`, held by its [`SpeechSlot`].
//!
//! Dropping the agent drops all of them.  Nothing can fire afterwards.
//!
//! # Manual control
//!
//! While `manual` is set the agent is [`AgentState::Dragging`]: it does not
//! decide, move, or take part in collisions.  Only the drag hooks
//! ([`begin_drag`](Agent::begin_drag), [`drag_to`](Agent::drag_to),
//! [`drop`](Agent::drop)) change its position.

use rk_behavior::{
    AgentState, Decision, Placement, Profile, SpeechRequest, SpeechSlot, SpeechTopic, Utterance,
    decide,
};
use rk_core::{AgentId, AgentRng, Arena, BehaviorConfig, Facing, Timestamp, Vec2};
use rk_mobility::{BodyRole, Collider, Kinematics, idle_flip, integrate};
use tracing::{debug, trace};

use crate::{Animation, RenderState};

/// One simulated creature.
pub struct Agent {
    id: AgentId,
    profile: Profile,
    kin: Kinematics,
    state: AgentState,
    speed: f32,

    state_since: Timestamp,
    deadline: Timestamp,
    idle_phase: u64,

    manual: bool,
    /// Pointer minus anchor, captured when the drag begins.
    drag_offset: Vec2,

    speech: SpeechSlot,
    animation: Animation,
    rng: AgentRng,
}

impl Agent {
    /// A walking agent at `position` whose deadline has already passed.
    ///
    /// The caller is expected to run [`decide`](Self::decide) before the
    /// first tick so the agent starts with a freshly rolled behaviour.
    pub fn new(id: AgentId, profile: Profile, position: Vec2, rng: AgentRng) -> Self {
        Self {
            id,
            profile,
            kin: Kinematics::at(position),
            state: AgentState::Walk,
            speed: 0.0,
            state_since: Timestamp::ZERO,
            deadline: Timestamp::ZERO,
            idle_phase: 0,
            manual: false,
            drag_offset: Vec2::ZERO,
            speech: SpeechSlot::new(),
            animation: Animation::default(),
            rng,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.kin.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.kin.velocity
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.kin.facing
    }

    /// Speed of the current behaviour (0 while resting or held).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn deadline(&self) -> Timestamp {
        self.deadline
    }

    /// `true` while the pointer holds this agent.
    #[inline]
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    #[inline]
    pub fn frame(&self) -> u8 {
        self.animation.frame()
    }

    /// The utterance showing at `now`.
    pub fn utterance(&self, now: Timestamp) -> Option<&Utterance> {
        self.speech.current(now)
    }

    // ── Autonomous behaviour ──────────────────────────────────────────────

    /// Roll a new behaviour and enter it.
    ///
    /// Sets velocity from the decision's heading (zero for resting states)
    /// and resets the state timers.  Entering contemplation forces the
    /// sermon; that utterance is returned.  Does nothing while held.
    pub fn decide(
        &mut self,
        now:   Timestamp,
        arena: Arena,
        cfg:   &BehaviorConfig,
    ) -> Option<Utterance> {
        if self.manual {
            return None;
        }
        let draw = self.rng.draw();
        let heading = self.rng.heading();
        let decision = decide(self.profile, draw, heading, cfg);
        self.apply(decision, now);

        debug!(
            agent = %self.id,
            profile = %self.profile,
            state = %decision.state,
            until = %self.deadline,
            "decision"
        );

        if decision.speaks_on_entry() {
            self.say(SpeechTopic::Contemplate, true, now, arena, cfg)
        } else {
            None
        }
    }

    fn apply(&mut self, decision: Decision, now: Timestamp) {
        self.enter(decision.state, now, decision.duration_ms);
        self.speed = decision.speed;
        self.kin.set_velocity(decision.velocity());
    }

    fn enter(&mut self, state: AgentState, now: Timestamp, duration_ms: u64) {
        self.state = state;
        self.state_since = now;
        self.deadline = now.offset_ms(duration_ms);
        self.idle_phase = 0;
    }

    /// Advance one tick.  Returns the utterance started this tick, if any.
    ///
    /// Collisions are resolved by the caller afterwards.
    pub fn update(
        &mut self,
        now:   Timestamp,
        arena: Arena,
        scale: f32,
        cfg:   &BehaviorConfig,
    ) -> Option<Utterance> {
        self.speech.expire(now);

        if self.manual {
            self.animation.advance(self.profile, self.state, cfg);
            return None;
        }

        let mut spoken = None;
        if now.reached(self.deadline) {
            spoken = self.decide(now, arena, cfg);
        }

        let size = cfg.scaled_size(scale);
        if self.state.is_resting() {
            let elapsed = now.since(self.state_since);
            if idle_flip(&mut self.kin.facing, &mut self.idle_phase, elapsed, cfg.idle_flip_interval_ms) {
                trace!(agent = %self.id, facing = %self.kin.facing, "idle flip");
            }
        } else if self.state.is_moving() {
            let bounce = integrate(&mut self.kin, arena, size);
            if bounce.any() {
                trace!(agent = %self.id, x = bounce.x, y = bounce.y, "wall bounce");
            }
        }

        self.animation.advance(self.profile, self.state, cfg);

        if self.profile.speaks_unprompted(self.state) && self.rng.gen_bool(cfg.auto_speech_chance) {
            let topic = self.state.into();
            spoken = self.say(topic, false, now, arena, cfg).or(spoken);
        }
        spoken
    }

    /// Pull the position back into the arena, e.g. after a collision push or
    /// a resize.
    pub fn clamp_into(&mut self, arena: Arena, scale: f32, cfg: &BehaviorConfig) {
        self.kin.clamp_into(arena, cfg.scaled_size(scale));
    }

    // ── Pointer hooks ─────────────────────────────────────────────────────

    /// The press-hold elapsed: take manual control.
    ///
    /// Velocity is zeroed and the pointer's offset from the anchor captured
    /// so the sprite does not jump.  The profile's drag rolls may make the
    /// agent cry out; the last utterance started is returned.
    pub fn begin_drag(
        &mut self,
        pointer: Vec2,
        now:     Timestamp,
        arena:   Arena,
        cfg:     &BehaviorConfig,
    ) -> Option<Utterance> {
        self.manual = true;
        self.enter(AgentState::Dragging, now, 0);
        self.speed = 0.0;
        self.kin.stop();
        self.drag_offset = pointer - self.kin.position;
        debug!(agent = %self.id, offset = %self.drag_offset, "drag start");

        let mut spoken = None;
        for _ in 0..self.profile.drag_speech_rolls() {
            if self.rng.gen_bool(cfg.drag_speech_chance) {
                spoken = self.say(SpeechTopic::Drag, true, now, arena, cfg).or(spoken);
            }
        }
        spoken
    }

    /// Follow the pointer, keeping the captured offset, clamped to the arena.
    /// Ignored unless held.
    pub fn drag_to(&mut self, pointer: Vec2, arena: Arena, scale: f32, cfg: &BehaviorConfig) {
        if !self.manual {
            return;
        }
        self.kin.position = arena.clamp(pointer - self.drag_offset, cfg.scaled_size(scale));
    }

    /// Let go.  The agent rests for the profile's post-drop duration and
    /// always speaks.  Returns `None` without effect unless held.
    pub fn drop(
        &mut self,
        now:   Timestamp,
        arena: Arena,
        cfg:   &BehaviorConfig,
    ) -> Option<Utterance> {
        if !self.manual {
            return None;
        }
        self.manual = false;
        self.drag_offset = Vec2::ZERO;
        let (state, duration_ms) = self.profile.after_drop(cfg);
        self.enter(state, now, duration_ms);
        self.speed = 0.0;
        self.kin.stop();
        debug!(agent = %self.id, state = %state, until = %self.deadline, "drop");

        self.say(SpeechTopic::Drop, true, now, arena, cfg)
    }

    /// A press released before the hold elapsed.
    pub fn tap(&mut self, now: Timestamp, arena: Arena, cfg: &BehaviorConfig) -> Option<Utterance> {
        if self.manual {
            return None;
        }
        self.speak(None, now, arena, cfg)
    }

    // ── Speech ────────────────────────────────────────────────────────────

    /// Try to speak about `forced`, or about the current state if `None`.
    ///
    /// An unforced call yields to a live utterance; a forced one replaces it.
    pub fn speak(
        &mut self,
        forced: Option<SpeechTopic>,
        now:    Timestamp,
        arena:  Arena,
        cfg:    &BehaviorConfig,
    ) -> Option<Utterance> {
        match forced {
            Some(topic) => self.say(topic, true, now, arena, cfg),
            None => {
                let topic = self.state.into();
                self.say(topic, false, now, arena, cfg)
            }
        }
    }

    fn say(
        &mut self,
        topic:  SpeechTopic,
        forced: bool,
        now:    Timestamp,
        arena:  Arena,
        cfg:    &BehaviorConfig,
    ) -> Option<Utterance> {
        let request = SpeechRequest {
            topic,
            forced,
            now,
            placement: Placement::from_ratio(arena.normalized_x(self.kin.position.x)),
        };
        let spoken = self.speech.speak(self.profile, request, &mut self.rng, cfg).cloned();
        if let Some(u) = &spoken {
            debug!(agent = %self.id, ?topic, text = u.text, until = %u.expires_at, "utterance");
        }
        spoken
    }

    // ── Output ────────────────────────────────────────────────────────────

    pub fn render_state(&self, now: Timestamp) -> RenderState {
        RenderState {
            id:        self.id,
            position:  self.kin.position,
            facing:    self.kin.facing,
            state:     self.state,
            profile:   self.profile,
            sprite:    self.profile.sprite(self.state),
            frame:     self.animation.frame(),
            utterance: self.speech.current(now).cloned(),
        }
    }
}

impl Collider for Agent {
    fn role(&self) -> BodyRole {
        if self.manual {
            BodyRole::Held
        } else {
            self.state.into()
        }
    }

    fn kinematics(&self) -> &Kinematics {
        &self.kin
    }

    fn kinematics_mut(&mut self) -> &mut Kinematics {
        &mut self.kin
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("state", &self.state)
            .field("position", &self.kin.position)
            .field("velocity", &self.kin.velocity)
            .field("deadline", &self.deadline)
            .field("manual", &self.manual)
            .finish_non_exhaustive()
    }
}
