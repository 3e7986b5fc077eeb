//! The utterance subsystem: one transient speech bubble per agent.
//!
//! # Rules
//!
//! - A live utterance blocks unprompted speech.  A *forced* topic (drag,
//!   drop, contemplation) replaces whatever is showing.
//! - Standard agents draw from the common pool plus the topic's pool, except
//!   drag and drop, which have their own exclusive pools.
//! - Devout agents have one fixed line per special topic and an occasional
//!   filler otherwise; there is no common pool.
//! - Expiry is an absolute timestamp.  A replaced utterance simply stops
//!   existing, so no stale expiry can clear its successor.

use rk_core::{AgentRng, BehaviorConfig, Timestamp};

use crate::{AgentState, Profile};

// ── Message tables ────────────────────────────────────────────────────────────

const COMMON: &[&str] = &[
    "Hi there! 👋",
    "Got any cheese? 🧀",
    "Lovely weather today! ☀️",
    "Sniff sniff... 👃",
    "Squeak! 🐭",
    "Love you! ❤️",
    "So happy! ✨",
];

const IDLE: &[&str] = &[
    "Boom-chick, boom-chick 🎶",
    "So bored... 💭",
    "Anything fun around here? 👀",
    "Taking a break... ☕️",
    "Looking left, looking right",
];

const WALK: &[&str] = &[
    "Out for a stroll~ 🚶",
    "La-la-la 🎵",
    "Where to next?",
    "Pitter-patter...",
];

const RUN: &[&str] = &[
    "Catch me if you can! 💨",
    "So busy, so busy! 💦",
    "Zoom! 🏃",
    "I'm starving 🍙",
    "Late, I'm late! ⏰",
];

const DRAG: &[&str] = &[
    "Scary! 😱",
    "Whoa, neat! ✨",
    "So high up! ☁️",
    "Help me! 🆘",
    "Wheee! 🦅",
];

const DROP: &[&str] = &[
    "Oof! 💫",
    "Thank you! 💕",
    "Phew... 💨",
    "Solid ground! 🌱",
    "So dizzy... 😵‍💫",
];

const SERMON: &str = "O god of mice, lord of rodents, turner of the hamster wheel,\n\
                      soother of the itch within my heart, hear my prayer..";
const PLEA: &str = "Lord of squeaks, deliver me...";
const THANKS: &str = "I give thanks to the lord...";
const FILLER: &str = "Pitter-patter...";

// ── Types ─────────────────────────────────────────────────────────────────────

/// What an utterance is about.  Mostly mirrors [`AgentState`], plus the
/// pointer-driven `Drag` and `Drop` topics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpeechTopic {
    Idle,
    Walk,
    Run,
    Drag,
    Drop,
    Contemplate,
}

impl From<AgentState> for SpeechTopic {
    fn from(state: AgentState) -> Self {
        match state {
            AgentState::Walk => SpeechTopic::Walk,
            AgentState::Run => SpeechTopic::Run,
            AgentState::Idle => SpeechTopic::Idle,
            AgentState::Dragging => SpeechTopic::Drag,
            AgentState::Contemplating => SpeechTopic::Contemplate,
        }
    }
}

/// Advisory horizontal alignment of the bubble relative to the sprite, so
/// bubbles near a wall stay on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    Left,
    Center,
    Right,
}

impl Placement {
    /// Left-aligned below 10 % of the arena width, right-aligned above 90 %.
    pub fn from_ratio(ratio: f32) -> Placement {
        if ratio < 0.1 {
            Placement::Left
        } else if ratio > 0.9 {
            Placement::Right
        } else {
            Placement::Center
        }
    }
}

/// A chosen line and how long it stays up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: &'static str,
    pub duration_ms: u64,
}

/// A speech bubble currently attached to an agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    pub text: &'static str,
    pub topic: SpeechTopic,
    pub expires_at: Timestamp,
    pub placement: Placement,
}

impl Utterance {
    #[inline]
    pub fn is_live(&self, now: Timestamp) -> bool {
        !now.reached(self.expires_at)
    }
}

/// Parameters of a single `speak` call.
#[derive(Copy, Clone, Debug)]
pub struct SpeechRequest {
    pub topic: SpeechTopic,
    /// Forced requests replace a live utterance instead of yielding to it.
    pub forced: bool,
    pub now: Timestamp,
    pub placement: Placement,
}

// ── Line selection ────────────────────────────────────────────────────────────

/// Pick a line for `topic`.
///
/// `pick` selects within the pool; `chance` gates the devout filler.  Both
/// are uniform draws in `[0, 1)`.  Returns `None` when the agent stays quiet.
pub fn compose(
    profile: Profile,
    topic:   SpeechTopic,
    pick:    f64,
    chance:  f64,
    cfg:     &BehaviorConfig,
) -> Option<Line> {
    match profile {
        Profile::Standard => {
            let (shared, own): (&[&'static str], &[&'static str]) = match topic {
                SpeechTopic::Idle => (COMMON, IDLE),
                SpeechTopic::Walk => (COMMON, WALK),
                SpeechTopic::Run => (COMMON, RUN),
                SpeechTopic::Drag => (&[], DRAG),
                SpeechTopic::Drop => (&[], DROP),
                SpeechTopic::Contemplate => (COMMON, &[]),
            };
            let text = pick_from(shared, own, pick)?;
            Some(Line { text, duration_ms: cfg.utterance_ms })
        }
        Profile::Devout => match topic {
            SpeechTopic::Contemplate => Some(Line {
                text:        SERMON,
                duration_ms: cfg.sermon_utterance_ms,
            }),
            SpeechTopic::Drag => Some(Line { text: PLEA, duration_ms: cfg.utterance_ms }),
            SpeechTopic::Drop => Some(Line {
                text:        THANKS,
                duration_ms: cfg.drop_sermon_utterance_ms,
            }),
            _ if chance < cfg.devout_filler_chance => {
                Some(Line { text: FILLER, duration_ms: cfg.utterance_ms })
            }
            _ => None,
        },
    }
}

/// Index the concatenation `shared ++ own` without allocating it.
fn pick_from(shared: &[&'static str], own: &[&'static str], pick: f64) -> Option<&'static str> {
    let len = shared.len() + own.len();
    if len == 0 {
        return None;
    }
    let i = ((pick.clamp(0.0, 1.0) * len as f64) as usize).min(len - 1);
    Some(if i < shared.len() { shared[i] } else { own[i - shared.len()] })
}

// ── SpeechSlot ────────────────────────────────────────────────────────────────

/// Holds at most one utterance for an agent.
#[derive(Clone, Debug, Default)]
pub struct SpeechSlot {
    current: Option<Utterance>,
}

impl SpeechSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The utterance showing at `now`, if any.
    pub fn current(&self, now: Timestamp) -> Option<&Utterance> {
        self.current.as_ref().filter(|u| u.is_live(now))
    }

    /// Drop the utterance if it has expired by `now`.  Returns it if so.
    pub fn expire(&mut self, now: Timestamp) -> Option<Utterance> {
        if self.current.as_ref().is_some_and(|u| !u.is_live(now)) {
            self.current.take()
        } else {
            None
        }
    }

    /// Try to speak.  Returns the new utterance, or `None` if the call was a
    /// no-op (a live bubble blocked an unforced request, or the profile
    /// chose silence).
    pub fn speak(
        &mut self,
        profile: Profile,
        request: SpeechRequest,
        rng:     &mut AgentRng,
        cfg:     &BehaviorConfig,
    ) -> Option<&Utterance> {
        if !request.forced && self.current(request.now).is_some() {
            return None;
        }
        let pick = rng.draw();
        let chance = rng.draw();
        let line = compose(profile, request.topic, pick, chance, cfg)?;

        self.current = Some(Utterance {
            text:       line.text,
            topic:      request.topic,
            expires_at: request.now.offset_ms(line.duration_ms),
            placement:  request.placement,
        });
        self.current.as_ref()
    }
}
