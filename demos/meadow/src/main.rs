//! Headless meadow.
//!
//! Runs a scripted session against the simulation with a synthetic clock
//! (60 frames per second) and logs spawns, speech, and a per-second census.
//!
//! ```text
//! RUST_LOG=info cargo run -p meadow -- [config.toml]
//! ```
//!
//! Script:
//!   - spawn a crowd (one of them guaranteed devout)
//!   - let it wander for a while
//!   - click one creature, then pick another up and carry it across the arena
//!   - shrink the window, bump the scale, reset

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use rk_agent::{Agent, RenderState};
use rk_behavior::{Profile, Utterance};
use rk_core::{AgentId, Timestamp, Vec2};
use rk_mobility::Contact;
use rk_sim::{Sim, SimBuilder, SimConfig, SimObserver};
use tracing::{info, warn};

const FRAME_MS: u64 = 16;
const FRAMES_PER_SECOND: u64 = 60;
const CROWD: usize = 7;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SimConfig::default(),
    };
    info!(
        width = config.arena_width,
        height = config.arena_height,
        scale = config.scale,
        seed = config.seed,
        "starting meadow"
    );

    let mut sim = SimBuilder::new(config).observer(MeadowLog::default()).build();
    let mut clock = Timestamp::ZERO;

    for _ in 0..CROWD - 1 {
        sim.spawn(clock);
    }
    sim.spawn_profile(Profile::Devout, clock);

    run_seconds(&mut sim, &mut clock, 10);

    // A click: press and release well inside the hold time.
    let clicked = sim.agents().first().map(Agent::id).context("meadow is empty")?;
    let at = position_of(&sim, clicked)?;
    sim.press(clicked, at, clock)?;
    sim.release(clock.offset_ms(40));
    run_seconds(&mut sim, &mut clock, 2);

    // A carry: hold, sweep the pointer to the far corner, let go.
    let carried = sim.agents().last().map(Agent::id).context("meadow is empty")?;
    let from = position_of(&sim, carried)?;
    let to = Vec2::new(sim.arena().width, sim.arena().height);
    sim.press(carried, from, clock)?;
    for step in 0..FRAMES_PER_SECOND {
        sim.tick(clock);
        let t = step as f32 / FRAMES_PER_SECOND as f32;
        sim.pointer_move(from + (to - from) * t);
        clock = clock.offset_ms(FRAME_MS);
    }
    sim.release(clock);
    if let Some(agent) = sim.agent(carried) {
        info!(agent = %carried, state = %agent.state(), position = %agent.position(), "dropped");
    }
    run_seconds(&mut sim, &mut clock, 5);

    let arena = sim.arena();
    sim.resize(arena.width * 0.5, arena.height * 0.5);
    sim.set_scale(sim.scale() * 1.5);
    run_seconds(&mut sim, &mut clock, 5);

    sim.reset();
    let log = sim.observer();
    info!(
        spawns = log.spawns,
        utterances = log.utterances,
        contacts = log.contacts,
        "meadow closed"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn position_of<O: SimObserver>(sim: &Sim<O>, id: AgentId) -> Result<Vec2> {
    sim.agent(id)
        .map(Agent::position)
        .with_context(|| format!("agent {id} vanished"))
}

fn run_seconds(sim: &mut Sim<MeadowLog>, clock: &mut Timestamp, seconds: u64) {
    let (_, next) = sim.run_frames(*clock, FRAME_MS, seconds * FRAMES_PER_SECOND);
    *clock = next;
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs speech as it happens and a census of states once per second.
#[derive(Default)]
struct MeadowLog {
    spawns:     usize,
    utterances: usize,
    contacts:   usize,
    frames:     u64,
}

impl SimObserver for MeadowLog {
    fn on_spawn(&mut self, agent: &Agent) {
        self.spawns += 1;
        if agent.profile() == Profile::Devout {
            info!(agent = %agent.id(), "a devout one wanders in");
        }
    }

    fn on_reset(&mut self, removed: usize) {
        info!(removed, "meadow cleared");
    }

    fn on_utterance(&mut self, agent: AgentId, utterance: &Utterance) {
        self.utterances += 1;
        info!(%agent, placement = ?utterance.placement, "\"{}\"", utterance.text);
    }

    fn on_contacts(&mut self, _now: Timestamp, contacts: &[Contact]) {
        self.contacts += contacts.len();
    }

    fn on_tick_end(&mut self, now: Timestamp, agents: &[RenderState]) {
        self.frames += 1;
        if !self.frames.is_multiple_of(FRAMES_PER_SECOND) {
            return;
        }
        let mut census: BTreeMap<&str, usize> = BTreeMap::new();
        for r in agents {
            *census.entry(r.state.as_str()).or_default() += 1;
        }
        let speaking = agents.iter().filter(|r| r.utterance.is_some()).count();
        if agents.is_empty() {
            warn!(%now, "no creatures left");
        } else {
            info!(%now, ?census, speaking, "census");
        }
    }
}
