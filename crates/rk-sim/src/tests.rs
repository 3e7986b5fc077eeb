//! Unit tests for rk-sim.

use rk_agent::Agent;
use rk_behavior::{AgentState, Profile, SpeechTopic, Utterance};
use rk_core::{AgentId, Timestamp, Vec2};
use rk_mobility::Contact;

use crate::{
    DragController, DragPhase, ReleaseOutcome, Sim, SimBuilder, SimConfig, SimError, SimObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Recorder {
    spawns:     Vec<AgentId>,
    resets:     Vec<usize>,
    utterances: Vec<(AgentId, Utterance)>,
    contacts:   Vec<Contact>,
    ticks:      usize,
}

impl SimObserver for Recorder {
    fn on_spawn(&mut self, agent: &Agent) {
        self.spawns.push(agent.id());
    }
    fn on_reset(&mut self, removed: usize) {
        self.resets.push(removed);
    }
    fn on_utterance(&mut self, agent: AgentId, utterance: &Utterance) {
        self.utterances.push((agent, utterance.clone()));
    }
    fn on_contacts(&mut self, _now: Timestamp, contacts: &[Contact]) {
        self.contacts.extend_from_slice(contacts);
    }
    fn on_tick_end(&mut self, _now: Timestamp, _agents: &[rk_agent::RenderState]) {
        self.ticks += 1;
    }
}

fn sim() -> Sim<Recorder> {
    SimBuilder::new(SimConfig::default()).seed(42).observer(Recorder::default()).build()
}

fn t(ms: u64) -> Timestamp {
    Timestamp(ms)
}

// ── DragController ────────────────────────────────────────────────────────────

#[cfg(test)]
mod drag_controller_tests {
    use super::*;

    const A: AgentId = AgentId(1);
    const B: AgentId = AgentId(2);

    #[test]
    fn hold_fires_at_deadline() {
        let mut d = DragController::new();
        assert!(d.press(A, Vec2::new(5.0, 6.0), t(1_000), 100));
        assert_eq!(d.poll(t(1_099)), None);
        assert_eq!(d.target(), Some(A));
        assert_eq!(d.dragging(), None);
        assert_eq!(d.poll(t(1_100)), Some((A, Vec2::new(5.0, 6.0))));
        assert_eq!(d.phase(), DragPhase::Dragging { agent: A });
        assert_eq!(d.poll(t(2_000)), None, "fires once");
    }

    #[test]
    fn early_release_is_a_tap() {
        let mut d = DragController::new();
        d.press(A, Vec2::ZERO, t(0), 100);
        assert_eq!(d.release(), ReleaseOutcome::Tap(A));
        assert_eq!(d.phase(), DragPhase::Free);
        assert_eq!(d.release(), ReleaseOutcome::Nothing);
    }

    #[test]
    fn release_after_hold_is_a_drop() {
        let mut d = DragController::new();
        d.press(A, Vec2::ZERO, t(0), 100);
        d.poll(t(100));
        assert_eq!(d.release(), ReleaseOutcome::Drop(A));
    }

    #[test]
    fn second_press_is_ignored() {
        let mut d = DragController::new();
        d.press(A, Vec2::ZERO, t(0), 100);
        assert!(!d.press(B, Vec2::ZERO, t(10), 100));
        assert_eq!(d.target(), Some(A));
    }

    #[test]
    fn leave_disarms_press_but_not_drag() {
        let mut d = DragController::new();
        d.press(A, Vec2::ZERO, t(0), 100);
        d.leave();
        assert_eq!(d.phase(), DragPhase::Free);
        assert_eq!(d.poll(t(500)), None);

        d.press(A, Vec2::ZERO, t(0), 100);
        d.poll(t(100));
        d.leave();
        assert_eq!(d.dragging(), Some(A));
    }
}

// ── Config and builder ────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = SimConfig::from_toml_str(
            r#"
            arena_width = 1024.0
            seed = 7

            [behavior]
            run_speed = 4.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.arena_width, 1024.0);
        assert_eq!(cfg.arena_height, SimConfig::default().arena_height);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.behavior.run_speed, 4.5);
        assert_eq!(cfg.behavior.walk_speed, 1.0);
    }

    #[test]
    fn out_of_range_behavior_is_clamped() {
        let cfg = SimConfig::from_toml_str("[behavior]\nidle_probability = 2.5\n").unwrap();
        assert_eq!(cfg.behavior.idle_probability, 1.0);
        assert!(cfg.behavior.validate().is_ok());
    }

    #[test]
    fn negative_arena_is_rejected() {
        let err = SimConfig::from_toml_str("arena_height = -5.0\n").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = SimConfig::from_toml_str("seed = \"many\"\n").unwrap_err();
        assert!(matches!(err, SimError::Toml(_)));
    }

    #[test]
    fn builder_clamps_scale() {
        let s = SimBuilder::new(SimConfig::default()).scale(f32::NAN).build();
        assert_eq!(s.scale(), 2.0);
        let s = SimBuilder::new(SimConfig::default()).scale(50.0).build();
        assert_eq!(s.scale(), 5.0);
    }

    #[test]
    fn builder_sanitizes_behavior() {
        let mut cfg = SimConfig::default();
        cfg.behavior.decision_interval_ms = 0;
        let s = SimBuilder::new(cfg).build();
        assert_eq!(s.behavior().decision_interval_ms, 1);
        assert!(s.is_empty());
    }
}

// ── Membership ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod membership_tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_survive_reset() {
        let mut s = sim();
        let a = s.spawn(t(0));
        let b = s.spawn(t(0));
        assert_eq!((a, b), (AgentId(0), AgentId(1)));
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.spawn(t(10)), AgentId(2));
        assert_eq!(s.observer().spawns.len(), 3);
        assert_eq!(s.observer().resets, vec![2]);
    }

    #[test]
    fn spawned_agents_start_inside_with_a_decision() {
        let mut s = sim();
        let size = s.behavior().scaled_size(s.scale());
        for _ in 0..50 {
            let id = s.spawn(t(500));
            let a = s.agent(id).unwrap();
            assert!(s.arena().contains(a.position(), size));
            assert!(a.deadline() > t(500));
            assert_ne!(a.state(), AgentState::Dragging);
        }
    }

    #[test]
    fn devout_share_follows_spawn_chance() {
        let mut cfg = SimConfig::default();
        cfg.behavior.devout_spawn_chance = 1.0;
        let mut s = SimBuilder::new(cfg).build();
        for _ in 0..5 {
            let id = s.spawn(t(0));
            assert_eq!(s.agent(id).unwrap().profile(), Profile::Devout);
        }
    }

    #[test]
    fn resize_and_scale_clamp_immediately() {
        let mut s = sim();
        for _ in 0..10 {
            s.spawn(t(0));
        }
        s.resize(150.0, 120.0);
        for a in s.agents() {
            assert!(a.position().x <= 54.0 && a.position().y <= 24.0);
        }
        s.set_scale(100.0);
        assert_eq!(s.scale(), 5.0);
        for a in s.agents() {
            assert_eq!(a.position(), Vec2::ZERO);
        }
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn render_states_match_agents_and_stay_in_bounds() {
        let mut s = sim();
        for _ in 0..12 {
            s.spawn(t(0));
        }
        let size = s.behavior().scaled_size(s.scale());
        for frame in 1..=2_000u64 {
            let states = s.tick(t(frame * 16));
            assert_eq!(states.len(), 12);
            for r in &states {
                assert!(s.arena().contains(r.position, size), "{:?}", r);
            }
        }
        assert_eq!(s.observer().ticks, 2_000);
    }

    #[test]
    fn crowded_arena_reports_contacts() {
        let mut s = SimBuilder::new(SimConfig::default())
            .arena(300.0, 300.0)
            .seed(9)
            .observer(Recorder::default())
            .build();
        for _ in 0..30 {
            s.spawn_profile(Profile::Standard, t(0));
        }
        s.run_frames(t(16), 16, 50);
        let contacts = &s.observer().contacts;
        assert!(!contacts.is_empty());
        assert!(contacts.iter().all(|c| c.first < c.second && c.second < 30));
    }

    /// Two stationary movers dragged 30 apart, then left to re-decide.
    fn pair_30_apart(scale: f32) -> Sim<Recorder> {
        let mut config = SimConfig { scale, ..SimConfig::default() };
        config.behavior.walk_speed = 0.0;
        config.behavior.run_speed = 0.0;
        config.behavior.idle_probability = 0.0;
        config.behavior.drop_idle_ms = 1;
        let mut s = SimBuilder::new(config).seed(5).observer(Recorder::default()).build();

        let ids = [s.spawn_profile(Profile::Standard, t(0)), s.spawn_profile(Profile::Standard, t(0))];
        let targets = [Vec2::new(300.0, 300.0), Vec2::new(330.0, 300.0)];
        let mut now = t(0);
        for (id, target) in ids.into_iter().zip(targets) {
            let pos = s.agent(id).unwrap().position();
            s.press(id, pos, now).unwrap();
            now = now.offset_ms(100);
            s.tick(now);
            assert_eq!(s.drag_phase(), DragPhase::Dragging { agent: id });
            s.pointer_move(target);
            s.release(now);
        }
        s.observer_mut().contacts.clear();
        s.tick(now.offset_ms(16));
        for (id, target) in ids.into_iter().zip(targets) {
            assert!(s.agent(id).unwrap().state().is_moving());
            if s.observer().contacts.is_empty() {
                assert_eq!(s.agent(id).unwrap().position(), target);
            }
        }
        s
    }

    #[test]
    fn scale_sets_collision_radius_during_tick() {
        let large = pair_30_apart(2.0);
        assert_eq!(large.behavior().collision_radius(large.scale()), 40.0);
        assert_eq!(large.observer().contacts.len(), 1);
        let c = large.observer().contacts[0];
        assert_eq!((c.first, c.second), (0, 1));
        assert!((c.distance - 30.0).abs() < 1e-4);

        let small = pair_30_apart(1.0);
        assert_eq!(small.behavior().collision_radius(small.scale()), 20.0);
        assert!(small.observer().contacts.is_empty());
    }

    #[test]
    fn run_frames_returns_time_after_last_tick() {
        let mut s = sim();
        s.spawn(t(0));
        let (states, next) = s.run_frames(t(100), 16, 10);
        assert_eq!(states.len(), 1);
        assert_eq!(next, t(260));
    }
}

// ── Pointer ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pointer_tests {
    use super::*;

    #[test]
    fn press_unknown_agent_errors() {
        let mut s = sim();
        let err = s.press(AgentId(99), Vec2::ZERO, t(0)).unwrap_err();
        assert!(matches!(err, SimError::AgentNotFound(AgentId(99))));
    }

    #[test]
    fn quick_click_makes_agent_speak() {
        let mut s = sim();
        let id = s.spawn_profile(Profile::Standard, t(0));
        let pos = s.agent(id).unwrap().position();
        s.press(id, pos, t(1_000)).unwrap();
        s.release(t(1_050));
        assert_eq!(s.drag_phase(), DragPhase::Free);
        assert!(s.agent(id).unwrap().utterance(t(1_051)).is_some());
        assert_eq!(s.observer().utterances.last().map(|(a, _)| *a), Some(id));
        assert_ne!(s.agent(id).unwrap().state(), AgentState::Dragging);
    }

    #[test]
    fn hold_move_release_drags_and_drops() {
        let mut s = sim();
        let id = s.spawn_profile(Profile::Standard, t(0));
        let pos = s.agent(id).unwrap().position();
        s.press(id, pos + Vec2::new(5.0, 5.0), t(0)).unwrap();
        s.tick(t(100));
        assert_eq!(s.agent(id).unwrap().state(), AgentState::Dragging);

        s.pointer_move(Vec2::new(400.0, 300.0));
        assert_eq!(s.agent(id).unwrap().position(), Vec2::new(395.0, 295.0));
        s.tick(t(116));
        assert_eq!(s.agent(id).unwrap().position(), Vec2::new(395.0, 295.0));

        s.release(t(200));
        let a = s.agent(id).unwrap();
        assert_eq!(a.state(), AgentState::Idle);
        assert_eq!(a.deadline(), t(200 + s.behavior().drop_idle_ms));
        assert_eq!(a.utterance(t(201)).map(|u| u.topic), Some(SpeechTopic::Drop));
    }

    #[test]
    fn release_after_hold_without_tick_still_drops() {
        let mut s = sim();
        let id = s.spawn_profile(Profile::Standard, t(0));
        s.press(id, s.agent(id).unwrap().position(), t(0)).unwrap();
        s.release(t(150));
        assert_eq!(s.agent(id).unwrap().state(), AgentState::Idle);
    }

    #[test]
    fn devout_drop_contemplates() {
        let mut s = sim();
        let id = s.spawn_profile(Profile::Devout, t(0));
        s.press(id, s.agent(id).unwrap().position(), t(0)).unwrap();
        s.tick(t(100));
        s.release(t(500));
        let cfg = s.behavior().clone();
        let a = s.agent(id).unwrap();
        assert_eq!(a.state(), AgentState::Contemplating);
        assert_eq!(a.deadline(), t(500 + cfg.drop_contemplate_ms));
        let u = a.utterance(t(501)).unwrap();
        assert_eq!(u.topic, SpeechTopic::Drop);
        assert_eq!(u.expires_at, t(500 + cfg.drop_sermon_utterance_ms));
    }

    #[test]
    fn leave_before_hold_cancels() {
        let mut s = sim();
        let id = s.spawn_profile(Profile::Standard, t(0));
        s.press(id, Vec2::ZERO, t(0)).unwrap();
        s.pointer_leave();
        s.tick(t(200));
        assert_ne!(s.agent(id).unwrap().state(), AgentState::Dragging);
        s.release(t(300));
        assert_eq!(s.drag_phase(), DragPhase::Free);
    }

    #[test]
    fn vanished_target_is_a_noop() {
        let mut s = sim();
        let id = s.spawn(t(0));
        s.press(id, Vec2::ZERO, t(0)).unwrap();
        s.tick(t(100));
        s.reset();
        s.pointer_move(Vec2::new(10.0, 10.0));
        s.release(t(200));
        assert_eq!(s.drag_phase(), DragPhase::Free);

        // Pressed, not yet dragging, when the reset lands.
        let id = s.spawn(t(300));
        s.press(id, Vec2::ZERO, t(300)).unwrap();
        s.reset();
        s.release(t(500));
        assert!(s.is_empty());
    }

    #[test]
    fn press_on_held_agent_is_ignored() {
        let mut s = sim();
        let id = s.spawn(t(0));
        s.press(id, Vec2::ZERO, t(0)).unwrap();
        s.tick(t(100));
        s.press(id, Vec2::ZERO, t(120)).unwrap();
        assert_eq!(s.drag_phase(), DragPhase::Dragging { agent: id });
    }
}
