//! Unit tests for rk-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn next_is_sequential() {
        assert_eq!(AgentId::FIRST.next(), AgentId(1));
        assert_eq!(AgentId(41).next(), AgentId(42));
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(1_000);
        assert_eq!(t + 500, Timestamp(1_500));
        assert_eq!(t.offset_ms(3), Timestamp(1_003));
        assert_eq!(Timestamp(1_500) - Timestamp(1_000), 500u64);
    }

    #[test]
    fn since_saturates_when_clock_steps_back() {
        assert_eq!(Timestamp(10).since(Timestamp(20)), 0);
    }

    #[test]
    fn reached_is_inclusive() {
        let deadline = Timestamp(3_000);
        assert!(!Timestamp(2_999).reached(deadline));
        assert!(Timestamp(3_000).reached(deadline));
        assert!(Timestamp(3_001).reached(deadline));
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(Timestamp(u64::MAX).offset_ms(10), Timestamp(u64::MAX));
    }
}

#[cfg(test)]
mod geo {
    use crate::{Arena, Facing, Vec2};

    #[test]
    fn vector_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(a + b, Vec2::new(5.0, 8.0));
        assert_eq!(b - a, Vec2::new(3.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn from_angle_has_requested_length() {
        let v = Vec2::from_angle(1.1, 3.0);
        assert!((v.length() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn facing_from_vx() {
        assert_eq!(Facing::from_vx(0.5), Some(Facing::Right));
        assert_eq!(Facing::from_vx(-0.5), Some(Facing::Left));
        assert_eq!(Facing::from_vx(0.0), None);
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Left.sign(), -1);
    }

    #[test]
    fn max_position_subtracts_size() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.max_position(96.0), Vec2::new(704.0, 504.0));
    }

    #[test]
    fn tiny_arena_collapses_to_origin() {
        let arena = Arena::new(50.0, 20.0);
        assert_eq!(arena.max_position(96.0), Vec2::ZERO);
        assert_eq!(arena.clamp(Vec2::new(30.0, 30.0), 96.0), Vec2::ZERO);
    }

    #[test]
    fn negative_or_nan_dimensions_become_zero() {
        let arena = Arena::new(-10.0, f32::NAN);
        assert_eq!(arena.width, 0.0);
        assert_eq!(arena.height, 0.0);
        assert_eq!(arena.max_position(48.0), Vec2::ZERO);
    }

    #[test]
    fn clamp_keeps_interior_points() {
        let arena = Arena::new(800.0, 600.0);
        let p = Vec2::new(100.0, 200.0);
        assert_eq!(arena.clamp(p, 96.0), p);
        assert!(arena.contains(p, 96.0));
        assert_eq!(arena.clamp(Vec2::new(-5.0, 900.0), 96.0), Vec2::new(0.0, 504.0));
    }

    #[test]
    fn normalized_x_handles_zero_width() {
        assert_eq!(Arena::new(0.0, 100.0).normalized_x(40.0), 0.0);
        assert!((Arena::new(200.0, 100.0).normalized_x(50.0) - 0.25).abs() < 1e-6);
    }
}

#[cfg(test)]
mod rng {
    use std::f32::consts::TAU;

    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.draw(), r2.draw());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        assert_ne!(r0.draw(), r1.draw(), "seeds for adjacent agents should diverge");
    }

    #[test]
    fn draws_in_unit_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let d = rng.draw();
            assert!((0.0..1.0).contains(&d));
            let h = rng.heading();
            assert!((0.0..TAU).contains(&h));
        }
    }

    #[test]
    fn gen_bool_extremes_and_nan() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0));
        assert!(!rng.gen_bool(-1.0));
        assert!(!rng.gen_bool(f64::NAN));
    }

    #[test]
    fn sim_rng_is_seeded() {
        let mut a = SimRng::new(3);
        let mut b = SimRng::new(3);
        let mut c = SimRng::new(4);
        let drawn: Vec<f64> = (0..16).map(|_| a.draw()).collect();
        assert!(drawn.iter().all(|d| (0.0..1.0).contains(d)));
        assert_eq!(drawn, (0..16).map(|_| b.draw()).collect::<Vec<_>>());
        assert_ne!(drawn, (0..16).map(|_| c.draw()).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod config {
    use crate::BehaviorConfig;

    #[test]
    fn defaults_are_valid() {
        let cfg = BehaviorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sanitized(), cfg);
    }

    #[test]
    fn collision_radius_is_linear_in_scale() {
        let cfg = BehaviorConfig::default();
        assert_eq!(cfg.collision_radius(2.0), 40.0);
        assert_eq!(cfg.collision_radius(1.0), 20.0);
        assert_eq!(cfg.collision_radius(4.0), 80.0);
        assert_eq!(cfg.scaled_size(2.0), 96.0);
    }

    #[test]
    fn clamp_scale() {
        let cfg = BehaviorConfig::default();
        assert_eq!(cfg.clamp_scale(0.01), 0.5);
        assert_eq!(cfg.clamp_scale(99.0), 5.0);
        assert_eq!(cfg.clamp_scale(f32::NAN), 2.0);
        assert_eq!(cfg.clamp_scale(1.5), 1.5);
    }

    #[test]
    fn sanitized_repairs_out_of_range_fields() {
        let cfg = BehaviorConfig {
            idle_probability: 1.7,
            walk_threshold: f64::NAN,
            run_speed: -2.0,
            utterance_ms: 0,
            min_scale: 3.0,
            max_scale: 1.0,
            ..BehaviorConfig::default()
        };
        assert!(cfg.validate().is_err());

        let fixed = cfg.sanitized();
        assert_eq!(fixed.idle_probability, 1.0);
        assert_eq!(fixed.walk_threshold, 1.0, "threshold cannot sit below idle probability");
        assert_eq!(fixed.run_speed, 0.0);
        assert_eq!(fixed.utterance_ms, 1);
        assert!(fixed.max_scale >= fixed.min_scale);
        assert!(fixed.validate().is_ok());
    }
}
