//! Behaviour tuning constants.
//!
//! Every number the state machine consults lives in [`BehaviorConfig`] so a
//! host can load an alternate table from a file.  Hosts that don't care use
//! `BehaviorConfig::default()`, which reproduces the stock creature.
//!
//! A loaded config is never trusted as-is: [`BehaviorConfig::sanitized`]
//! clamps every field into its valid range.  [`BehaviorConfig::validate`]
//! reports what *would* be clamped so a loader can warn about it.

use crate::{RkError, RkResult};

/// Scale used when the host supplies nothing usable.
pub const DEFAULT_SCALE: f32 = 2.0;

/// All behaviour constants, in arena units, milliseconds, and probabilities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Unscaled sprite edge length.
    pub base_size: f32,
    /// Walk speed, arena units per tick.
    pub walk_speed: f32,
    /// Run speed, arena units per tick.
    pub run_speed: f32,

    /// Draws below this become idle (default) or contemplating (devout).
    pub idle_probability: f64,
    /// Default profile: draws in `[idle_probability, walk_threshold)` walk,
    /// the rest run.
    pub walk_threshold: f64,

    pub decision_interval_ms: u64,
    pub idle_duration_ms: u64,
    pub contemplate_duration_ms: u64,
    /// Idle and contemplating agents toggle facing once per quantum.
    pub idle_flip_interval_ms: u64,

    /// Collision radius at scale 2.0.  The effective radius is
    /// `collision_distance * scale / 2`.
    pub collision_distance: f32,

    pub press_hold_ms: u64,
    pub drop_idle_ms: u64,
    pub drop_contemplate_ms: u64,

    pub utterance_ms: u64,
    pub sermon_utterance_ms: u64,
    pub drop_sermon_utterance_ms: u64,
    /// Per-tick chance of an unprompted utterance.
    pub auto_speech_chance: f64,
    pub devout_filler_chance: f64,
    /// Chance per roll that grabbing an agent makes it speak.
    pub drag_speech_chance: f64,

    pub devout_spawn_chance: f64,

    /// Ticks between sprite frame toggles for walk and idle.
    pub walk_frame_interval: u32,
    /// Ticks between sprite frame toggles for run and dragging.
    pub run_frame_interval: u32,

    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            base_size:                48.0,
            walk_speed:               1.0,
            run_speed:                3.0,
            idle_probability:         0.10,
            walk_threshold:           0.73,
            decision_interval_ms:     3_000,
            idle_duration_ms:         5_000,
            contemplate_duration_ms:  10_000,
            idle_flip_interval_ms:    1_000,
            collision_distance:       40.0,
            press_hold_ms:            100,
            drop_idle_ms:             2_000,
            drop_contemplate_ms:      3_000,
            utterance_ms:             2_000,
            sermon_utterance_ms:      10_000,
            drop_sermon_utterance_ms: 3_000,
            auto_speech_chance:       0.005,
            devout_filler_chance:     0.10,
            drag_speech_chance:       0.5,
            devout_spawn_chance:      0.10,
            walk_frame_interval:      20,
            run_frame_interval:       10,
            min_scale:                0.5,
            max_scale:                5.0,
        }
    }
}

impl BehaviorConfig {
    /// Report the first field that [`sanitized`](Self::sanitized) would change.
    pub fn validate(&self) -> RkResult<()> {
        let probabilities = [
            ("idle_probability", self.idle_probability),
            ("walk_threshold", self.walk_threshold),
            ("auto_speech_chance", self.auto_speech_chance),
            ("devout_filler_chance", self.devout_filler_chance),
            ("drag_speech_chance", self.drag_speech_chance),
            ("devout_spawn_chance", self.devout_spawn_chance),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(RkError::Config(format!("{name} = {p} is not a probability")));
            }
        }
        if self.walk_threshold < self.idle_probability {
            return Err(RkError::Config(format!(
                "walk_threshold {} is below idle_probability {}",
                self.walk_threshold, self.idle_probability
            )));
        }

        let magnitudes = [
            ("base_size", self.base_size),
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("collision_distance", self.collision_distance),
        ];
        for (name, v) in magnitudes {
            if !v.is_finite() || v < 0.0 {
                return Err(RkError::Config(format!("{name} = {v} must be finite and non-negative")));
            }
        }

        let durations = [
            ("decision_interval_ms", self.decision_interval_ms),
            ("idle_duration_ms", self.idle_duration_ms),
            ("contemplate_duration_ms", self.contemplate_duration_ms),
            ("idle_flip_interval_ms", self.idle_flip_interval_ms),
            ("drop_idle_ms", self.drop_idle_ms),
            ("drop_contemplate_ms", self.drop_contemplate_ms),
            ("utterance_ms", self.utterance_ms),
            ("sermon_utterance_ms", self.sermon_utterance_ms),
            ("drop_sermon_utterance_ms", self.drop_sermon_utterance_ms),
        ];
        for (name, ms) in durations {
            if ms == 0 {
                return Err(RkError::Config(format!("{name} must be at least 1 ms")));
            }
        }

        if self.walk_frame_interval == 0 || self.run_frame_interval == 0 {
            return Err(RkError::Config("frame intervals must be at least 1 tick".into()));
        }
        if !(self.min_scale.is_finite() && self.max_scale.is_finite())
            || self.min_scale <= 0.0
            || self.min_scale > self.max_scale
        {
            return Err(RkError::Config(format!(
                "scale range [{}, {}] is invalid",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }

    /// A copy with every field clamped into its valid range.
    ///
    /// Fields that are already valid are returned unchanged, so
    /// `cfg.sanitized() == cfg` exactly when `cfg.validate().is_ok()`.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut cfg = self.clone();

        cfg.idle_probability     = probability(cfg.idle_probability, defaults.idle_probability);
        cfg.walk_threshold       = probability(cfg.walk_threshold, defaults.walk_threshold)
            .max(cfg.idle_probability);
        cfg.auto_speech_chance   = probability(cfg.auto_speech_chance, defaults.auto_speech_chance);
        cfg.devout_filler_chance = probability(cfg.devout_filler_chance, defaults.devout_filler_chance);
        cfg.drag_speech_chance   = probability(cfg.drag_speech_chance, defaults.drag_speech_chance);
        cfg.devout_spawn_chance  = probability(cfg.devout_spawn_chance, defaults.devout_spawn_chance);

        cfg.base_size          = magnitude(cfg.base_size, defaults.base_size);
        cfg.walk_speed         = magnitude(cfg.walk_speed, defaults.walk_speed);
        cfg.run_speed          = magnitude(cfg.run_speed, defaults.run_speed);
        cfg.collision_distance = magnitude(cfg.collision_distance, defaults.collision_distance);

        for ms in [
            &mut cfg.decision_interval_ms,
            &mut cfg.idle_duration_ms,
            &mut cfg.contemplate_duration_ms,
            &mut cfg.idle_flip_interval_ms,
            &mut cfg.drop_idle_ms,
            &mut cfg.drop_contemplate_ms,
            &mut cfg.utterance_ms,
            &mut cfg.sermon_utterance_ms,
            &mut cfg.drop_sermon_utterance_ms,
        ] {
            *ms = (*ms).max(1);
        }
        cfg.walk_frame_interval = cfg.walk_frame_interval.max(1);
        cfg.run_frame_interval  = cfg.run_frame_interval.max(1);

        if !(cfg.min_scale.is_finite() && cfg.min_scale > 0.0) {
            cfg.min_scale = defaults.min_scale;
        }
        if !cfg.max_scale.is_finite() || cfg.max_scale < cfg.min_scale {
            cfg.max_scale = cfg.min_scale.max(defaults.max_scale);
        }
        cfg
    }

    /// Clamp a host-supplied scale into `[min_scale, max_scale]`.
    ///
    /// Non-finite input falls back to [`DEFAULT_SCALE`] (itself clamped).
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        let scale = if scale.is_finite() { scale } else { DEFAULT_SCALE };
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Sprite edge length at `scale`.
    #[inline]
    pub fn scaled_size(&self, scale: f32) -> f32 {
        self.base_size * scale
    }

    /// Collision radius at `scale`.  Linear in scale, equal to
    /// `collision_distance` at scale 2.0.
    #[inline]
    pub fn collision_radius(&self, scale: f32) -> f32 {
        self.collision_distance * (scale / 2.0)
    }
}

fn probability(p: f64, fallback: f64) -> f64 {
    if p.is_nan() { fallback } else { p.clamp(0.0, 1.0) }
}

fn magnitude(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { fallback }
}
