//! Fluent builder for constructing a [`Sim`].

use rk_core::{Arena, SimRng};
use tracing::warn;

use crate::drag::DragController;
use crate::{NoopObserver, Sim, SimConfig, SimObserver};

/// Fluent builder for [`Sim<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                     |
/// |-------------------|-----------------------------|
/// | `.arena(w, h)`    | `config.arena_*`            |
/// | `.scale(s)`       | `config.scale`              |
/// | `.seed(n)`        | `config.seed`               |
/// | `.observer(o)`    | [`NoopObserver`]            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .arena(1024.0, 768.0)
///     .seed(7)
///     .observer(SpeechLog::default())
///     .build();
/// ```
pub struct SimBuilder<O: SimObserver = NoopObserver> {
    config:   SimConfig,
    observer: O,
}

impl SimBuilder<NoopObserver> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, observer: NoopObserver }
    }
}

impl<O: SimObserver> SimBuilder<O> {
    pub fn arena(mut self, width: f32, height: f32) -> Self {
        self.config.arena_width = width;
        self.config.arena_height = height;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace the observer.  Changes the builder's type.
    pub fn observer<P: SimObserver>(self, observer: P) -> SimBuilder<P> {
        SimBuilder { config: self.config, observer }
    }

    /// Repair the configuration and return an empty, ready-to-tick [`Sim`].
    ///
    /// Nothing here can fail: out-of-range behaviour values and scale are
    /// clamped, a negative or non-finite arena collapses to zero.
    pub fn build(self) -> Sim<O> {
        let mut config = self.config;
        if let Err(e) = config.behavior.validate() {
            warn!(error = %e, "behavior config out of range, clamping");
            config.behavior = config.behavior.sanitized();
        }
        let scale = config.behavior.clamp_scale(config.scale);
        if scale != config.scale {
            warn!(requested = config.scale, used = scale, "scale clamped");
            config.scale = scale;
        }

        Sim {
            arena:    Arena::new(config.arena_width, config.arena_height),
            scale,
            agents:   Vec::new(),
            next_id:  rk_core::AgentId::FIRST,
            rng:      SimRng::new(config.seed),
            drag:     DragController::new(),
            observer: self.observer,
            config,
        }
    }
}
