//! Session configuration and its TOML loader.
//!
//! ```toml
//! arena_width  = 1024.0
//! arena_height = 640.0
//! scale        = 2.0
//! seed         = 7
//!
//! [behavior]
//! run_speed        = 4.0
//! idle_probability = 0.2
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use rk_core::BehaviorConfig;
use rk_core::config::DEFAULT_SCALE;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{SimError, SimResult};

/// Everything needed to start a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Initial arena size; the host reports later changes via `Sim::resize`.
    pub arena_width: f32,
    pub arena_height: f32,
    /// Initial global scale factor.
    pub scale: f32,
    /// Seeds spawn rolls and every agent's own RNG.
    pub seed: u64,
    pub behavior: BehaviorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width:  800.0,
            arena_height: 600.0,
            scale:        DEFAULT_SCALE,
            seed:         0x5eed,
            behavior:     BehaviorConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a TOML document.
    ///
    /// A negative or non-finite arena is rejected.  Out-of-range behaviour
    /// values are logged and clamped instead.
    pub fn from_toml_str(text: &str) -> SimResult<Self> {
        let mut cfg: SimConfig = toml::from_str(text)?;
        for (name, v) in [("arena_width", cfg.arena_width), ("arena_height", cfg.arena_height)] {
            if !v.is_finite() || v < 0.0 {
                return Err(SimError::Config(format!("{name} = {v} is not a valid extent")));
            }
        }
        if let Err(e) = cfg.behavior.validate() {
            warn!(error = %e, "behavior config out of range, clamping");
            cfg.behavior = cfg.behavior.sanitized();
        }
        Ok(cfg)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
