use rk_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type SimResult<T> = Result<T, SimError>;
