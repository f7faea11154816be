use lg_core::CoreError;
use lg_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("invalid geometry: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("simulation has shut down")]
    ShutDown,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
