use thiserror::Error;
use orrery_engine::EngineError;

use crate::bodies::BodyId;

/// Errors raised by the solar-system scene.
#[derive(Debug, Error)]
pub enum SolarError {
    #[error("no body with id {0}")]
    UnknownBody(BodyId),

    #[error("invalid body catalog: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
