use thiserror::Error;

use crate::api::types::EntityId;

/// Errors raised by scene bookkeeping.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("entity {0:?} is not in the scene")]
    EntityNotFound(EntityId),

    #[error("entity {child:?} already has parent {parent:?}")]
    ParentAlreadySet { child: EntityId, parent: EntityId },

    #[error("entity {0:?} cannot be its own parent")]
    SelfParent(EntityId),

    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
