//! Error types for scene operations.

use osc_core::EntityId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("Entity not found: {id}")]
    UnknownEntity { id: EntityId },

    #[error("Entity {id} is not an oscillator and cannot feed a plot")]
    NotAnOscillator { id: EntityId },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
