//! Interactive scene layer for the oscillator workspace.
//!
//! This crate owns everything between the models and the window: the
//! ordered entity registry, the pointer-driven interaction controller,
//! the per-entity parameter editor and the per-frame application context.
//! Front ends feed it normalised input events and a `Canvas` to draw on.

pub mod context;
pub mod controller;
pub mod editor;
pub mod entity;
pub mod error;
pub mod scene;
pub mod spawn;
pub mod toolbar;

// Re-export key types for convenience
pub use context::AppContext;
pub use controller::{ControlFlow, InputEvent, InteractionController, Key, Mode};
pub use editor::{EditorRow, ParameterEditor};
pub use entity::{Entity, EntityKind};
pub use error::{SceneError, SceneResult};
pub use scene::Scene;
pub use spawn::{SpawnKind, Spawner};
pub use toolbar::{Tool, Toolbar};
