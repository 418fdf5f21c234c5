//! osc-core: shared foundation for the oscillator workspace.
//!
//! Contains:
//! - numeric (Real + finite/positive checks)
//! - ids (stable compact IDs for scene entities)
//! - geometry (2-D vectors, bounding boxes, hit testing)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{OscError, OscResult};
pub use geometry::*;
pub use ids::*;
pub use numeric::*;
