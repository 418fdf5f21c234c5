//! Oscillator models and their plotted traces.
//!
//! Provides:
//! - Damped pendulum ("swing") and damped mass-spring oscillators
//! - A scrolling time-series plot fed once per frame
//! - Name-addressed tunable parameter tables
//! - The `Canvas` drawing seam every model renders through
//!
//! All models advance by a fixed time step per call; nothing here knows
//! about wall-clock time or the windowing toolkit.

pub mod canvas;
pub mod oscillator;
pub mod params;
pub mod plot;
pub mod spring;
pub mod swing;

pub use canvas::{Anchor, Canvas, DrawCommand, DrawList, Icon, Rgb, palette};
pub use oscillator::{Oscillator, damping_factor, draw_arrow};
pub use params::{NUDGE_FACTOR, Nudge, ParamSpec, Tunable};
pub use plot::{Plot, PlotParams, Sample};
pub use spring::{SpringOscillator, SpringParams};
pub use swing::{SwingOscillator, SwingParams};
