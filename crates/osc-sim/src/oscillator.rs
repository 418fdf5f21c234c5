//! The capability shared by every oscillator model.

use osc_core::{BoundingBox, Real, Vec2d, rotate_vector};

use crate::canvas::{Canvas, palette};

/// A damped oscillator advanced by a fixed time step per frame.
///
/// `step` only evolves physical state; `draw` renders the state left by the
/// most recent step. The scene calls them back to back once per frame.
pub trait Oscillator {
    /// Human-readable display label.
    fn name(&self) -> &str;

    fn bounds(&self) -> BoundingBox;

    fn translate(&mut self, delta: Vec2d);

    /// Simulated seconds advanced by one call to [`Oscillator::step`].
    fn time_step(&self) -> Real;

    fn step(&mut self);

    /// Scalar signal exposed for plotting.
    fn deflection(&self) -> Real;

    /// Apply the model-specific perturbation for a click at `local`
    /// (relative to the bounding box origin).
    fn clicked(&mut self, local: Vec2d);

    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Per-step geometric velocity multiplier for a damping setting.
///
/// Damping in (0, 10) yields a factor in (0, 1).
pub fn damping_factor(damping: Real) -> Real {
    1.0 - damping / 10.0
}

const ARROW_HEAD_SCALE: Real = 0.2;
const ARROW_HEAD_ANGLE: Real = 0.5;

/// Red shaft from `from` to `to` with a yellow two-stroke head at `to`.
pub fn draw_arrow(canvas: &mut dyn Canvas, from: Vec2d, to: Vec2d, thickness: Real) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }
    canvas.line(from, to, palette::RED, thickness);

    let back = (from - to) * ARROW_HEAD_SCALE;
    let left = rotate_vector(back, ARROW_HEAD_ANGLE) + to;
    let right = rotate_vector(back, -ARROW_HEAD_ANGLE) + to;
    canvas.line(to, left, palette::YELLOW, thickness);
    canvas.line(to, right, palette::YELLOW, thickness);
}
