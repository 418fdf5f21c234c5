//! Damped pendulum ("swing").

use osc_core::{BoundingBox, Real, Vec2d, point_in_rect, rotate_vector};
use tracing::info;

use crate::canvas::{Anchor, Canvas, Icon, palette};
use crate::oscillator::{Oscillator, damping_factor, draw_arrow};
use crate::params::{ParamSpec, Tunable};

const WIDTH: Real = 250.0;
const HEIGHT: Real = 200.0;

/// Push button region, relative to the bounding box origin.
pub const PUSH_BUTTON: BoundingBox = BoundingBox::new(20.0, 20.0, 30.0, 30.0);

/// Scale applied to the horizontal bob displacement for plotting.
const DEFLECTION_SCALE: Real = 0.65;
/// Visual scale of the tangential force arrow.
const FORCE_ARROW_SCALE: Real = 6.0;
const PIVOT_RADIUS: Real = 10.0;
const BOB_RADIUS: Real = 12.0;
const LABEL_INSET: Real = 30.0;

/// Tunable parameters of a [`SwingOscillator`].
#[derive(Clone, Debug, PartialEq)]
pub struct SwingParams {
    pub gravity: Real,
    /// Step-scaled decay: velocity is multiplied by `1 - damping / 10` each step.
    pub damping: Real,
    pub rope_length: Real,
    /// Angular velocity added by one push.
    pub push_force: Real,
    pub time_step: Real,
}

impl Default for SwingParams {
    fn default() -> Self {
        Self {
            gravity: 20.0,
            damping: 0.03,
            rope_length: 200.0,
            push_force: 0.2,
            time_step: 0.1,
        }
    }
}

/// Point mass on a rigid massless rope, under gravity, with geometric damping.
///
/// One step (semi-implicit Euler):
///
/// ```text
/// α  = -g · sin(θ) / L
/// ω ← (ω + α·dt) · (1 - damping/10)
/// θ ← θ + ω·dt
/// ```
///
/// The angle is never wrapped; the restoring force keeps it bounded.
#[derive(Clone, Debug)]
pub struct SwingOscillator {
    name: String,
    origin: Vec2d,
    angle: Real,
    angular_velocity: Real,
    /// Acceleration from the most recent step, kept for the force arrow.
    angular_acceleration: Real,
    pub params: SwingParams,
}

impl SwingOscillator {
    /// Create a swing at rest at `initial_angle` radians.
    pub fn new(name: impl Into<String>, origin: Vec2d, initial_angle: Real) -> Self {
        Self::with_params(name, origin, initial_angle, SwingParams::default())
    }

    pub fn with_params(
        name: impl Into<String>,
        origin: Vec2d,
        initial_angle: Real,
        params: SwingParams,
    ) -> Self {
        Self {
            name: name.into(),
            origin,
            angle: initial_angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            params,
        }
    }

    pub fn angle(&self) -> Real {
        self.angle
    }

    pub fn angular_velocity(&self) -> Real {
        self.angular_velocity
    }

    pub fn angular_acceleration(&self) -> Real {
        self.angular_acceleration
    }

    pub fn set_state(&mut self, angle: Real, angular_velocity: Real) {
        self.angle = angle;
        self.angular_velocity = angular_velocity;
    }

    /// Rope attachment point in canvas coordinates.
    pub fn pivot(&self) -> Vec2d {
        Vec2d::new(self.origin.x + WIDTH / 2.0, self.origin.y)
    }

    /// Bob centre in canvas coordinates, derived from the angle.
    pub fn bob_position(&self) -> Vec2d {
        let (sin, cos) = self.angle.sin_cos();
        self.pivot() + Vec2d::new(sin, cos) * self.params.rope_length
    }

    pub fn push(&mut self) {
        self.angular_velocity += self.params.push_force;
        info!(swing = %self.name, velocity = self.angular_velocity, "pushed");
    }
}

impl Oscillator for SwingOscillator {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_origin_size(self.origin, WIDTH, HEIGHT)
    }

    fn translate(&mut self, delta: Vec2d) {
        self.origin += delta;
    }

    fn time_step(&self) -> Real {
        self.params.time_step
    }

    fn step(&mut self) {
        let dt = self.time_step();
        let p = &self.params;
        let angular_acceleration = -p.gravity * self.angle.sin() / p.rope_length;
        self.angular_velocity += angular_acceleration * dt;
        self.angular_velocity *= damping_factor(p.damping);
        self.angle += self.angular_velocity * dt;
        self.angular_acceleration = angular_acceleration;
    }

    fn deflection(&self) -> Real {
        self.params.rope_length * self.angle.sin() * DEFLECTION_SCALE
    }

    fn clicked(&mut self, local: Vec2d) {
        let b = PUSH_BUTTON;
        if point_in_rect(local, b.x, b.y, b.width, b.height) {
            self.push();
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let pivot = self.pivot();
        let bob = self.bob_position();

        if bob.is_finite() {
            canvas.line(pivot, bob, palette::WHITE, 3.0);
            canvas.circle(bob, BOB_RADIUS, palette::WHITE);

            // Tangential acceleration, rotated into the rope frame.
            let force = Vec2d::new(
                self.angular_acceleration * self.params.rope_length * FORCE_ARROW_SCALE,
                0.0,
            );
            draw_arrow(canvas, bob, bob + rotate_vector(force, -self.angle), 4.0);
        }
        canvas.circle(pivot, PIVOT_RADIUS, palette::GREY);

        canvas.text(
            self.origin + Vec2d::new(LABEL_INSET, 0.0),
            &self.name,
            palette::GREEN,
            Anchor::TopLeft,
        );

        let mut button = PUSH_BUTTON;
        button.translate(self.origin);
        canvas.icon(Icon::PushButton, button);
    }
}

const SWING_PARAMS: &[ParamSpec<SwingOscillator>] = &[
    ParamSpec {
        name: "gravity",
        get: |s| s.params.gravity,
        set: |s, v| s.params.gravity = v,
    },
    ParamSpec {
        name: "time_step",
        get: |s| s.params.time_step,
        set: |s, v| s.params.time_step = v,
    },
    ParamSpec {
        name: "damping",
        get: |s| s.params.damping,
        set: |s, v| s.params.damping = v,
    },
    ParamSpec {
        name: "rope_length",
        get: |s| s.params.rope_length,
        set: |s, v| s.params.rope_length = v,
    },
    ParamSpec {
        name: "push_force",
        get: |s| s.params.push_force,
        set: |s, v| s.params.push_force = v,
    },
];

impl Tunable for SwingOscillator {
    fn params() -> &'static [ParamSpec<Self>] {
        SWING_PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::params::Nudge;

    fn swing(angle: Real) -> SwingOscillator {
        SwingOscillator::new("Swing #1", Vec2d::new(500.0, 200.0), angle)
    }

    #[test]
    fn single_step_matches_update_rule() {
        let mut s = swing(1.0);
        s.step();

        let alpha = -20.0 * 1.0_f64.sin() / 200.0;
        let omega = alpha * 0.1 * (1.0 - 0.003);
        assert!((s.angular_acceleration() - alpha).abs() < 1e-15);
        assert!((s.angular_velocity() - omega).abs() < 1e-15);
        assert!((s.angle() - (1.0 + omega * 0.1)).abs() < 1e-15);
    }

    #[test]
    fn hanging_straight_down_is_at_rest() {
        let mut s = swing(0.0);
        for _ in 0..100 {
            s.step();
        }
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.angular_velocity(), 0.0);
        assert_eq!(s.deflection(), 0.0);
    }

    #[test]
    fn deflection_is_scaled_horizontal_offset() {
        let s = swing(0.5);
        let expected = 200.0 * 0.5_f64.sin() * 0.65;
        assert!((s.deflection() - expected).abs() < 1e-12);
    }

    #[test]
    fn push_button_adds_push_force() {
        let mut s = swing(0.0);
        s.clicked(Vec2d::new(35.0, 35.0));
        assert!((s.angular_velocity() - 0.2).abs() < 1e-15);
        s.clicked(Vec2d::new(21.0, 49.0));
        assert!((s.angular_velocity() - 0.4).abs() < 1e-15);
    }

    #[test]
    fn clicks_outside_push_button_are_ignored() {
        let mut s = swing(0.3);
        for p in [
            Vec2d::new(20.0, 35.0),
            Vec2d::new(50.0, 35.0),
            Vec2d::new(100.0, 100.0),
            Vec2d::new(-5.0, -5.0),
        ] {
            s.clicked(p);
        }
        assert_eq!(s.angular_velocity(), 0.0);
        assert_eq!(s.angle(), 0.3);
    }

    #[test]
    fn amplitude_decays_with_damping() {
        let mut s = swing(1.0);
        let initial = s.deflection().abs();
        for _ in 0..5_000 {
            s.step();
        }
        assert!(s.deflection().abs() < initial * 0.1);
    }

    #[test]
    fn bob_hangs_rope_length_below_pivot() {
        let s = swing(0.0);
        assert_eq!(s.pivot(), Vec2d::new(625.0, 200.0));
        assert_eq!(s.bob_position(), Vec2d::new(625.0, 400.0));
    }

    #[test]
    fn draw_emits_label_and_push_button() {
        let mut s = swing(0.4);
        s.step();
        let mut list = DrawList::new();
        s.draw(&mut list);

        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Swing #1"]);
        let icons: Vec<_> = list.icons().collect();
        assert_eq!(
            icons,
            vec![(Icon::PushButton, BoundingBox::new(520.0, 220.0, 30.0, 30.0))]
        );
    }

    #[test]
    fn non_finite_state_draws_without_bob() {
        let mut s = swing(Real::NAN);
        s.step();
        let mut list = DrawList::new();
        s.draw(&mut list);
        assert_eq!(list.lines().count(), 0);
        assert_eq!(list.texts().count(), 1);
    }

    #[test]
    fn parameter_table_order_and_access() {
        assert_eq!(
            SwingOscillator::param_names(),
            vec!["gravity", "time_step", "damping", "rope_length", "push_force"]
        );
        let mut s = swing(0.0);
        assert_eq!(s.param("rope_length"), Some(200.0));
        s.nudge_param("gravity", Nudge::Up);
        assert!((s.params.gravity - 22.0).abs() < 1e-12);
    }
}
