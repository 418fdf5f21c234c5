//! Damped mass-spring oscillator along the vertical axis.

use osc_core::{BoundingBox, Real, Vec2d};

use crate::canvas::{Anchor, Canvas, palette};
use crate::oscillator::{Oscillator, damping_factor, draw_arrow};
use crate::params::{ParamSpec, Tunable};

const WIDTH: Real = 75.0;
const HEIGHT: Real = 200.0;

/// Distance from the anchor to the bob when the spring is at rest.
pub const EQUILIBRIUM_OFFSET: Real = 100.0;

const COIL_POINTS: usize = 20;
const COIL_HALF_WIDTH: Real = 5.0;
/// Horizontal position of the spring axis inside the bounding box.
const AXIS_X: Real = 20.0;
const LABEL_INSET: Real = 30.0;

/// Tunable parameters of a [`SpringOscillator`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpringParams {
    /// Mass of the bob; must stay positive for a meaningful model.
    pub weight: Real,
    pub rigidity: Real,
    /// Step-scaled decay: velocity is multiplied by `1 - damping / 10` each step.
    pub damping: Real,
    pub time_step: Real,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            weight: 1.0,
            rigidity: 1.0,
            damping: 0.1,
            time_step: 0.1,
        }
    }
}

/// Linear spring with a hanging mass:
///
/// ```text
/// a  = -k · x / m
/// v ← (v + a·dt) · (1 - damping/10)
/// x ← x + v·dt
/// ```
///
/// `x` is measured from the equilibrium position, positive downwards.
/// Zero or negative `weight` is not rejected and yields non-finite or
/// diverging state.
#[derive(Clone, Debug)]
pub struct SpringOscillator {
    name: String,
    origin: Vec2d,
    deflection: Real,
    velocity: Real,
    pub params: SpringParams,
}

impl SpringOscillator {
    pub fn new(name: impl Into<String>, origin: Vec2d, initial_deflection: Real) -> Self {
        Self::with_params(name, origin, initial_deflection, 0.0, SpringParams::default())
    }

    pub fn with_params(
        name: impl Into<String>,
        origin: Vec2d,
        initial_deflection: Real,
        initial_velocity: Real,
        params: SpringParams,
    ) -> Self {
        Self {
            name: name.into(),
            origin,
            deflection: initial_deflection,
            velocity: initial_velocity,
            params,
        }
    }

    pub fn velocity(&self) -> Real {
        self.velocity
    }

    /// Bob centre in canvas coordinates.
    pub fn bob_position(&self) -> Vec2d {
        self.origin + Vec2d::new(AXIS_X, EQUILIBRIUM_OFFSET + self.deflection)
    }

    fn bob_radius(&self) -> Real {
        10.0 * self.params.weight.abs().cbrt()
    }

    fn draw_coil(&self, canvas: &mut dyn Canvas) {
        let length = EQUILIBRIUM_OFFSET + self.deflection;
        let last = (COIL_POINTS - 1) as Real;
        let points = (0..COIL_POINTS).map(|i| {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            self.origin + Vec2d::new(side * COIL_HALF_WIDTH + AXIS_X, i as Real * length / last)
        });

        let mut prev: Option<Vec2d> = None;
        for p in points {
            if let Some(q) = prev {
                canvas.line(q, p, palette::WHITE, 2.0);
            }
            prev = Some(p);
        }
    }
}

impl Oscillator for SpringOscillator {
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
        let acceleration = -p.rigidity * self.deflection / p.weight;
        self.velocity += acceleration * dt;
        self.velocity *= damping_factor(p.damping);
        self.deflection += self.velocity * dt;
    }

    fn deflection(&self) -> Real {
        self.deflection
    }

    /// Grab and drop: the bob is placed under the pointer and released at rest.
    fn clicked(&mut self, local: Vec2d) {
        self.velocity = 0.0;
        self.deflection = local.y - EQUILIBRIUM_OFFSET;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let bob = self.bob_position();
        if bob.is_finite() {
            canvas.circle(bob, self.bob_radius(), palette::WHITE);
            self.draw_coil(canvas);
            draw_arrow(canvas, bob, bob + Vec2d::new(0.0, self.velocity), 4.0);
        }

        canvas.text(
            self.origin + Vec2d::new(LABEL_INSET, 0.0),
            &self.name,
            palette::GREEN,
            Anchor::TopLeft,
        );
    }
}

const SPRING_PARAMS: &[ParamSpec<SpringOscillator>] = &[
    ParamSpec {
        name: "rigidity",
        get: |s| s.params.rigidity,
        set: |s, v| s.params.rigidity = v,
    },
    ParamSpec {
        name: "time_step",
        get: |s| s.params.time_step,
        set: |s, v| s.params.time_step = v,
    },
    ParamSpec {
        name: "weight",
        get: |s| s.params.weight,
        set: |s, v| s.params.weight = v,
    },
    ParamSpec {
        name: "damping",
        get: |s| s.params.damping,
        set: |s, v| s.params.damping = v,
    },
];

impl Tunable for SpringOscillator {
    fn params() -> &'static [ParamSpec<Self>] {
        SPRING_PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;

    fn spring(deflection: Real) -> SpringOscillator {
        SpringOscillator::new("Spring #1", Vec2d::new(200.0, 200.0), deflection)
    }

    #[test]
    fn first_step_from_seventy() {
        let mut s = spring(70.0);
        s.step();
        // v = (0 - 1·70/1·0.1)·0.99, x = 70 + v·0.1
        assert!((s.velocity() - (-6.93)).abs() < 1e-12);
        assert!((s.deflection() - 69.307).abs() < 1e-12);
    }

    #[test]
    fn rest_state_is_fixed_point() {
        let mut s = spring(0.0);
        for _ in 0..1_000 {
            s.step();
            assert_eq!(s.deflection(), 0.0);
            assert_eq!(s.velocity(), 0.0);
        }
    }

    #[test]
    fn click_grabs_and_drops_bob() {
        let mut s = SpringOscillator::with_params(
            "Spring #2",
            Vec2d::ZERO,
            10.0,
            5.0,
            SpringParams::default(),
        );
        s.clicked(Vec2d::new(12.0, 130.0));
        assert_eq!(s.velocity(), 0.0);
        assert_eq!(s.deflection(), 30.0);
        assert_eq!(s.bob_position(), Vec2d::new(20.0, 130.0));
    }

    #[test]
    fn zero_weight_produces_non_finite_state_without_panicking() {
        let mut s = spring(5.0);
        s.params.weight = 0.0;
        s.step();
        assert!(!s.deflection().is_finite());

        let mut list = DrawList::new();
        s.draw(&mut list);
        assert_eq!(list.lines().count(), 0);
    }

    #[test]
    fn coil_spans_anchor_to_bob() {
        let s = spring(20.0);
        let mut list = DrawList::new();
        s.draw(&mut list);

        let coil: Vec<_> = list
            .lines()
            .filter(|(from, to)| from.y < to.y && (from.x - to.x).abs() > 1e-9)
            .collect();
        assert_eq!(coil.len(), COIL_POINTS - 1);
        assert_eq!(coil[0].0.y, 200.0);
        assert!((coil.last().unwrap().1.y - 320.0).abs() < 1e-9);
    }

    #[test]
    fn parameter_table_order() {
        assert_eq!(
            SpringOscillator::param_names(),
            vec!["rigidity", "time_step", "weight", "damping"]
        );
    }
}
