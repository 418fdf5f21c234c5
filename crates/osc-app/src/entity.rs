//! Tagged union over everything the scene can hold.

use osc_core::{BoundingBox, Real, Vec2d};
use osc_sim::{Canvas, Nudge, Oscillator, Plot, SpringOscillator, SwingOscillator, Tunable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Swing,
    Spring,
    Plot,
}

/// A renderable, clickable scene entry.
///
/// A plot needs its source oscillator's deflection to step, which only the
/// scene can resolve, so [`crate::Scene::step_all`] passes it in.
#[derive(Debug, Clone)]
pub enum Entity {
    Swing(SwingOscillator),
    Spring(SpringOscillator),
    Plot(Plot),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Swing(_) => EntityKind::Swing,
            Entity::Spring(_) => EntityKind::Spring,
            Entity::Plot(_) => EntityKind::Plot,
        }
    }

    /// Display label; a plot shows its source's name.
    pub fn label(&self) -> &str {
        match self {
            Entity::Plot(p) => p.label(),
            _ => self.as_oscillator().map(|o| o.name()).unwrap_or_default(),
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        match self {
            Entity::Swing(s) => s.bounds(),
            Entity::Spring(s) => s.bounds(),
            Entity::Plot(p) => p.bounds(),
        }
    }

    pub fn translate(&mut self, delta: Vec2d) {
        match self {
            Entity::Swing(s) => s.translate(delta),
            Entity::Spring(s) => s.translate(delta),
            Entity::Plot(p) => p.translate(delta),
        }
    }

    pub fn as_oscillator(&self) -> Option<&dyn Oscillator> {
        match self {
            Entity::Swing(s) => Some(s),
            Entity::Spring(s) => Some(s),
            Entity::Plot(_) => None,
        }
    }

    pub fn as_plot(&self) -> Option<&Plot> {
        match self {
            Entity::Plot(p) => Some(p),
            _ => None,
        }
    }

    /// Advance one frame. Oscillators integrate; a plot records
    /// `source_deflection` and stays put when it is `None`.
    pub fn step(&mut self, source_deflection: Option<Real>) {
        match self {
            Entity::Swing(s) => s.step(),
            Entity::Spring(s) => s.step(),
            Entity::Plot(p) => {
                if let Some(deflection) = source_deflection {
                    p.record(deflection);
                }
            }
        }
    }

    /// Forward a click given in entity-local coordinates.
    pub fn handle_click(&mut self, local: Vec2d) {
        match self {
            Entity::Swing(s) => s.clicked(local),
            Entity::Spring(s) => s.clicked(local),
            Entity::Plot(p) => p.clicked(local),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Entity::Swing(s) => s.draw(canvas),
            Entity::Spring(s) => s.draw(canvas),
            Entity::Plot(p) => p.draw(canvas),
        }
    }

    pub fn param_names(&self) -> Vec<&'static str> {
        match self {
            Entity::Swing(_) => SwingOscillator::param_names(),
            Entity::Spring(_) => SpringOscillator::param_names(),
            Entity::Plot(_) => Plot::param_names(),
        }
    }

    pub fn param(&self, name: &str) -> Option<Real> {
        match self {
            Entity::Swing(s) => s.param(name),
            Entity::Spring(s) => s.param(name),
            Entity::Plot(p) => p.param(name),
        }
    }

    pub fn nudge_param(&mut self, name: &str, nudge: Nudge) -> Option<Real> {
        match self {
            Entity::Swing(s) => s.nudge_param(name, nudge),
            Entity::Spring(s) => s.nudge_param(name, nudge),
            Entity::Plot(p) => p.nudge_param(name, nudge),
        }
    }
}

impl From<SwingOscillator> for Entity {
    fn from(s: SwingOscillator) -> Self {
        Entity::Swing(s)
    }
}

impl From<SpringOscillator> for Entity {
    fn from(s: SpringOscillator) -> Self {
        Entity::Spring(s)
    }
}

impl From<Plot> for Entity {
    fn from(p: Plot) -> Self {
        Entity::Plot(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osc_core::EntityId;

    #[test]
    fn plot_label_comes_from_source_name() {
        let e: Entity = Plot::new(EntityId::from_index(3), "Swing #2", Vec2d::ZERO, 500.0).into();
        assert_eq!(e.kind(), EntityKind::Plot);
        assert_eq!(e.label(), "Swing #2");
        assert!(e.as_oscillator().is_none());
    }

    #[test]
    fn tunables_dispatch_by_variant() {
        let mut e: Entity = SpringOscillator::new("Spring #1", Vec2d::ZERO, 70.0).into();
        assert_eq!(e.param_names(), vec!["rigidity", "time_step", "weight", "damping"]);
        let v = e.nudge_param("weight", Nudge::Up);
        assert!((v.unwrap() - 1.1).abs() < 1e-12);
        assert_eq!(e.param("gravity"), None);
    }

    #[test]
    fn plot_without_source_deflection_does_not_record() {
        let mut e: Entity = Plot::new(EntityId::from_index(0), "Spring #1", Vec2d::ZERO, 300.0).into();
        e.step(None);
        assert!(e.as_plot().unwrap().is_empty());
        e.step(Some(4.0));
        assert_eq!(e.as_plot().unwrap().len(), 1);
    }

    #[test]
    fn translate_moves_bounds() {
        let mut e: Entity = SwingOscillator::new("Swing #1", Vec2d::new(500.0, 200.0), 1.0).into();
        e.translate(Vec2d::new(-10.0, 5.0));
        assert_eq!(e.bounds(), BoundingBox::new(490.0, 205.0, 250.0, 200.0));
    }
}
