//! Creating new oscillators together with their plots.

use osc_core::{EntityId, Real, Vec2d};
use osc_sim::{SpringOscillator, SwingOscillator};
use tracing::debug;

use crate::error::SceneResult;
use crate::scene::Scene;

const SPRING_ORIGIN: Vec2d = Vec2d::new(200.0, 200.0);
const SPRING_INITIAL_DEFLECTION: Real = 70.0;
const SPRING_PLOT_ORIGIN: Vec2d = Vec2d::new(0.0, 500.0);

const SWING_ORIGIN: Vec2d = Vec2d::new(500.0, 200.0);
const SWING_INITIAL_ANGLE: Real = 1.0;
const SWING_PLOT_ORIGIN: Vec2d = Vec2d::new(300.0, 500.0);

const SPAWN_PLOT_WIDTH: Real = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Spring,
    Swing,
}

/// Appends oscillator + plot pairs at fixed positions with numbered labels.
///
/// The label counter is shared by both kinds and never decreases.
#[derive(Debug, Clone)]
pub struct Spawner {
    counter: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self { counter: 1 }
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(oscillator, plot)` ids.
    pub fn spawn(&mut self, scene: &mut Scene, kind: SpawnKind) -> SceneResult<(EntityId, EntityId)> {
        let number = self.counter;
        let (oscillator, plot_origin) = match kind {
            SpawnKind::Spring => {
                let spring = SpringOscillator::new(
                    format!("Spring #{number}"),
                    SPRING_ORIGIN,
                    SPRING_INITIAL_DEFLECTION,
                );
                (scene.push(spring), SPRING_PLOT_ORIGIN)
            }
            SpawnKind::Swing => {
                let swing = SwingOscillator::new(
                    format!("Swing #{number}"),
                    SWING_ORIGIN,
                    SWING_INITIAL_ANGLE,
                );
                (scene.push(swing), SWING_PLOT_ORIGIN)
            }
        };
        let plot = scene.attach_plot(oscillator, plot_origin, SPAWN_PLOT_WIDTH)?;
        self.counter += 1;

        debug!(?kind, %oscillator, %plot, "spawned");
        Ok((oscillator, plot))
    }
}
