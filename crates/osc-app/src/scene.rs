//! Ordered registry of scene entities.

use osc_core::{EntityId, Real, Vec2d};
use osc_sim::{Canvas, Plot};
use tracing::{debug, trace};

use crate::entity::Entity;
use crate::error::{SceneError, SceneResult};

/// Insertion-ordered entity registry.
///
/// Insertion order is the update and render order. Plots refer to their
/// source oscillator by [`EntityId`]; removing an oscillator removes its
/// plots in the same call, so a live plot's source always resolves when
/// the scene is driven through the public API.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<(EntityId, Entity)>,
    next_index: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Append an entity and return its freshly allocated id.
    pub fn push(&mut self, entity: impl Into<Entity>) -> EntityId {
        let id = EntityId::from_index(self.next_index);
        self.next_index += 1;
        self.entities.push((id, entity.into()));
        id
    }

    /// Append a plot sampling `source`, labelled with the source's name.
    pub fn attach_plot(
        &mut self,
        source: EntityId,
        origin: Vec2d,
        width: Real,
    ) -> SceneResult<EntityId> {
        let entity = self
            .get(source)
            .ok_or(SceneError::UnknownEntity { id: source })?;
        let oscillator = entity
            .as_oscillator()
            .ok_or(SceneError::NotAnOscillator { id: source })?;
        let plot = Plot::new(source, oscillator.name(), origin, width);
        Ok(self.push(plot))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.position(id).map(|i| &self.entities[i].1)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.position(id).map(|i| &mut self.entities[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|(id, _)| *id).collect()
    }

    /// Plots currently sampling `source`.
    pub fn plots_of(&self, source: EntityId) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| e.as_plot().is_some_and(|p| p.source() == source))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Remove `id` together with every plot that samples it.
    ///
    /// Returns the removed ids in insertion order.
    pub fn remove(&mut self, id: EntityId) -> SceneResult<Vec<EntityId>> {
        if !self.contains(id) {
            return Err(SceneError::UnknownEntity { id });
        }

        let mut removed = Vec::new();
        self.entities.retain(|(eid, entity)| {
            let dependent = entity.as_plot().is_some_and(|p| p.source() == id);
            let drop = *eid == id || dependent;
            if drop {
                removed.push(*eid);
            }
            !drop
        });
        debug!(?removed, "removed entities");
        Ok(removed)
    }

    pub fn translate(&mut self, id: EntityId, delta: Vec2d) -> SceneResult<()> {
        let entity = self.get_mut(id).ok_or(SceneError::UnknownEntity { id })?;
        entity.translate(delta);
        Ok(())
    }

    /// First entity, in insertion order, whose bounding box strictly contains `pos`.
    pub fn hit_test(&self, pos: Vec2d) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, e)| e.bounds().contains(pos))
            .map(|(id, _)| *id)
    }

    /// Every entity under `pos`, in insertion order.
    pub fn hit_all(&self, pos: Vec2d) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| e.bounds().contains(pos))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Advance every entity by one frame and draw it, in insertion order.
    ///
    /// A plot samples its source after the source has stepped in this frame
    /// (sources are always inserted before their plots). A plot whose source
    /// is gone is dormant: it keeps drawing its last window but records nothing.
    pub fn step_all(&mut self, canvas: &mut dyn Canvas) {
        for i in 0..self.entities.len() {
            let (id, entity) = &self.entities[i];
            let source_deflection = match entity {
                Entity::Plot(plot) => {
                    let deflection = self
                        .get(plot.source())
                        .and_then(Entity::as_oscillator)
                        .map(|o| o.deflection());
                    if deflection.is_none() {
                        trace!(plot = %id, source = %plot.source(), "dormant plot");
                    }
                    deflection
                }
                _ => None,
            };

            let entity = &mut self.entities[i].1;
            entity.step(source_deflection);
            entity.draw(canvas);
        }
    }

    /// Draw every entity in insertion order without advancing anything.
    pub fn draw_all(&self, canvas: &mut dyn Canvas) {
        for (_, entity) in &self.entities {
            entity.draw(canvas);
        }
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|(eid, _)| *eid == id)
    }
}
