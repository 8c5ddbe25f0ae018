//! The cadence driver's view of tracked entities.

use arkonis_core::{QueueOutcome, TickOutcome};
use arkonis_data::Entity;

/// Tracked entities in discovery order, newest updates replacing older copies.
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entity`, or replaces the tracked copy with the same id.
    pub fn upsert(&mut self, entity: Entity) {
        match self.entities.iter_mut().find(|e| e.id == entity.id) {
            Some(existing) => *existing = entity,
            None => self.entities.push(entity),
        }
    }

    pub fn absorb_tick(&mut self, outcome: &TickOutcome) {
        for entity in outcome.new_entity.iter().chain(&outcome.updated_entity) {
            self.upsert(entity.clone());
        }
    }

    pub fn absorb_queue(&mut self, outcome: &QueueOutcome) {
        for entity in &outcome.updated {
            self.upsert(entity.clone());
        }
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_pending()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
