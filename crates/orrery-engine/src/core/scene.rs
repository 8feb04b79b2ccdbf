use std::collections::HashMap;

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity storage: a dense Vec for iteration order plus an id index for
/// lookups during propagation and picking.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity. An entity with the same id is replaced in place.
    pub fn spawn(&mut self, entity: Entity) {
        match self.index.get(&entity.id) {
            Some(&slot) => self.entities[slot] = entity,
            None => {
                self.index.insert(entity.id, self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let slot = self.index.remove(&id)?;
        let removed = self.entities.swap_remove(slot);
        if let Some(moved) = self.entities.get(slot) {
            self.index.insert(moved.id, slot);
        }
        Some(removed)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index.get(&id).map(|&slot| &self.entities[slot])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let slot = *self.index.get(&id)?;
        self.entities.get_mut(slot)
    }

    /// Iterate in spawn order (disturbed only by despawns).
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_position(Vec3::new(10.0, 20.0, 30.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.position, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn respawn_replaces() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("old"));
        scene.spawn(Entity::new(EntityId(1)).with_tag("new"));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(EntityId(1)).unwrap().tag, "new");
    }

    #[test]
    fn despawn_keeps_index_consistent() {
        let mut scene = Scene::new();
        for i in 1..=3 {
            scene.spawn(Entity::new(EntityId(i)).with_tag(format!("e{i}")));
        }
        assert!(scene.despawn(EntityId(1)).is_some());
        assert!(scene.despawn(EntityId(1)).is_none());

        // The last entity was swapped into the freed slot.
        assert_eq!(scene.get(EntityId(3)).unwrap().tag, "e3");
        scene.get_mut(EntityId(3)).unwrap().position = Vec3::ONE;
        assert_eq!(scene.get(EntityId(3)).unwrap().position, Vec3::ONE);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("sol"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("earth"));
        let earth = scene.find_by_tag("earth").unwrap();
        assert_eq!(earth.id, EntityId(2));
    }
}
