// core/transform.rs
//
// Transform hierarchy: tracks parent-child relationships by EntityId.
// Local transforms live on the entities; the graph only knows the topology
// and writes `Entity::world` during propagation.
//
// Usage:
//   graph.register(id);
//   graph.set_parent(child_id, parent_id)?;
//   graph.propagate(&mut scene);  // Updates world matrices from local transforms

use std::collections::HashMap;
use glam::{Mat4, Quat, Vec3};
use crate::api::error::EngineError;
use crate::api::types::{EntityId, Space};
use crate::core::scene::Scene;

/// Node in the transform hierarchy.
#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
}

/// Parent-child relationships between entities.
///
/// A parent can be assigned once per entity; re-parenting is rejected so the
/// hierarchy built at scene creation stays fixed for the scene's lifetime.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent (top-level), in registration order.
    roots: Vec<EntityId>,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity as a root of the hierarchy.
    pub fn register(&mut self, id: EntityId) {
        if self.nodes.contains_key(&id) {
            return;
        }
        self.nodes.insert(id, TransformNode::default());
        self.roots.push(id);
    }

    /// Attach `child` under `parent`. Fails if either is unknown, if they are
    /// the same entity, or if `child` already has a parent.
    pub fn set_parent(&mut self, child: EntityId, parent: EntityId) -> Result<(), EngineError> {
        if child == parent {
            return Err(EngineError::SelfParent(child));
        }
        if !self.nodes.contains_key(&parent) {
            return Err(EngineError::EntityNotFound(parent));
        }
        let node = self
            .nodes
            .get_mut(&child)
            .ok_or(EngineError::EntityNotFound(child))?;
        if let Some(existing) = node.parent {
            return Err(EngineError::ParentAlreadySet { child, parent: existing });
        }
        node.parent = Some(parent);

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }
        self.roots.retain(|&r| r != child);
        Ok(())
    }

    /// Get the parent of an entity.
    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of an entity.
    pub fn get_children(&self, id: EntityId) -> Option<&[EntityId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Top-level entities.
    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    /// Remove an entity from the hierarchy.
    /// Children become roots (orphaned).
    pub fn remove(&mut self, id: EntityId) {
        let Some(node) = self.nodes.remove(&id) else { return };

        if let Some(parent) = node.parent {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children.retain(|&c| c != id);
            }
        }

        for child in node.children {
            if let Some(child_node) = self.nodes.get_mut(&child) {
                child_node.parent = None;
            }
            if !self.roots.contains(&child) {
                self.roots.push(child);
            }
        }

        self.roots.retain(|&r| r != id);
    }

    /// Propagate transforms from roots down through the hierarchy,
    /// writing `Entity::world` for every registered entity.
    pub fn propagate(&self, scene: &mut Scene) {
        for &root in &self.roots {
            self.propagate_recursive(root, Mat4::IDENTITY, scene);
        }
    }

    fn propagate_recursive(&self, id: EntityId, parent_world: Mat4, scene: &mut Scene) {
        let Some(node) = self.nodes.get(&id) else { return };

        let world = match scene.get_mut(id) {
            Some(entity) => {
                entity.world = parent_world * entity.local_matrix();
                entity.world
            }
            None => parent_world,
        };

        for &child in &node.children {
            self.propagate_recursive(child, world, scene);
        }
    }

    /// Rotate an entity by `angle` radians around `axis`.
    ///
    /// In `Space::World` the axis is fixed in world coordinates; for a child the
    /// rotation is conjugated into the parent's frame using the parent's world
    /// orientation from the last propagation.
    pub fn rotate(
        &self,
        scene: &mut Scene,
        id: EntityId,
        axis: Vec3,
        angle: f32,
        space: Space,
    ) -> Result<(), EngineError> {
        let parent_rotation = match (space, self.get_parent(id)) {
            (Space::World, Some(parent)) => scene
                .get(parent)
                .map(|p| p.world_rotation())
                .ok_or(EngineError::EntityNotFound(parent))?,
            _ => Quat::IDENTITY,
        };

        let entity = scene.get_mut(id).ok_or(EngineError::EntityNotFound(id))?;
        let delta = Quat::from_axis_angle(axis.normalize_or_zero(), angle);
        entity.rotation = match space {
            Space::Local => (entity.rotation * delta).normalize(),
            Space::World => {
                let local_delta = parent_rotation.inverse() * delta * parent_rotation;
                (local_delta * entity.rotation).normalize()
            }
        };
        Ok(())
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all hierarchy data.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn parent_child_relationship() {
        let mut graph = TransformGraph::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, parent).unwrap();

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_children(parent), Some([child].as_slice()));
        assert_eq!(graph.roots(), &[parent]);
    }

    #[test]
    fn parent_can_only_be_set_once() {
        let mut graph = TransformGraph::new();
        for id in 1..=3 {
            graph.register(EntityId(id));
        }
        graph.set_parent(EntityId(2), EntityId(1)).unwrap();

        let err = graph.set_parent(EntityId(2), EntityId(3)).unwrap_err();
        assert!(matches!(err, EngineError::ParentAlreadySet { parent: EntityId(1), .. }));
        assert_eq!(graph.get_parent(EntityId(2)), Some(EntityId(1)));
    }

    #[test]
    fn self_and_unknown_parents_are_rejected() {
        let mut graph = TransformGraph::new();
        graph.register(EntityId(1));
        assert!(matches!(
            graph.set_parent(EntityId(1), EntityId(1)),
            Err(EngineError::SelfParent(_))
        ));
        assert!(matches!(
            graph.set_parent(EntityId(1), EntityId(9)),
            Err(EngineError::EntityNotFound(EntityId(9)))
        ));
    }

    #[test]
    fn propagate_updates_world_positions() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent).with_position(Vec3::new(100.0, 0.0, 0.0)));
        scene.spawn(Entity::new(child).with_position(Vec3::new(50.0, 0.0, 0.0)));
        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, parent).unwrap();

        graph.propagate(&mut scene);

        assert!(approx(scene.get(child).unwrap().world_position(), Vec3::new(150.0, 0.0, 0.0)));
    }

    #[test]
    fn parent_rotation_carries_children() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent).with_rotation(Quat::from_rotation_y(FRAC_PI_2)));
        scene.spawn(Entity::new(child).with_position(Vec3::new(10.0, 0.0, 0.0)));
        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, parent).unwrap();
        graph.propagate(&mut scene);

        // +X rotated a quarter turn about +Y lands on -Z.
        assert!(approx(scene.get(child).unwrap().world_position(), Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn world_rotation_of_child_uses_world_axis() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent).with_rotation(Quat::from_rotation_x(FRAC_PI_2)));
        scene.spawn(Entity::new(child));
        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, parent).unwrap();
        graph.propagate(&mut scene);

        graph.rotate(&mut scene, child, Vec3::Y, FRAC_PI_2, Space::World).unwrap();
        graph.propagate(&mut scene);

        let expected = Quat::from_rotation_y(FRAC_PI_2) * Quat::from_rotation_x(FRAC_PI_2);
        let actual = scene.get(child).unwrap().world_rotation();
        assert!(approx(actual * Vec3::Z, expected * Vec3::Z));
        assert!(approx(actual * Vec3::X, expected * Vec3::X));
    }

    #[test]
    fn remove_orphans_children() {
        let mut graph = TransformGraph::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, parent).unwrap();

        graph.remove(parent);

        assert_eq!(graph.get_parent(child), None);
        assert!(graph.roots.contains(&child));
        assert_eq!(graph.len(), 1);
    }
}
