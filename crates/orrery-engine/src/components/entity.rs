use glam::{Mat4, Quat, Vec3};
use crate::api::types::{EntityId, MaterialId};
use crate::components::mesh::MeshComponent;

/// Fat Entity: a single struct with optional components.
/// Local transform is authored by game code; `world` is written by
/// `TransformGraph::propagate` once per frame.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position relative to the parent (or world if no parent).
    pub position: Vec3,
    /// Orientation relative to the parent.
    pub rotation: Quat,
    /// Scale relative to the parent.
    pub scale: Vec3,
    /// Mesh component (entities without meshes are invisible).
    pub mesh: Option<MeshComponent>,
    /// Material used to shade the mesh.
    pub material: Option<MaterialId>,
    /// Whether ray picks can hit this entity.
    pub pickable: bool,
    /// Keep the entity centred on the camera eye (skyboxes).
    pub infinite_distance: bool,
    /// World matrix from the last propagation.
    pub world: Mat4,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            mesh: None,
            material: None,
            pickable: true,
            infinite_distance: false,
            world: Mat4::IDENTITY,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_pickable(mut self, pickable: bool) -> Self {
        self.pickable = pickable;
        self
    }

    pub fn with_infinite_distance(mut self, infinite: bool) -> Self {
        self.infinite_distance = infinite;
        self
    }

    /// Matrix built from the local position/rotation/scale only.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// World-space translation from the last propagation.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// World-space orientation from the last propagation.
    pub fn world_rotation(&self) -> Quat {
        let (_, rotation, _) = self.world.to_scale_rotation_translation();
        rotation
    }

    /// Largest world-space scale factor, used to size bounding volumes.
    pub fn world_max_scale(&self) -> f32 {
        let (scale, _, _) = self.world.to_scale_rotation_translation();
        scale.abs().max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_is_identity() {
        let e = Entity::new(EntityId(7));
        assert_eq!(e.local_matrix(), Mat4::IDENTITY);
        assert_eq!(e.world_position(), Vec3::ZERO);
        assert!(e.pickable);
    }

    #[test]
    fn local_matrix_includes_translation() {
        let e = Entity::new(EntityId(1)).with_position(Vec3::new(3.0, 0.0, -2.0));
        let m = e.local_matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(3.0, 0.0, -2.0));
    }
}
