//! Skybox: a large inward-facing cube that stays centred on the camera.

use crate::api::game::EngineContext;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::material::{StandardMaterial, TextureSource};
use crate::components::mesh::MeshComponent;

pub const SKYBOX_TAG: &str = "skyBox";

/// Spawn the skybox cube. Its cube texture comes from the asset manifest.
pub fn create_skybox(ctx: &mut EngineContext, size: f32) -> EntityId {
    let material = ctx.add_material(
        StandardMaterial::new(SKYBOX_TAG)
            .with_reflection_texture(TextureSource::Skybox)
            .with_back_face_culling(false)
            .with_disable_lighting(true)
            .with_diffuse_color([0.0, 0.0, 0.0])
            .with_specular_color([0.0, 0.0, 0.0]),
    );
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag(SKYBOX_TAG)
            .with_mesh(MeshComponent::cuboid(size))
            .with_material(material)
            .with_infinite_distance(true)
            .with_pickable(false),
    )
}
