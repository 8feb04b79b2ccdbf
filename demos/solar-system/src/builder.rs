//! Scene builder: one textured sphere per catalog body, parented to the root.

use std::collections::BTreeMap;

use glam::Vec3;
use orrery_engine::{EngineContext, Entity, EntityId, MeshComponent, StandardMaterial, TextureSource};

use crate::bodies::{BodyId, Catalog, CelestialBody};
use crate::error::SolarError;

/// Sphere tessellation used for every body.
pub const SPHERE_SEGMENTS: u32 = 32;

/// Maps catalog ids to the entities that render them.
#[derive(Debug, Clone, Default)]
pub struct BodyProxies {
    entities: BTreeMap<BodyId, EntityId>,
}

impl BodyProxies {
    pub fn get(&self, id: BodyId) -> Result<EntityId, SolarError> {
        self.entities.get(&id).copied().ok_or(SolarError::UnknownBody(id))
    }

    /// Proxies in body id order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, EntityId)> + '_ {
        self.entities.iter().map(|(body, entity)| (*body, *entity))
    }

    /// Reverse lookup from a picked entity.
    pub fn body_of(&self, entity: EntityId) -> Option<BodyId> {
        self.entities
            .iter()
            .find_map(|(body, e)| (*e == entity).then_some(*body))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Spawn the proxy for one body. The texture is resolved later through the
/// asset manifest, so a missing file only affects the renderer.
fn spawn_proxy(ctx: &mut EngineContext, body: &CelestialBody) -> EntityId {
    let material = ctx.add_material(
        StandardMaterial::new(format!("{}_mat", body.name))
            .with_diffuse_texture(TextureSource::Named { name: body.name.clone() }),
    );
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag(body.name.as_str())
            .with_mesh(MeshComponent::sphere(body.diameter).with_segments(SPHERE_SEGMENTS))
            .with_material(material)
            .with_position(Vec3::new(body.distance, 0.0, 0.0)),
    )
}

/// Build every body in id order and attach non-root bodies to the root.
pub fn build_scene(ctx: &mut EngineContext, catalog: &Catalog) -> Result<BodyProxies, SolarError> {
    let mut proxies = BodyProxies::default();

    for body in catalog.iter() {
        let entity = spawn_proxy(ctx, body);
        proxies.entities.insert(body.id, entity);

        if !body.is_root() {
            let root = proxies.get(BodyId::ROOT)?;
            ctx.set_parent(entity, root)?;
        }
    }

    ctx.propagate();
    log::info!("built {} body proxies", proxies.len());
    Ok(proxies)
}
