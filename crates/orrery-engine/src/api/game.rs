use glam::{Vec2, Vec3};
use crate::api::error::EngineError;
use crate::api::types::{EntityId, GameEvent, MaterialId, Space, Viewport};
use crate::assets::registry::MaterialRegistry;
use crate::components::entity::Entity;
use crate::components::material::StandardMaterial;
use crate::core::scene::Scene;
use crate::core::transform::TransformGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::CameraView;
use crate::systems::lighting::LightState;
use crate::systems::picking::{self, PickHit};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial canvas width in pixels (updated by resize events).
    pub viewport_width: f32,
    /// Initial canvas height in pixels.
    pub viewport_height: f32,
    /// Canvas clear color (RGBA). Default: transparent black.
    pub clear_color: [f32; 4],
    /// Maximum number of mesh instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of line vertices (default: 1024).
    pub max_line_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of hemispheric lights (default: 4).
    pub max_lights: usize,
    /// Edge length of the skybox cube, or None for no skybox.
    pub skybox_size: Option<f32>,
    /// Length of the debug world axes, or None to hide them.
    #[cfg(feature = "axes")]
    pub world_axes: Option<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            clear_color: [0.0, 0.0, 0.0, 0.0],
            max_instances: 256,
            max_line_vertices: 1024,
            max_events: 32,
            max_lights: 4,
            skybox_size: None,
            #[cfg(feature = "axes")]
            world_axes: None,
        }
    }
}

/// The core contract every game must fulfill.
///
/// Host events reach the game through two channels: raw input through
/// `update`'s queue, and resolved events (`on_pick`, `on_resize`) that the
/// runner dispatches after doing the engine-side work.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Called once per rendered frame, after host events were dispatched.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// The camera to render (and pick) through, if any.
    fn camera(&self) -> Option<CameraView> {
        None
    }

    /// A click was ray-cast through the active camera. `None` means nothing was hit.
    fn on_pick(&mut self, _ctx: &mut EngineContext, _hit: Option<PickHit>) {}

    /// The canvas was resized. `ctx.viewport` is already updated.
    fn on_resize(&mut self, _ctx: &mut EngineContext, _viewport: Viewport) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub transforms: TransformGraph,
    pub materials: MaterialRegistry,
    pub lights: LightState,
    pub events: Vec<GameEvent>,
    pub viewport: Viewport,
    /// Seconds elapsed since the previous frame.
    pub dt: f32,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_viewport(Viewport::new(800.0, 600.0))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            scene: Scene::new(),
            transforms: TransformGraph::new(),
            materials: MaterialRegistry::new(),
            lights: LightState::new(),
            events: Vec::new(),
            viewport,
            dt: 0.0,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity to the scene and register it as a hierarchy root.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.transforms.register(id);
        self.scene.spawn(entity);
        id
    }

    /// Remove an entity from the scene and the hierarchy.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.transforms.remove(id);
        self.scene.despawn(id)
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity, EngineError> {
        self.scene.get(id).ok_or(EngineError::EntityNotFound(id))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, EngineError> {
        self.scene.get_mut(id).ok_or(EngineError::EntityNotFound(id))
    }

    /// Attach `child` to `parent`. The relation is permanent.
    pub fn set_parent(&mut self, child: EntityId, parent: EntityId) -> Result<(), EngineError> {
        self.transforms.set_parent(child, parent)?;
        // Refresh world matrices so the child's world transform is valid immediately.
        self.transforms.propagate(&mut self.scene);
        Ok(())
    }

    /// Rotate an entity around `axis` by `angle` radians.
    pub fn rotate(&mut self, id: EntityId, axis: Vec3, angle: f32, space: Space) -> Result<(), EngineError> {
        self.transforms.rotate(&mut self.scene, id, axis, angle, space)
    }

    /// World position as of the last propagation.
    pub fn world_position(&self, id: EntityId) -> Result<Vec3, EngineError> {
        self.entity(id).map(Entity::world_position)
    }

    /// Register a material and return its id.
    pub fn add_material(&mut self, material: StandardMaterial) -> MaterialId {
        self.materials.add(material)
    }

    /// Recompute every world matrix from the local transforms.
    pub fn propagate(&mut self) {
        self.transforms.propagate(&mut self.scene);
    }

    /// Ray-cast from a screen point through `camera`.
    pub fn pick(&self, camera: &CameraView, screen: Vec2) -> Option<PickHit> {
        let ray = camera.screen_ray(&self.viewport, screen);
        picking::pick(&self.scene, &ray)
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::MeshComponent;
    use crate::renderer::camera::FreeCamera;

    #[test]
    fn spawn_registers_in_hierarchy() {
        let mut ctx = EngineContext::new();
        let id = ctx.next_id();
        ctx.spawn(Entity::new(id));
        assert_eq!(ctx.scene.len(), 1);
        assert_eq!(ctx.transforms.roots(), &[id]);
    }

    #[test]
    fn set_parent_refreshes_world() {
        let mut ctx = EngineContext::new();
        let parent = ctx.next_id();
        let child = ctx.next_id();
        ctx.spawn(Entity::new(parent).with_position(Vec3::new(0.0, 5.0, 0.0)));
        ctx.spawn(Entity::new(child).with_position(Vec3::new(1.0, 0.0, 0.0)));

        ctx.set_parent(child, parent).unwrap();
        assert_eq!(ctx.world_position(child).unwrap(), Vec3::new(1.0, 5.0, 0.0));
        assert!(ctx.set_parent(child, parent).is_err());
    }

    #[test]
    fn missing_entity_is_an_error() {
        let ctx = EngineContext::new();
        assert!(matches!(
            ctx.world_position(EntityId(42)),
            Err(EngineError::EntityNotFound(EntityId(42)))
        ));
    }

    #[test]
    fn despawn_cleans_up_hierarchy() {
        let mut ctx = EngineContext::new();
        let id = ctx.next_id();
        ctx.spawn(Entity::new(id));
        assert!(ctx.despawn(id).is_some());
        assert!(ctx.transforms.is_empty());
    }

    #[test]
    fn pick_through_camera_center() {
        let mut ctx = EngineContext::with_viewport(Viewport::new(800.0, 600.0));
        let id = ctx.next_id();
        ctx.spawn(Entity::new(id).with_mesh(MeshComponent::sphere(2.0)));
        ctx.propagate();

        let mut cam = FreeCamera::new(Vec3::new(0.0, 0.0, -10.0));
        cam.set_target(Vec3::ZERO);
        let hit = ctx.pick(&cam.view(), Vec2::new(400.0, 300.0)).unwrap();
        assert_eq!(hit.entity, id);
        assert!((hit.point.z + 1.0).abs() < 1e-3);

        assert!(ctx.pick(&cam.view(), Vec2::new(0.0, 0.0)).is_none());
    }
}
