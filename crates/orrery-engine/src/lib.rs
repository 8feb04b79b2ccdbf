pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::error::EngineError;
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, MaterialId, GameEvent, Space, Viewport};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape};
pub use components::material::{StandardMaterial, TextureSource};
pub use core::scene::Scene;
pub use core::transform::TransformGraph;
pub use renderer::camera::{CameraView, CameraUniform, FreeCamera, FollowCamera};
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::lines::{LineBuffer, LineVertex};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, SkyboxDescriptor};
pub use assets::registry::MaterialRegistry;
pub use bridge::protocol::{FrameCounts, ProtocolLayout};
pub use systems::lighting::{HemisphericLight, LightState};
pub use systems::picking::{pick, PickHit, Ray};
pub use systems::render::{build_line_buffer, build_render_buffer};
pub use systems::skybox::create_skybox;
#[cfg(feature = "axes")]
pub use systems::axes::{show_world_axes, WorldAxes};
