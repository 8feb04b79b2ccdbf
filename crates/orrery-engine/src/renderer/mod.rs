pub mod camera;
pub mod instance;
pub mod lines;

pub use camera::{CameraUniform, CameraView, FollowCamera, FreeCamera};
pub use instance::{MeshInstance, RenderBuffer};
pub use lines::{LineBuffer, LineVertex};
