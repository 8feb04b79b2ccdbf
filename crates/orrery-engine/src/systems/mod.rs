pub mod lighting;
pub mod picking;
pub mod render;
pub mod skybox;
#[cfg(feature = "axes")]
pub mod axes;
