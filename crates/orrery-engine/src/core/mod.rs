pub mod scene;
pub mod transform;
