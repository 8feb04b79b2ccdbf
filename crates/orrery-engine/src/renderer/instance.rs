use bytemuck::{Pod, Zeroable};

/// Per-instance render data written to SharedArrayBuffer for the TypeScript renderer.
/// Must match the TypeScript protocol: 24 floats = 96 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Column-major world matrix.
    pub world: [f32; 16],
    /// Shape tag (0 sphere, 1 cuboid, 2 plane).
    pub shape: f32,
    /// Diameter or edge length in local units.
    pub size: f32,
    /// Sphere tessellation (ignored for other shapes).
    pub segments: f32,
    /// Index into the material table, or -1 for the default material.
    pub material: f32,
    /// 1.0 when the mesh should ignore camera translation (skybox).
    pub infinite_distance: f32,
    /// Entity id, echoed back so the renderer can key GPU resources.
    pub entity: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all mesh instances for one frame.
pub struct RenderBuffer {
    instances: Vec<MeshInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
