use glam::Vec3;

/// Geometry primitive. Tessellation happens on the renderer side.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshShape {
    /// UV sphere centred on the origin.
    Sphere { diameter: f32, segments: u32 },
    /// Axis-aligned box centred on the origin.
    Cuboid { size: f32 },
    /// Square plane facing -Z (text labels).
    Plane { size: f32 },
    /// Polyline in local space, drawn through the line buffer.
    Lines { points: Vec<Vec3>, color: [f32; 3] },
}

impl MeshShape {
    /// Wire tag read by the TypeScript renderer.
    pub fn kind(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Cuboid { .. } => 1.0,
            MeshShape::Plane { .. } => 2.0,
            MeshShape::Lines { .. } => 3.0,
        }
    }

    /// Primary size parameter (diameter or edge length).
    pub fn size(&self) -> f32 {
        match self {
            MeshShape::Sphere { diameter, .. } => *diameter,
            MeshShape::Cuboid { size } | MeshShape::Plane { size } => *size,
            MeshShape::Lines { .. } => 0.0,
        }
    }
}

/// Component for renderable geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    /// Hidden meshes stay in the scene but are not written to the render buffer.
    pub visible: bool,
}

impl MeshComponent {
    pub fn new(shape: MeshShape) -> Self {
        Self { shape, visible: true }
    }

    pub fn sphere(diameter: f32) -> Self {
        Self::new(MeshShape::Sphere { diameter, segments: 32 })
    }

    pub fn cuboid(size: f32) -> Self {
        Self::new(MeshShape::Cuboid { size })
    }

    pub fn plane(size: f32) -> Self {
        Self::new(MeshShape::Plane { size })
    }

    pub fn lines(points: Vec<Vec3>, color: [f32; 3]) -> Self {
        Self::new(MeshShape::Lines { points, color })
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        if let MeshShape::Sphere { segments: ref mut s, .. } = self.shape {
            *s = segments;
        }
        self
    }
}
