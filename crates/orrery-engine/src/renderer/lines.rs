use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Line-list vertex: 7 floats (x, y, z, r, g, b, a).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 7;

    pub fn new(pos: Vec3, color: [f32; 3]) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            a: 1.0,
        }
    }
}

/// Per-frame line vertices, stored as a line list (two vertices per segment).
pub struct LineBuffer {
    vertices: Vec<LineVertex>,
    max_vertices: usize,
}

impl LineBuffer {
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_vertices),
            max_vertices,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append a polyline as segments. Returns false (and writes nothing) if
    /// the buffer would overflow.
    pub fn push_polyline(&mut self, points: &[Vec3], color: [f32; 3]) -> bool {
        if points.len() < 2 {
            return true;
        }
        let needed = (points.len() - 1) * 2;
        if self.vertices.len() + needed > self.max_vertices {
            return false;
        }
        for pair in points.windows(2) {
            self.vertices.push(LineVertex::new(pair[0], color));
            self.vertices.push(LineVertex::new(pair[1], color));
        }
        true
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::with_capacity(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_expands_to_segments() {
        let mut buf = LineBuffer::with_capacity(16);
        assert!(buf.push_polyline(&[Vec3::ZERO, Vec3::X, Vec3::Y], [1.0, 0.0, 0.0]));
        assert_eq!(buf.vertex_count(), 4);
        assert_eq!(buf.vertices()[1], buf.vertices()[2]);
    }

    #[test]
    fn overflow_is_rejected() {
        let mut buf = LineBuffer::with_capacity(2);
        assert!(!buf.push_polyline(&[Vec3::ZERO, Vec3::X, Vec3::Y], [1.0; 3]));
        assert_eq!(buf.vertex_count(), 0);
    }
}
