use glam::Vec3;
use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::renderer::instance::{MeshInstance, RenderBuffer};
use crate::renderer::lines::LineBuffer;

/// Build the render buffer from a set of entities.
///
/// Line meshes are skipped (see `build_line_buffer`). Infinite-distance meshes
/// are recentred on `eye`. Returns the number of instances dropped because the
/// buffer was full.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    eye: Vec3,
    max_instances: usize,
    buffer: &mut RenderBuffer,
) -> usize {
    buffer.clear();
    let mut dropped = 0;

    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) if m.visible => m,
            _ => continue,
        };
        let segments = match mesh.shape {
            MeshShape::Lines { .. } => continue,
            MeshShape::Sphere { segments, .. } => segments as f32,
            _ => 0.0,
        };
        if buffer.instance_count() as usize >= max_instances {
            dropped += 1;
            continue;
        }

        let world = if entity.infinite_distance {
            let mut m = entity.world;
            m.w_axis = eye.extend(1.0);
            m
        } else {
            entity.world
        };

        buffer.push(MeshInstance {
            world: world.to_cols_array(),
            shape: mesh.shape.kind(),
            size: mesh.shape.size(),
            segments,
            material: entity.material.map_or(-1.0, |m| m.0 as f32),
            infinite_distance: if entity.infinite_distance { 1.0 } else { 0.0 },
            entity: entity.id.0 as f32,
            _pad0: 0.0,
            _pad1: 0.0,
        });
    }

    dropped
}

/// Write every line mesh, transformed to world space, into the line buffer.
/// Returns the number of polylines that did not fit.
pub fn build_line_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, lines: &mut LineBuffer) -> usize {
    lines.clear();
    let mut dropped = 0;

    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(mesh) = &entity.mesh else { continue };
        if !mesh.visible {
            continue;
        }
        if let MeshShape::Lines { points, color } = &mesh.shape {
            let world: Vec<Vec3> = points.iter().map(|p| entity.world.transform_point3(*p)).collect();
            if !lines.push_polyline(&world, *color) {
                dropped += 1;
            }
        }
    }

    dropped
}
