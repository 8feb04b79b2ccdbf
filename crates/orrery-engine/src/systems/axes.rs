//! Debug world axes: X/Y/Z arrows with text labels, drawn through the line buffer.

use glam::Vec3;
use crate::api::game::EngineContext;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::material::{StandardMaterial, TextureSource};
use crate::components::mesh::MeshComponent;

/// Entities making up the axes gizmo.
#[derive(Debug, Clone, Copy)]
pub struct WorldAxes {
    pub lines: [EntityId; 3],
    pub labels: [EntityId; 3],
}

struct AxisSpec {
    name: &'static str,
    color: [f32; 3],
    css: &'static str,
    /// Arrow polyline for a unit-length axis.
    points: [Vec3; 5],
    /// Label position for a unit-length axis.
    label: Vec3,
}

fn axis_specs() -> [AxisSpec; 3] {
    [
        AxisSpec {
            name: "X",
            color: [1.0, 0.0, 0.0],
            css: "red",
            points: [
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.95, 0.05, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.95, -0.05, 0.0),
            ],
            label: Vec3::new(0.9, -0.05, 0.0),
        },
        AxisSpec {
            name: "Y",
            color: [0.0, 1.0, 0.0],
            css: "green",
            points: [
                Vec3::ZERO,
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-0.05, 0.95, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.05, 0.95, 0.0),
            ],
            label: Vec3::new(0.0, 0.9, -0.05),
        },
        AxisSpec {
            name: "Z",
            color: [0.0, 0.0, 1.0],
            css: "blue",
            points: [
                Vec3::ZERO,
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, -0.05, 0.95),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.05, 0.95),
            ],
            label: Vec3::new(0.0, 0.05, 0.9),
        },
    ]
}

/// Spawn world axes of length `size` at the origin.
pub fn show_world_axes(ctx: &mut EngineContext, size: f32) -> WorldAxes {
    let mut lines = [EntityId(0); 3];
    let mut labels = [EntityId(0); 3];

    for (i, spec) in axis_specs().into_iter().enumerate() {
        let points = spec.points.iter().map(|p| *p * size).collect();
        let id = ctx.next_id();
        lines[i] = ctx.spawn(
            Entity::new(id)
                .with_tag(format!("axis{}", spec.name))
                .with_mesh(MeshComponent::lines(points, spec.color))
                .with_pickable(false),
        );

        let material = ctx.add_material(
            StandardMaterial::new(format!("axis{}_label", spec.name))
                .with_diffuse_texture(TextureSource::Text {
                    text: spec.name.to_string(),
                    color: spec.css.to_string(),
                })
                .with_back_face_culling(false)
                .with_specular_color([0.0, 0.0, 0.0]),
        );
        let id = ctx.next_id();
        labels[i] = ctx.spawn(
            Entity::new(id)
                .with_tag(format!("axis{}_label", spec.name))
                .with_position(spec.label * size)
                .with_mesh(MeshComponent::plane(size / 10.0))
                .with_material(material)
                .with_pickable(false),
        );
    }

    WorldAxes { lines, labels }
}
