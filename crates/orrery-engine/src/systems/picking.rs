//! Ray picking against scene meshes.
//!
//! Spheres are tested exactly; cuboids and planes use their world-space
//! bounding box. Line meshes and non-pickable entities are ignored.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::MeshShape;
use crate::core::scene::Scene;

/// World-space ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or(Vec3::Z),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the first intersection with a sphere, if any.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        let far = -b + sqrt_d;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            // Origin inside the sphere.
            Some(far)
        } else {
            None
        }
    }

    /// Slab test against an axis-aligned box.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let inv = self.direction.recip();
        let t1 = (min - self.origin) * inv;
        let t2 = (max - self.origin) * inv;
        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();
        if t_far < 0.0 || t_near > t_far {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: EntityId,
    /// World-space intersection point.
    pub point: Vec3,
    /// Distance along the ray.
    pub distance: f32,
}

/// Find the nearest pickable mesh hit by `ray`.
pub fn pick(scene: &Scene, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for entity in scene.iter() {
        if !entity.active || !entity.pickable {
            continue;
        }
        let Some(mesh) = &entity.mesh else { continue };
        if !mesh.visible {
            continue;
        }

        let center = entity.world_position();
        let scale = entity.world_max_scale();
        let distance = match mesh.shape {
            MeshShape::Sphere { diameter, .. } => ray.intersect_sphere(center, diameter * 0.5 * scale),
            MeshShape::Cuboid { size } | MeshShape::Plane { size } => {
                let half = Vec3::splat(size * 0.5 * scale);
                ray.intersect_aabb(center - half, center + half)
            }
            MeshShape::Lines { .. } => None,
        };

        if let Some(distance) = distance {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PickHit {
                    entity: entity.id,
                    point: ray.at(distance),
                    distance,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::MeshComponent;
    use crate::core::transform::TransformGraph;

    fn scene_with(entities: Vec<Entity>) -> Scene {
        let mut scene = Scene::new();
        let mut graph = TransformGraph::new();
        for e in entities {
            graph.register(e.id);
            scene.spawn(e);
        }
        graph.propagate(&mut scene);
        scene
    }

    #[test]
    fn ray_hits_sphere_front_surface() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_sphere_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(ray.intersect_sphere(Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn aabb_slab_test() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
        let t = ray.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        let miss = Ray::new(Vec3::new(5.0, 0.0, -10.0), Vec3::Z);
        assert!(miss.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn pick_returns_nearest() {
        let scene = scene_with(vec![
            Entity::new(EntityId(1))
                .with_position(Vec3::new(0.0, 0.0, 20.0))
                .with_mesh(MeshComponent::sphere(4.0)),
            Entity::new(EntityId(2))
                .with_position(Vec3::new(0.0, 0.0, 5.0))
                .with_mesh(MeshComponent::sphere(2.0)),
        ]);
        let hit = pick(&scene, &Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.entity, EntityId(2));
        assert!((hit.point.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn non_pickable_and_lines_are_ignored() {
        let scene = scene_with(vec![
            Entity::new(EntityId(1))
                .with_position(Vec3::new(0.0, 0.0, 5.0))
                .with_mesh(MeshComponent::cuboid(1000.0))
                .with_pickable(false),
            Entity::new(EntityId(2))
                .with_mesh(MeshComponent::lines(vec![Vec3::ZERO, Vec3::Z * 10.0], [1.0, 0.0, 0.0])),
        ]);
        assert!(pick(&scene, &Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z)).is_none());
    }
}
