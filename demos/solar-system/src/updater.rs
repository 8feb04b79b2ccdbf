//! Per-frame animation: spin every body about its tilt axis and pin it to its
//! orbital position.
//!
//! The spin is a fixed step per rendered frame, not per second, so the
//! apparent speed follows the frame rate. The orbital phase is the catalog's
//! `rev_speed` taken as a constant angle; bodies only move because the root
//! they are parented to spins.

use glam::{Quat, Vec3};
use orrery_engine::{EngineContext, EntityId};

use crate::bodies::{tilt_axis, Catalog, CelestialBody};
use crate::builder::BodyProxies;
use crate::error::SolarError;

/// Radians of spin applied per frame.
pub const SPIN_STEP: f32 = 0.01;

/// Divisor applied to catalog distances for the animated orbital radius.
pub const ORBIT_SCALE: f32 = 10.0;

/// One frame of spin applied to a world-space orientation.
pub fn spin(axis_deg: f32, orientation: Quat) -> Quat {
    (Quat::from_axis_angle(tilt_axis(axis_deg), SPIN_STEP) * orientation).normalize()
}

/// Local position a body is pinned to every frame.
pub fn orbit_position(body: &CelestialBody) -> Vec3 {
    let radius = body.distance / ORBIT_SCALE;
    Vec3::new(radius * body.rev_speed.sin(), 0.0, radius * body.rev_speed.cos())
}

/// Spin `entity` in world space, storing the result back in its parent's frame.
fn spin_in_world(ctx: &mut EngineContext, entity: EntityId, axis_deg: f32) -> Result<(), SolarError> {
    let parent_rotation = match ctx.transforms.get_parent(entity) {
        Some(parent) => ctx.entity(parent)?.world_rotation(),
        None => Quat::IDENTITY,
    };
    let proxy = ctx.entity_mut(entity)?;
    let world = spin(axis_deg, parent_rotation * proxy.rotation);
    proxy.rotation = (parent_rotation.inverse() * world).normalize();
    Ok(())
}

/// Advance every proxy by one frame.
pub fn advance_frame(ctx: &mut EngineContext, catalog: &Catalog, proxies: &BodyProxies) -> Result<(), SolarError> {
    for body in catalog.iter() {
        let entity = proxies.get(body.id)?;
        spin_in_world(ctx, entity, body.axis)?;
        ctx.entity_mut(entity)?.position = orbit_position(body);

        // Children convert their world spin through the root's orientation,
        // which must already include this frame's step.
        if body.is_root() {
            ctx.propagate();
        }
    }
    ctx.propagate();
    Ok(())
}
