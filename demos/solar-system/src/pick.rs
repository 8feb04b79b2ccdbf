//! Pick handler: a click on a body retargets the free camera at the hit point.

use glam::Vec3;
use orrery_engine::PickHit;

use crate::builder::BodyProxies;
use crate::camera_rig::CameraRig;

/// What a pick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickOutcome {
    /// Nothing pickable under the pointer.
    Missed,
    /// The free camera now looks at `point`.
    Retargeted { point: Vec3 },
    /// A body was hit but the follow camera is active.
    IgnoredWhileFollowing,
}

/// Apply a resolved pick to the camera rig.
pub fn handle_pick(rig: &mut CameraRig, proxies: &BodyProxies, hit: Option<PickHit>) -> PickOutcome {
    let Some(hit) = hit else {
        return PickOutcome::Missed;
    };

    if !rig.retarget(hit.point) {
        log::debug!("pick: ignored while following ({:?})", rig.mode());
        return PickOutcome::IgnoredWhileFollowing;
    }

    match proxies.body_of(hit.entity) {
        Some(body) => log::debug!("pick: body {body} at {:?}", hit.point),
        None => log::debug!("pick: entity {:?} at {:?}", hit.entity, hit.point),
    }
    PickOutcome::Retargeted { point: hit.point }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use orrery_engine::EngineContext;
    use crate::bodies::{BodyId, Catalog};
    use crate::builder::build_scene;
    use crate::camera_rig::CameraMode;

    #[test]
    fn hit_retargets_free_camera() {
        let mut ctx = EngineContext::new();
        let catalog = Catalog::standard();
        let proxies = build_scene(&mut ctx, &catalog).unwrap();
        let mut rig = CameraRig::new();
        rig.focus(&ctx, &catalog, &proxies, BodyId(0)).unwrap();

        let hit = ctx.pick(&rig.view(), Vec2::new(400.0, 300.0));
        assert_eq!(hit.map(|h| h.entity), Some(proxies.get(BodyId(0)).unwrap()));

        let point = hit.unwrap().point;
        assert_eq!(handle_pick(&mut rig, &proxies, hit), PickOutcome::Retargeted { point });
        assert_eq!(rig.view().target, point);
        // The hit lies on the sun's surface, facing the camera.
        assert!((point.length() - 50.0).abs() < 0.5);
    }

    #[test]
    fn miss_is_a_no_op() {
        let mut rig = CameraRig::new();
        let proxies = BodyProxies::default();
        let before = rig.view();
        assert_eq!(handle_pick(&mut rig, &proxies, None), PickOutcome::Missed);
        assert_eq!(rig.view(), before);
    }

    #[test]
    fn pick_is_ignored_while_following() {
        let mut ctx = EngineContext::new();
        let catalog = Catalog::standard();
        let proxies = build_scene(&mut ctx, &catalog).unwrap();
        let mut rig = CameraRig::new();
        rig.follow(&ctx, &catalog, &proxies, BodyId(0)).unwrap();

        let hit = ctx.pick(&rig.view(), Vec2::new(400.0, 300.0));
        assert!(hit.is_some());
        let before = rig.view();
        assert_eq!(handle_pick(&mut rig, &proxies, hit), PickOutcome::IgnoredWhileFollowing);
        assert_eq!(rig.view(), before);
        assert_eq!(rig.mode(), CameraMode::Following(BodyId(0)));
    }
}
