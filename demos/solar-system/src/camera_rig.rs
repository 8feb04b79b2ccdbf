//! Camera controller: a free camera that is always present, and a follow
//! camera created on demand.
//!
//! ```text
//!   Free ──follow(id)──▶ Following(id) ──unfollow()──▶ Free
//!                         │      ▲
//!                         └──────┘ follow(other)
//! ```

use glam::Vec3;
use orrery_engine::{CameraView, EngineContext, FollowCamera, FreeCamera, InputEvent};

use crate::bodies::{BodyId, Catalog};
use crate::builder::BodyProxies;
use crate::error::SolarError;

/// Where the free camera starts before the first focus.
pub const FREE_CAMERA_START: Vec3 = Vec3::new(5.0, 10.0, -20.0);
/// Far clip distance; large enough to see the outermost body from the root.
pub const MAX_Z: f32 = 50_000.0;
/// Horizontal camera offset in target diameters.
pub const OFFSET_DIAMETERS: f32 = 20.0;
/// Vertical camera offset in target diameters.
pub const HEIGHT_DIAMETERS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Free,
    Following(BodyId),
}

pub struct CameraRig {
    free: FreeCamera,
    follow: Option<FollowCamera>,
    mode: CameraMode,
}

impl CameraRig {
    pub fn new() -> Self {
        let mut free = FreeCamera::new(FREE_CAMERA_START).with_max_z(MAX_Z);
        free.attach_control();
        Self {
            free,
            follow: None,
            mode: CameraMode::Free,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn free_camera(&self) -> &FreeCamera {
        &self.free
    }

    pub fn follow_camera(&self) -> Option<&FollowCamera> {
        self.follow.as_ref()
    }

    /// Move the free camera next to body `id` and aim it at the body.
    /// The active camera is not changed.
    pub fn focus(
        &mut self,
        ctx: &EngineContext,
        catalog: &Catalog,
        proxies: &BodyProxies,
        id: BodyId,
    ) -> Result<(), SolarError> {
        let body = catalog.get(id)?;
        let target = ctx.world_position(proxies.get(id)?)?;
        let d = body.diameter;

        self.free.position = target + Vec3::new(d * OFFSET_DIAMETERS, d * HEIGHT_DIAMETERS, d * OFFSET_DIAMETERS);
        self.free.set_target(target);
        log::debug!("camera: focused {} at {:?}", body.name, target);
        Ok(())
    }

    /// Switch to a camera locked onto body `id`. Retargets if already following.
    pub fn follow(
        &mut self,
        ctx: &EngineContext,
        catalog: &Catalog,
        proxies: &BodyProxies,
        id: BodyId,
    ) -> Result<(), SolarError> {
        let body = catalog.get(id)?;
        let entity = proxies.get(id)?;
        let target = ctx.world_position(entity)?;
        let d = body.diameter;

        let mut camera = FollowCamera::new(entity, self.view().position)
            .with_radius(d * OFFSET_DIAMETERS)
            .with_height_offset(d * HEIGHT_DIAMETERS)
            .with_rotation_offset(0.0)
            .with_max_z(MAX_Z);
        camera.set_smoothing(0.0);
        camera.update(target, 0.0);

        self.free.detach_control();
        self.follow = Some(camera);
        self.mode = CameraMode::Following(id);
        log::debug!("camera: following {}", body.name);
        Ok(())
    }

    /// Drop the follow camera and hand control back to the free camera.
    pub fn unfollow(&mut self) {
        if self.mode == CameraMode::Free {
            return;
        }
        self.follow = None;
        self.free.attach_control();
        self.mode = CameraMode::Free;
        log::debug!("camera: free");
    }

    /// Aim the free camera at `point`. Returns false while following.
    pub fn retarget(&mut self, point: Vec3) -> bool {
        match self.mode {
            CameraMode::Free => {
                self.free.set_target(point);
                true
            }
            CameraMode::Following(_) => false,
        }
    }

    /// Feed a host input event to the free camera (ignored while detached).
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.free.handle_input(event)
    }

    /// Keep the follow camera on its target. Call after the bodies moved.
    pub fn update(&mut self, ctx: &EngineContext) -> Result<(), SolarError> {
        if let Some(camera) = self.follow.as_mut() {
            let target = ctx.world_position(camera.locked_target)?;
            camera.update(target, ctx.dt);
        }
        Ok(())
    }

    /// View of the active camera.
    pub fn view(&self) -> CameraView {
        match (&self.mode, &self.follow) {
            (CameraMode::Following(_), Some(camera)) => camera.view(),
            _ => self.free.view(),
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
