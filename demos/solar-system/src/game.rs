/// Solar System: textured spheres parented to the sun, a free camera and a
/// body-following camera, click-to-retarget.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::{BodyId, Catalog};
use crate::builder::{build_scene, BodyProxies};
use crate::camera_rig::{CameraMode, CameraRig};
use crate::error::SolarError;
use crate::pick::{handle_pick, PickOutcome};
use crate::updater::advance_frame;

// ── Scene setup ──────────────────────────────────────────────────────

const SKYBOX_SIZE: f32 = 10_000.0;
#[cfg(feature = "axes")]
const WORLD_AXES_SIZE: f32 = 1.0;
/// Hemispheric "sunlight" aimed at the sky.
const SUNLIGHT_DIRECTION: Vec3 = Vec3::Y;

// ── Custom event kinds from the UI ───────────────────────────────────

const CUSTOM_FOCUS: u32 = 1;
const CUSTOM_FOLLOW: u32 = 2;
const CUSTOM_UNFOLLOW: u32 = 3;

// ── Game event kinds to the UI ───────────────────────────────────────

const EVENT_CAMERA_MODE: f32 = 1.0;
const EVENT_FOCUSED: f32 = 2.0;
const EVENT_PICKED: f32 = 3.0;

/// Body id carried in a custom event payload. Negative, fractional or
/// non-finite payloads are not ids.
fn body_id(a: f32) -> Option<BodyId> {
    (a.is_finite() && a >= 0.0 && a.fract() == 0.0).then(|| BodyId(a as u32))
}

pub struct SolarSystem {
    catalog: Catalog,
    proxies: BodyProxies,
    rig: CameraRig,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::standard(),
            proxies: BodyProxies::default(),
            rig: CameraRig::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    fn focus(&mut self, ctx: &mut EngineContext, id: BodyId) -> Result<(), SolarError> {
        self.rig.focus(ctx, &self.catalog, &self.proxies, id)?;
        ctx.emit_event(GameEvent { kind: EVENT_FOCUSED, a: id.0 as f32, b: 0.0, c: 0.0 });
        Ok(())
    }

    fn follow(&mut self, ctx: &mut EngineContext, id: BodyId) -> Result<(), SolarError> {
        self.rig.follow(ctx, &self.catalog, &self.proxies, id)?;
        self.emit_mode(ctx);
        Ok(())
    }

    fn unfollow(&mut self, ctx: &mut EngineContext) {
        if self.rig.mode() != CameraMode::Free {
            self.rig.unfollow();
            self.emit_mode(ctx);
        }
    }

    fn emit_mode(&self, ctx: &mut EngineContext) {
        let (a, b) = match self.rig.mode() {
            CameraMode::Free => (0.0, 0.0),
            CameraMode::Following(id) => (1.0, id.0 as f32),
        };
        ctx.emit_event(GameEvent { kind: EVENT_CAMERA_MODE, a, b, c: 0.0 });
    }

    /// Dispatch one UI button event. Failures are logged and dropped so a bad
    /// id never stops the frame loop.
    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32) {
        let result = match kind {
            CUSTOM_FOCUS | CUSTOM_FOLLOW => match body_id(a) {
                Some(id) if kind == CUSTOM_FOCUS => self.focus(ctx, id),
                Some(id) => self.follow(ctx, id),
                None => {
                    log::warn!("ignoring custom event {kind} with invalid body id {a}");
                    return;
                }
            },
            CUSTOM_UNFOLLOW => {
                self.unfollow(ctx);
                Ok(())
            }
            _ => return,
        };
        if let Err(e) = result {
            log::warn!("custom event {kind} rejected: {e}");
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            clear_color: [0.0, 0.0, 0.0, 0.0],
            skybox_size: Some(SKYBOX_SIZE),
            #[cfg(feature = "axes")]
            world_axes: Some(WORLD_AXES_SIZE),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.lights.add(HemisphericLight::new(SUNLIGHT_DIRECTION));

        match build_scene(ctx, &self.catalog) {
            Ok(proxies) => self.proxies = proxies,
            Err(e) => {
                log::error!("failed to build the solar system: {e}");
                return;
            }
        }
        if let Err(e) = self.rig.focus(ctx, &self.catalog, &self.proxies, BodyId::ROOT) {
            log::warn!("initial focus failed: {e}");
        }
        self.emit_mode(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, .. } => self.handle_custom(ctx, kind, a),
                other => {
                    self.rig.handle_input(&other);
                }
            }
        }

        if let Err(e) = advance_frame(ctx, &self.catalog, &self.proxies) {
            log::warn!("frame update failed: {e}");
        }
        if let Err(e) = self.rig.update(ctx) {
            log::warn!("follow camera lost its target: {e}");
            self.unfollow(ctx);
        }
    }

    fn camera(&self) -> Option<CameraView> {
        Some(self.rig.view())
    }

    fn on_pick(&mut self, ctx: &mut EngineContext, hit: Option<PickHit>) {
        if let PickOutcome::Retargeted { point } = handle_pick(&mut self.rig, &self.proxies, hit) {
            ctx.emit_event(GameEvent { kind: EVENT_PICKED, a: point.x, b: point.y, c: point.z });
        }
    }

    fn on_resize(&mut self, _ctx: &mut EngineContext, viewport: Viewport) {
        log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn started() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        (game, ctx)
    }

    fn custom(kind: u32, a: f32) -> InputQueue {
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind, a, b: 0.0, c: 0.0 });
        input
    }

    #[test]
    fn init_builds_catalog_and_focuses_root() {
        let (game, ctx) = started();
        assert_eq!(game.proxies.len(), 4);
        assert_eq!(ctx.lights.count(), 1);
        let view = game.camera().unwrap();
        assert_eq!(view.position, Vec3::new(2000.0, 1000.0, 2000.0));
        assert_eq!(view.target, Vec3::ZERO);
    }

    #[test]
    fn init_announces_free_mode() {
        let (_, ctx) = started();
        assert_eq!(
            ctx.events,
            vec![GameEvent { kind: EVENT_CAMERA_MODE, a: 0.0, b: 0.0, c: 0.0 }]
        );
    }

    #[test]
    fn follow_and_unfollow_buttons() {
        let (mut game, mut ctx) = started();
        ctx.clear_frame_data();

        game.update(&mut ctx, &custom(CUSTOM_FOLLOW, 3.0));
        assert_eq!(game.rig().mode(), CameraMode::Following(BodyId(3)));
        assert_eq!(
            ctx.events,
            vec![GameEvent { kind: EVENT_CAMERA_MODE, a: 1.0, b: 3.0, c: 0.0 }]
        );

        ctx.clear_frame_data();
        game.update(&mut ctx, &custom(CUSTOM_UNFOLLOW, 0.0));
        assert_eq!(game.rig().mode(), CameraMode::Free);
        assert_eq!(ctx.events[0].a, 0.0);

        ctx.clear_frame_data();
        game.update(&mut ctx, &custom(CUSTOM_UNFOLLOW, 0.0));
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn invalid_ids_are_dropped() {
        let (mut game, mut ctx) = started();
        ctx.clear_frame_data();
        game.update(&mut ctx, &custom(CUSTOM_FOLLOW, 42.0));
        game.update(&mut ctx, &custom(CUSTOM_FOCUS, -1.0));
        game.update(&mut ctx, &custom(CUSTOM_FOCUS, 1.5));
        assert_eq!(game.rig().mode(), CameraMode::Free);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn focus_button_emits_focused() {
        let (mut game, mut ctx) = started();
        ctx.clear_frame_data();
        game.update(&mut ctx, &custom(CUSTOM_FOCUS, 2.0));
        assert_eq!(ctx.events[0].kind, EVENT_FOCUSED);
        assert_eq!(ctx.events[0].a, 2.0);
    }

    #[test]
    fn pick_emits_hit_point() {
        let (mut game, mut ctx) = started();
        ctx.clear_frame_data();
        let hit = ctx.pick(&game.camera().unwrap(), Vec2::new(400.0, 300.0));
        game.on_pick(&mut ctx, hit);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_PICKED);
        assert_eq!(game.camera().unwrap().target, hit.unwrap().point);
    }

    #[test]
    fn body_id_accepts_whole_numbers_only() {
        assert_eq!(body_id(0.0), Some(BodyId(0)));
        assert_eq!(body_id(3.0), Some(BodyId(3)));
        assert_eq!(body_id(-1.0), None);
        assert_eq!(body_id(0.5), None);
        assert_eq!(body_id(f32::NAN), None);
    }
}
