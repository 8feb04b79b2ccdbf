use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec2, Vec3};
use crate::api::types::{EntityId, Viewport};
use crate::input::queue::InputEvent;
use crate::systems::picking::Ray;

/// Default vertical field of view (radians).
pub const DEFAULT_FOV: f32 = 0.8;
/// Default near clip distance.
pub const DEFAULT_MIN_Z: f32 = 1.0;
/// Default far clip distance.
pub const DEFAULT_MAX_Z: f32 = 10_000.0;

/// Browser key codes the free camera listens to.
const KEY_LEFT: u32 = 37;
const KEY_UP: u32 = 38;
const KEY_RIGHT: u32 = 39;
const KEY_DOWN: u32 = 40;

/// Keep the view direction away from the poles so look-at stays defined.
const MAX_PITCH_COS: f32 = 0.99;

/// Snapshot of whichever camera is active, enough to build matrices and rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl CameraView {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.min_z, self.max_z)
    }

    pub fn view_projection(&self, viewport: &Viewport) -> Mat4 {
        self.projection_matrix(viewport.aspect()) * self.view_matrix()
    }

    /// Unproject a screen point (pixels, origin top-left) into a world-space ray.
    pub fn screen_ray(&self, viewport: &Viewport, screen: Vec2) -> Ray {
        let ndc_x = 2.0 * screen.x / viewport.width.max(1.0) - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / viewport.height.max(1.0);
        let inverse = self.view_projection(viewport).inverse();

        // perspective_rh maps depth to [0, 1].
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }

    pub fn uniform(&self, viewport: &Viewport) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection(viewport).to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

/// Manually positioned camera. Keyboard and pointer input move it while its
/// controls are attached.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    pub position: Vec3,
    target: Vec3,
    pub fov: f32,
    pub min_z: f32,
    pub max_z: f32,
    /// World units moved per key press.
    pub speed: f32,
    /// Pixels of pointer drag per radian of rotation.
    pub angular_sensibility: f32,
    inputs_attached: bool,
    drag_from: Option<Vec2>,
}

impl FreeCamera {
    /// Camera at `position` looking down +Z, controls detached.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: position + Vec3::Z,
            fov: DEFAULT_FOV,
            min_z: DEFAULT_MIN_Z,
            max_z: DEFAULT_MAX_Z,
            speed: 2.0,
            angular_sensibility: 2000.0,
            inputs_attached: false,
            drag_from: None,
        }
    }

    pub fn with_max_z(mut self, max_z: f32) -> Self {
        self.max_z = max_z;
        self
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Aim the camera at a world-space point without moving it.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Start reacting to keyboard/pointer input.
    pub fn attach_control(&mut self) {
        self.inputs_attached = true;
    }

    /// Stop reacting to input; any drag in progress is dropped.
    pub fn detach_control(&mut self) {
        self.inputs_attached = false;
        self.drag_from = None;
    }

    pub fn inputs_attached(&self) -> bool {
        self.inputs_attached
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::Z)
    }

    /// Apply one host input event. Returns true if the camera moved.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.inputs_attached {
            return false;
        }
        match *event {
            InputEvent::KeyDown { key_code } => {
                let forward = self.forward();
                let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
                let step = match key_code {
                    KEY_UP => forward,
                    KEY_DOWN => -forward,
                    KEY_RIGHT => right,
                    KEY_LEFT => -right,
                    _ => return false,
                } * self.speed;
                self.position += step;
                self.target += step;
                true
            }
            InputEvent::PointerDown { x, y } => {
                self.drag_from = Some(Vec2::new(x, y));
                false
            }
            InputEvent::PointerMove { x, y } => {
                let Some(from) = self.drag_from else { return false };
                let to = Vec2::new(x, y);
                self.drag_from = Some(to);
                self.look(to - from)
            }
            InputEvent::PointerUp { .. } => {
                self.drag_from = None;
                false
            }
            _ => false,
        }
    }

    /// Rotate the view direction by a pointer delta (yaw about +Y, then pitch).
    fn look(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        let distance = (self.target - self.position).length().max(1.0);
        let forward = self.forward();
        let yaw = Quat::from_rotation_y(-delta.x / self.angular_sensibility);
        let turned = yaw * forward;
        let right = turned.cross(Vec3::Y).normalize_or(Vec3::X);
        let pitched = Quat::from_axis_angle(right, -delta.y / self.angular_sensibility) * turned;
        let direction = if pitched.y.abs() < MAX_PITCH_COS { pitched } else { turned };
        self.target = self.position + direction * distance;
        true
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            target: self.target,
            up: Vec3::Y,
            fov: self.fov,
            min_z: self.min_z,
            max_z: self.max_z,
        }
    }
}

/// Camera that stays at a fixed offset from a locked entity.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    pub locked_target: EntityId,
    /// Horizontal distance from the target.
    pub radius: f32,
    /// Height above the target.
    pub height_offset: f32,
    /// Angle around the target in degrees (0 = +Z side).
    pub rotation_offset: f32,
    /// Smoothing factor (0.0 = instant, 0.99 = very slow).
    pub smoothing: f32,
    pub fov: f32,
    pub min_z: f32,
    pub max_z: f32,
    position: Vec3,
    target: Vec3,
}

impl FollowCamera {
    pub fn new(locked_target: EntityId, start: Vec3) -> Self {
        Self {
            locked_target,
            radius: 12.0,
            height_offset: 4.0,
            rotation_offset: 0.0,
            smoothing: 0.0,
            fov: DEFAULT_FOV,
            min_z: DEFAULT_MIN_Z,
            max_z: DEFAULT_MAX_Z,
            position: start,
            target: start + Vec3::Z,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_height_offset(mut self, height: f32) -> Self {
        self.height_offset = height;
        self
    }

    pub fn with_rotation_offset(mut self, degrees: f32) -> Self {
        self.rotation_offset = degrees;
        self
    }

    pub fn with_max_z(mut self, max_z: f32) -> Self {
        self.max_z = max_z;
        self
    }

    /// Set smoothing factor for camera movement.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    /// Where the camera wants to sit for a target at `target_pos`.
    pub fn desired_position(&self, target_pos: Vec3) -> Vec3 {
        let radians = self.rotation_offset.to_radians();
        target_pos + Vec3::new(radians.sin() * self.radius, self.height_offset, radians.cos() * self.radius)
    }

    /// Track the locked target. Call once per frame with its world position.
    pub fn update(&mut self, target_pos: Vec3, dt: f32) {
        let desired = self.desired_position(target_pos);
        if self.smoothing <= 0.0 {
            self.position = desired;
        } else {
            let lerp_factor = 1.0 - self.smoothing.powf(dt * 60.0);
            self.position += (desired - self.position) * lerp_factor;
        }
        self.target = target_pos;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            target: self.target,
            up: Vec3::Y,
            fov: self.fov,
            min_z: self.min_z,
            max_z: self.max_z,
        }
    }
}
