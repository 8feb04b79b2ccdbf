/// Hemispheric lighting for 3D scenes.
///
/// Lights are persistent: they stay until explicitly removed.
/// Each frame, the renderer reads the active lights through the SAB.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Sky/ground light: surfaces facing `direction` get `diffuse`, surfaces
/// facing away get `ground`, with a smooth blend in between.
///
/// Wire format (12 floats / 48 bytes):
/// `[dx, dy, dz, intensity, r, g, b, 0, gr, gg, gb, 0]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct HemisphericLight {
    pub direction: [f32; 3],
    pub intensity: f32,
    pub diffuse: [f32; 3],
    pub _pad0: f32,
    pub ground: [f32; 3],
    pub _pad1: f32,
}

impl HemisphericLight {
    pub const FLOATS: usize = 12;

    /// White light from `direction` with a black ground color.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize_or(Vec3::Y).to_array(),
            intensity: 1.0,
            diffuse: [1.0, 1.0, 1.0],
            _pad0: 0.0,
            ground: [0.0, 0.0, 0.0],
            _pad1: 0.0,
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_diffuse(mut self, color: [f32; 3]) -> Self {
        self.diffuse = color;
        self
    }

    pub fn with_ground(mut self, color: [f32; 3]) -> Self {
        self.ground = color;
        self
    }
}

/// Manages active lights for the scene.
pub struct LightState {
    lights: Vec<HemisphericLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Add a light to the scene.
    pub fn add(&mut self, light: HemisphericLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HemisphericLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let light = HemisphericLight::new(Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(light.direction, [0.0, 1.0, 0.0]);
        assert_eq!(light.intensity, 1.0);
    }

    #[test]
    fn light_state_add_and_clear() {
        let mut state = LightState::new();
        state.add(HemisphericLight::new(Vec3::Y));
        state.add(HemisphericLight::new(Vec3::X).with_intensity(0.5));
        assert_eq!(state.count(), 2);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn hemispheric_light_is_12_floats() {
        assert_eq!(std::mem::size_of::<HemisphericLight>(), HemisphericLight::FLOATS * 4);
    }
}
