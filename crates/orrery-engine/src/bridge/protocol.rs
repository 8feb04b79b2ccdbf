/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]
/// [Instances: max_instances × 24 floats]
/// [Lines: max_line_vertices × 7 floats]
/// [Lights: max_lights × 12 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// The header is rewritten every frame: capacities, counts, viewport size
/// and protocol version. TypeScript reads the capacities to compute offsets.
/// `HEADER_LOCK` belongs to the worker; Rust always writes 0 there.

use crate::api::game::GameConfig;
use crate::api::types::Viewport;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LINE_VERTICES: usize = 4;
pub const HEADER_LINE_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_LIGHTS: usize = 6;
pub const HEADER_LIGHT_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_VIEWPORT_WIDTH: usize = 10;
pub const HEADER_VIEWPORT_HEIGHT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera block: view-projection matrix + eye position.
pub const CAMERA_FLOATS: usize = 20;

/// Floats per mesh instance (fixed wire format).
pub const INSTANCE_FLOATS: usize = 24;

/// Floats per line vertex: x, y, z, r, g, b, a.
pub const LINE_VERTEX_FLOATS: usize = 7;

/// Floats per hemispheric light.
pub const LIGHT_FLOATS: usize = 12;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Per-frame fill levels written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub instances: u32,
    pub line_vertices: u32,
    pub lights: u32,
    pub events: u32,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_line_vertices: usize,
    pub max_lights: usize,
    pub max_events: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where line data begins.
    pub line_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_line_vertices: usize, max_lights: usize, max_events: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let line_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let light_data_offset = line_data_offset + max_line_vertices * LINE_VERTEX_FLOATS;
        let event_data_offset = light_data_offset + max_lights * LIGHT_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_line_vertices,
            max_lights,
            max_events,
            camera_offset,
            instance_data_offset,
            line_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_line_vertices,
            config.max_lights,
            config.max_events,
        )
    }

    /// Header block for frame number `frame`.
    pub fn header(&self, frame: u32, counts: FrameCounts, viewport: &Viewport) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_LOCK] = 0.0;
        header[HEADER_FRAME_COUNTER] = frame as f32;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = counts.instances as f32;
        header[HEADER_MAX_LINE_VERTICES] = self.max_line_vertices as f32;
        header[HEADER_LINE_VERTEX_COUNT] = counts.line_vertices as f32;
        header[HEADER_MAX_LIGHTS] = self.max_lights as f32;
        header[HEADER_LIGHT_COUNT] = counts.lights as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = counts.events as f32;
        header[HEADER_VIEWPORT_WIDTH] = viewport.width;
        header[HEADER_VIEWPORT_HEIGHT] = viewport.height;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}
