use glam::{Vec2, Vec3};
use orrery_engine::{
    AssetManifest, CameraUniform, EngineContext, FrameCounts, Game, GameConfig, InputEvent,
    InputQueue, LineBuffer, ProtocolLayout, RenderBuffer, Viewport,
};
use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::systems::render::{build_line_buffer, build_render_buffer};
use orrery_engine::systems::skybox::create_skybox;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    line_buffer: LineBuffer,
    camera_uniform: CameraUniform,
    manifest: AssetManifest,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame: u32,
    initialized: bool,
    /// Events emitted by `Game::init` survive into the first frame.
    keep_init_events: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);

        Self {
            game,
            ctx: EngineContext::with_viewport(viewport),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            line_buffer: LineBuffer::with_capacity(config.max_line_vertices),
            camera_uniform: CameraUniform::default(),
            manifest: AssetManifest::default(),
            layout,
            config,
            header: [0.0; HEADER_FLOATS],
            frame: 0,
            initialized: false,
            keep_init_events: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if let Some(size) = self.config.skybox_size {
            create_skybox(&mut self.ctx, size);
        }
        #[cfg(feature = "axes")]
        if let Some(size) = self.config.world_axes {
            orrery_engine::show_world_axes(&mut self.ctx, size);
        }

        self.game.init(&mut self.ctx);
        self.ctx.propagate();
        self.initialized = true;
        self.keep_init_events = !self.ctx.events.is_empty();
        self.write_header();
        log::info!(
            "runner: {} entities, {} materials",
            self.ctx.scene.len(),
            self.ctx.materials.len()
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Replace the asset manifest. A malformed manifest keeps the previous one.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("runner: asset manifest loaded (textures under {})", manifest.texture_root);
                self.manifest = manifest;
            }
            Err(e) => log::warn!("runner: ignoring malformed asset manifest: {e}"),
        }
    }

    /// Run one frame: dispatch host events, update the game, rebuild the output buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data, except what init left for the host.
        if !std::mem::take(&mut self.keep_init_events) {
            self.ctx.clear_frame_data();
        }
        self.ctx.dt = dt;
        self.frame = self.frame.wrapping_add(1);

        self.dispatch_host_events();
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.ctx.propagate();

        let camera = self.game.camera();
        let eye = camera.map_or(Vec3::ZERO, |c| c.position);

        let dropped = build_render_buffer(
            self.ctx.scene.iter(),
            eye,
            self.config.max_instances,
            &mut self.render_buffer,
        );
        if dropped > 0 {
            log::debug!("runner: {dropped} mesh instances over capacity");
        }
        let dropped = build_line_buffer(self.ctx.scene.iter(), &mut self.line_buffer);
        if dropped > 0 {
            log::debug!("runner: {dropped} polylines over capacity");
        }

        self.camera_uniform = camera
            .map(|c| c.uniform(&self.ctx.viewport))
            .unwrap_or_default();

        self.ctx.events.truncate(self.config.max_events);
        self.write_header();
    }

    fn write_header(&mut self) {
        let counts = FrameCounts {
            instances: self.instance_count(),
            line_vertices: self.line_vertex_count(),
            lights: self.light_count(),
            events: self.game_events_len().min(self.max_events()),
        };
        self.header = self.layout.header(self.frame, counts, &self.ctx.viewport);
    }

    /// Resolve click and resize events before the game sees the queue.
    fn dispatch_host_events(&mut self) {
        for event in self.input.take_host_events() {
            match event {
                InputEvent::Click { x, y } => {
                    self.ctx.propagate();
                    let hit = self
                        .game
                        .camera()
                        .and_then(|camera| self.ctx.pick(&camera, Vec2::new(x, y)));
                    self.game.on_pick(&mut self.ctx, hit);
                }
                InputEvent::Resize { width, height } => {
                    let viewport = Viewport::new(width, height);
                    self.ctx.viewport = viewport;
                    self.game.on_resize(&mut self.ctx, viewport);
                }
                _ => {}
            }
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.line_buffer.vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.line_buffer.vertex_count()
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.config.max_lights) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.height
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.config.clear_color
    }

    /// Material table with textures resolved against the current manifest.
    /// Serialization failures are logged and yield an empty table.
    pub fn materials_json(&self) -> String {
        match self.ctx.materials.to_json(&self.manifest) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("runner: failed to serialize materials: {e}");
                String::from("[]")
            }
        }
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_line_vertices(&self) -> u32 {
        self.layout.max_line_vertices as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
