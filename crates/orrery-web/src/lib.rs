pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates a `thread_local!` GameRunner, a `with_runner()` helper, the
/// lifecycle and input exports (`game_init`, `game_tick`, `game_click`, ...)
/// and the buffer/capacity getters the TypeScript worker reads every frame.
/// Calling any export before `game_init` panics.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_click(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::Click { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        $crate::runner_accessors! {
            get_instances_ptr => instances_ptr: *const f32,
            get_instance_count => instance_count: u32,
            get_line_vertices_ptr => line_vertices_ptr: *const f32,
            get_line_vertex_count => line_vertex_count: u32,
            get_header_ptr => header_ptr: *const f32,
            get_camera_ptr => camera_ptr: *const f32,
            get_lights_ptr => lights_ptr: *const f32,
            get_light_count => light_count: u32,
            get_game_events_ptr => game_events_ptr: *const f32,
            get_game_events_len => game_events_len: u32,
            get_viewport_width => viewport_width: f32,
            get_viewport_height => viewport_height: f32,
            get_materials_json => materials_json: String,
            get_max_instances => max_instances: u32,
            get_max_line_vertices => max_line_vertices: u32,
            get_max_lights => max_lights: u32,
            get_max_events => max_events: u32,
            get_buffer_total_floats => buffer_total_floats: u32,
        }

        #[wasm_bindgen]
        pub fn get_clear_color_r() -> f32 {
            with_runner(|r| r.clear_color()[0])
        }

        #[wasm_bindgen]
        pub fn get_clear_color_g() -> f32 {
            with_runner(|r| r.clear_color()[1])
        }

        #[wasm_bindgen]
        pub fn get_clear_color_b() -> f32 {
            with_runner(|r| r.clear_color()[2])
        }

        #[wasm_bindgen]
        pub fn get_clear_color_a() -> f32 {
            with_runner(|r| r.clear_color()[3])
        }
    };
}

/// Zero-argument `#[wasm_bindgen]` getters forwarding to `GameRunner` methods.
/// Used by `export_game!`; expects `with_runner` in scope.
#[doc(hidden)]
#[macro_export]
macro_rules! runner_accessors {
    ($($export:ident => $method:ident: $ret:ty),* $(,)?) => {
        $(
            #[wasm_bindgen]
            pub fn $export() -> $ret {
                with_runner(|r| r.$method())
            }
        )*
    };
}
