use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
pub mod builder;
pub mod camera_rig;
pub mod error;
pub mod game;
pub mod pick;
pub mod updater;

pub use error::SolarError;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

/// Body ids and names for the UI's focus/follow buttons.
#[wasm_bindgen]
pub fn solar_bodies_json() -> String {
    with_runner(|r| match r.game().catalog().labels_json() {
        Ok(json) => json,
        Err(e) => {
            log::warn!("failed to serialize body list: {e}");
            String::from("[]")
        }
    })
}
