//! Simple Building demo
//!
//! Draws a building facade that can be moved with the arrow keys, rotated
//! with Q and E and scaled with W and S. Escape closes the window.

use scene_engine::config::{Config, SceneConfig};
use scene_engine::foundation::logging;
use scene_engine::{scenes, Engine, EngineError};

const CONFIG: &str = include_str!("../config/building.toml");

fn main() {
    logging::init();
    log::info!("Starting Simple Building");

    let result = SceneConfig::from_toml_str(CONFIG)
        .map_err(EngineError::from)
        .and_then(|config| Engine::launch(&scenes::building(), &config));

    match result {
        Ok(frames) => log::info!("Simple Building closed after {frames} frame(s)"),
        Err(e) => {
            log::error!("Simple Building failed: {e}");
            std::process::exit(-1);
        }
    }
}
