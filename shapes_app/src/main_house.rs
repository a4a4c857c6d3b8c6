//! Simple House demo
//!
//! Draws a flat-colored house. Escape closes the window.

use scene_engine::config::{Config, SceneConfig};
use scene_engine::foundation::logging;
use scene_engine::{scenes, Engine, EngineError};

const CONFIG: &str = include_str!("../config/house.toml");

fn main() {
    logging::init();
    log::info!("Starting Simple House");

    let result = SceneConfig::from_toml_str(CONFIG)
        .map_err(EngineError::from)
        .and_then(|config| Engine::launch(&scenes::house(), &config));

    match result {
        Ok(frames) => log::info!("Simple House closed after {frames} frame(s)"),
        Err(e) => {
            log::error!("Simple House failed: {e}");
            std::process::exit(-1);
        }
    }
}
