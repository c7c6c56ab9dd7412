use std::path::PathBuf;

use log::warn;

use crate::config;

/// Load settings, falling back to defaults when the config is broken.
///
/// Config is optional; failures should not prevent the app from starting.
pub fn load_settings(config_path: Option<PathBuf>) -> config::Settings {
    let path = config_path.or_else(config::resolve_config_path);
    match config::Settings::load_from(path) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
