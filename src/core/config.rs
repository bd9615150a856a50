use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::LazyClockError;
use crate::models::{Config, ConfigOverrides, CONFIG_FILE_NAME};

/// Load configuration with CLI/environment overrides
///
/// An explicit `config_path` must exist; otherwise lazyclock.toml in
/// `project_root` is used when present, defaults when not.
pub fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<Config, LazyClockError> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(project_root)?,
    };
    let config = config.with_overrides(overrides);

    info!(
        "Configuration loaded: model={}, workspace={}, utc_offset={}min",
        config.gemini.model,
        if config.clockify.workspace_id.is_empty() {
            "<unset>"
        } else {
            config.clockify.workspace_id.as_str()
        },
        config.time.utc_offset_minutes
    );

    Ok(config)
}

/// Where `init` writes the template
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}
