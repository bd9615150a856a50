use std::fs;
use std::path::Path;
use tracing::info;

use crate::core::default_config_path;
use crate::error::Result;

/// Template written by `lazyclock init`
pub const CONFIG_TEMPLATE: &str = r#"# LazyClock configuration
#
# Secrets can also be supplied through the environment:
#   LAZYCLOCK_GEMINI_API_KEY, LAZYCLOCK_CLOCKIFY_API_KEY,
#   LAZYCLOCK_WORKSPACE_ID, LAZYCLOCK_USER_ID

[gemini]
api_key = ""
model = "gemini-2.0-flash"
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# timeout_seconds = 120

[clockify]
api_key = ""
workspace_id = ""
user_id = ""
# Only offer projects of this client
# client_id = ""
# base_url = "https://api.clockify.me/api/v1"
# timeout_seconds = 60

[time]
# Offset of your local time from UTC in minutes (UTC-3 is -180)
utc_offset_minutes = -180
"#;

/// Write a config template into `project_root`
///
/// Returns false when a config already exists and `force` is not set.
pub fn init_config(project_root: &Path, force: bool) -> Result<bool> {
    let path = default_config_path(project_root);

    if path.exists() && !force {
        info!("Config already exists: {}", path.display());
        println!("{} already exists (use --force to overwrite)", path.display());
        return Ok(false);
    }

    fs::write(&path, CONFIG_TEMPLATE)?;
    info!("Created config: {}", path.display());
    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Fill in your Gemini and Clockify credentials");
    println!("  2. Run 'lazyclock projects' to check the Clockify connection");
    println!("  3. Run 'lazyclock' and describe your day");
    Ok(true)
}
