use std::path::Path;

use crate::commands::print_projects;
use crate::core::{load_config, ClockifyClient, TimeTracker};
use crate::error::Result;
use crate::models::{ConfigOverrides, ProjectDirectory};

/// List the projects entries can be booked against
///
/// Unlike the logging session, a failed listing is an error here.
pub async fn list_projects(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<()> {
    let config = load_config(project_root, config_path, overrides)?;
    config.require_clockify()?;

    let tracker = ClockifyClient::new(config.clockify.clone())?;
    let projects = ProjectDirectory::from_projects(tracker.fetch_projects().await?);

    print_projects(&projects);
    Ok(())
}
