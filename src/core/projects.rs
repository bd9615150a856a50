use tracing::{info, warn};

use crate::core::TimeTracker;
use crate::models::ProjectDirectory;

/// Fetch the project directory for this run
///
/// A failed listing is reported and yields an empty directory; the session
/// carries on without project options.
pub async fn fetch_project_directory<T: TimeTracker>(tracker: &T) -> ProjectDirectory {
    match tracker.fetch_projects().await {
        Ok(projects) => {
            let directory = ProjectDirectory::from_projects(projects);
            info!("Fetched {} projects", directory.len());
            directory
        }
        Err(e) => {
            warn!("Could not fetch projects: {}", e);
            ProjectDirectory::default()
        }
    }
}
