use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder shown for entries whose project id is unknown or missing
pub const NO_PROJECT: &str = "-";

/// A project as returned by the tracking service's project listing
///
/// The listing carries many more fields; only these two are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Bidirectional name <-> id lookup, fetched once per run
#[derive(Debug, Clone, Default)]
pub struct ProjectDirectory {
    /// (name, id) pairs in listing order, names unique
    projects: Vec<(String, String)>,
    by_id: HashMap<String, String>,
}

impl ProjectDirectory {
    /// Build the directory from a project listing
    ///
    /// A name seen twice keeps its first position but takes the later id.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut directory = Self::default();
        for project in projects {
            directory.insert(project.name, project.id);
        }
        directory
    }

    fn insert(&mut self, name: String, id: String) {
        match self.projects.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => {
                self.by_id.remove(&slot.1);
                slot.1 = id.clone();
            }
            None => self.projects.push((name.clone(), id.clone())),
        }
        self.by_id.insert(id, name);
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Iterate `(name, id)` pairs in listing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.projects.iter().map(|(n, id)| (n.as_str(), id.as_str()))
    }

    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Display name for an optional project id, [`NO_PROJECT`] when absent or unknown
    pub fn display_name(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.name_for(id)).unwrap_or(NO_PROJECT)
    }
}
