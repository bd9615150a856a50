use tracing::{info, warn};

use crate::core::{build_translation_prompt, parse_entries, TextOracle};
use crate::error::GeminiError;
use crate::models::{ProjectDirectory, TimeEntry};

/// Turn a free-text day description into proposed entries
///
/// One request, no retry. Any failure aborts the whole translation.
pub async fn translate<O: TextOracle>(
    oracle: &O,
    day_description: &str,
    projects: &ProjectDirectory,
) -> Result<Vec<TimeEntry>, GeminiError> {
    let prompt = build_translation_prompt(day_description, projects);
    let text = oracle.generate(&prompt).await?;
    let entries = parse_entries(&text)?;

    info!("Model proposed {} entries", entries.len());
    Ok(entries)
}

/// 1-based positions of entries naming a project the directory does not know
///
/// Always empty when the directory itself is empty.
pub fn unknown_project_entries(entries: &[TimeEntry], projects: &ProjectDirectory) -> Vec<usize> {
    if projects.is_empty() {
        return Vec::new();
    }

    let unknown: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            e.project_id
                .as_deref()
                .is_some_and(|id| !projects.contains_id(id))
        })
        .map(|(i, _)| i + 1)
        .collect();

    for position in &unknown {
        warn!("Entry {} references an unknown project", position);
    }
    unknown
}
