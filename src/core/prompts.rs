//! Instruction text sent to the model

use crate::models::ProjectDirectory;

/// Output contract given to the model ahead of the project listing
pub const TRANSLATION_RULES: &str = r#"You are an assistant that ONLY answers with a valid JSON array, without extra text, comments or markup.

Rules:
- Format: [{"start": "HH:MM", "end": "HH:MM", "description": "...", "projectId": "..."}]
- projectId must be one of the project IDs listed below, choosing the best match for each activity. Use null when no project is listed.
- Times are 24-hour, two digits each (e.g. "09:05").
- Entries are in chronological order and must not overlap.
- If only a duration is given, compute "end" from "start". If no start is given, use the previous entry's end, or 09:00 for the first entry.
- Example: for the input "Meeting 10-12am, development until 15" the output is [{"start": "10:00", "end": "12:00", "description": "Meeting", "projectId": "ID_MEETINGS"}, {"start": "12:00", "end": "15:00", "description": "Development", "projectId": "ID_DEVELOPMENT"}]"#;

/// Build the full instruction for one translation request
pub fn build_translation_prompt(day_description: &str, projects: &ProjectDirectory) -> String {
    let listing = if projects.is_empty() {
        "(no projects available)".to_string()
    } else {
        projects
            .iter()
            .map(|(name, id)| format!("- {}: {}", name, id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{}\n\nAvailable projects (name: id):\n{}\n\nText to process:\n{}",
        TRANSLATION_RULES, listing, day_description
    )
}
