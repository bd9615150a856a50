use chrono::{FixedOffset, Local, NaiveDate};
use std::fs;
use std::path::Path;

use crate::core::{build_requests, check_entries, load_config, SubmissionContext};
use crate::error::Result;
use crate::models::{ConfigOverrides, TimeEntry};

/// Result of checking an entries file
#[derive(Debug)]
pub struct CheckResult {
    pub valid: bool,
    /// Validation message, empty when valid
    pub message: String,
    /// 1-based position and contents of the entry that failed
    pub failed_entry: Option<(usize, TimeEntry)>,
    /// `(entry, utc start, utc end)` for every entry, only when valid
    pub preview: Vec<(TimeEntry, String, String)>,
}

/// Validate a JSON file of entries and preview their UTC instants
pub fn check_entries_file(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    file: &Path,
    date: Option<NaiveDate>,
) -> Result<CheckResult> {
    let config = load_config(project_root, config_path, overrides)?;
    let offset = config.time.offset()?;
    let contents = fs::read_to_string(file)?;
    let entries: Vec<TimeEntry> = serde_json::from_str(&contents)?;

    Ok(check_entries_with(
        &entries,
        date.unwrap_or_else(|| Local::now().date_naive()),
        offset,
    ))
}

/// Check already-loaded entries
pub fn check_entries_with(entries: &[TimeEntry], date: NaiveDate, offset: FixedOffset) -> CheckResult {
    match check_entries(entries) {
        Ok(validated) => {
            let context = SubmissionContext {
                date,
                offset,
                user_id: String::new(),
            };
            let preview = build_requests(&validated, &context)
                .into_iter()
                .zip(entries.iter().cloned())
                .map(|(request, entry)| (entry, request.start, request.end))
                .collect();
            CheckResult {
                valid: true,
                message: String::new(),
                failed_entry: None,
                preview,
            }
        }
        Err(e) => CheckResult {
            valid: false,
            message: e.to_string(),
            failed_entry: entries
                .get(e.entry() - 1)
                .map(|entry| (e.entry(), entry.clone())),
            preview: Vec::new(),
        },
    }
}

/// Print check result
pub fn print_check_result(result: &CheckResult) {
    println!("=== Entry Check ===\n");

    if result.valid {
        println!("Status: VALID\n");
        for (i, (entry, start, end)) in result.preview.iter().enumerate() {
            println!(
                "{}. {} | {} - {} | {} -> {}",
                i + 1,
                entry.description,
                entry.start,
                entry.end,
                start,
                end
            );
        }
    } else {
        println!("Status: INVALID\n");
        println!("  {}", result.message);
        if let Some((position, entry)) = &result.failed_entry {
            println!(
                "  -> {}. {} | {} - {}",
                position, entry.description, entry.start, entry.end
            );
        }
    }
}
