use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::info;

use crate::core::{
    build_requests, check_entries, fetch_project_directory, load_config, print_entries,
    review_entries, submit_entries, translate, unknown_project_entries, ClockifyClient,
    DialoguerPrompter, GeminiClient, NewTimeEntry, Prompter, SubmissionContext, SubmissionReport,
    TextOracle, TimeTracker,
};
use crate::error::{LazyClockError, Result};
use crate::models::{Config, ConfigOverrides, ProjectDirectory};

/// Log options
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Day description; prompted for when absent
    pub text: Option<String>,
    /// Day the entries belong to (defaults to today)
    pub date: Option<NaiveDate>,
    /// Print the requests instead of posting them
    pub dry_run: bool,
}

/// How a session ended when nothing went wrong
#[derive(Debug)]
pub enum SessionOutcome {
    Submitted(SubmissionReport),
    DryRun(Vec<NewTimeEntry>),
    NothingToSend,
    Cancelled,
}

/// Run the interactive logging session against the real services
pub async fn log_day(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    options: LogOptions,
) -> Result<()> {
    let config = load_config(project_root, config_path, overrides)?;
    config.require_credentials()?;

    let tracker = ClockifyClient::new(config.clockify.clone())?;
    let oracle = GeminiClient::new(config.gemini.clone())?;
    let mut prompter = DialoguerPrompter::new();

    run_session(&tracker, &oracle, &mut prompter, &config, options).await?;
    Ok(())
}

/// The whole session: projects, translation, review, validation, submission
///
/// Stops at the first translation or validation error; nothing is sent for a
/// batch that failed validation. A submission with rejected entries still
/// attempts every entry and then reports
/// [`LazyClockError::SubmissionIncomplete`].
pub async fn run_session<T, O, P>(
    tracker: &T,
    oracle: &O,
    prompter: &mut P,
    config: &Config,
    options: LogOptions,
) -> Result<SessionOutcome>
where
    T: TimeTracker,
    O: TextOracle,
    P: Prompter,
{
    println!("\n=== LazyClock ===\n");

    let projects = fetch_project_directory(tracker).await;
    print_projects(&projects);

    let text = match options.text {
        Some(text) => text,
        None => {
            println!("Describe your workday (one line):");
            prompter.ask(">")?
        }
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(LazyClockError::EmptyDescription);
    }

    let entries = translate(oracle, text, &projects).await?;

    println!("\nGenerated entries:");
    print_entries(&entries, &projects);
    unknown_project_entries(&entries, &projects);

    let entries = if prompter.confirm("Do you want to edit any entry?")? {
        review_entries(prompter, &entries)?
    } else {
        entries
    };

    let validated = check_entries(&entries)?;
    if validated.is_empty() {
        println!("\nNo entries to send.");
        return Ok(SessionOutcome::NothingToSend);
    }

    let context = SubmissionContext {
        date: options.date.unwrap_or_else(|| Local::now().date_naive()),
        offset: config.time.offset()?,
        user_id: config.clockify.user_id.clone(),
    };
    let requests = build_requests(&validated, &context);

    if !prompter.confirm("Send to Clockify?")? {
        println!("\nOperation cancelled.");
        return Ok(SessionOutcome::Cancelled);
    }

    if options.dry_run {
        println!("\nDry run, these requests would be sent:");
        for request in &requests {
            println!("{}", serde_json::to_string_pretty(request)?);
        }
        return Ok(SessionOutcome::DryRun(requests));
    }

    info!("Submitting {} entries for {}", requests.len(), context.date);
    let report = submit_entries(tracker, &requests).await;

    if report.all_succeeded() {
        println!("\nAll {} entries sent successfully!", report.attempted);
        Ok(SessionOutcome::Submitted(report))
    } else {
        println!("\nThere were errors sending some entries.");
        Err(LazyClockError::SubmissionIncomplete {
            failed: report.failures.len(),
            total: report.attempted,
        })
    }
}

/// Print the directory as `- name: id` lines
pub fn print_projects(projects: &ProjectDirectory) {
    if projects.is_empty() {
        println!("No projects could be fetched from Clockify.");
    } else {
        println!("Available projects:");
        for (name, id) in projects.iter() {
            println!("- {}: {}", name, id);
        }
    }
}
