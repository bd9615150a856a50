//! Mapping validated local entries onto the tracking service and posting them.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use tracing::info;

use crate::core::{NewTimeEntry, TimeTracker, ValidatedEntries};
use crate::error::ClockifyError;

/// Everything besides the entries themselves needed to build requests
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    /// Calendar day the local times belong to
    pub date: NaiveDate,
    /// Offset of local time from UTC
    pub offset: FixedOffset,
    pub user_id: String,
}

/// Format a local date + time of day as the UTC instant the service expects
///
/// Seconds are always zero and the instant ends in a literal `.000Z`. The
/// result may fall on the previous or next calendar day.
pub fn utc_instant(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> String {
    let local = date.and_time(time);
    let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    utc.format("%Y-%m-%dT%H:%M:00.000Z").to_string()
}

/// Build one creation request per validated entry
pub fn build_requests(entries: &ValidatedEntries, context: &SubmissionContext) -> Vec<NewTimeEntry> {
    entries
        .iter()
        .map(|checked| NewTimeEntry {
            start: utc_instant(context.date, checked.start, context.offset),
            end: utc_instant(context.date, checked.end, context.offset),
            description: checked.entry.description.clone(),
            billable: false,
            user_id: context.user_id.clone(),
            project_id: checked.entry.project_id.clone(),
        })
        .collect()
}

/// One entry the service rejected
#[derive(Debug)]
pub struct SubmissionFailure {
    /// 1-based position in the batch
    pub entry: usize,
    pub description: String,
    pub error: ClockifyError,
}

/// Outcome of posting a batch; entries that went through are not rolled back
#[derive(Debug, Default)]
pub struct SubmissionReport {
    pub attempted: usize,
    pub failures: Vec<SubmissionFailure>,
}

impl SubmissionReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

/// Post every request in order, continuing past failures
pub async fn submit_entries<T: TimeTracker>(tracker: &T, requests: &[NewTimeEntry]) -> SubmissionReport {
    let mut report = SubmissionReport::default();

    for (i, request) in requests.iter().enumerate() {
        report.attempted += 1;
        match tracker.create_time_entry(request).await {
            Ok(()) => info!("Sent '{}' ({} - {})", request.description, request.start, request.end),
            Err(e) => {
                println!("Error sending entry '{}': {}", request.description, e);
                report.failures.push(SubmissionFailure {
                    entry: i + 1,
                    description: request.description.clone(),
                    error: e,
                });
            }
        }
    }

    report
}
