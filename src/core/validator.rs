//! Checks applied to entries before anything is sent to the tracking service.
//!
//! Model output and user edits both land here. The rules are checked entry by
//! entry, in order, and the first violation wins:
//!
//! 1. `start` is a 24-hour `HH:MM` time (`9:30` also accepted)
//! 2. `end` is a 24-hour `HH:MM` time
//! 3. `end` is strictly later than `start` (no overnight entries)
//! 4. `start` is not earlier than the previous entry's `end`
//!
//! Rule 4 only looks at the immediately preceding entry. Combined with rule 3
//! this already forces the whole sequence to be sorted and non-overlapping.

use chrono::NaiveTime;

use crate::error::ValidationError;
use crate::models::TimeEntry;

/// Parse a 24-hour `HH:MM` time of day
///
/// Hours and minutes take one or two digits (`9:30` is fine); surrounding
/// whitespace is rejected.
pub fn parse_local_time(value: &str) -> Option<NaiveTime> {
    if value.trim() != value {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// An entry that passed validation, with its parsed times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedEntry {
    pub entry: TimeEntry,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A sequence that passed every rule; the only input submission accepts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedEntries(Vec<CheckedEntry>);

impl ValidatedEntries {
    pub fn iter(&self) -> impl Iterator<Item = &CheckedEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate an ordered sequence of entries, keeping the parsed times
///
/// An empty sequence is valid. The input is never modified.
pub fn check_entries(entries: &[TimeEntry]) -> Result<ValidatedEntries, ValidationError> {
    let mut checked: Vec<CheckedEntry> = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let position = i + 1;

        let start = parse_local_time(&entry.start).ok_or_else(|| ValidationError::InvalidStart {
            entry: position,
            value: entry.start.clone(),
        })?;
        let end = parse_local_time(&entry.end).ok_or_else(|| ValidationError::InvalidEnd {
            entry: position,
            value: entry.end.clone(),
        })?;

        if end <= start {
            return Err(ValidationError::EndNotAfterStart { entry: position });
        }

        if let Some(previous) = checked.last() {
            if start < previous.end {
                return Err(ValidationError::Overlap { entry: position });
            }
        }

        checked.push(CheckedEntry {
            entry: entry.clone(),
            start,
            end,
        });
    }

    Ok(ValidatedEntries(checked))
}

/// Validate an ordered sequence of entries
pub fn validate_entries(entries: &[TimeEntry]) -> Result<(), ValidationError> {
    check_entries(entries).map(|_| ())
}
