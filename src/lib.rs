#![allow(dead_code)]
//! LazyClock - free-text workday descriptions to Clockify time entries
//!
//! The day description goes to Gemini together with the Clockify project
//! listing; the JSON entries that come back are reviewed interactively,
//! validated, converted to UTC and posted to Clockify one by one.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (log, projects, check, init)
//! - **core**: API clients, translation, validation, review and submission
//! - **models**: Data structures (config, entries, project directory)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{LazyClockError, Result};
