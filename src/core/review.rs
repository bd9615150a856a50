//! Interactive review of generated entries.
//!
//! All terminal interaction goes through [`Prompter`], so the review and
//! confirmation steps can run against a [`ScriptedPrompter`] without a TTY.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::collections::VecDeque;

use crate::error::{LazyClockError, Result};
use crate::models::{ProjectDirectory, TimeEntry};

/// Line-oriented question/answer capability
pub trait Prompter {
    /// Ask for a line of text; an empty answer is allowed
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question, defaulting to no
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

/// Prompter that replays queued answers and records every prompt it was shown
///
/// Confirmations accept `y`, `yes`, `s` and `si` (any case) as yes.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| LazyClockError::ScriptExhausted(prompt.to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.next_answer(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.next_answer(prompt)?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "si"
        ))
    }
}

/// Print the numbered entry list with project names
pub fn print_entries(entries: &[TimeEntry], projects: &ProjectDirectory) {
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{}. {} | {} - {} | Project: {}",
            i + 1,
            entry.description,
            entry.start,
            entry.end,
            projects.display_name(entry.project_id.as_deref())
        );
    }
}

/// Walk through every entry, offering to edit description, start and end
///
/// Works on a copy: the caller's entries are never touched. An empty answer
/// keeps the current value. Validation is left to the caller.
pub fn review_entries<P: Prompter>(prompter: &mut P, entries: &[TimeEntry]) -> Result<Vec<TimeEntry>> {
    let mut reviewed = entries.to_vec();

    for (i, entry) in reviewed.iter_mut().enumerate() {
        println!("\nEntry {}:", i + 1);
        println!("  Description: {}", entry.description);
        println!("  Start:       {}", entry.start);
        println!("  End:         {}", entry.end);

        if !prompter.confirm("Edit this entry?")? {
            continue;
        }

        let answer = prompter.ask(&format!("  New description [{}]", entry.description))?;
        replace_unless_empty(&mut entry.description, answer);
        let answer = prompter.ask(&format!("  New start [{}]", entry.start))?;
        replace_unless_empty(&mut entry.start, answer);
        let answer = prompter.ask(&format!("  New end [{}]", entry.end))?;
        replace_unless_empty(&mut entry.end, answer);
    }

    Ok(reviewed)
}

fn replace_unless_empty(field: &mut String, answer: String) {
    let answer = answer.trim();
    if !answer.is_empty() {
        *field = answer.to_string();
    }
}
