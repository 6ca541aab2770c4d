use crate::presenter::{Presenter, Tone};
use crate::prompt::Prompter;
use crate::types::{Entry, display_name};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Outcome of one removal attempt.
#[derive(Debug, Clone)]
pub struct DeletionResult {
    pub path: PathBuf,
    pub error: Option<String>,
}

impl DeletionResult {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct DeletionReport {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<DeletionResult>,
}

impl DeletionReport {
    fn record(&mut self, result: DeletionResult) {
        if result.succeeded() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
            self.failures.push(result);
        }
    }
}

/// Asks the final question, then removes every entry. `None` when the user
/// declines (or there is nothing to delete); nothing is touched in that case.
pub fn execute<R: BufRead, W: Write>(
    entries: &[Entry],
    prompter: &mut Prompter<R, W>,
    presenter: &mut dyn Presenter,
) -> Option<DeletionReport> {
    if entries.is_empty() {
        presenter.say(Tone::Caution, "Nothing selected to delete.");
        return None;
    }

    let question = format!(
        "\nProceed with deleting these {} items?",
        entries.len().to_string().bold()
    );
    if !prompter.confirm(&question) {
        presenter.say(Tone::Caution, "Operation aborted by user.");
        return None;
    }

    presenter.start_activity("Deleting items...");
    let report = delete_entries(entries);
    presenter.stop_activity();

    print_report(&report, presenter);
    Some(report)
}

#[must_use]
pub fn delete_entries(entries: &[Entry]) -> DeletionReport {
    delete_entries_with(entries, remove_entry)
}

/// Attempts every entry regardless of earlier failures.
pub fn delete_entries_with<F>(entries: &[Entry], mut remove: F) -> DeletionReport
where
    F: FnMut(&Entry) -> io::Result<()>,
{
    let mut report = DeletionReport::default();

    for entry in entries {
        let error = match remove(entry) {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };
        report.record(DeletionResult {
            path: entry.path.clone(),
            error,
        });
    }

    report
}

/// Directories go recursively, everything else (including symlinks) is
/// unlinked directly.
pub fn remove_entry(entry: &Entry) -> io::Result<()> {
    log::debug!("removing {}", entry.path.display());
    if entry.is_dir {
        fs::remove_dir_all(&entry.path)
    } else {
        fs::remove_file(&entry.path)
    }
}

pub fn print_report(report: &DeletionReport, presenter: &mut dyn Presenter) {
    presenter.say(Tone::Plain, "");

    if report.succeeded > 0 {
        presenter.say(
            Tone::Success,
            &format!("✓ Successfully deleted {} items.", report.succeeded),
        );
    }
    if report.failed > 0 {
        presenter.say(
            Tone::Failure,
            &format!("✗ Failed to delete {} items:", report.failed),
        );
        for failure in &report.failures {
            let line = format!(
                "  - {}: {}",
                presenter.accent(&display_name(&failure.path)),
                failure.error.as_deref().unwrap_or("unknown error")
            );
            presenter.say(Tone::Plain, &line);
        }
    }
}
