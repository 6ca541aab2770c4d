use crate::presenter::{Presenter, Tone};
use crate::prompt::Prompter;
use crate::types::Entry;
use colored::Colorize;
use std::fs;
use std::io::{BufRead, Write};

/// Show, confirm and remove one non-directory target. Returns true only
/// when the file was actually removed.
pub fn handle_single_file<R: BufRead, W: Write>(
    entry: &Entry,
    prompter: &mut Prompter<R, W>,
    presenter: &mut dyn Presenter,
) -> bool {
    let path = entry.path.display().to_string();
    presenter.say(
        Tone::Plain,
        &format!("\n{} {}\n", "FILE:".bold(), presenter.accent(&path)),
    );
    presenter.file_table(entry);

    let question = format!(
        "Do you want to delete the file {}?",
        presenter.accent(&entry.name())
    );
    if !prompter.confirm(&question) {
        presenter.say(Tone::Caution, "Operation aborted by user.");
        return false;
    }

    match fs::remove_file(&entry.path) {
        Ok(()) => {
            let accented = presenter.accent(&path);
            presenter.say(Tone::Success, &format!("✓ Success: Deleted file: {accented}"));
            true
        }
        Err(e) => {
            presenter.say(Tone::Failure, &format!("✗ Failed: Failed to delete file: {e}"));
            false
        }
    }
}
