use crate::deletion::{self, DeletionReport};
use crate::lister;
use crate::presenter::{Presenter, Tone};
use crate::prompt::Prompter;
use crate::selection;
use crate::types::{Entry, Mode, display_name};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use colored::Colorize;
use std::fs;
use std::io::{BufRead, ErrorKind, Write};
use std::path::{self, Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug)]
pub enum Target {
    Directory(PathBuf),
    File(Entry),
}

/// How a directory run ended. Everything except `Completed` left the
/// filesystem untouched.
#[derive(Debug)]
pub enum Outcome {
    Aborted,
    Empty,
    NothingSelected,
    Declined,
    Completed(DeletionReport),
}

/// Makes `raw` absolute (symlinks are not resolved) and decides which
/// branch handles it.
pub fn resolve_target(raw: &Path) -> Result<Target> {
    let path = path::absolute(raw)
        .with_context(|| format!("Failed to get absolute path for '{}'", raw.display()))?;

    let metadata = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Path does not exist: {}", path.display())
        }
        Err(e) => bail!("Failed to access path: {} ({e})", path.display()),
    };

    if metadata.is_dir() {
        return Ok(Target::Directory(path));
    }

    let modified: DateTime<Local> = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH).into();
    Ok(Target::File(Entry::new(path, metadata.len(), false, modified)))
}

/// Directory branch: scan confirmation, listing, selection, deletion.
/// Only a listing failure is an error.
pub fn run_directory<R: BufRead, W: Write>(
    dir: &Path,
    mode: Mode,
    prompter: &mut Prompter<R, W>,
    presenter: &mut dyn Presenter,
) -> Result<Outcome> {
    let shown = presenter.accent(&dir.display().to_string());
    presenter.say(
        Tone::Plain,
        &format!("\n{} {shown}\n", "DIRECTORY:".bold()),
    );

    if !prompter.confirm(&format!("Scan and potentially delete items within {shown}?")) {
        presenter.say(Tone::Caution, "Operation aborted by user.");
        return Ok(Outcome::Aborted);
    }

    let label = format!("Reading directory {}...", presenter.accent(&display_name(dir)));
    presenter.start_activity(&label);
    let listed = lister::list_entries(dir);
    presenter.stop_activity();
    let entries = listed?;

    if entries.is_empty() {
        presenter.say(
            Tone::Caution,
            &format!("No files or subdirectories found to delete in {shown}"),
        );
        return Ok(Outcome::Empty);
    }

    let selection = selection::select(entries, mode, prompter, presenter);
    log::debug!("{} of {} entries marked", selection.marked.len(), selection.listed);
    if selection.is_empty() {
        presenter.say(Tone::Caution, "No items selected for deletion.");
        return Ok(Outcome::NothingSelected);
    }

    Ok(match deletion::execute(&selection.marked, prompter, presenter) {
        Some(report) => Outcome::Completed(report),
        None => Outcome::Declined,
    })
}
