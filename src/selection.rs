use crate::presenter::{Presenter, Tone};
use crate::prompt::Prompter;
use crate::size::format_size;
use crate::types::{Entry, Mode};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Entries the user chose to delete, in listing order, all marked.
#[derive(Debug)]
pub struct Selection {
    pub marked: Vec<Entry>,
    pub listed: usize,
}

impl Selection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

/// Takes ownership of the listing and hands back only the marked entries.
pub fn select<R: BufRead, W: Write>(
    entries: Vec<Entry>,
    mode: Mode,
    prompter: &mut Prompter<R, W>,
    presenter: &mut dyn Presenter,
) -> Selection {
    match mode {
        Mode::Bulk => select_all(entries, prompter, presenter),
        Mode::Interactive => select_each(entries, prompter, presenter),
    }
}

fn select_all<R: BufRead, W: Write>(
    entries: Vec<Entry>,
    prompter: &mut Prompter<R, W>,
    presenter: &mut dyn Presenter,
) -> Selection {
    let listed = entries.len();

    presenter.say(Tone::Heading, "\nItems found:");
    presenter.entry_table(&entries, false);

    let question = format!(
        "Delete all {} items shown above?",
        listed.to_string().bold()
    );
    let marked = if prompter.confirm(&question) {
        entries.into_iter().map(mark).collect()
    } else {
        Vec::new()
    };

    Selection { marked, listed }
}

fn select_each<R: BufRead, W: Write>(
    entries: Vec<Entry>,
    prompter: &mut Prompter<R, W>,
    presenter: &mut dyn Presenter,
) -> Selection {
    let listed = entries.len();

    presenter.say(Tone::Heading, "\nSelect items to delete (y/N):");
    presenter.entry_table(&entries, false);

    let mut marked = Vec::new();
    for (i, entry) in entries.into_iter().enumerate() {
        let question = format!(
            "[{}/{}] Delete {} {} ({})?",
            i + 1,
            listed,
            entry.kind_label(),
            presenter.accent(&entry.name()),
            format_size(entry.size)
        );
        if prompter.confirm(&question) {
            marked.push(mark(entry));
        }
    }

    if !marked.is_empty() {
        presenter.say(Tone::Heading, "\nItems marked for deletion:");
        presenter.entry_table(&marked, true);
    }

    Selection { marked, listed }
}

fn mark(mut entry: Entry) -> Entry {
    entry.marked = true;
    entry
}
