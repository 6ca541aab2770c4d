use crate::size::format_size;
use crate::spinner::Spinner;
use crate::types::Entry;
use chrono::{DateTime, Local};
use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Failure,
    Caution,
}

/// Everything the workflow shows the user, other than the prompts.
pub trait Presenter {
    fn say(&mut self, tone: Tone, text: &str);

    /// Inline emphasis for names and paths embedded in other text.
    fn accent(&self, text: &str) -> String;

    fn entry_table(&mut self, entries: &[Entry], show_marks: bool);

    fn file_table(&mut self, entry: &Entry);

    fn start_activity(&mut self, label: &str);

    fn stop_activity(&mut self);
}

pub struct TerminalPresenter<W> {
    out: W,
    spinner: Option<Spinner>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        TerminalPresenter { out, spinner: None }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn say(&mut self, tone: Tone, text: &str) {
        let styled = match tone {
            Tone::Plain => text.normal(),
            Tone::Heading => text.bold(),
            Tone::Success => text.green(),
            Tone::Failure => text.red(),
            Tone::Caution => text.yellow(),
        };
        writeln!(self.out, "{styled}").ok();
        self.out.flush().ok();
    }

    fn accent(&self, text: &str) -> String {
        text.cyan().to_string()
    }

    fn entry_table(&mut self, entries: &[Entry], show_marks: bool) {
        if entries.is_empty() {
            writeln!(self.out, "{}", " (No items to display) ".yellow()).ok();
            return;
        }
        writeln!(self.out, "\n{}\n", build_entry_table(entries, show_marks)).ok();
        self.out.flush().ok();
    }

    fn file_table(&mut self, entry: &Entry) {
        writeln!(self.out, "{}\n", build_file_table(entry)).ok();
        self.out.flush().ok();
    }

    fn start_activity(&mut self, label: &str) {
        self.stop_activity();
        self.spinner = Some(Spinner::start(label));
    }

    fn stop_activity(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop();
        }
    }
}

#[must_use]
pub fn format_modified(modified: &DateTime<Local>) -> String {
    modified.format("%b %d, %Y %H:%M").to_string()
}

#[must_use]
pub fn build_entry_table(entries: &[Entry], show_marks: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Type", "Name", "Size", "Modified"]);

    for entry in entries {
        let name = if show_marks && entry.marked {
            Cell::new(format!("{} ✓", entry.name())).fg(Color::Green)
        } else {
            Cell::new(entry.name())
        };

        table.add_row(vec![
            Cell::new(if entry.is_dir { "Dir" } else { "File" }),
            name,
            Cell::new(format_size(entry.size)),
            Cell::new(format_modified(&entry.modified)),
        ]);
    }

    table
}

#[must_use]
pub fn build_file_table(entry: &Entry) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Name", "Size", "Modified"]);
    table.add_row(vec![
        Cell::new(entry.name()),
        Cell::new(format_size(entry.size)),
        Cell::new(format_modified(&entry.modified)),
    ]);
    table
}
