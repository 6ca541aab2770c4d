mod deletion;
mod lister;
mod presenter;
mod prompt;
mod selection;
mod single_file;
mod size;
mod spinner;
mod types;
mod workflow;

use clap::{ArgAction, Parser};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use crate::presenter::TerminalPresenter;
use crate::prompt::Prompter;
use crate::types::Mode;
use crate::workflow::{Outcome, Target};

/// Interactively review and delete the contents of a directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Directory to clean up, or a single file to delete
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip individual confirmations and ask to delete all items at once
    #[arg(long)]
    all: bool,

    /// Show version information
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let target = match workflow::resolve_target(&args.path) {
        Ok(t) => t,
        Err(e) => fatal(&e),
    };

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let mut presenter = TerminalPresenter::new(io::stdout());

    match target {
        Target::File(entry) => {
            // Declines and removal failures are already reported; exit 0.
            single_file::handle_single_file(&entry, &mut prompter, &mut presenter);
        }
        Target::Directory(dir) => {
            let mode = Mode::from_all_flag(args.all);
            match workflow::run_directory(&dir, mode, &mut prompter, &mut presenter) {
                Ok(Outcome::Completed(report)) => {
                    log::debug!(
                        "removed {} of {} entries",
                        report.succeeded,
                        report.succeeded + report.failed
                    );
                }
                Ok(outcome) => log::debug!("nothing removed: {outcome:?}"),
                Err(e) => fatal(&e),
            }
        }
    }
}

fn fatal(err: &anyhow::Error) -> ! {
    eprintln!("{} {err:#}", "✗ Error:".red());
    std::process::exit(1);
}
