use colored::Colorize;
use std::io::{BufRead, Write};

/// Blocking `[y/N]` question loop over a line-oriented input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Asks until a valid answer arrives. Empty input means no; a read
    /// failure or closed input (including an unterminated last line) also
    /// means no, with a warning.
    pub fn confirm(&mut self, question: &str) -> bool {
        loop {
            if let Err(e) = write!(self.output, "{question} [y/N]: ").and_then(|()| self.output.flush())
            {
                log::warn!("Error writing prompt: {e}. Assuming No.");
                return false;
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // A line cut off by end of input is not an answer.
                Ok(n) if n == 0 || !line.ends_with('\n') => {
                    writeln!(self.output).ok();
                    log::warn!("Input closed. Assuming No.");
                    return false;
                }
                Ok(_) => {}
                Err(e) => {
                    writeln!(self.output).ok();
                    log::warn!("Error reading input: {e}. Assuming No.");
                    return false;
                }
            }

            if let Some(answer) = parse_answer(&line) {
                return answer;
            }
            writeln!(
                self.output,
                "{}",
                "Invalid input. Please enter 'y' or 'n'.".yellow()
            )
            .ok();
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// `Some(true)` for y/yes, `Some(false)` for n/no/empty, `None` otherwise.
#[must_use]
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}
