use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Redraws on its own ticker thread while the caller blocks on I/O.
/// Holds nothing but its label.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[must_use]
    pub fn start(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Spinner { bar }
    }

    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}
