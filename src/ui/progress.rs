use crate::ui::theme;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use std::time::Duration;

/// Stderr spinner for the in-flight fetch. Hidden when stderr is not a terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = if console::Term::stderr().is_term() {
            let pb = ProgressBar::new_spinner();
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.set_message(message.style(theme().fetching.clone()).to_string());
        Self { pb }
    }

    pub fn succeed(&self, msg: &str) {
        self.pb
            .finish_with_message(msg.style(theme().done.clone()).to_string());
    }

    pub fn fail(&self, msg: &str) {
        self.pb
            .finish_with_message(msg.style(theme().failed.clone()).to_string());
    }
}
