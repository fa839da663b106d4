//! Terminal progress display for the scaffold phases.
//!
//! On a terminal each phase gets an `indicatif` spinner that is replaced by
//! a `✓` line when the phase ends. Elsewhere only the final lines are
//! printed. Quiet and JSON modes print nothing.

use std::sync::Mutex;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use backstrap_core::{
    application::{ScaffoldStep, ports::ProgressReporter},
    domain::ProjectRequest,
};

use crate::output::{OutputManager, highlight};

const TICK: Duration = Duration::from_millis(100);

/// How progress lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Animated spinners.
    Spinner,
    /// One line per finished phase.
    Lines,
    /// Nothing at all.
    Silent,
}

/// [`ProgressReporter`] for the terminal.
pub struct SpinnerProgress {
    mode: ProgressMode,
    no_color: bool,
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new(mode: ProgressMode, no_color: bool) -> Self {
        Self {
            mode,
            no_color,
            current: Mutex::new(None),
        }
    }

    /// Pick the mode matching the resolved output settings.
    pub fn for_output(output: &OutputManager) -> Self {
        let mode = if output.is_silent() {
            ProgressMode::Silent
        } else if output.is_interactive() {
            ProgressMode::Spinner
        } else {
            ProgressMode::Lines
        };
        Self::new(mode, !output.supports_color())
    }

    fn spinner(message: &'static str) -> ProgressBar {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(TICK);
        bar
    }

    /// Take the running spinner, if any, and clear it from the screen.
    fn clear_spinner(&self) {
        let bar = match self.current.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
    }

    fn done_line(&self, message: &str) -> String {
        if self.no_color {
            format!("\u{2713} {message}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), message)
        }
    }

    fn failed_line(&self, message: &str) -> String {
        if self.no_color {
            format!("\u{2717} {message}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), message.red())
        }
    }

    fn write(term: &Term, line: &str) {
        if let Err(e) = term.write_line(line) {
            debug!(error = %e, "progress line not written");
        }
    }
}

impl ProgressReporter for SpinnerProgress {
    fn project_started(&self, request: &ProjectRequest) {
        if self.mode == ProgressMode::Silent {
            return;
        }
        let line = format!(
            "Creating project: {} ({})",
            highlight(request.name(), self.no_color),
            request.framework().label()
        );
        Self::write(&Term::stdout(), &line);
    }

    fn step_started(&self, step: ScaffoldStep) {
        if self.mode != ProgressMode::Spinner {
            return;
        }
        let bar = Self::spinner(step.running_message());
        match self.current.lock() {
            Ok(mut guard) => *guard = Some(bar),
            Err(poisoned) => *poisoned.into_inner() = Some(bar),
        }
    }

    fn step_finished(&self, step: ScaffoldStep) {
        if self.mode == ProgressMode::Silent {
            return;
        }
        self.clear_spinner();
        Self::write(&Term::stdout(), &self.done_line(step.done_message()));
    }

    fn step_failed(&self, step: ScaffoldStep) {
        self.clear_spinner();
        if self.mode == ProgressMode::Silent {
            return;
        }
        Self::write(&Term::stderr(), &self.failed_line(step.failed_message()));
    }
}
