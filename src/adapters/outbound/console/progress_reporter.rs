use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting status to stderr
///
/// This adapter implements the ProgressReporter port, writing status
/// information to stderr so it doesn't interfere with the comment on stdout.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Creates a reporter that only prints errors
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.green());
        }
    }
}
