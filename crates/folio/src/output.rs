//! Styled terminal output for the CLI.

use console::{Style, Term};

/// Routes CLI output to the right stream.
///
/// Diagnostics and status lines go to stderr. Command results (trees, JSON)
/// go to stdout so they stay pipeable.
pub(crate) struct Output {
    status: Term,
    results: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    heading: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// Write a command result to stdout.
    pub(crate) fn print(&self, text: &str) {
        let _ = self.results.write_line(text);
    }

    /// Plain status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&self.heading, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.ok, msg);
    }

    /// Yellow `warning:` line.
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.warn, &format!("warning: {msg}"));
    }

    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.fail, msg);
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }
}
