//! Terminal implementations of the host collaborators.

use colored::Colorize;
use std::io::{IsTerminal, Read};

use translator_core::{DetailView, Notifier, SelectionSource, Toast, ToastStyle};
use translator_types::SelectionError;

/// `--text` when given, otherwise whatever was piped on stdin. An
/// interactive stdin has no selection.
pub struct TerminalSelection {
    explicit: Option<String>,
}

impl TerminalSelection {
    pub fn new(explicit: Option<String>) -> Self {
        Self { explicit }
    }
}

impl SelectionSource for TerminalSelection {
    fn selected_text(&self) -> Result<String, SelectionError> {
        if let Some(text) = &self.explicit {
            return Ok(text.clone());
        }
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(SelectionError::Unavailable(
                "stdin is a terminal; pipe text or pass --text".to_string(),
            ));
        }
        let mut buf = String::new();
        stdin.lock().read_to_string(&mut buf).map_err(|e| SelectionError::Read(e.to_string()))?;
        Ok(buf)
    }
}

/// Toasts rendered as single lines on stderr.
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn show_toast(&self, toast: &Toast) {
        if self.quiet {
            return;
        }
        eprintln!("{}", format_toast(toast));
    }
}

pub fn format_toast(toast: &Toast) -> String {
    let (icon, title) = match toast.style {
        ToastStyle::Animated => ("…".cyan(), toast.title.cyan()),
        ToastStyle::Success => ("✓".green(), toast.title.green()),
        ToastStyle::Failure => ("✗".red(), toast.title.red().bold()),
    };
    match &toast.message {
        Some(message) => format!("{} {}: {}", icon, title, message),
        None => format!("{} {}", icon, title),
    }
}

/// Human-readable view: markdown on stdout, available actions on stderr.
pub fn print_view(view: &DetailView) {
    println!("{}", view.markdown);
    if !view.actions.is_empty() {
        let titles: Vec<&str> = view.actions.iter().map(|a| a.title()).collect();
        eprintln!("{} {}", "Actions:".dimmed(), titles.join(", ").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_text_wins() {
        let selection = TerminalSelection::new(Some("  hi ".to_string()));
        assert_eq!(selection.selected_text(), Ok("  hi ".to_string()));
    }

    #[test]
    fn test_format_toast() {
        colored::control::set_override(false);
        assert_eq!(format_toast(&Toast::success("Translation Complete")), "✓ Translation Complete");
        assert_eq!(
            format_toast(&Toast::failure("Translation Failed", "No Text Selected")),
            "✗ Translation Failed: No Text Selected"
        );
        assert_eq!(
            format_toast(&Toast::animated("Translating to English...")),
            "… Translating to English..."
        );
    }
}
