use std::fmt::Write;

use crate::checker::FileOutcome;
use crate::error::Result;
use crate::runner::RunReport;

use super::{ColorMode, ReportFormatter, ansi};

const SEPARATOR: &str = "--------------------";

/// The rollback method every irreversible migration should contain.
#[must_use]
pub fn rollback_example(method_name: &str) -> String {
    format!(
        "public function {method_name}(): void\n\
         {{\n    \
         throw new \\Exception('This migration is irreversible and cannot be reverted.');\n\
         }}\n"
    )
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    show_example: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = mode.use_colors(std::io::IsTerminal::is_terminal(&std::io::stdout()));
        Self {
            use_colors,
            verbose,
            show_example: true,
        }
    }

    #[must_use]
    pub const fn with_example(mut self, show: bool) -> Self {
        self.show_example = show;
        self
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_failure(&self, outcome: &FileOutcome, method_name: &str, output: &mut String) {
        if let Some(reason) = outcome.reason() {
            let message = reason.message(&outcome.path, method_name);
            let _ = writeln!(output, "{}", self.colorize(&message, ansi::RED));
        }
    }

    fn format_pass(&self, outcome: &FileOutcome, output: &mut String) {
        let line = format!("✓ Migration `{}` is irreversible", outcome.path.display());
        let _ = writeln!(output, "{}", self.colorize(&line, ansi::GREEN));
    }

    fn format_summary(&self, report: &RunReport, output: &mut String) {
        let summary = &report.summary;
        let errors_color = if summary.errors_count > 0 {
            ansi::RED
        } else {
            ansi::GREEN
        };

        let _ = writeln!(output, "{SEPARATOR}");
        let _ = writeln!(output, "Files analyzed: {}", summary.files_analyzed);
        let _ = writeln!(
            output,
            "Errors count: {}",
            self.colorize(&summary.errors_count.to_string(), errors_color)
        );
    }

    fn format_example(&self, method_name: &str, output: &mut String) {
        let _ = writeln!(output, "{SEPARATOR}");
        let _ = writeln!(
            output,
            "Each irreversible migration file should have following code:\n"
        );
        output.push_str(&self.colorize(&rollback_example(method_name), ansi::CYAN));
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        if let Some(message) = report.abort_message() {
            let _ = writeln!(output, "{}", self.colorize(&message, ansi::RED));
            return Ok(output);
        }

        for outcome in report.failures() {
            self.format_failure(outcome, &report.method_name, &mut output);
        }
        if self.verbose >= 1 {
            for outcome in report.passes() {
                self.format_pass(outcome, &mut output);
            }
        }

        self.format_summary(report, &mut output);

        if self.show_example && report.show_example() {
            self.format_example(&report.method_name, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
impl TextFormatter {
    /// Formatter with explicit color control (for testing).
    pub const fn with_colors(use_colors: bool, verbose: u8) -> Self {
        Self {
            use_colors,
            verbose,
            show_example: true,
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
