//! Utilities for reporting diagnostics to the terminal.

use std::io::IsTerminal as _;
use std::io::Write as _;
use std::sync::LazyLock;

use a11yinspect_ast::Diagnostic;
use a11yinspect_ast::Document;
use a11yinspect_ast::Severity;
use anyhow::Context as _;
use anyhow::anyhow;
use clap::ValueEnum;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::Config as TermConfig;
use codespan_reporting::term::DisplayStyle;
use codespan_reporting::term::emit_to_write_style;
use codespan_reporting::term::termcolor::ColorChoice;
use codespan_reporting::term::termcolor::StandardStream;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// Configuration for full display style.
static FULL_CONFIG: LazyLock<TermConfig> = LazyLock::new(|| TermConfig {
    display_style: DisplayStyle::Rich,
    ..Default::default()
});

/// Configuration for one-line display style.
static ONE_LINE_CONFIG: LazyLock<TermConfig> = LazyLock::new(|| TermConfig {
    display_style: DisplayStyle::Short,
    ..Default::default()
});

/// A counter tracking the severities of emitted diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticCounts {
    /// The number of errors encountered.
    pub errors: usize,
    /// The number of warnings encountered.
    pub warnings: usize,
    /// The number of notes encountered.
    pub notes: usize,
}

impl DiagnosticCounts {
    /// Counts a diagnostic.
    pub fn add(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Note => self.notes += 1,
        }
    }

    /// Returns an error if the `errors` count is 1 or more
    pub fn verify_no_errors(&self) -> Option<anyhow::Error> {
        if self.errors == 0 {
            return None;
        }

        Some(anyhow!(
            "failing due to {errors} error{s}",
            errors = self.errors,
            s = if self.errors == 1 { "" } else { "s" }
        ))
    }

    /// Returns an error if the `warnings` count is 1 or more
    pub fn verify_no_warnings(&self, user_requested: bool) -> Option<anyhow::Error> {
        if self.warnings == 0 {
            return None;
        }

        Some(anyhow!(
            "failing due to {warnings} warning{s}{cli_note}",
            warnings = self.warnings,
            s = if self.warnings == 1 { "" } else { "s" },
            cli_note = if user_requested {
                " (`--deny-warnings` was specified)"
            } else {
                ""
            },
        ))
    }
}

/// The diagnostic mode to use for reporting diagnostics.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Prints diagnostics as multiple lines.
    #[default]
    Full,

    /// Prints diagnostics as one line.
    OneLine,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Full => write!(f, "full"),
            Mode::OneLine => write!(f, "one-line"),
        }
    }
}

/// Determines if color output should be used for stderr.
pub fn use_color(no_color: bool) -> bool {
    !no_color && std::io::stderr().is_terminal()
}

/// Gets the diagnostics display configuration based on the user's preferences.
pub fn get_diagnostics_display_config(
    report_mode: Mode,
    no_color: bool,
) -> (&'static TermConfig, StandardStream) {
    let config = match report_mode {
        Mode::Full => &FULL_CONFIG,
        Mode::OneLine => &ONE_LINE_CONFIG,
    };

    let color_choice = if use_color(no_color) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    (config, StandardStream::stderr(color_choice))
}

/// Formats a diagnostic as a single line naming the node it was reported at.
///
/// This is the form used for documents that carry no source text.
pub fn format_one_line(document: &Document, diagnostic: &Diagnostic, color: bool) -> String {
    let severity = diagnostic.severity().to_string();
    let severity = match (color, diagnostic.severity()) {
        (false, _) => severity,
        (true, Severity::Error) => severity.red().bold().to_string(),
        (true, Severity::Warning) => severity.yellow().bold().to_string(),
        (true, Severity::Note) => severity.cyan().bold().to_string(),
    };

    format!(
        "{path}: {location}: {severity}[{rule}]: {message}",
        path = document.path().unwrap_or("<unknown>"),
        location = document.describe(diagnostic.location()),
        rule = diagnostic.rule().unwrap_or_default(),
        message = diagnostic.message(),
    )
}

/// Emits the given diagnostics of a document to the terminal.
///
/// Documents with source text are rendered with source snippets; all others
/// are rendered one line per diagnostic.
pub fn emit_diagnostics<'a>(
    document: &Document,
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    report_mode: Mode,
    no_color: bool,
) -> anyhow::Result<()> {
    let (config, mut stream) = get_diagnostics_display_config(report_mode, no_color);

    let Some(source) = document.source() else {
        let color = use_color(no_color);
        for diagnostic in diagnostics {
            writeln!(&mut stream, "{}", format_one_line(document, diagnostic, color))
                .context("failed to emit diagnostic")?;
        }
        return Ok(());
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add(document.path().unwrap_or("<unknown>"), source);
    for diagnostic in diagnostics {
        emit_to_write_style(&mut stream, config, &files, &diagnostic.to_codespan(file_id))
            .context("failed to emit diagnostic")?;
    }

    Ok(())
}
