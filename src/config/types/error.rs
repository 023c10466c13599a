//! Declaration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while turning a declaration file into a `NavModel`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("declaration parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("JSON declaration parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported declaration format `{0}`, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    // No #[from]: source() would print the report twice
    #[error("{0}")]
    Diagnostics(ValidationReport),
}

// ============================================================================
// Rule
// ============================================================================

/// The structural rule a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `text` (or a `title`/`description`) is empty after trimming.
    EmptyText,
    /// `link` is empty after trimming.
    EmptyLink,
    /// Two entries claim the same relative route.
    DuplicateRoute,
    /// Social icon outside the recognized set.
    UnknownIcon,
    /// Social link is not an absolute http(s) URL.
    InvalidUrl,
    /// Sidebar groups nested beyond the supported depth.
    NestingTooDeep,
}

impl Rule {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyText => "empty-text",
            Self::EmptyLink => "empty-link",
            Self::DuplicateRoute => "duplicate-route",
            Self::UnknownIcon => "unknown-icon",
            Self::InvalidUrl => "invalid-url",
            Self::NestingTooDeep => "nesting-too-deep",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Diagnostic
// ============================================================================

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Declaration field (e.g., "themeConfig.sidebar[0].items[2].text")
    pub field: FieldPath,
    /// Rule violated
    pub rule: Rule,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(field: FieldPath, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.rule.dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

/// A non-fatal finding; the model is still built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub field: FieldPath,
    pub message: String,
}

// ============================================================================
// ValidationReport
// ============================================================================

/// Every violation found in one validation pass.
///
/// Validation never stops at the first problem; the author sees the whole
/// list at once.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<Diagnostic>,
    warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, rule: Rule, message: impl Into<String>) {
        self.errors.push(Diagnostic::new(field, rule, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        rule: Rule,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(Diagnostic::new(field, rule, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(Warning {
            field,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Diagnostics violating `rule`.
    pub fn by_rule(&self, rule: Rule) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().filter(move |d| d.rule == rule)
    }

    /// Split into errors (`Err(self)`) or the warnings to keep.
    pub fn into_result(self) -> Result<Vec<Warning>, Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(self.warnings)
        }
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        print_warnings(&self.warnings);
    }
}

/// Print warnings as one block under a single `[warning]` line.
pub fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    crate::log!("warning"; "{} in navigation declaration:",
        if warnings.len() == 1 { "issue" } else { "issues" });
    for warning in warnings {
        eprintln!("- {}: {}", warning.field.as_str(), warning.message);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "navigation validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("nav.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("nav.toml"));

        let err = ConfigError::UnsupportedFormat(PathBuf::from("nav.yaml"));
        assert!(format!("{err}").contains("nav.yaml"));
    }

    #[test]
    fn test_report_into_result() {
        let mut report = ValidationReport::new();
        report.warn(FieldPath::root("title"), "looks odd");
        assert!(!report.has_errors());
        let warnings = report.into_result().unwrap();
        assert_eq!(warnings.len(), 1);

        let mut report = ValidationReport::new();
        report.error(FieldPath::root("title"), Rule::EmptyText, "title is empty");
        assert!(report.has_errors());
        let report = report.into_result().unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.errors()[0].rule, Rule::EmptyText);
    }

    #[test]
    fn test_report_display_lists_every_error() {
        let mut report = ValidationReport::new();
        report.error(FieldPath::root("title"), Rule::EmptyText, "title is empty");
        report.error_with_hint(
            FieldPath::root("themeConfig").key("nav").index(1).key("link"),
            Rule::DuplicateRoute,
            "route /guide is declared twice",
            "first declared at themeConfig.nav[0].link",
        );
        let display = format!("{report}");
        assert!(display.contains("title is empty"));
        assert!(display.contains("route /guide is declared twice"));
        assert!(display.contains("first declared at"));
        assert_eq!(report.by_rule(Rule::DuplicateRoute).count(), 1);
    }
}
