//! Issue types for extraction results.
//!
//! Each issue is self-contained with everything a reporter (CLI, MCP) needs
//! to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::extract::PluralComponentWarning;
use crate::core::{ExtractError, ExtractErrorKind, SourceContext};
use crate::utils::line_at;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    PluralComponent,
    Unevaluatable,
    MessageSyntax,
    EscapingHint,
    MissingRequiredField,
    DuplicateIdConflict,
    MissingDescription,
    InvalidDescriptorShape,
    ParseError,
}

impl Rule {
    pub fn from_kind(kind: &ExtractErrorKind) -> Self {
        match kind {
            ExtractErrorKind::Unevaluatable => Rule::Unevaluatable,
            ExtractErrorKind::MessageSyntax(_) => Rule::MessageSyntax,
            ExtractErrorKind::EscapingHint => Rule::EscapingHint,
            ExtractErrorKind::MissingRequiredField => Rule::MissingRequiredField,
            ExtractErrorKind::DuplicateIdConflict { .. } => Rule::DuplicateIdConflict,
            ExtractErrorKind::MissingDescription { .. } => Rule::MissingDescription,
            ExtractErrorKind::InvalidDescriptorShape { .. } => Rule::InvalidDescriptorShape,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::PluralComponent => write!(f, "plural-component"),
            Rule::Unevaluatable => write!(f, "unevaluatable"),
            Rule::MessageSyntax => write!(f, "message-syntax"),
            Rule::EscapingHint => write!(f, "escaping-hint"),
            Rule::MissingRequiredField => write!(f, "missing-required-field"),
            Rule::DuplicateIdConflict => write!(f, "duplicate-id-conflict"),
            Rule::MissingDescription => write!(f, "missing-description"),
            Rule::InvalidDescriptorShape => write!(f, "invalid-descriptor-shape"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A plural component that extraction skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralComponentIssue {
    pub context: SourceContext,
    /// Local name of the component as imported.
    pub component: String,
}

impl PluralComponentIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PluralComponent
    }

    pub fn from_warning(warning: &PluralComponentWarning, source: &str) -> Self {
        let source_line = line_at(source, warning.location.line);
        Self {
            context: SourceContext::new(warning.location.clone(), source_line),
            component: warning.component.clone(),
        }
    }
}

/// The fatal error that stopped extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractFailureIssue {
    pub context: SourceContext,
    pub kind: ExtractErrorKind,
    pub hint: Option<String>,
}

impl ExtractFailureIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn from_error(err: &ExtractError, source: &str) -> Self {
        let source_line = line_at(source, err.location.line);
        Self {
            context: SourceContext::new(err.location.clone(), source_line),
            hint: err.kind.hint(),
            kind: err.kind.clone(),
        }
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during extraction.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    PluralComponent(PluralComponentIssue),
    ExtractFailure(ExtractFailureIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::PluralComponent(_) => PluralComponentIssue::severity(),
            Issue::ExtractFailure(_) => ExtractFailureIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for PluralComponentIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "Default messages are not extracted from <{}>, use <FormattedMessage> instead.",
            self.component
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ExtractFailureIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.kind.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Rule::from_kind(&self.kind)
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn details(&self) -> Option<String> {
        match &self.kind {
            ExtractErrorKind::MissingDescription { id } => Some(format!("message id: {}", id)),
            _ => None,
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_position(&self) -> (usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.location.line, ctx.location.col),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_position().cmp(&other.sort_position()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
