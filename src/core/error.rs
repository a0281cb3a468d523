//! Fatal extraction errors.
//!
//! Every variant aborts the compilation unit it occurs in. Non-fatal
//! conditions (plural component use, unparseable files) are reported as
//! issues instead, see `crate::issues`.

use thiserror::Error;

use crate::core::data::SourceLocation;
use crate::core::icu::MessageSyntaxError;

const MESSAGE_SYNTAX_GUIDE: &str = "https://formatjs.io/docs/core-concepts/icu-syntax";
const JSX_GOTCHAS_GUIDE: &str = "https://react.dev/learn/javascript-in-jsx-with-curly-braces";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractErrorKind {
    #[error("Messages must be statically evaluate-able for extraction.")]
    Unevaluatable,

    #[error("Message failed to parse: {0}")]
    MessageSyntax(#[source] MessageSyntaxError),

    #[error(
        "Message failed to parse. It looks like `\\`s were used for escaping, \
         this won't work with JSX string literals. Wrap with `{{}}`."
    )]
    EscapingHint,

    #[error("Message Descriptors require an `id` and `defaultMessage`.")]
    MissingRequiredField,

    #[error(
        "Duplicate message id: \"{id}\", but the `description` and/or `defaultMessage` are different."
    )]
    DuplicateIdConflict { id: String },

    #[error("Message must have a `description`.")]
    MissingDescription { id: String },

    #[error("`{callee}()` must be called with message descriptors defined as object expressions.")]
    InvalidDescriptorShape { callee: String },
}

impl ExtractErrorKind {
    /// Short rule-style name used in reports and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractErrorKind::Unevaluatable => "unevaluatable",
            ExtractErrorKind::MessageSyntax(_) => "message-syntax",
            ExtractErrorKind::EscapingHint => "escaping-hint",
            ExtractErrorKind::MissingRequiredField => "missing-required-field",
            ExtractErrorKind::DuplicateIdConflict { .. } => "duplicate-id-conflict",
            ExtractErrorKind::MissingDescription { .. } => "missing-description",
            ExtractErrorKind::InvalidDescriptorShape { .. } => "invalid-descriptor-shape",
        }
    }

    /// Pointer to documentation, shown as a hint under the report.
    pub fn hint(&self) -> Option<String> {
        match self {
            ExtractErrorKind::MessageSyntax(_) => Some(format!("See: {}", MESSAGE_SYNTAX_GUIDE)),
            ExtractErrorKind::EscapingHint => Some(format!("See: {}", JSX_GOTCHAS_GUIDE)),
            ExtractErrorKind::Unevaluatable => {
                Some("use string literals or module-level constants".to_string())
            }
            _ => None,
        }
    }
}

/// A fatal extraction error with the source position it points at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {kind}")]
pub struct ExtractError {
    #[source]
    pub kind: ExtractErrorKind,
    pub location: SourceLocation,
}

impl ExtractError {
    pub fn new(kind: ExtractErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}
