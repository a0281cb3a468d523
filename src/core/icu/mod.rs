//! Message-format (ICU-style) validation and canonical printing.
//!
//! `defaultMessage` values pass through a [`MessageFormat`] before they are
//! stored. The shipped implementation, [`IcuMessageFormat`], parses the
//! message into a small AST and prints it back in canonical form, so that
//! two spellings of the same message (`{count,plural,one{# item}other{# items}}`
//! and `{count, plural, one {# item} other {# items}}`) compare equal.
//!
//! ## Module Structure
//!
//! - `parser`: Recursive descent parser producing [`Element`]s
//! - `printer`: Canonical printer for parsed messages

mod parser;
mod printer;

use thiserror::Error;

pub use parser::parse;
pub use printer::print;

/// A syntax error in message-format text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at offset {offset})")]
pub struct MessageSyntaxError {
    /// Byte offset into the message where parsing failed.
    pub offset: usize,
    pub message: String,
}

impl MessageSyntaxError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// One piece of a parsed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Literal text with escapes decoded.
    Text(String),
    /// An escaped `\#`, a literal hash that is never a plural count.
    EscapedHash,
    /// A `{...}` placeholder.
    Argument {
        id: String,
        format: Option<ArgumentFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKind {
    Number,
    Date,
    Time,
}

impl SimpleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleKind::Number => "number",
            SimpleKind::Date => "date",
            SimpleKind::Time => "time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentFormat {
    /// `{arg, number}`, `{arg, date, short}`
    Simple {
        kind: SimpleKind,
        style: Option<String>,
    },
    /// `{arg, plural, ...}` or `{arg, selectordinal, ...}`
    Plural {
        ordinal: bool,
        offset: u64,
        options: Vec<SelectorCase>,
    },
    /// `{arg, select, ...}`
    Select { options: Vec<SelectorCase> },
}

/// `selector {message}` inside plural/select arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCase {
    pub selector: String,
    pub value: Vec<Element>,
}

/// Validates message-format text and returns its canonical spelling.
pub trait MessageFormat {
    fn canonicalize(&self, text: &str) -> Result<String, MessageSyntaxError>;
}

/// ICU MessageFormat validator backed by [`parse`] and [`print`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuMessageFormat;

impl MessageFormat for IcuMessageFormat {
    fn canonicalize(&self, text: &str) -> Result<String, MessageSyntaxError> {
        let elements = parse(text)?;
        Ok(print(&elements))
    }
}
