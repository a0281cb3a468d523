//! The narrow interface the extraction core needs from a parser front-end.
//!
//! The core never touches syntax trees directly. Descriptor builders see
//! property keys and values only as [`DescriptorNode`]s, and visitors ask an
//! [`ImportResolver`] whether a name refers to an import. `crate::core::swc`
//! implements both over the swc AST.

use std::fmt;

use crate::core::data::SourceLocation;

/// Result of static evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
    Undefined,
}

impl ConstValue {
    /// JavaScript truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConstValue::Str(s) => !s.is_empty(),
            ConstValue::Num(n) => *n != 0.0 && !n.is_nan(),
            ConstValue::Bool(b) => *b,
            ConstValue::Null | ConstValue::Undefined => false,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, ConstValue::Null | ConstValue::Undefined)
    }

    /// JavaScript `typeof`.
    pub fn type_of(&self) -> &'static str {
        match self {
            ConstValue::Str(_) => "string",
            ConstValue::Num(_) => "number",
            ConstValue::Bool(_) => "boolean",
            ConstValue::Null => "object",
            ConstValue::Undefined => "undefined",
        }
    }

    /// JavaScript `ToNumber`.
    pub fn to_number(&self) -> f64 {
        match self {
            ConstValue::Num(n) => *n,
            ConstValue::Bool(b) => f64::from(u8::from(*b)),
            ConstValue::Null => 0.0,
            ConstValue::Undefined => f64::NAN,
            ConstValue::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

/// JavaScript `ToString`.
impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Str(s) => f.write_str(s),
            ConstValue::Num(n) => f.write_str(&number_to_string(*n)),
            ConstValue::Bool(b) => write!(f, "{}", b),
            ConstValue::Null => f.write_str("null"),
            ConstValue::Undefined => f.write_str("undefined"),
        }
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // Covers -0.
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

/// A descriptor property key or value as seen by the extraction core.
pub trait DescriptorNode {
    /// The name of a bare identifier key (`id` in `{ id: "..." }` or the
    /// attribute name in `<X id="..." />`). `None` for any other node.
    fn identifier_name(&self) -> Option<String>;

    /// Fold the node to a constant, or `None` if it is not statically known.
    fn evaluate(&self) -> Option<ConstValue>;

    /// True for a string literal written directly as a JSX attribute value,
    /// without `{}` around it. Such literals are not escape-processed.
    fn is_unbraced_string_literal(&self) -> bool {
        false
    }

    fn location(&self) -> SourceLocation;
}

/// Answers "is this name bound to `name` imported from `module`?".
pub trait ImportResolver<N: ?Sized> {
    fn references_import(&self, node: &N, module: &str, name: &str) -> bool;

    /// The first of `names` that `node` refers to.
    fn referenced_import<'n>(&self, node: &N, module: &str, names: &'n [String]) -> Option<&'n str> {
        names
            .iter()
            .find(|name| self.references_import(node, module, name))
            .map(String::as_str)
    }
}
