use std::ops::Range;

use serde::Serialize;
use serde_json::Value;

/// A source edit requested by extraction. Ranges are byte offsets into the
/// unit's source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Rewrite {
    /// Drop a JSX attribute (and the whitespace in front of it).
    RemoveAttribute { range: Range<usize> },
    /// Replace a descriptor object literal with `{ id, defaultMessage }`.
    #[serde(rename_all = "camelCase")]
    ReplaceDescriptor {
        range: Range<usize>,
        id: String,
        default_message: String,
    },
}

impl Rewrite {
    pub fn range(&self) -> &Range<usize> {
        match self {
            Rewrite::RemoveAttribute { range } => range,
            Rewrite::ReplaceDescriptor { range, .. } => range,
        }
    }

    fn replacement(&self) -> String {
        match self {
            Rewrite::RemoveAttribute { .. } => String::new(),
            Rewrite::ReplaceDescriptor {
                id,
                default_message,
                ..
            } => format!(
                r#"{{ "id": {}, "defaultMessage": {} }}"#,
                Value::String(id.clone()),
                Value::String(default_message.clone())
            ),
        }
    }

    /// The range actually replaced, widened over leading whitespace for
    /// attribute removals.
    fn effective_range(&self, source: &str) -> Range<usize> {
        let range = self.range().clone();
        match self {
            Rewrite::RemoveAttribute { .. } => {
                let prefix = source.get(..range.start).unwrap_or_default();
                let start = prefix.trim_end().len();
                start..range.end
            }
            Rewrite::ReplaceDescriptor { .. } => range,
        }
    }
}

/// Apply rewrites to `source`.
///
/// Rewrites whose range overlaps one already taken are dropped, so an
/// enclosing rewrite wins over anything inside it. Out-of-bounds ranges are
/// ignored.
pub fn apply_rewrites(source: &str, rewrites: &[Rewrite]) -> String {
    let mut edits: Vec<(Range<usize>, String)> = rewrites
        .iter()
        .map(|r| (r.effective_range(source), r.replacement()))
        .filter(|(range, _)| range.start <= range.end && source.get(range.clone()).is_some())
        .collect();
    edits.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (range, replacement) in edits {
        if range.start < cursor {
            continue;
        }
        out.push_str(&source[cursor..range.start]);
        out.push_str(&replacement);
        cursor = range.end;
    }
    out.push_str(&source[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use crate::core::extract::rewrite::*;
    use pretty_assertions::assert_eq;

    fn range_of(source: &str, needle: &str) -> Range<usize> {
        let start = source.find(needle).unwrap();
        start..start + needle.len()
    }

    #[test]
    fn test_remove_attribute_with_leading_space() {
        let source = r#"<X id="a" description="d" defaultMessage="m" />"#;
        let rewrite = Rewrite::RemoveAttribute {
            range: range_of(source, r#"description="d""#),
        };
        assert_eq!(
            apply_rewrites(source, &[rewrite]),
            r#"<X id="a" defaultMessage="m" />"#
        );
    }

    #[test]
    fn test_replace_descriptor_escapes_json() {
        let source = r#"defineMessages({ a: { id: "a", defaultMessage: "Say \"hi\"", description: "d" } })"#;
        let inner = r#"{ id: "a", defaultMessage: "Say \"hi\"", description: "d" }"#;
        let rewrite = Rewrite::ReplaceDescriptor {
            range: range_of(source, inner),
            id: "a".to_string(),
            default_message: r#"Say "hi""#.to_string(),
        };
        assert_eq!(
            apply_rewrites(source, &[rewrite]),
            r#"defineMessages({ a: { "id": "a", "defaultMessage": "Say \"hi\"" } })"#
        );
    }

    #[test]
    fn test_outermost_rewrite_wins() {
        let source = "0123456789";
        let rewrites = [
            Rewrite::ReplaceDescriptor {
                range: 4..6,
                id: "inner".to_string(),
                default_message: "x".to_string(),
            },
            Rewrite::ReplaceDescriptor {
                range: 2..8,
                id: "outer".to_string(),
                default_message: "y".to_string(),
            },
        ];
        assert_eq!(
            apply_rewrites(source, &rewrites),
            r#"01{ "id": "outer", "defaultMessage": "y" }89"#
        );
    }

    #[test]
    fn test_multiple_rewrites_applied_in_order() {
        let source = r#"<A description="x" /><B description="y" />"#;
        let rewrites = [
            Rewrite::RemoveAttribute {
                range: range_of(source, r#"description="y""#),
            },
            Rewrite::RemoveAttribute {
                range: range_of(source, r#"description="x""#),
            },
        ];
        assert_eq!(apply_rewrites(source, &rewrites), "<A /><B />");
    }

    #[test]
    fn test_no_rewrites_returns_source() {
        assert_eq!(apply_rewrites("const a = 1;", &[]), "const a = 1;");
    }
}
