use crate::core::error::{ExtractError, ExtractErrorKind};
use crate::core::host::DescriptorNode;

/// Resolve a descriptor property key.
///
/// Bare identifiers resolve to their own name; anything else (string keys,
/// computed keys) must fold to a constant.
pub fn resolve_key(node: &dyn DescriptorNode) -> Result<String, ExtractError> {
    if let Some(name) = node.identifier_name() {
        return Ok(name);
    }
    resolve_value(node)
}

/// Resolve a descriptor property value to its string form.
pub fn resolve_value(node: &dyn DescriptorNode) -> Result<String, ExtractError> {
    node.evaluate()
        .map(|value| value.to_string())
        .ok_or_else(|| ExtractError::new(ExtractErrorKind::Unevaluatable, node.location()))
}

#[cfg(test)]
mod tests {
    use crate::core::data::SourceLocation;
    use crate::core::evaluate::*;
    use crate::core::host::ConstValue;

    struct FakeNode {
        ident: Option<&'static str>,
        value: Option<ConstValue>,
    }

    impl DescriptorNode for FakeNode {
        fn identifier_name(&self) -> Option<String> {
            self.ident.map(String::from)
        }

        fn evaluate(&self) -> Option<ConstValue> {
            self.value.clone()
        }

        fn location(&self) -> SourceLocation {
            SourceLocation::new("a.tsx", 2, 7)
        }
    }

    #[test]
    fn test_identifier_key_uses_name() {
        let node = FakeNode {
            ident: Some("defaultMessage"),
            value: None,
        };
        assert_eq!(resolve_key(&node).unwrap(), "defaultMessage");
    }

    #[test]
    fn test_string_key_is_evaluated() {
        let node = FakeNode {
            ident: None,
            value: Some(ConstValue::Str("id".to_string())),
        };
        assert_eq!(resolve_key(&node).unwrap(), "id");
    }

    #[test]
    fn test_number_value_is_coerced() {
        let node = FakeNode {
            ident: None,
            value: Some(ConstValue::Num(3.0)),
        };
        assert_eq!(resolve_value(&node).unwrap(), "3");
    }

    #[test]
    fn test_unknown_value_is_unevaluatable() {
        let node = FakeNode {
            ident: None,
            value: None,
        };
        let err = resolve_value(&node).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::Unevaluatable);
        assert_eq!(err.location, SourceLocation::new("a.tsx", 2, 7));
    }
}
