use crate::core::data::{DescriptorProp, PartialDescriptor};
use crate::core::error::{ExtractError, ExtractErrorKind};
use crate::core::evaluate::{resolve_key, resolve_value};
use crate::core::host::DescriptorNode;
use crate::core::icu::MessageFormat;

/// A `(key, value)` pair taken from an object property or JSX attribute.
pub type DescriptorPair<'n> = (&'n dyn DescriptorNode, &'n dyn DescriptorNode);

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Pairs come from JSX attributes, which enables the escaping hint for
    /// unbraced string literals.
    pub is_jsx_source: bool,
}

/// Fold `(key, value)` pairs into a partial descriptor, left to right.
///
/// Unrecognized keys are skipped before their value is looked at. Values are
/// trimmed; `defaultMessage` is validated and replaced by its canonical
/// form. A later pair for the same key overwrites an earlier one.
pub fn build_descriptor<'n>(
    pairs: impl IntoIterator<Item = DescriptorPair<'n>>,
    options: BuildOptions,
    format: &dyn MessageFormat,
) -> Result<PartialDescriptor, ExtractError> {
    let mut descriptor = PartialDescriptor::default();

    for (key_node, value_node) in pairs {
        let key = resolve_key(key_node)?;
        let Some(prop) = DescriptorProp::from_key(&key) else {
            continue;
        };

        let value = resolve_value(value_node)?.trim().to_string();

        let value = if prop == DescriptorProp::DefaultMessage {
            format.canonicalize(&value).map_err(|err| {
                let kind = if options.is_jsx_source
                    && value_node.is_unbraced_string_literal()
                    && value.contains('\\')
                {
                    ExtractErrorKind::EscapingHint
                } else {
                    ExtractErrorKind::MessageSyntax(err)
                };
                ExtractError::new(kind, value_node.location())
            })?
        } else {
            value
        };

        descriptor.set(prop, value);
    }

    Ok(descriptor)
}
