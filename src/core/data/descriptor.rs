use serde::Serialize;

/// The three properties a message descriptor is built from.
///
/// Any other key found on a descriptor source (`values`, `tagName`, ...) is
/// ignored during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorProp {
    Id,
    Description,
    DefaultMessage,
}

impl DescriptorProp {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" => Some(DescriptorProp::Id),
            "description" => Some(DescriptorProp::Description),
            "defaultMessage" => Some(DescriptorProp::DefaultMessage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorProp::Id => "id",
            DescriptorProp::Description => "description",
            DescriptorProp::DefaultMessage => "defaultMessage",
        }
    }
}

/// Descriptor fields as collected from source, before completeness checks.
///
/// Values are already trimmed; `default_message` is already canonical
/// message-format text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialDescriptor {
    pub id: Option<String>,
    pub description: Option<String>,
    pub default_message: Option<String>,
}

impl PartialDescriptor {
    pub fn set(&mut self, prop: DescriptorProp, value: String) {
        match prop {
            DescriptorProp::Id => self.id = Some(value),
            DescriptorProp::Description => self.description = Some(value),
            DescriptorProp::DefaultMessage => self.default_message = Some(value),
        }
    }

    /// True when a non-empty `defaultMessage` was found.
    pub fn has_default_message(&self) -> bool {
        self.default_message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// A committed message descriptor.
///
/// `id` and `default_message` are non-empty; `description` is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDescriptor {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub default_message: String,
}
