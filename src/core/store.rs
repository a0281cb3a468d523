use indexmap::IndexMap;

use crate::core::data::{MessageDescriptor, PartialDescriptor, SourceLocation};
use crate::core::error::{ExtractError, ExtractErrorKind};

/// Descriptors committed while extracting one compilation unit, keyed by id
/// in first-seen order.
#[derive(Debug, Default)]
pub struct CatalogStore {
    messages: IndexMap<String, MessageDescriptor>,
    enforce_descriptions: bool,
}

impl CatalogStore {
    pub fn new(enforce_descriptions: bool) -> Self {
        Self {
            messages: IndexMap::new(),
            enforce_descriptions,
        }
    }

    /// Commit a descriptor.
    ///
    /// Checks, in order: `id` and `defaultMessage` are present and
    /// non-empty; an existing entry with the same id has identical
    /// `description` and `defaultMessage`; a description is present when
    /// descriptions are enforced. Re-committing an identical descriptor keeps
    /// its original position.
    pub fn commit(
        &mut self,
        descriptor: PartialDescriptor,
        location: &SourceLocation,
    ) -> Result<(), ExtractError> {
        let fail = |kind| ExtractError::new(kind, location.clone());

        let PartialDescriptor {
            id,
            description,
            default_message,
        } = descriptor;

        let (Some(id), Some(default_message)) = (
            id.filter(|id| !id.is_empty()),
            default_message.filter(|m| !m.is_empty()),
        ) else {
            return Err(fail(ExtractErrorKind::MissingRequiredField));
        };

        if let Some(existing) = self.messages.get(&id)
            && (existing.description != description || existing.default_message != default_message)
        {
            return Err(fail(ExtractErrorKind::DuplicateIdConflict { id }));
        }

        if self.enforce_descriptions && description.as_deref().is_none_or(str::is_empty) {
            return Err(fail(ExtractErrorKind::MissingDescription { id }));
        }

        self.messages.insert(
            id.clone(),
            MessageDescriptor {
                id,
                description,
                default_message,
            },
        );
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&MessageDescriptor> {
        self.messages.get(id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consume the store, yielding descriptors in insertion order.
    pub fn into_descriptors(self) -> Vec<MessageDescriptor> {
        self.messages.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::store::*;

    fn partial(id: &str, description: Option<&str>, message: &str) -> PartialDescriptor {
        PartialDescriptor {
            id: Some(id.to_string()),
            description: description.map(String::from),
            default_message: Some(message.to_string()),
        }
    }

    fn loc() -> SourceLocation {
        SourceLocation::new("src/app.tsx", 1, 1)
    }

    #[test]
    fn test_commit_preserves_insertion_order() {
        let mut store = CatalogStore::new(false);
        store.commit(partial("b", None, "B"), &loc()).unwrap();
        store.commit(partial("a", None, "A"), &loc()).unwrap();
        store.commit(partial("b", None, "B"), &loc()).unwrap();

        let ids: Vec<_> = store.into_descriptors().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut store = CatalogStore::new(false);

        let no_id = PartialDescriptor {
            default_message: Some("Hello".to_string()),
            ..Default::default()
        };
        let err = store.commit(no_id, &loc()).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::MissingRequiredField);

        let empty_message = partial("a", None, "");
        let err = store.commit(empty_message, &loc()).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::MissingRequiredField);

        let empty_id = partial("", None, "Hello");
        assert!(store.commit(empty_id, &loc()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_with_different_content_conflicts() {
        let mut store = CatalogStore::new(false);
        store.commit(partial("a", Some("d"), "One"), &loc()).unwrap();

        let err = store
            .commit(partial("a", Some("d"), "Two"), &loc())
            .unwrap_err();
        assert_eq!(
            err.kind,
            ExtractErrorKind::DuplicateIdConflict {
                id: "a".to_string()
            }
        );

        let err = store.commit(partial("a", None, "One"), &loc()).unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::DuplicateIdConflict { .. }));

        assert_eq!(store.get("a").unwrap().default_message, "One");
    }

    #[test]
    fn test_enforce_descriptions() {
        let mut store = CatalogStore::new(true);

        let err = store.commit(partial("a", None, "A"), &loc()).unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::MissingDescription { .. }));

        let err = store.commit(partial("a", Some(""), "A"), &loc()).unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::MissingDescription { .. }));

        store.commit(partial("a", Some("desc"), "A"), &loc()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_required_fields_checked_before_description_policy() {
        let mut store = CatalogStore::new(true);
        let err = store.commit(partial("a", None, ""), &loc()).unwrap_err();
        assert_eq!(err.kind, ExtractErrorKind::MissingRequiredField);
    }
}
