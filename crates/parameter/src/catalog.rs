use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::def::PropDef;
use crate::error::PropError;

/// Reusable prop definitions owned by an app, keyed by prop key.
///
/// Actions compose their schemas by referencing catalog entries and
/// overriding presentation fields at the point of use. Resolution
/// copies the entry; the shared original is never mutated, so many
/// actions can reference one canonical definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropCatalog {
    #[serde(flatten)]
    entries: IndexMap<String, PropDef>,
}

impl PropCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, keyed by the definition's own key. Replaces any
    /// existing entry with the same key.
    pub fn insert(&mut self, def: PropDef) -> &mut Self {
        self.entries.insert(def.key().to_owned(), def);
        self
    }

    /// Add an entry (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, def: PropDef) -> Self {
        self.insert(def);
        self
    }

    /// Get an entry by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropDef> {
        self.entries.get(key)
    }

    /// Check whether an entry with the given key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all entry keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PropDef> {
        self.entries.values()
    }

    /// Resolve an entry into a standalone definition, applying the
    /// given overrides to a copy. The catalog entry is unchanged.
    pub fn resolve(&self, key: &str, overrides: &PropOverrides) -> Result<PropDef, PropError> {
        let def = self
            .entries
            .get(key)
            .ok_or_else(|| PropError::NotFound { key: key.to_owned() })?;
        overrides.apply(def.clone())
    }
}

impl FromIterator<PropDef> for PropCatalog {
    fn from_iter<I: IntoIterator<Item = PropDef>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for def in iter {
            catalog.insert(def);
        }
        catalog
    }
}

/// Presentation overrides applied when referencing a catalog entry.
///
/// Every field is optional; unset fields leave the referenced
/// definition as declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropOverrides {
    pub label: Option<String>,
    pub description: Option<String>,
    pub optional: Option<bool>,
    pub default: Option<serde_json::Value>,
}

impl PropOverrides {
    /// Create an empty override set (reference as declared).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the referenced prop as required at this point of use.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.optional = Some(false);
        self
    }

    /// Mark the referenced prop as optional at this point of use.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = Some(true);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn apply(&self, mut def: PropDef) -> Result<PropDef, PropError> {
        let meta = def.metadata_mut();
        if let Some(label) = &self.label {
            meta.label = label.clone();
        }
        if let Some(description) = &self.description {
            meta.description = Some(description.clone());
        }
        if let Some(optional) = self.optional {
            meta.optional = optional;
        }
        if let Some(default) = &self.default {
            def.set_default(default.clone())?;
        }
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use serde_json::json;

    fn sample_catalog() -> PropCatalog {
        PropCatalog::new()
            .with(PropDef::Integer(
                IntegerProp::new("amount", "Amount").optional(),
            ))
            .with(PropDef::Select(
                SelectProp::new("currency", "Currency").optional(),
            ))
            .with(PropDef::Object(
                ObjectProp::new("advanced", "Advanced Options")
                    .with_description("Specify less-common options that you require.")
                    .optional(),
            ))
    }

    #[test]
    fn insert_and_get() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("amount"));
        assert_eq!(catalog.get("currency").unwrap().key(), "currency");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn insert_replaces_same_key() {
        let mut catalog = sample_catalog();
        catalog.insert(PropDef::Text(TextProp::new("amount", "Amount (text)")));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("amount").unwrap().label(), "Amount (text)");
    }

    #[test]
    fn keys_preserve_insertion_order() {
        let catalog = sample_catalog();
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["amount", "currency", "advanced"]);
    }

    #[test]
    fn resolve_unknown_key_fails() {
        let catalog = sample_catalog();
        let err = catalog
            .resolve("webinar_id", &PropOverrides::new())
            .unwrap_err();
        assert_eq!(err, PropError::NotFound { key: "webinar_id".into() });
    }

    #[test]
    fn resolve_without_overrides_copies_entry() {
        let catalog = sample_catalog();
        let def = catalog.resolve("amount", &PropOverrides::new()).unwrap();
        assert_eq!(def.key(), "amount");
        assert!(def.is_optional());
    }

    #[test]
    fn resolve_applies_overrides_to_copy_only() {
        let catalog = sample_catalog();

        let required = catalog
            .resolve("amount", &PropOverrides::new().required())
            .unwrap();
        assert!(!required.is_optional());

        // The shared original is untouched.
        assert!(catalog.get("amount").unwrap().is_optional());
    }

    #[test]
    fn repeated_resolution_yields_independent_definitions() {
        let catalog = sample_catalog();

        let a = catalog
            .resolve("advanced", &PropOverrides::new().with_description("For payment intents"))
            .unwrap();
        let b = catalog
            .resolve("advanced", &PropOverrides::new().with_description("For refunds"))
            .unwrap();

        assert_eq!(
            a.metadata().description.as_deref(),
            Some("For payment intents")
        );
        assert_eq!(b.metadata().description.as_deref(), Some("For refunds"));
        assert_eq!(
            catalog.get("advanced").unwrap().metadata().description.as_deref(),
            Some("Specify less-common options that you require.")
        );
    }

    #[test]
    fn resolve_applies_default_override() {
        let catalog = PropCatalog::new().with(PropDef::MultiSelect(
            MultiSelectProp::new("payment_method_types", "Payment Method Types").optional(),
        ));

        let def = catalog
            .resolve(
                "payment_method_types",
                &PropOverrides::new().with_default(json!(["card"])),
            )
            .unwrap();

        assert_eq!(def.default_value(), Some(json!(["card"])));
        assert_eq!(catalog.get("payment_method_types").unwrap().default_value(), None);
    }

    #[test]
    fn resolve_rejects_default_of_wrong_type() {
        let catalog = sample_catalog();
        let err = catalog
            .resolve("amount", &PropOverrides::new().with_default("five hundred"))
            .unwrap_err();

        assert!(matches!(err, PropError::InvalidType { .. }));
    }

    #[test]
    fn label_override() {
        let catalog = sample_catalog();
        let def = catalog
            .resolve("currency", &PropOverrides::new().with_label("Settlement Currency"))
            .unwrap();
        assert_eq!(def.label(), "Settlement Currency");
    }

    #[test]
    fn from_iterator() {
        let catalog: PropCatalog = vec![
            PropDef::Text(TextProp::new("a", "A")),
            PropDef::Text(TextProp::new("b", "B")),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn serde_round_trip() {
        let catalog = sample_catalog();
        let json_str = serde_json::to_string(&catalog).unwrap();
        let deserialized: PropCatalog = serde_json::from_str(&json_str).unwrap();

        assert_eq!(deserialized.len(), 3);
        let keys: Vec<&str> = deserialized.keys().collect();
        assert_eq!(keys, vec!["amount", "currency", "advanced"]);
    }
}
