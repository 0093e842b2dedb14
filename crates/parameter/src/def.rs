use serde::{Deserialize, Serialize};

use crate::error::PropError;
use crate::kind::PropKind;
use crate::metadata::PropMetadata;
use crate::option::SelectOption;
use crate::types::*;

/// A concrete prop definition, tagged by type.
///
/// Each variant wraps a specific prop type struct. The `type` field in
/// JSON determines which variant is used during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropDef {
    Text(TextProp),
    Integer(IntegerProp),
    Boolean(BooleanProp),
    Select(SelectProp),
    MultiSelect(MultiSelectProp),
    Object(ObjectProp),
    List(ListProp),
}

macro_rules! delegate_metadata {
    ($self:ident) => {
        match $self {
            Self::Text(p) => &p.metadata,
            Self::Integer(p) => &p.metadata,
            Self::Boolean(p) => &p.metadata,
            Self::Select(p) => &p.metadata,
            Self::MultiSelect(p) => &p.metadata,
            Self::Object(p) => &p.metadata,
            Self::List(p) => &p.metadata,
        }
    };
}

macro_rules! delegate_metadata_mut {
    ($self:ident) => {
        match $self {
            Self::Text(p) => &mut p.metadata,
            Self::Integer(p) => &mut p.metadata,
            Self::Boolean(p) => &mut p.metadata,
            Self::Select(p) => &mut p.metadata,
            Self::MultiSelect(p) => &mut p.metadata,
            Self::Object(p) => &mut p.metadata,
            Self::List(p) => &mut p.metadata,
        }
    };
}

impl PropDef {
    /// The unique key identifying this prop.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.metadata().key
    }

    /// The human-readable display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.metadata().label
    }

    /// The prop kind (determines form widget and value semantics).
    #[must_use]
    pub fn kind(&self) -> PropKind {
        match self {
            Self::Text(_) => PropKind::Text,
            Self::Integer(_) => PropKind::Integer,
            Self::Boolean(_) => PropKind::Boolean,
            Self::Select(_) => PropKind::Select,
            Self::MultiSelect(_) => PropKind::MultiSelect,
            Self::Object(_) => PropKind::Object,
            Self::List(_) => PropKind::List,
        }
    }

    /// Access the full metadata for this prop.
    #[must_use]
    pub fn metadata(&self) -> &PropMetadata {
        delegate_metadata!(self)
    }

    /// Mutable access to the metadata, for override application.
    pub fn metadata_mut(&mut self) -> &mut PropMetadata {
        delegate_metadata_mut!(self)
    }

    /// Whether the user may leave this prop blank.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.metadata().optional
    }

    /// The declared default, converted to a JSON value.
    #[must_use]
    pub fn default_value(&self) -> Option<serde_json::Value> {
        match self {
            Self::Text(p) => p.default.clone().map(serde_json::Value::String),
            Self::Integer(p) => p.default.map(serde_json::Value::from),
            Self::Boolean(p) => p.default.map(serde_json::Value::Bool),
            Self::Select(p) => p.default.clone(),
            Self::MultiSelect(p) => p.default.clone().map(serde_json::Value::Array),
            Self::Object(p) => p.default.clone().map(serde_json::Value::Object),
            Self::List(p) => p.default.clone().map(serde_json::Value::Array),
        }
    }

    /// Replace the declared default with a JSON value, coercing into
    /// the kind's typed representation. Fails when the value does not
    /// fit the kind.
    pub fn set_default(&mut self, value: serde_json::Value) -> Result<(), PropError> {
        use serde_json::Value;

        let invalid = |key: &str, expected: &str, value: &Value| PropError::InvalidType {
            key: key.to_owned(),
            expected_type: expected.to_owned(),
            actual_details: value_kind(value).to_owned(),
        };

        match self {
            Self::Text(p) => match value {
                Value::String(s) => {
                    p.default = Some(s);
                    Ok(())
                }
                other => Err(invalid(&p.metadata.key, "string", &other)),
            },
            Self::Integer(p) => match value.as_i64() {
                Some(n) => {
                    p.default = Some(n);
                    Ok(())
                }
                None => Err(invalid(&p.metadata.key, "integer", &value)),
            },
            Self::Boolean(p) => match value {
                Value::Bool(b) => {
                    p.default = Some(b);
                    Ok(())
                }
                other => Err(invalid(&p.metadata.key, "boolean", &other)),
            },
            Self::Select(p) => {
                p.default = Some(value);
                Ok(())
            }
            Self::MultiSelect(p) => match value {
                Value::Array(items) => {
                    p.default = Some(items);
                    Ok(())
                }
                other => Err(invalid(&p.metadata.key, "array", &other)),
            },
            Self::Object(p) => match value {
                Value::Object(map) => {
                    p.default = Some(map);
                    Ok(())
                }
                other => Err(invalid(&p.metadata.key, "object", &other)),
            },
            Self::List(p) => match value {
                Value::Array(items) => {
                    p.default = Some(items);
                    Ok(())
                }
                other => Err(invalid(&p.metadata.key, "array", &other)),
            },
        }
    }

    /// The finite choice set, for selection-based kinds.
    #[must_use]
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Select(p) => Some(&p.options),
            Self::MultiSelect(p) => Some(&p.options),
            _ => None,
        }
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_and_label_delegation() {
        let def = PropDef::Text(TextProp::new("topic", "Topic"));
        assert_eq!(def.key(), "topic");
        assert_eq!(def.label(), "Topic");
    }

    #[test]
    fn kind_matches_variant() {
        let cases: Vec<(PropDef, PropKind)> = vec![
            (PropDef::Text(TextProp::new("a", "A")), PropKind::Text),
            (
                PropDef::Integer(IntegerProp::new("a", "A")),
                PropKind::Integer,
            ),
            (
                PropDef::Boolean(BooleanProp::new("a", "A")),
                PropKind::Boolean,
            ),
            (PropDef::Select(SelectProp::new("a", "A")), PropKind::Select),
            (
                PropDef::MultiSelect(MultiSelectProp::new("a", "A")),
                PropKind::MultiSelect,
            ),
            (PropDef::Object(ObjectProp::new("a", "A")), PropKind::Object),
            (PropDef::List(ListProp::new("a", "A")), PropKind::List),
        ];

        for (def, expected_kind) in &cases {
            assert_eq!(
                def.kind(),
                *expected_kind,
                "kind mismatch for {:?}",
                def.key()
            );
        }
    }

    #[test]
    fn is_optional_delegation() {
        let def = PropDef::Text(TextProp::new("topic", "Topic").optional());
        assert!(def.is_optional());

        let def2 = PropDef::Integer(IntegerProp::new("amount", "Amount"));
        assert!(!def2.is_optional());
    }

    #[test]
    fn metadata_mut_updates_in_place() {
        let mut def = PropDef::Text(TextProp::new("topic", "Topic"));
        def.metadata_mut().optional = true;
        def.metadata_mut().description = Some("Webinar topic.".into());

        assert!(def.is_optional());
        assert_eq!(
            def.metadata().description.as_deref(),
            Some("Webinar topic.")
        );
    }

    #[test]
    fn default_value_converts_per_kind() {
        let text = PropDef::Text(TextProp::new("tz", "Tz").with_default("UTC"));
        assert_eq!(text.default_value(), Some(json!("UTC")));

        let integer = PropDef::Integer(IntegerProp::new("n", "N").with_default(7));
        assert_eq!(integer.default_value(), Some(json!(7)));

        let multi =
            PropDef::MultiSelect(MultiSelectProp::new("types", "Types").with_default(["card"]));
        assert_eq!(multi.default_value(), Some(json!(["card"])));

        let none = PropDef::Text(TextProp::new("tz", "Tz"));
        assert_eq!(none.default_value(), None);
    }

    #[test]
    fn set_default_accepts_matching_type() {
        let mut def = PropDef::MultiSelect(MultiSelectProp::new("types", "Types"));
        def.set_default(json!(["card"])).unwrap();
        assert_eq!(def.default_value(), Some(json!(["card"])));
    }

    #[test]
    fn set_default_rejects_mismatched_type() {
        let mut def = PropDef::Integer(IntegerProp::new("amount", "Amount"));
        let err = def.set_default(json!("not a number")).unwrap_err();

        match err {
            PropError::InvalidType { key, expected_type, actual_details } => {
                assert_eq!(key, "amount");
                assert_eq!(expected_type, "integer");
                assert_eq!(actual_details, "string");
            }
            other => panic!("expected InvalidType, got {other:?}"),
        }
    }

    #[test]
    fn options_for_selection_kinds_only() {
        let select = PropDef::Select(
            SelectProp::new("type", "Type").with_option(SelectOption::new("5 - Webinar", 5)),
        );
        assert_eq!(select.options().unwrap().len(), 1);

        let text = PropDef::Text(TextProp::new("topic", "Topic"));
        assert!(text.options().is_none());
    }

    #[test]
    fn serde_round_trip_text() {
        let def = PropDef::Text(TextProp::new("topic", "Topic"));
        let json_str = serde_json::to_string(&def).unwrap();
        assert!(json_str.contains("\"type\":\"text\""));

        let deserialized: PropDef = serde_json::from_str(&json_str).unwrap();
        assert_eq!(deserialized.key(), "topic");
        assert_eq!(deserialized.kind(), PropKind::Text);
    }

    #[test]
    fn serde_deserialize_from_json_object() {
        let json = json!({
            "type": "select",
            "key": "currency",
            "label": "Currency",
            "options": [
                {"label": "US Dollar", "value": "usd"},
                {"label": "Euro", "value": "eur"}
            ]
        });

        let def: PropDef = serde_json::from_value(json).unwrap();
        assert_eq!(def.key(), "currency");
        assert_eq!(def.kind(), PropKind::Select);
        assert_eq!(def.options().unwrap().len(), 2);
    }
}
