use serde::{Deserialize, Serialize};

/// The kind of a prop, determining its form widget and value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    Text,
    Integer,
    Boolean,
    Select,
    MultiSelect,
    Object,
    List,
}

impl PropKind {
    /// String identifier for serialization/logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Object => "object",
            Self::List => "list",
        }
    }

    /// The JSON value type this prop expects.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Select => "any",
            Self::MultiSelect | Self::List => "array",
            Self::Object => "object",
        }
    }

    /// Whether this kind presents a finite set of choices.
    #[must_use]
    pub fn is_selection_based(&self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}
