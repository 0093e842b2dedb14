use serde::{Deserialize, Serialize};

/// Descriptive metadata attached to every prop definition.
///
/// This is the human-facing information rendered by the host's form
/// builder: the machine key, the display label, help text. It is
/// separate from the prop's type and value semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropMetadata {
    /// Unique key identifying this prop within its schema.
    pub key: String,

    /// Human-readable display label.
    pub label: String,

    /// Longer description shown as tooltip or help text. May contain
    /// markdown links into vendor documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the user may leave this prop blank. Props are required
    /// unless marked optional.
    #[serde(default)]
    pub optional: bool,
}

impl PropMetadata {
    /// Create metadata with the required key and display label.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}
