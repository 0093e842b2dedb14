use serde::{Deserialize, Serialize};

use crate::metadata::PropMetadata;

/// A whole-number input prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerProp {
    #[serde(flatten)]
    pub metadata: PropMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
}

impl IntegerProp {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: PropMetadata::new(key, label),
            default: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.metadata.optional = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }
}
