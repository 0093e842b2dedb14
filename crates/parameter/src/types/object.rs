use serde::{Deserialize, Serialize};

use crate::metadata::PropMetadata;

/// An open key/value object prop.
///
/// Used for free-form bags like request metadata or advanced vendor
/// options. The expected shape, if any, lives in the description text;
/// values are not validated against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProp {
    #[serde(flatten)]
    pub metadata: PropMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ObjectProp {
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
    pub fn with_default(mut self, default: serde_json::Map<String, serde_json::Value>) -> Self {
        self.default = Some(default);
        self
    }
}
