use serde::{Deserialize, Serialize};

use crate::metadata::PropMetadata;

/// A free-form array prop.
///
/// Items are arbitrary JSON; any expected item shape is documented in
/// the description text rather than enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProp {
    #[serde(flatten)]
    pub metadata: PropMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<serde_json::Value>>,
}

impl ListProp {
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
    pub fn with_default(
        mut self,
        default: impl IntoIterator<Item = impl Into<serde_json::Value>>,
    ) -> Self {
        self.default = Some(default.into_iter().map(Into::into).collect());
        self
    }
}
