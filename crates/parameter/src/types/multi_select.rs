use serde::{Deserialize, Serialize};

use crate::metadata::PropMetadata;
use crate::option::SelectOption;

/// A multiple-choice prop producing an array of selected values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSelectProp {
    #[serde(flatten)]
    pub metadata: PropMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<serde_json::Value>>,

    /// The available choices. Empty when the vendor accepts free-form
    /// entries and the form falls back to plain text input.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl MultiSelectProp {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: PropMetadata::new(key, label),
            default: None,
            options: Vec::new(),
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

    #[must_use]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }
}
