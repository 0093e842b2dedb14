use serde::{Deserialize, Serialize};
use weft_parameter::schema::PropSchema;

/// Discriminant for the platform's component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// An invokable step performing one logical external operation.
    Action,
    /// An event source emitting into workflows. Not shipped by the
    /// current integration crates.
    Source,
}

/// Static metadata describing an action.
///
/// Loaded once by the host for discovery, form rendering, and
/// versioning. The descriptor is configuration, not state: it never
/// changes between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Unique key identifying this action (e.g.
    /// `"stripe-create-payment-intent"`).
    pub key: String,
    /// Human-readable display name (e.g. `"Create a Payment Intent"`).
    pub name: String,
    /// Short description of what this action does. May contain
    /// markdown links into vendor documentation.
    pub description: String,
    /// The component kind.
    pub kind: ActionKind,
    /// Action version, bumped when the schema or behavior changes.
    pub version: semver::Version,
    /// Slug of the app this action belongs to (e.g. `"stripe"`).
    pub app: String,
    /// User-facing parameter schema, rendered by the host as the
    /// action's input form.
    pub props: PropSchema,
}

impl Descriptor {
    /// Create a descriptor with the minimum required fields.
    ///
    /// Defaults: kind [`ActionKind::Action`], version `0.0.1`, no app
    /// slug, empty prop schema.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            kind: ActionKind::Action,
            version: semver::Version::new(0, 0, 1),
            app: String::new(),
            props: PropSchema::new(),
        }
    }

    /// Set the component kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ActionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the action version.
    #[must_use]
    pub fn with_version(mut self, major: u64, minor: u64, patch: u64) -> Self {
        self.version = semver::Version::new(major, minor, patch);
        self
    }

    /// Set the owning app slug.
    #[must_use]
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = app.into();
        self
    }

    /// Set the user-facing prop schema.
    #[must_use]
    pub fn with_props(mut self, props: PropSchema) -> Self {
        self.props = props;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_parameter::prelude::*;

    #[test]
    fn new_fills_defaults() {
        let d = Descriptor::new("zoom-update-webinar", "Update webinar details", "Update the details of a webinar");

        assert_eq!(d.key, "zoom-update-webinar");
        assert_eq!(d.name, "Update webinar details");
        assert_eq!(d.kind, ActionKind::Action);
        assert_eq!(d.version, semver::Version::new(0, 0, 1));
        assert!(d.app.is_empty());
        assert!(d.props.is_empty());
    }

    #[test]
    fn builder_chain() {
        let props = PropSchema::new()
            .with_prop(PropDef::Integer(IntegerProp::new("webinar_id", "WebinarId")));

        let d = Descriptor::new("zoom-update-webinar", "Update webinar details", "")
            .with_app("zoom")
            .with_version(0, 0, 2)
            .with_props(props);

        assert_eq!(d.app, "zoom");
        assert_eq!(d.version.to_string(), "0.0.2");
        assert!(d.props.contains("webinar_id"));
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActionKind::Action).unwrap();
        assert_eq!(json, "\"action\"");

        let json = serde_json::to_string(&ActionKind::Source).unwrap();
        assert_eq!(json, "\"source\"");
    }

    #[test]
    fn serde_round_trip() {
        let d = Descriptor::new("stripe-create-payment-intent", "Create a Payment Intent", "Create a payment intent")
            .with_app("stripe")
            .with_props(
                PropSchema::new()
                    .with_prop(PropDef::Integer(IntegerProp::new("amount", "Amount"))),
            );

        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"version\":\"0.0.1\""));

        let deserialized: Descriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, d);
    }
}
