use serde::{Deserialize, Serialize};

use crate::catalog::{PropCatalog, PropOverrides};
use crate::def::PropDef;
use crate::error::PropError;
use crate::values::ParamValues;

/// The fixed, ordered prop schema an action descriptor carries.
///
/// Built once at action construction time from inline definitions and
/// catalog references; never mutated afterwards. Order is declaration
/// order and is stable through serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropSchema {
    props: Vec<PropDef>,
}

impl PropSchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inline prop definition (builder-style, consuming).
    #[must_use]
    pub fn with_prop(mut self, def: PropDef) -> Self {
        self.props.push(def);
        self
    }

    /// Append a prop by catalog reference, applying the overrides to a
    /// copy of the entry. Fails on an unknown catalog key.
    pub fn with_ref(
        mut self,
        catalog: &PropCatalog,
        key: &str,
        overrides: PropOverrides,
    ) -> Result<Self, PropError> {
        let def = catalog.resolve(key, &overrides)?;
        self.props.push(def);
        Ok(self)
    }

    /// Get a prop by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropDef> {
        self.props.iter().find(|p| p.key() == key)
    }

    /// Check whether a prop with the given key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.props.iter().any(|p| p.key() == key)
    }

    /// Iterate over all prop keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(PropDef::key)
    }

    /// The number of props in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the schema is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate over all prop definitions, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropDef> {
        self.props.iter()
    }

    /// Fill in declared defaults for props absent from `values`.
    ///
    /// Caller-supplied values are never overwritten; props without a
    /// declared default are left absent.
    pub fn apply_defaults(&self, values: &mut ParamValues) {
        for def in &self.props {
            if values.contains(def.key()) {
                continue;
            }
            if let Some(default) = def.default_value() {
                values.set(def.key(), default);
            }
        }
    }
}

impl<'a> IntoIterator for &'a PropSchema {
    type Item = &'a PropDef;
    type IntoIter = std::slice::Iter<'a, PropDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}

impl FromIterator<PropDef> for PropSchema {
    fn from_iter<I: IntoIterator<Item = PropDef>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}
