use std::collections::HashMap;
use std::sync::Arc;

use weft_parameter::values::ParamValues;

use crate::action::Action;
use crate::descriptor::Descriptor;
use crate::error::ActionError;

/// Type-erased registry for discovering and invoking actions by key.
///
/// The host populates this at startup and uses it to resolve action
/// keys from workflow definitions to concrete implementations.
///
/// Actions are stored as `Arc<dyn Action>` to allow shared ownership
/// across concurrent executions.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use weft_action::{Action, ActionError, ActionRegistry, Descriptor};
/// use weft_parameter::values::ParamValues;
///
/// struct NoOp(Descriptor);
///
/// #[async_trait]
/// impl Action for NoOp {
///     fn descriptor(&self) -> &Descriptor {
///         &self.0
///     }
///
///     async fn run(&self, _input: ParamValues) -> Result<serde_json::Value, ActionError> {
///         Ok(serde_json::Value::Null)
///     }
/// }
///
/// let mut registry = ActionRegistry::new();
/// registry.register(Arc::new(NoOp(Descriptor::new("noop", "No-Op", "Does nothing"))));
///
/// assert!(registry.get("noop").is_some());
/// assert!(registry.get("unknown").is_none());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Overwrites any existing action with the
    /// same key.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        let key = action.descriptor().key.clone();
        self.actions.insert(key, action);
    }

    /// Look up an action by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Action>> {
        self.actions.get(key)
    }

    /// Check whether an action with the given key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.actions.contains_key(key)
    }

    /// Return descriptors for all registered actions.
    #[must_use]
    pub fn list(&self) -> Vec<&Descriptor> {
        self.actions.values().map(|a| a.descriptor()).collect()
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Remove an action by key. Returns the removed action, if any.
    pub fn unregister(&mut self, key: &str) -> Option<Arc<dyn Action>> {
        self.actions.remove(key)
    }

    /// Iterate over all registered `(key, action)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Action>)> {
        self.actions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve an action by key and run it.
    ///
    /// Schema defaults are filled into `input` for any prop the caller
    /// left absent, then the action's run logic takes over.
    ///
    /// # Errors
    ///
    /// [`ActionError::UnknownAction`] when no action has this key;
    /// otherwise whatever the action's run returns.
    pub async fn invoke(
        &self,
        key: &str,
        mut input: ParamValues,
    ) -> Result<serde_json::Value, ActionError> {
        let action = self.get(key).ok_or_else(|| ActionError::UnknownAction {
            key: key.to_owned(),
        })?;

        action.descriptor().props.apply_defaults(&mut input);

        tracing::debug!(action = %key, "dispatching action");
        action.run(input).await
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("count", &self.actions.len())
            .field("keys", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
