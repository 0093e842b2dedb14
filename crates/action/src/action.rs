use async_trait::async_trait;
use weft_parameter::values::ParamValues;

use crate::descriptor::Descriptor;
use crate::error::ActionError;

/// A runnable integration step.
///
/// Implementors pair a static [`Descriptor`] with the run logic that
/// performs the vendor call. Actions are shared behind `Arc` and must
/// be safe to invoke concurrently.
#[async_trait]
pub trait Action: Send + Sync + 'static {
    /// Static metadata for this action.
    fn descriptor(&self) -> &Descriptor;

    /// Execute the action against the caller's input.
    ///
    /// On success, returns the vendor response exactly as received,
    /// without reshaping. Vendor rejections surface as
    /// [`ActionError::Vendor`] with the vendor's own message.
    async fn run(&self, input: ParamValues) -> Result<serde_json::Value, ActionError>;
}
