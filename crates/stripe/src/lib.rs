//! # Weft Stripe Integration
//!
//! The Stripe app collaborator and its actions.
//!
//! [`StripeApp`] owns the shared prop catalog and the authenticated
//! [`StripeClient`]; actions reference catalog entries when declaring
//! their schemas and call the client from their run routines.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weft_action::ActionRegistry;
//! use weft_stripe::{StripeApp, StripeConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app = Arc::new(StripeApp::new(StripeConfig::new("sk_test_...")));
//! let mut registry = ActionRegistry::new();
//! weft_stripe::register_actions(&mut registry, &app)?;
//!
//! assert!(registry.contains("stripe-create-payment-intent"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::sync::Arc;

use weft_action::ActionRegistry;
use weft_parameter::error::PropError;

pub mod actions;
pub mod app;
pub mod client;
pub mod form;
pub mod props;

pub use actions::CreatePaymentIntent;
pub use app::{SLUG, StripeApp, StripeConfig};
pub use client::{DEFAULT_BASE_URL, StripeClient};

/// Register every Stripe action on a registry.
///
/// # Errors
///
/// [`PropError`] if an action references a catalog entry the app does
/// not provide.
pub fn register_actions(
    registry: &mut ActionRegistry,
    app: &Arc<StripeApp>,
) -> Result<(), PropError> {
    registry.register(Arc::new(CreatePaymentIntent::new(Arc::clone(app))?));
    Ok(())
}
