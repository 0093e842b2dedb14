//! Zoom integration for Weft.
//!
//! Wraps the Zoom REST API behind [`ZoomClient`] and publishes the
//! `zoom-update-webinar` action. The action currently declares its full
//! form but refuses to run; see [`actions::UpdateWebinar`].

#![forbid(unsafe_code)]

pub mod actions;
pub mod app;
pub mod client;

use std::sync::Arc;

use weft_action::ActionRegistry;

pub use actions::UpdateWebinar;
pub use app::{SLUG, ZoomApp, ZoomConfig};
pub use client::{DEFAULT_BASE_URL, ZoomClient};

/// Register every Zoom action against a shared app.
pub fn register_actions(registry: &mut ActionRegistry, app: &Arc<ZoomApp>) {
    registry.register(Arc::new(UpdateWebinar::new(Arc::clone(app))));
}
