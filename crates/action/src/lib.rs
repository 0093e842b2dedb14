//! # Weft Action Contract
//!
//! The contract between integration actions and the host platform.
//!
//! An action is a small declarative unit: a static [`Descriptor`]
//! (identity, version, the prop schema the host renders as a form) and
//! a [`Action::run`] routine that forwards the supplied parameter
//! values, with light normalization, to a vendor API. Integration
//! crates implement [`Action`]; the host discovers and dispatches them
//! through an [`ActionRegistry`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use weft_action::{Action, ActionError, Descriptor};
//! use weft_parameter::prelude::*;
//!
//! struct Echo {
//!     descriptor: Descriptor,
//! }
//!
//! #[async_trait]
//! impl Action for Echo {
//!     fn descriptor(&self) -> &Descriptor {
//!         &self.descriptor
//!     }
//!
//!     async fn run(&self, input: ParamValues) -> Result<serde_json::Value, ActionError> {
//!         Ok(serde_json::to_value(&input).unwrap_or_default())
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Base action trait: descriptor access and the run routine.
pub mod action;
/// Static action descriptors and the component kind discriminant.
pub mod descriptor;
/// Error taxonomy: vendor failures carried verbatim, transport
/// failures, and the explicit not-implemented outcome.
pub mod error;
/// Shared vendor-response handling for integration clients.
pub mod http;
/// Action registry for discovery, lookup, and dispatch.
pub mod registry;
/// Secret wrapper keeping credentials out of Debug output.
pub mod secure;

pub use action::Action;
pub use descriptor::{ActionKind, Descriptor};
pub use error::{ActionError, ConfigError, VendorError};
pub use registry::ActionRegistry;
pub use secure::SecureString;
