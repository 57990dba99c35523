//! # Satchel Authz
//!
//! The resource-authorization gateway: every mutation in the Satchel backend
//! consults this crate before touching storage.
//!
//! The gateway itself carries no business rules. It resolves a
//! ([`Principal`], [`Action`], resource-or-class) triple against an
//! externally registered [`PolicyResolver`] and translates the outcome into
//! the uniform error taxonomy in `satchel-core`. Decisions are pure functions
//! of their inputs: nothing here mutates the principal or the resource, and
//! the gateway can be shared across concurrent requests without locking.
//!
//! # Example
//!
//! ```ignore
//! use satchel_authz::{Action, Gateway, PermissionPolicy, Principal, Target};
//! use std::sync::Arc;
//!
//! let mut gateway = Gateway::new();
//! gateway.register("schools", Arc::new(PermissionPolicy::new("schools")));
//!
//! gateway.authorize(&principal, &Action::UPDATE, Target::Instance(&school))?;
//! ```

pub mod gateway;
pub mod limits;
pub mod principal;
pub mod resolver;
pub mod resource;

// Re-export the public surface at crate root
pub use gateway::{Gateway, Target};
pub use limits::{DEFAULT_BULK_LIMIT, validate_bulk_limits};
pub use principal::Principal;
pub use resolver::{Action, PermissionPolicy, PolicyResolver};
pub use resource::Resource;
