//! # Satchel Core
//!
//! Core types shared across the Satchel workspace:
//!
//! - [`errors`]: the access-control and validation error taxonomy
//! - [`permissions`]: centralized permission string constants
//!
//! # Example
//!
//! ```ignore
//! use satchel_core::{AccessError, permissions};
//!
//! if !principal.has_permission(permissions::SCHOOLS_READ) {
//!     return Err(AccessError::forbidden("not allowed to read schools"));
//! }
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::{AccessError, LimitError};
