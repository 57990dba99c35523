//! # Satchel
//!
//! Authorization and reporting core for the Satchel school administration
//! backend: the system that manages schools, their addresses, contacts and
//! officials, users and roles, product categories, and point-of-sale
//! receipts.
//!
//! ## Overview
//!
//! Two cooperating concerns live here, shared by every surface (HTTP
//! handlers, the CLI, schedulers):
//!
//! - **Authorization gateway** ([`satchel_authz`]): consulted before any
//!   mutation. Resolves (principal, action, resource-or-class) against
//!   per-class policy resolvers, with bulk short-circuit semantics, an
//!   ownership check with a `view_any` fallback, and request size limits.
//! - **Aggregation reporter** ([`satchel_reports`]): read-only dashboard
//!   summary over the school collection, recomputed fresh per call.
//!
//! Callers translate the typed results into their own response format; the
//! [`cli`] module and the `satchel-cli` binary are one such caller, mapping
//! error kinds to exit codes.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── satchel-core/      # Error taxonomy, permission vocabulary
//! ├── satchel-authz/     # Principal, policy resolvers, the gateway
//! ├── satchel-reports/   # Summary report, directory trait, Postgres impl
//! └── satchel-db/        # Connection pool initialization
//! src/
//! ├── dashboard.rs       # Permission-checked reporting entry point
//! ├── cli/               # CLI command implementations
//! └── logging.rs         # Console tracing setup
//! ```
//!
//! ## Security considerations
//!
//! - A class without a registered resolver denies.
//! - Bulk operations are all-or-nothing; a class-level denial never touches
//!   individual resources.
//! - An ownership mismatch whose fallback check fails reports `NotFound`,
//!   so unauthorized callers cannot probe for resource existence.

pub mod cli;
pub mod dashboard;
pub mod logging;

// Re-export workspace crates for convenience
pub use satchel_authz;
pub use satchel_core;
pub use satchel_db;
pub use satchel_reports;
