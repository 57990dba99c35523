//! # Satchel Reports
//!
//! Read-only dashboard aggregation over the school collection.
//!
//! The reporter computes a fixed set of metrics fresh on every call; there
//! is no caching and no persisted report state, so a report is always
//! consistent as of the moment it was requested. The minimal query surface it
//! needs (filtered counts, grouped counts, has-related existence filters, a
//! bounded ordered fetch with eager sub-collections) is the
//! [`SchoolDirectory`] trait; [`PgSchoolDirectory`] is the PostgreSQL
//! implementation and [`InMemoryDirectory`] backs tests.

pub mod directory;
pub mod memory;
pub mod pg;
pub mod report;
pub mod summary;

// Re-export the public surface at crate root
pub use directory::{
    DirectoryError, DirectoryFuture, RECENT_PREVIEW_LIMIT, RECENT_WINDOW_DAYS, SchoolDirectory,
};
pub use memory::InMemoryDirectory;
pub use pg::PgSchoolDirectory;
pub use report::{
    AddressPreview, ContactPreview, SchoolPreview, SchoolStatus, SchoolSummary, StatusTotals,
};
pub use summary::compute_summary;
