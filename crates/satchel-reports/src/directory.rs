//! The collection query handle the reporter runs against.
//!
//! Mirrors the storage-backend abstraction used elsewhere in the workspace:
//! an object-safe trait returning boxed `Send` futures, so the reporter can
//! hold a `&dyn SchoolDirectory` and the backend can be swapped without
//! touching the aggregation logic.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::report::{SchoolPreview, StatusTotals};

/// Trailing window, in days, for the recent-school preview.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Maximum entries in the recent-school preview.
pub const RECENT_PREVIEW_LIMIT: i64 = 5;

/// Error from the underlying data store.
///
/// The reporter does not retry or recover; store failures pass through to the
/// caller wrapped in this type.
#[derive(Debug)]
pub struct DirectoryError {
    pub error: anyhow::Error,
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<E> From<E> for DirectoryError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self { error: err.into() }
    }
}

pub type DirectoryFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, DirectoryError>> + Send + 'a>>;

/// Minimal query surface `compute_summary` needs over the school collection.
///
/// The six operations are independent read-only queries with no ordering
/// dependency between them; implementations may be hit concurrently.
pub trait SchoolDirectory: Send + Sync {
    /// Total count partitioned by status.
    fn status_totals(&self) -> DirectoryFuture<'_, StatusTotals>;

    /// Schools created at or after `cutoff`, newest first, at most `limit`,
    /// with contact and address sub-collections eagerly loaded.
    fn recent_previews(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> DirectoryFuture<'_, Vec<SchoolPreview>>;

    /// Count of schools grouped by school type.
    fn counts_by_school_type(&self) -> DirectoryFuture<'_, BTreeMap<String, i64>>;

    /// Count of schools grouped by board affiliation. Schools without a
    /// board do not appear in the mapping at all.
    fn counts_by_board(&self) -> DirectoryFuture<'_, BTreeMap<String, i64>>;

    /// Count of schools with at least one related contact record.
    fn count_with_contacts(&self) -> DirectoryFuture<'_, i64>;

    /// Count of schools with at least one related address record.
    fn count_with_addresses(&self) -> DirectoryFuture<'_, i64>;
}
