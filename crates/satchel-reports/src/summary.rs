use chrono::{Duration, Utc};
use tracing::debug;

use crate::directory::{
    DirectoryError, RECENT_PREVIEW_LIMIT, RECENT_WINDOW_DAYS, SchoolDirectory,
};
use crate::report::SchoolSummary;

/// Compute the dashboard snapshot over the full accessible collection.
///
/// Issues the six directory queries concurrently (none feeds into another)
/// and assembles the results into one immutable [`SchoolSummary`] before
/// returning. Every call recomputes from current state; there is no cache.
pub async fn compute_summary(
    directory: &dyn SchoolDirectory,
) -> Result<SchoolSummary, DirectoryError> {
    let cutoff = Utc::now() - Duration::days(RECENT_WINDOW_DAYS);

    debug!(cutoff = %cutoff, "Computing school summary");

    let (totals, mut recent, by_school_type, by_board, with_contacts, with_addresses) = tokio::try_join!(
        directory.status_totals(),
        directory.recent_previews(cutoff, RECENT_PREVIEW_LIMIT),
        directory.counts_by_school_type(),
        directory.counts_by_board(),
        directory.count_with_contacts(),
        directory.count_with_addresses(),
    )?;

    recent.truncate(RECENT_PREVIEW_LIMIT as usize);

    let completeness_pct = completeness_pct(with_contacts, with_addresses, totals.total);

    debug!(
        total = totals.total,
        active = totals.active,
        inactive = totals.inactive,
        recent = recent.len(),
        completeness_pct,
        "School summary computed"
    );

    Ok(SchoolSummary {
        total: totals.total,
        active: totals.active,
        inactive: totals.inactive,
        recent,
        by_school_type,
        by_board,
        with_contacts,
        with_addresses,
        completeness_pct,
    })
}

/// Share of the two completeness checks that pass, as a rounded percentage.
/// Zero for an empty collection.
fn completeness_pct(with_contacts: i64, with_addresses: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }

    let passed = (with_contacts + with_addresses) as f64;
    (100.0 * passed / (2.0 * total as f64)).round() as i64
}
