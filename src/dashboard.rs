//! Permission-checked entry point for the dashboard summary.
//!
//! The reporter itself performs no authorization; this glue runs the basic
//! view-permission check through the gateway first and unifies the two error
//! surfaces for callers.

use std::fmt;

use satchel_authz::{Gateway, Principal};
use satchel_core::{AccessError, permissions};
use satchel_reports::{DirectoryError, SchoolDirectory, SchoolSummary, compute_summary};

#[derive(Debug)]
pub enum DashboardError {
    /// The principal may not view reports.
    Access(AccessError),
    /// The data store failed while computing the summary.
    Store(DirectoryError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access(err) => write!(f, "{}", err),
            Self::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Access(err) => Some(err),
            Self::Store(_) => None,
        }
    }
}

impl From<AccessError> for DashboardError {
    fn from(err: AccessError) -> Self {
        Self::Access(err)
    }
}

impl From<DirectoryError> for DashboardError {
    fn from(err: DirectoryError) -> Self {
        Self::Store(err)
    }
}

/// Compute the school dashboard for `principal`.
///
/// Requires the `reports:view` permission; beyond that the reporter runs
/// unrestricted over the collection.
pub async fn school_dashboard(
    gateway: &Gateway,
    principal: &Principal,
    directory: &dyn SchoolDirectory,
) -> Result<SchoolSummary, DashboardError> {
    gateway.require_permission(principal, permissions::REPORTS_VIEW)?;

    Ok(compute_summary(directory).await?)
}
