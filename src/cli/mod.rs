use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use satchel_authz::{Action, Gateway, PermissionPolicy, Principal, Target};
use satchel_core::AccessError;
use satchel_reports::{DirectoryError, PgSchoolDirectory, compute_summary};

/// Compute the school summary against the live database and print it as
/// JSON.
pub async fn print_summary(db: &PgPool) -> Result<(), DirectoryError> {
    let directory = PgSchoolDirectory::new(db.clone());
    let summary = compute_summary(&directory).await?;

    info!(
        total = summary.total,
        completeness_pct = summary.completeness_pct,
        "Summary computed"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Evaluate one authorization decision for an ad-hoc principal holding the
/// given permissions.
///
/// Builds a gateway with the permission-set resolver for `class`, the same
/// resolver the production modules register, so the decision matches what a
/// request carrying these permissions would get.
pub fn check_access(held: &[String], class: &str, action: &str) -> Result<(), AccessError> {
    let principal = Principal::with_permissions(Uuid::new_v4(), held.iter().cloned());

    let mut gateway = Gateway::new();
    gateway.register(class, Arc::new(PermissionPolicy::new(class)));

    gateway.authorize(
        &principal,
        &Action::new(action.to_string()),
        Target::Class(class),
    )
}
