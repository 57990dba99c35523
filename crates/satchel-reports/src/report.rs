use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operational status of a school. The dashboard partitions on exactly these
/// two categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolStatus {
    Active,
    Inactive,
}

/// Counts partitioned by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

/// A contact record eagerly loaded into a school preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPreview {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// An address record eagerly loaded into a school preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPreview {
    pub id: Uuid,
    pub line1: String,
    pub city: String,
    pub region: Option<String>,
}

/// One recently created school, with its related sub-collections attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolPreview {
    pub id: Uuid,
    pub name: String,
    pub status: SchoolStatus,
    pub school_type: String,
    pub board: Option<String>,
    pub created_at: DateTime<Utc>,
    pub contacts: Vec<ContactPreview>,
    pub addresses: Vec<AddressPreview>,
}

/// The dashboard snapshot.
///
/// Assembled whole before it is returned; callers never see partial results.
/// Not persisted and carries no identity beyond the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolSummary {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    /// Schools created inside the trailing window, newest first, capped.
    pub recent: Vec<SchoolPreview>,
    pub by_school_type: BTreeMap<String, i64>,
    /// Board-affiliation breakdown; schools without a board are excluded.
    pub by_board: BTreeMap<String, i64>,
    /// Schools with at least one contact record.
    pub with_contacts: i64,
    /// Schools with at least one address record.
    pub with_addresses: i64,
    /// `round(100 * (with_contacts + with_addresses) / (2 * total))`, 0 for
    /// an empty collection.
    pub completeness_pct: i64,
}
