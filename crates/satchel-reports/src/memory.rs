//! In-memory [`SchoolDirectory`] over a fixed set of schools.
//!
//! Backs unit tests and local experiments; the production implementation is
//! [`PgSchoolDirectory`](crate::pg::PgSchoolDirectory).

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::directory::{DirectoryFuture, SchoolDirectory};
use crate::report::{SchoolPreview, SchoolStatus, StatusTotals};

pub struct InMemoryDirectory {
    schools: Vec<SchoolPreview>,
}

impl InMemoryDirectory {
    pub fn new(schools: Vec<SchoolPreview>) -> Self {
        Self { schools }
    }
}

impl SchoolDirectory for InMemoryDirectory {
    fn status_totals(&self) -> DirectoryFuture<'_, StatusTotals> {
        let total = self.schools.len() as i64;
        let active = self
            .schools
            .iter()
            .filter(|s| s.status == SchoolStatus::Active)
            .count() as i64;
        Box::pin(async move {
            Ok(StatusTotals {
                total,
                active,
                inactive: total - active,
            })
        })
    }

    fn recent_previews(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> DirectoryFuture<'_, Vec<SchoolPreview>> {
        let mut recent: Vec<SchoolPreview> = self
            .schools
            .iter()
            .filter(|s| s.created_at >= cutoff)
            .cloned()
            .collect();
        // Stable sort: equal timestamps keep insertion order
        recent.sort_by_key(|s| Reverse(s.created_at));
        recent.truncate(limit as usize);
        Box::pin(async move { Ok(recent) })
    }

    fn counts_by_school_type(&self) -> DirectoryFuture<'_, BTreeMap<String, i64>> {
        let mut counts = BTreeMap::new();
        for school in &self.schools {
            *counts.entry(school.school_type.clone()).or_insert(0) += 1;
        }
        Box::pin(async move { Ok(counts) })
    }

    fn counts_by_board(&self) -> DirectoryFuture<'_, BTreeMap<String, i64>> {
        let mut counts = BTreeMap::new();
        for school in &self.schools {
            if let Some(board) = &school.board {
                *counts.entry(board.clone()).or_insert(0) += 1;
            }
        }
        Box::pin(async move { Ok(counts) })
    }

    fn count_with_contacts(&self) -> DirectoryFuture<'_, i64> {
        let count = self
            .schools
            .iter()
            .filter(|s| !s.contacts.is_empty())
            .count() as i64;
        Box::pin(async move { Ok(count) })
    }

    fn count_with_addresses(&self) -> DirectoryFuture<'_, i64> {
        let count = self
            .schools
            .iter()
            .filter(|s| !s.addresses.is_empty())
            .count() as i64;
        Box::pin(async move { Ok(count) })
    }
}
