//! PostgreSQL-backed [`SchoolDirectory`].

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::directory::{DirectoryError, DirectoryFuture, SchoolDirectory};
use crate::report::{AddressPreview, ContactPreview, SchoolPreview, SchoolStatus, StatusTotals};

/// Production directory over the `schools`, `contacts`, and `addresses`
/// tables.
#[derive(Clone)]
pub struct PgSchoolDirectory {
    pool: PgPool,
}

impl PgSchoolDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SchoolRow {
    id: Uuid,
    name: String,
    status: String,
    school_type: String,
    board: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    school_id: Uuid,
    name: String,
    phone: Option<String>,
    email: Option<String>,
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: Uuid,
    school_id: Uuid,
    line1: String,
    city: String,
    region: Option<String>,
}

fn parse_status(raw: &str) -> Result<SchoolStatus, DirectoryError> {
    match raw {
        "active" => Ok(SchoolStatus::Active),
        "inactive" => Ok(SchoolStatus::Inactive),
        other => Err(anyhow::anyhow!("Unknown school status: {}", other).into()),
    }
}

impl SchoolDirectory for PgSchoolDirectory {
    fn status_totals(&self) -> DirectoryFuture<'_, StatusTotals> {
        let pool = &self.pool;
        Box::pin(async move {
            let (total, active) = sqlx::query_as::<_, (i64, i64)>(
                "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'active') FROM schools",
            )
            .fetch_one(pool)
            .await?;

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
        let pool = &self.pool;
        Box::pin(async move {
            // Tie-break on id: at equal timestamps it tracks insertion order
            let rows = sqlx::query_as::<_, SchoolRow>(
                "SELECT id, name, status, school_type, board, created_at
                 FROM schools WHERE created_at >= $1
                 ORDER BY created_at DESC, id LIMIT $2",
            )
            .bind(cutoff)
            .bind(limit)
            .fetch_all(pool)
            .await?;

            let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

            let contacts = sqlx::query_as::<_, ContactRow>(
                "SELECT id, school_id, name, phone, email
                 FROM contacts WHERE school_id = ANY($1) ORDER BY id",
            )
            .bind(&ids)
            .fetch_all(pool)
            .await?;

            let addresses = sqlx::query_as::<_, AddressRow>(
                "SELECT id, school_id, line1, city, region
                 FROM addresses WHERE school_id = ANY($1) ORDER BY id",
            )
            .bind(&ids)
            .fetch_all(pool)
            .await?;

            let mut contacts_by_school: HashMap<Uuid, Vec<ContactPreview>> = HashMap::new();
            for row in contacts {
                contacts_by_school
                    .entry(row.school_id)
                    .or_default()
                    .push(ContactPreview {
                        id: row.id,
                        name: row.name,
                        phone: row.phone,
                        email: row.email,
                    });
            }

            let mut addresses_by_school: HashMap<Uuid, Vec<AddressPreview>> = HashMap::new();
            for row in addresses {
                addresses_by_school
                    .entry(row.school_id)
                    .or_default()
                    .push(AddressPreview {
                        id: row.id,
                        line1: row.line1,
                        city: row.city,
                        region: row.region,
                    });
            }

            debug!(
                schools = rows.len(),
                "Loaded recent school previews with sub-collections"
            );

            rows.into_iter()
                .map(|row| {
                    Ok(SchoolPreview {
                        status: parse_status(&row.status)?,
                        contacts: contacts_by_school.remove(&row.id).unwrap_or_default(),
                        addresses: addresses_by_school.remove(&row.id).unwrap_or_default(),
                        id: row.id,
                        name: row.name,
                        school_type: row.school_type,
                        board: row.board,
                        created_at: row.created_at,
                    })
                })
                .collect()
        })
    }

    fn counts_by_school_type(&self) -> DirectoryFuture<'_, BTreeMap<String, i64>> {
        let pool = &self.pool;
        Box::pin(async move {
            let rows = sqlx::query_as::<_, (String, i64)>(
                "SELECT school_type, COUNT(*) FROM schools GROUP BY school_type",
            )
            .fetch_all(pool)
            .await?;

            Ok(rows.into_iter().collect())
        })
    }

    fn counts_by_board(&self) -> DirectoryFuture<'_, BTreeMap<String, i64>> {
        let pool = &self.pool;
        Box::pin(async move {
            let rows = sqlx::query_as::<_, (String, i64)>(
                "SELECT board, COUNT(*) FROM schools WHERE board IS NOT NULL GROUP BY board",
            )
            .fetch_all(pool)
            .await?;

            Ok(rows.into_iter().collect())
        })
    }

    fn count_with_contacts(&self) -> DirectoryFuture<'_, i64> {
        let pool = &self.pool;
        Box::pin(async move {
            let count = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM schools s
                 WHERE EXISTS (SELECT 1 FROM contacts c WHERE c.school_id = s.id)",
            )
            .fetch_one(pool)
            .await?;

            Ok(count)
        })
    }

    fn count_with_addresses(&self) -> DirectoryFuture<'_, i64> {
        let pool = &self.pool;
        Box::pin(async move {
            let count = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM schools s
                 WHERE EXISTS (SELECT 1 FROM addresses a WHERE a.school_id = s.id)",
            )
            .fetch_one(pool)
            .await?;

            Ok(count)
        })
    }
}
