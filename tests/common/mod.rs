use chrono::{Duration, Utc};
use uuid::Uuid;

use satchel_reports::{AddressPreview, ContactPreview, SchoolPreview, SchoolStatus};

/// Build a school preview fixture created `age_days` ago.
#[allow(clippy::too_many_arguments)]
pub fn fixture_school(
    name: &str,
    status: SchoolStatus,
    school_type: &str,
    board: Option<&str>,
    age_days: i64,
    contacts: usize,
    addresses: usize,
) -> SchoolPreview {
    SchoolPreview {
        id: Uuid::new_v4(),
        name: name.to_string(),
        status,
        school_type: school_type.to_string(),
        board: board.map(str::to_string),
        created_at: Utc::now() - Duration::days(age_days),
        contacts: (0..contacts)
            .map(|i| ContactPreview {
                id: Uuid::new_v4(),
                name: format!("Contact {}", i),
                phone: Some("555-0100".to_string()),
                email: None,
            })
            .collect(),
        addresses: (0..addresses)
            .map(|_| AddressPreview {
                id: Uuid::new_v4(),
                line1: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                region: None,
            })
            .collect(),
    }
}
