use satchel::cli::check_access;
use satchel_core::{AccessError, permissions};

#[test]
fn check_access_allows_held_permission() {
    let held = vec![permissions::SCHOOLS_DELETE.to_string()];

    assert!(check_access(&held, "schools", "delete").is_ok());
}

#[test]
fn check_access_denies_missing_permission() {
    let held = vec![permissions::SCHOOLS_VIEW.to_string()];

    let result = check_access(&held, "schools", "delete");
    assert!(matches!(result, Err(AccessError::Forbidden(_))));
}

#[test]
fn check_access_is_class_scoped() {
    let held = vec![permissions::SCHOOLS_DELETE.to_string()];

    let result = check_access(&held, "sales", "delete");
    assert!(matches!(result, Err(AccessError::Forbidden(_))));
}
