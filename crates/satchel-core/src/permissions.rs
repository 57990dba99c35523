//! Permission constants for the Satchel backend.
//!
//! Centralized permission string constants used when building principals and
//! policy resolvers. Using these constants instead of string literals keeps
//! the vocabulary consistent across the codebase.
//!
//! Names follow the `<class>:<action>` convention that [`PermissionPolicy`]
//! resolves against, so the class segment must match the resource class name
//! a resolver is registered under.
//!
//! [`PermissionPolicy`]: ../satchel_authz/struct.PermissionPolicy.html

// =============================================================================
// Schools permissions
// =============================================================================

/// Permission to create schools
pub const SCHOOLS_CREATE: &str = "schools:create";
/// Permission to view a school
pub const SCHOOLS_VIEW: &str = "schools:view";
/// Permission to view any school regardless of ownership
pub const SCHOOLS_VIEW_ANY: &str = "schools:view_any";
/// Permission to update schools
pub const SCHOOLS_UPDATE: &str = "schools:update";
/// Permission to delete schools
pub const SCHOOLS_DELETE: &str = "schools:delete";

// =============================================================================
// Addresses permissions
// =============================================================================

/// Permission to create addresses
pub const ADDRESSES_CREATE: &str = "addresses:create";
/// Permission to view an address
pub const ADDRESSES_VIEW: &str = "addresses:view";
/// Permission to update addresses
pub const ADDRESSES_UPDATE: &str = "addresses:update";
/// Permission to delete addresses
pub const ADDRESSES_DELETE: &str = "addresses:delete";

// =============================================================================
// Contacts permissions
// =============================================================================

/// Permission to create contacts
pub const CONTACTS_CREATE: &str = "contacts:create";
/// Permission to view a contact
pub const CONTACTS_VIEW: &str = "contacts:view";
/// Permission to update contacts
pub const CONTACTS_UPDATE: &str = "contacts:update";
/// Permission to delete contacts
pub const CONTACTS_DELETE: &str = "contacts:delete";

// =============================================================================
// Officials permissions
// =============================================================================

/// Permission to create school officials
pub const OFFICIALS_CREATE: &str = "officials:create";
/// Permission to view a school official
pub const OFFICIALS_VIEW: &str = "officials:view";
/// Permission to update school officials
pub const OFFICIALS_UPDATE: &str = "officials:update";
/// Permission to delete school officials
pub const OFFICIALS_DELETE: &str = "officials:delete";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to create users
pub const USERS_CREATE: &str = "users:create";
/// Permission to view a user
pub const USERS_VIEW: &str = "users:view";
/// Permission to update users
pub const USERS_UPDATE: &str = "users:update";
/// Permission to delete users
pub const USERS_DELETE: &str = "users:delete";

// =============================================================================
// Roles permissions
// =============================================================================

/// Permission to create roles
pub const ROLES_CREATE: &str = "roles:create";
/// Permission to view a role
pub const ROLES_VIEW: &str = "roles:view";
/// Permission to update roles
pub const ROLES_UPDATE: &str = "roles:update";
/// Permission to delete roles
pub const ROLES_DELETE: &str = "roles:delete";
/// Permission to assign roles to users
pub const ROLES_ASSIGN: &str = "roles:assign";

// =============================================================================
// Categories permissions
// =============================================================================

/// Permission to create categories
pub const CATEGORIES_CREATE: &str = "categories:create";
/// Permission to view a category
pub const CATEGORIES_VIEW: &str = "categories:view";
/// Permission to update categories
pub const CATEGORIES_UPDATE: &str = "categories:update";
/// Permission to delete categories
pub const CATEGORIES_DELETE: &str = "categories:delete";
/// Permission to delete categories in bulk
pub const CATEGORIES_BULK_DELETE: &str = "categories:bulk_delete";

// =============================================================================
// Sales permissions
// =============================================================================

/// Permission to record sales receipts
pub const SALES_CREATE: &str = "sales:create";
/// Permission to view a sales receipt
pub const SALES_VIEW: &str = "sales:view";
/// Permission to view any sales receipt regardless of ownership
pub const SALES_VIEW_ANY: &str = "sales:view_any";
/// Permission to update sales receipts
pub const SALES_UPDATE: &str = "sales:update";
/// Permission to delete sales receipts
pub const SALES_DELETE: &str = "sales:delete";
/// Permission to delete sales receipts in bulk
pub const SALES_BULK_DELETE: &str = "sales:bulk_delete";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view dashboard reports
pub const REPORTS_VIEW: &str = "reports:view";
/// Permission to export reports
pub const REPORTS_EXPORT: &str = "reports:export";
