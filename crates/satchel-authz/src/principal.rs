use std::collections::HashSet;

use uuid::Uuid;

/// The authenticated actor behind a request.
///
/// Built once per request from session/token state and treated as immutable
/// for the request's duration. The gateway never mutates a principal.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Unique user id.
    pub id: Uuid,
    /// Named permissions granted to this principal.
    pub permissions: HashSet<String>,
    /// Unrestricted across all schools/tenants when true.
    pub system_scope: bool,
    /// Disabled accounts keep their permission set but may not act.
    pub active: bool,
}

impl Principal {
    /// An active principal with no permissions and no system scope.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            permissions: HashSet::new(),
            system_scope: false,
            active: true,
        }
    }

    /// An active principal holding the given permissions.
    pub fn with_permissions<I, S>(id: Uuid, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: permissions.into_iter().map(Into::into).collect(),
            ..Self::new(id)
        }
    }

    /// Check if the principal holds a specific permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Check if the principal holds any of the specified permissions
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.has_permission(p))
    }

    /// Check if the principal holds all of the specified permissions
    pub fn has_all_permissions(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.has_permission(p))
    }
}
