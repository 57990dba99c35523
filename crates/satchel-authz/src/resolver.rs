use std::borrow::Cow;
use std::fmt;

use crate::principal::Principal;
use crate::resource::Resource;

/// A named operation on a resource class.
///
/// Actions are opaque names resolved by a [`PolicyResolver`]; the gateway
/// attaches no meaning to them beyond deriving the bulk variant. Constants
/// cover the common verbs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action(Cow<'static, str>);

impl Action {
    pub const VIEW: Action = Action(Cow::Borrowed("view"));
    pub const VIEW_ANY: Action = Action(Cow::Borrowed("view_any"));
    pub const CREATE: Action = Action(Cow::Borrowed("create"));
    pub const UPDATE: Action = Action(Cow::Borrowed("update"));
    pub const DELETE: Action = Action(Cow::Borrowed("delete"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The class-level bulk variant of this action, e.g. `bulk_delete`.
    pub fn bulk(&self) -> Action {
        Action(Cow::Owned(format!("bulk_{}", self.0)))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External predicate deciding whether a principal may perform an action.
///
/// One resolver is registered per resource class. `resource` is present for
/// instance-level checks and absent for class-level ones (create, bulk
/// prefix, `view_any` fallback). Implementations must be side-effect free on
/// their inputs.
pub trait PolicyResolver: Send + Sync {
    fn resolve(
        &self,
        principal: &Principal,
        action: &Action,
        resource: Option<&dyn Resource>,
    ) -> bool;
}

/// Resolver backed by the principal's own permission set.
///
/// Grants an action when the principal holds `"<class>:<action>"`, using the
/// vocabulary in `satchel_core::permissions`. This is the resolver the
/// production modules register; richer policy sources implement
/// [`PolicyResolver`] themselves.
#[derive(Debug, Clone)]
pub struct PermissionPolicy {
    class: String,
}

impl PermissionPolicy {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl PolicyResolver for PermissionPolicy {
    fn resolve(
        &self,
        principal: &Principal,
        action: &Action,
        _resource: Option<&dyn Resource>,
    ) -> bool {
        principal.has_permission(&format!("{}:{}", self.class, action))
    }
}
