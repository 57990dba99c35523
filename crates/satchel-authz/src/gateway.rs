use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use satchel_core::AccessError;

use crate::principal::Principal;
use crate::resolver::{Action, PolicyResolver};
use crate::resource::Resource;

/// What an authorization decision is about: a whole resource class (create,
/// list, bulk prefix checks) or one concrete instance.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Class(&'a str),
    Instance(&'a dyn Resource),
}

impl<'a> Target<'a> {
    fn class(&self) -> &str {
        match self {
            Target::Class(class) => class,
            Target::Instance(resource) => resource.class(),
        }
    }

    fn resource(&self) -> Option<&'a dyn Resource> {
        match self {
            Target::Class(_) => None,
            Target::Instance(resource) => Some(*resource),
        }
    }
}

/// The authorization gateway.
///
/// Holds one [`PolicyResolver`] per resource class, registered externally at
/// startup. The gateway adds no business rules: it invokes the class's
/// resolver and translates the outcome into the uniform error taxonomy. A
/// class without a registered resolver denies.
///
/// Decisions are pure over (principal, action, target); the gateway is safe
/// to share across concurrent requests.
#[derive(Default)]
pub struct Gateway {
    resolvers: HashMap<String, Arc<dyn PolicyResolver>>,
}

impl Gateway {
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Register the policy resolver for a resource class, replacing any
    /// previous registration.
    pub fn register(&mut self, class: impl Into<String>, resolver: Arc<dyn PolicyResolver>) {
        self.resolvers.insert(class.into(), resolver);
    }

    /// Require a usable principal, rejecting both a missing one and a
    /// disabled account as unauthenticated.
    pub fn require_principal<'a>(
        &self,
        principal: Option<&'a Principal>,
    ) -> Result<&'a Principal, AccessError> {
        let principal = principal
            .ok_or_else(|| AccessError::unauthenticated("Missing authenticated principal"))?;
        self.ensure_active(principal)?;
        Ok(principal)
    }

    /// Decide whether `principal` may perform `action` on `target`.
    pub fn authorize(
        &self,
        principal: &Principal,
        action: &Action,
        target: Target<'_>,
    ) -> Result<(), AccessError> {
        self.ensure_active(principal)?;
        self.resolve(principal, action, target)
    }

    /// Authorize a bulk operation over `resources` of one class.
    ///
    /// The class-level `bulk_<action>` check runs first; a denial fails the
    /// whole request without inspecting a single resource. When it passes,
    /// each resource is authorized in input order and the first individual
    /// denial aborts the rest. There is no partial bulk authorization.
    pub fn authorize_bulk(
        &self,
        principal: &Principal,
        action: &Action,
        class: &str,
        resources: &[&dyn Resource],
    ) -> Result<(), AccessError> {
        self.ensure_active(principal)?;
        self.resolve(principal, &action.bulk(), Target::Class(class))?;

        for resource in resources {
            self.resolve(principal, action, Target::Instance(*resource))?;
        }

        Ok(())
    }

    /// Validate that `resource` belongs to the expected owner, defaulting to
    /// the acting principal.
    ///
    /// On an ownership mismatch the class's `view_any` resolution is tried as
    /// a coarser fallback; if that also fails the result is `NotFound`, never
    /// `Forbidden`, so an unauthorized caller cannot confirm the resource
    /// exists.
    pub fn validate_ownership(
        &self,
        principal: &Principal,
        resource: &dyn Resource,
        expected_owner: Option<Uuid>,
    ) -> Result<(), AccessError> {
        self.ensure_active(principal)?;

        let expected = expected_owner.unwrap_or(principal.id);
        if resource.owned_by(expected) {
            return Ok(());
        }

        if self
            .resolve(principal, &Action::VIEW_ANY, Target::Class(resource.class()))
            .is_ok()
        {
            return Ok(());
        }

        debug!(
            principal.id = %principal.id,
            resource.class = resource.class(),
            "Ownership mismatch with failed fallback, reporting not found"
        );
        Err(AccessError::not_found("Resource not found"))
    }

    /// Require the unrestricted system scope.
    pub fn require_system_scope(&self, principal: &Principal) -> Result<(), AccessError> {
        self.ensure_active(principal)?;

        if !principal.system_scope {
            return Err(AccessError::forbidden(
                "Access denied. System scope required.",
            ));
        }

        Ok(())
    }

    /// Require a named permission on the principal itself, bypassing the
    /// resolver registry.
    pub fn require_permission(
        &self,
        principal: &Principal,
        permission: &str,
    ) -> Result<(), AccessError> {
        self.ensure_active(principal)?;

        if !principal.has_permission(permission) {
            return Err(AccessError::forbidden(format!(
                "Access denied. Missing required permission: {}",
                permission
            )));
        }

        Ok(())
    }

    fn ensure_active(&self, principal: &Principal) -> Result<(), AccessError> {
        if !principal.active {
            return Err(AccessError::unauthenticated("Account is disabled"));
        }
        Ok(())
    }

    fn resolve(
        &self,
        principal: &Principal,
        action: &Action,
        target: Target<'_>,
    ) -> Result<(), AccessError> {
        let class = target.class();

        let Some(resolver) = self.resolvers.get(class) else {
            debug!(resource.class = class, "No policy resolver registered, denying");
            return Err(AccessError::forbidden(format!(
                "Not allowed to {} {}",
                action, class
            )));
        };

        if !resolver.resolve(principal, action, target.resource()) {
            debug!(
                principal.id = %principal.id,
                action = %action,
                resource.class = class,
                "Policy resolver declined"
            );
            return Err(AccessError::forbidden(format!(
                "Not allowed to {} {}",
                action, class
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::PermissionPolicy;
    use satchel_core::permissions;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Receipt {
        cashier_id: Uuid,
    }

    impl Resource for Receipt {
        fn class(&self) -> &'static str {
            "sales"
        }

        fn owner_id(&self) -> Option<Uuid> {
            Some(self.cashier_id)
        }
    }

    struct SharedRegister {
        operator_ids: Vec<Uuid>,
    }

    impl Resource for SharedRegister {
        fn class(&self) -> &'static str {
            "sales"
        }

        fn owned_by(&self, principal_id: Uuid) -> bool {
            self.operator_ids.contains(&principal_id)
        }
    }

    /// Resolver that records which instance checks ran, in order.
    struct RecordingResolver {
        allow_bulk: bool,
        allow_view_any: bool,
        denied_owners: Vec<Uuid>,
        instance_checks: AtomicUsize,
        seen_owners: Mutex<Vec<Uuid>>,
    }

    impl RecordingResolver {
        fn new(allow_bulk: bool) -> Self {
            Self {
                allow_bulk,
                allow_view_any: false,
                denied_owners: Vec::new(),
                instance_checks: AtomicUsize::new(0),
                seen_owners: Mutex::new(Vec::new()),
            }
        }
    }

    impl PolicyResolver for RecordingResolver {
        fn resolve(
            &self,
            _principal: &Principal,
            action: &Action,
            resource: Option<&dyn Resource>,
        ) -> bool {
            match resource {
                Some(resource) => {
                    self.instance_checks.fetch_add(1, Ordering::SeqCst);
                    let owner = resource.owner_id().unwrap();
                    self.seen_owners.lock().unwrap().push(owner);
                    !self.denied_owners.contains(&owner)
                }
                None if *action == Action::VIEW_ANY => self.allow_view_any,
                None if action.as_str().starts_with("bulk_") => self.allow_bulk,
                None => true,
            }
        }
    }

    fn gateway_with(resolver: Arc<dyn PolicyResolver>) -> Gateway {
        let mut gateway = Gateway::new();
        gateway.register("sales", resolver);
        gateway
    }

    #[test]
    fn test_missing_permission_is_forbidden() {
        let mut gateway = Gateway::new();
        gateway.register("schools", Arc::new(PermissionPolicy::new("schools")));
        let principal = Principal::new(Uuid::new_v4());

        let result = gateway.authorize(&principal, &Action::DELETE, Target::Class("schools"));
        assert!(matches!(result, Err(AccessError::Forbidden(_))));
    }

    #[test]
    fn test_granted_permission_is_allowed() {
        let mut gateway = Gateway::new();
        gateway.register("schools", Arc::new(PermissionPolicy::new("schools")));
        let principal =
            Principal::with_permissions(Uuid::new_v4(), [permissions::SCHOOLS_DELETE]);

        assert!(
            gateway
                .authorize(&principal, &Action::DELETE, Target::Class("schools"))
                .is_ok()
        );
    }

    #[test]
    fn test_unregistered_class_denies() {
        let gateway = Gateway::new();
        let principal = Principal::with_permissions(Uuid::new_v4(), [permissions::SALES_DELETE]);

        let result = gateway.authorize(&principal, &Action::DELETE, Target::Class("sales"));
        assert!(matches!(result, Err(AccessError::Forbidden(_))));
    }

    #[test]
    fn test_inactive_principal_is_unauthenticated() {
        let gateway = gateway_with(Arc::new(RecordingResolver::new(true)));
        let mut principal = Principal::new(Uuid::new_v4());
        principal.active = false;

        let result = gateway.authorize(&principal, &Action::VIEW, Target::Class("sales"));
        assert!(matches!(result, Err(AccessError::Unauthenticated(_))));
    }

    #[test]
    fn test_require_principal() {
        let gateway = Gateway::new();

        assert!(matches!(
            gateway.require_principal(None),
            Err(AccessError::Unauthenticated(_))
        ));

        let principal = Principal::new(Uuid::new_v4());
        assert!(gateway.require_principal(Some(&principal)).is_ok());

        let mut disabled = Principal::new(Uuid::new_v4());
        disabled.active = false;
        assert!(matches!(
            gateway.require_principal(Some(&disabled)),
            Err(AccessError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_bulk_class_denial_skips_individual_checks() {
        let resolver = Arc::new(RecordingResolver::new(false));
        let gateway = gateway_with(resolver.clone());
        let principal = Principal::new(Uuid::new_v4());

        let receipts = [
            Receipt { cashier_id: Uuid::new_v4() },
            Receipt { cashier_id: Uuid::new_v4() },
        ];
        let resources: Vec<&dyn Resource> = receipts.iter().map(|r| r as &dyn Resource).collect();

        let result = gateway.authorize_bulk(&principal, &Action::DELETE, "sales", &resources);

        assert!(matches!(result, Err(AccessError::Forbidden(_))));
        assert_eq!(resolver.instance_checks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bulk_aborts_at_first_individual_failure() {
        let owners = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let mut resolver = RecordingResolver::new(true);
        resolver.denied_owners = vec![owners[1]];
        let resolver = Arc::new(resolver);
        let gateway = gateway_with(resolver.clone());
        let principal = Principal::new(Uuid::new_v4());

        let receipts: Vec<Receipt> = owners
            .iter()
            .map(|&cashier_id| Receipt { cashier_id })
            .collect();
        let resources: Vec<&dyn Resource> = receipts.iter().map(|r| r as &dyn Resource).collect();

        let result = gateway.authorize_bulk(&principal, &Action::DELETE, "sales", &resources);

        assert!(matches!(result, Err(AccessError::Forbidden(_))));
        // r1 ran and passed, r2 ran and failed, r3 was never consulted
        assert_eq!(*resolver.seen_owners.lock().unwrap(), vec![owners[0], owners[1]]);
        assert_eq!(resolver.instance_checks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_bulk_all_pass() {
        let resolver = Arc::new(RecordingResolver::new(true));
        let gateway = gateway_with(resolver.clone());
        let principal = Principal::new(Uuid::new_v4());

        let receipts = [
            Receipt { cashier_id: Uuid::new_v4() },
            Receipt { cashier_id: Uuid::new_v4() },
            Receipt { cashier_id: Uuid::new_v4() },
        ];
        let resources: Vec<&dyn Resource> = receipts.iter().map(|r| r as &dyn Resource).collect();

        assert!(
            gateway
                .authorize_bulk(&principal, &Action::DELETE, "sales", &resources)
                .is_ok()
        );
        assert_eq!(resolver.instance_checks.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_ownership_match_passes() {
        let gateway = gateway_with(Arc::new(RecordingResolver::new(true)));
        let principal = Principal::new(Uuid::new_v4());
        let receipt = Receipt { cashier_id: principal.id };

        assert!(gateway.validate_ownership(&principal, &receipt, None).is_ok());
    }

    #[test]
    fn test_foreign_resource_with_failing_fallback_is_not_found() {
        let gateway = gateway_with(Arc::new(RecordingResolver::new(true)));
        let principal = Principal::new(Uuid::new_v4());
        let receipt = Receipt { cashier_id: Uuid::new_v4() };

        let result = gateway.validate_ownership(&principal, &receipt, None);

        // Deliberately not Forbidden: the caller must not learn the receipt exists
        assert!(matches!(result, Err(AccessError::NotFound(_))));
    }

    #[test]
    fn test_foreign_resource_with_view_any_fallback_passes() {
        let mut resolver = RecordingResolver::new(true);
        resolver.allow_view_any = true;
        let gateway = gateway_with(Arc::new(resolver));
        let principal = Principal::new(Uuid::new_v4());
        let receipt = Receipt { cashier_id: Uuid::new_v4() };

        assert!(gateway.validate_ownership(&principal, &receipt, None).is_ok());
    }

    #[test]
    fn test_ownership_uses_custom_predicate() {
        let gateway = gateway_with(Arc::new(RecordingResolver::new(true)));
        let principal = Principal::new(Uuid::new_v4());
        let register = SharedRegister {
            operator_ids: vec![principal.id],
        };

        assert!(gateway.validate_ownership(&principal, &register, None).is_ok());
    }

    #[test]
    fn test_ownership_with_explicit_expected_owner() {
        let gateway = gateway_with(Arc::new(RecordingResolver::new(true)));
        let principal = Principal::new(Uuid::new_v4());
        let other = Uuid::new_v4();
        let receipt = Receipt { cashier_id: other };

        assert!(
            gateway
                .validate_ownership(&principal, &receipt, Some(other))
                .is_ok()
        );
    }

    #[test]
    fn test_require_system_scope() {
        let gateway = Gateway::new();
        let mut principal = Principal::new(Uuid::new_v4());

        assert!(matches!(
            gateway.require_system_scope(&principal),
            Err(AccessError::Forbidden(_))
        ));

        principal.system_scope = true;
        assert!(gateway.require_system_scope(&principal).is_ok());
    }

    #[test]
    fn test_require_permission() {
        let gateway = Gateway::new();
        let principal = Principal::with_permissions(Uuid::new_v4(), [permissions::REPORTS_VIEW]);

        assert!(
            gateway
                .require_permission(&principal, permissions::REPORTS_VIEW)
                .is_ok()
        );
        assert!(matches!(
            gateway.require_permission(&principal, permissions::REPORTS_EXPORT),
            Err(AccessError::Forbidden(_))
        ));
    }
}
