use uuid::Uuid;

/// Capability trait for entities subject to access control.
///
/// A resource declares the class name its policy resolver is registered
/// under, and optionally an owner. Ownership is an explicit interface with a
/// default implementation: resources whose ownership is a plain owner column
/// get the default `owner_id` comparison, and resources with a richer rule
/// (a sale owned through its register operator, say) override [`owned_by`].
///
/// [`owned_by`]: Resource::owned_by
pub trait Resource {
    /// Resource class name, e.g. `"schools"` or `"sales"`.
    fn class(&self) -> &'static str;

    /// The owning user, when the resource has one.
    fn owner_id(&self) -> Option<Uuid> {
        None
    }

    /// Ownership predicate used by `Gateway::validate_ownership`.
    fn owned_by(&self, principal_id: Uuid) -> bool {
        self.owner_id() == Some(principal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
            "registers"
        }

        fn owned_by(&self, principal_id: Uuid) -> bool {
            self.operator_ids.contains(&principal_id)
        }
    }

    #[test]
    fn test_default_ownership_compares_owner_id() {
        let cashier = Uuid::new_v4();
        let receipt = Receipt { cashier_id: cashier };

        assert!(receipt.owned_by(cashier));
        assert!(!receipt.owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_custom_ownership_predicate() {
        let operator = Uuid::new_v4();
        let register = SharedRegister {
            operator_ids: vec![operator, Uuid::new_v4()],
        };

        assert!(register.owned_by(operator));
        assert!(!register.owned_by(Uuid::new_v4()));
        assert_eq!(register.owner_id(), None);
    }
}
