//! Access-control error taxonomy.
//!
//! Every authorization failure is surfaced to the caller as a typed value;
//! nothing in this workspace recovers from one internally. Callers (HTTP
//! handlers, the CLI, schedulers) translate the kind into their own response
//! format.
//!
//! One aliasing rule is deliberate and must stay: an ownership mismatch whose
//! fallback policy check also fails surfaces as [`AccessError::NotFound`],
//! never `Forbidden`. A caller that is not allowed to see a resource must not
//! be able to learn that it exists.

use std::fmt;

/// Failure kinds surfaced by the authorization gateway.
#[derive(Debug)]
pub enum AccessError {
    /// No usable principal: missing, or the account is disabled.
    Unauthenticated(String),

    /// The policy resolver declined the action.
    Forbidden(String),

    /// Ownership mismatch with a failed fallback check, indistinguishable
    /// from a truly absent resource.
    NotFound(String),

    /// A bulk request failed size validation before any policy was consulted.
    Limit(LimitError),
}

impl AccessError {
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated(msg) => write!(f, "{}", msg),
            Self::Forbidden(msg) => write!(f, "{}", msg),
            Self::NotFound(msg) => write!(f, "{}", msg),
            Self::Limit(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Limit(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LimitError> for AccessError {
    fn from(err: LimitError) -> Self {
        Self::Limit(err)
    }
}

/// Size-validation failures for bulk operations.
///
/// The upper bound caps worst-case per-request authorization work and
/// everything downstream of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitError {
    /// The bulk request carried no items.
    Empty,

    /// The bulk request exceeded the configured maximum.
    TooMany { count: usize, max: usize },
}

impl fmt::Display for LimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Bulk request contains no items"),
            Self::TooMany { count, max } => {
                write!(f, "Bulk request contains {} items, maximum is {}", count, max)
            }
        }
    }
}

impl std::error::Error for LimitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_error_messages() {
        assert_eq!(LimitError::Empty.to_string(), "Bulk request contains no items");
        assert_eq!(
            LimitError::TooMany { count: 101, max: 100 }.to_string(),
            "Bulk request contains 101 items, maximum is 100"
        );
    }

    #[test]
    fn test_access_error_from_limit() {
        let err = AccessError::from(LimitError::Empty);
        assert!(matches!(err, AccessError::Limit(LimitError::Empty)));
    }

    #[test]
    fn test_access_error_display_carries_message() {
        let err = AccessError::not_found("School not found");
        assert_eq!(err.to_string(), "School not found");
    }
}
