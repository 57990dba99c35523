use satchel_core::LimitError;

/// Default cap on items per bulk request.
pub const DEFAULT_BULK_LIMIT: usize = 100;

/// Validate the size of a bulk request before any policy work runs.
///
/// Fails with [`LimitError::Empty`] on an empty sequence and
/// [`LimitError::TooMany`] when the sequence exceeds `max_items`. The cap
/// bounds how many individual authorization checks (and how much downstream
/// work) a single request can trigger; callers with a different tolerance
/// pass their own `max_items`.
pub fn validate_bulk_limits<T>(items: &[T], max_items: usize) -> Result<(), LimitError> {
    if items.is_empty() {
        return Err(LimitError::Empty);
    }

    if items.len() > max_items {
        return Err(LimitError::TooMany {
            count: items.len(),
            max: max_items,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bulk_request_rejected() {
        let items: Vec<u32> = vec![];
        assert_eq!(
            validate_bulk_limits(&items, DEFAULT_BULK_LIMIT),
            Err(LimitError::Empty)
        );
    }

    #[test]
    fn test_oversized_bulk_request_rejected() {
        let items = vec![0u32; 101];
        assert_eq!(
            validate_bulk_limits(&items, 100),
            Err(LimitError::TooMany { count: 101, max: 100 })
        );
    }

    #[test]
    fn test_bulk_request_at_limit_accepted() {
        let items = vec![0u32; 100];
        assert_eq!(validate_bulk_limits(&items, 100), Ok(()));
    }

    #[test]
    fn test_caller_configurable_limit() {
        let items = vec![0u32; 10];
        assert_eq!(
            validate_bulk_limits(&items, 5),
            Err(LimitError::TooMany { count: 10, max: 5 })
        );
        assert_eq!(validate_bulk_limits(&items, 10), Ok(()));
    }
}
