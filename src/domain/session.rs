use super::errors::OrderError;

/// Order commits and status transitions both require this capability level.
pub const MUTATE_ORDERS_LEVEL: i32 = 2;

/// Resolved capability context for the acting employee.
///
/// The gate is consulted before a commit or transition is invoked; the
/// store-level operations themselves never re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub employee_id: i32,
    pub level: i32,
}

impl Session {
    pub fn has_level(&self, required: i32) -> bool {
        self.level >= required
    }

    pub fn require_level(&self, required: i32) -> Result<(), OrderError> {
        if self.has_level(required) {
            Ok(())
        } else {
            Err(OrderError::PermissionDenied {
                required,
                actual: self.level,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_level_is_inclusive() {
        let session = Session { employee_id: 1, level: 2 };
        assert!(session.has_level(1));
        assert!(session.has_level(2));
        assert!(!session.has_level(3));
    }

    #[test]
    fn require_level_reports_both_levels() {
        let session = Session { employee_id: 1, level: 1 };
        let err = session.require_level(MUTATE_ORDERS_LEVEL).unwrap_err();
        assert!(matches!(
            err,
            OrderError::PermissionDenied { required: 2, actual: 1 }
        ));
    }
}
