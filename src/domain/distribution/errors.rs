//! Error types for distribution center operations.

use thiserror::Error;

use crate::domain::foundation::SalespersonId;

/// Errors that can occur during distribution center operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CenterError {
    #[error("salesperson {id} is already registered at this distribution center")]
    DuplicateRegistration { id: SalespersonId },

    #[error("distribution center has no registered salespeople")]
    EmptyRoster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_displays_the_salesperson_id() {
        let id = SalespersonId::new();
        let err = CenterError::DuplicateRegistration { id };
        assert_eq!(
            format!("{}", err),
            format!(
                "salesperson {} is already registered at this distribution center",
                id
            )
        );
    }

    #[test]
    fn empty_roster_displays_correctly() {
        assert_eq!(
            format!("{}", CenterError::EmptyRoster),
            "distribution center has no registered salespeople"
        );
    }
}
