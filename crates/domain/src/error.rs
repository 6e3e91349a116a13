//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]`; the HTTP
//! adapter maps these onto status codes and JSON `{"error": …}` bodies, so
//! the `Display` strings here are the exact messages clients see.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum CasitaError {
    /// A field failed a format or length check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An addressed or referenced entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A field-level validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Email does not match the accepted shape.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Password shorter than the minimum length.
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

/// An entity lookup or reference check came up empty.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Display name of the entity kind (`"User"`, `"House"`, …).
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_validation_messages_exactly() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn should_format_not_found_with_entity_name() {
        let err = NotFoundError {
            entity: "House",
            id: 999,
        };
        assert_eq!(err.to_string(), "House not found");
    }

    #[test]
    fn should_convert_into_top_level_error() {
        let err: CasitaError = ValidationError::InvalidEmail.into();
        assert!(matches!(
            err,
            CasitaError::Validation(ValidationError::InvalidEmail)
        ));

        let err: CasitaError = NotFoundError {
            entity: "Room",
            id: 1,
        }
        .into();
        assert_eq!(err.to_string(), "Room not found");
    }
}
