//! User — an account holder, independent of the house hierarchy.

use serde::{Deserialize, Serialize};

use crate::error::{CasitaError, ValidationError};
use crate::id::UserId;
use crate::validate;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Field set for a user that has not been stored yet; the store assigns the
/// id on creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Validation`] when the email does not look like
    /// an address or the password is shorter than the minimum length.
    pub fn validate(&self) -> Result<(), CasitaError> {
        if !validate::valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validate::valid_password(&self.password) {
            return Err(ValidationError::PasswordTooShort.into());
        }
        Ok(())
    }

    /// Attach a store-assigned id, producing a full [`User`].
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Partial update for a [`User`]; only present fields change.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Check the fields that carry format rules, when present.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Validation`] when a present email or password
    /// fails the same checks applied at creation.
    pub fn validate(&self) -> Result<(), CasitaError> {
        if let Some(email) = &self.email
            && !validate::valid_email(email)
        {
            return Err(ValidationError::InvalidEmail.into());
        }
        if let Some(password) = &self.password
            && !validate::valid_password(password)
        {
            return Err(ValidationError::PasswordTooShort.into());
        }
        Ok(())
    }

    /// Apply the present fields to `user`, leaving the rest untouched.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_user() -> NewUser {
        NewUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn should_validate_when_all_fields_well_formed() {
        assert!(valid_new_user().validate().is_ok());
    }

    #[test]
    fn should_reject_malformed_email() {
        let mut user = valid_new_user();
        user.email = "invalid-email".to_string();
        assert!(matches!(
            user.validate(),
            Err(CasitaError::Validation(ValidationError::InvalidEmail))
        ));
    }

    #[test]
    fn should_reject_short_password() {
        let mut user = valid_new_user();
        user.password = "123".to_string();
        assert!(matches!(
            user.validate(),
            Err(CasitaError::Validation(ValidationError::PasswordTooShort))
        ));
    }

    #[test]
    fn should_attach_id_when_converting_to_user() {
        let user = valid_new_user().into_user(UserId::from_raw(1));
        assert_eq!(user.id, UserId::from_raw(1));
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn should_serialize_with_plain_field_names() {
        let user = valid_new_user().into_user(UserId::from_raw(1));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "John Doe",
                "email": "john@example.com",
                "password": "password123",
            })
        );
    }

    #[test]
    fn should_apply_only_present_patch_fields() {
        let mut user = valid_new_user().into_user(UserId::from_raw(1));
        let patch = UserPatch {
            name: Some("John Updated".to_string()),
            ..UserPatch::default()
        };
        patch.apply(&mut user);

        assert_eq!(user.name, "John Updated");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.password, "password123");
    }

    #[test]
    fn should_reject_patch_with_malformed_email() {
        let patch = UserPatch {
            email: Some("nope".to_string()),
            ..UserPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(CasitaError::Validation(ValidationError::InvalidEmail))
        ));
    }

    #[test]
    fn should_accept_empty_patch() {
        assert!(UserPatch::default().validate().is_ok());
    }
}
