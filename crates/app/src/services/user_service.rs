//! User service — use-cases for managing users.

use casita_domain::error::{CasitaError, NotFoundError};
use casita_domain::id::UserId;
use casita_domain::user::{NewUser, User, UserPatch};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user after validating field formats.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::Validation`] when the email or password fails
    /// its check, or propagates a repository failure.
    pub async fn create_user(&self, user: NewUser) -> Result<User, CasitaError> {
        user.validate()?;
        let created = self.repo.create(user).await?;
        tracing::debug!(id = %created.id, "created user");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no user with `id` exists.
    pub async fn get_user(&self, id: UserId) -> Result<User, CasitaError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.as_u64(),
            }
            .into()
        })
    }

    /// List all users in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates a repository failure.
    pub async fn list_users(&self) -> Result<Vec<User>, CasitaError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing user.
    ///
    /// Only fields present in the patch change; email and password are
    /// re-validated with the same rules as creation.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the user does not exist, or
    /// [`CasitaError::Validation`] when a patched field fails its check.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, CasitaError> {
        let mut user = self.get_user(id).await?;
        patch.validate()?;
        patch.apply(&mut user);
        let updated = self.repo.update(user).await?;
        tracing::debug!(id = %updated.id, "updated user");
        Ok(updated)
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no user with `id` exists.
    pub async fn delete_user(&self, id: UserId) -> Result<(), CasitaError> {
        if !self.repo.delete(id).await? {
            return Err(NotFoundError {
                entity: "User",
                id: id.as_u64(),
            }
            .into());
        }
        tracing::debug!(%id, "deleted user");
        Ok(())
    }
}
