//! House service — use-cases for managing houses.

use casita_domain::error::{CasitaError, NotFoundError};
use casita_domain::house::{House, HousePatch, NewHouse};
use casita_domain::id::HouseId;

use crate::ports::HouseRepository;

/// Application service for house CRUD operations.
pub struct HouseService<R> {
    repo: R,
}

impl<R: HouseRepository> HouseService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new house.
    ///
    /// # Errors
    ///
    /// Propagates a repository failure.
    pub async fn create_house(&self, house: NewHouse) -> Result<House, CasitaError> {
        let created = self.repo.create(house).await?;
        tracing::debug!(id = %created.id, "created house");
        Ok(created)
    }

    /// Look up a house by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no house with `id` exists.
    pub async fn get_house(&self, id: HouseId) -> Result<House, CasitaError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "House",
                id: id.as_u64(),
            }
            .into()
        })
    }

    /// List all houses in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates a repository failure.
    pub async fn list_houses(&self) -> Result<Vec<House>, CasitaError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing house.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the house does not exist.
    pub async fn update_house(&self, id: HouseId, patch: HousePatch) -> Result<House, CasitaError> {
        let mut house = self.get_house(id).await?;
        patch.apply(&mut house);
        let updated = self.repo.update(house).await?;
        tracing::debug!(id = %updated.id, "updated house");
        Ok(updated)
    }

    /// Delete a house by id.
    ///
    /// Rooms referencing the house are left in place; dangling references
    /// are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no house with `id` exists.
    pub async fn delete_house(&self, id: HouseId) -> Result<(), CasitaError> {
        if !self.repo.delete(id).await? {
            return Err(NotFoundError {
                entity: "House",
                id: id.as_u64(),
            }
            .into());
        }
        tracing::debug!(%id, "deleted house");
        Ok(())
    }
}
