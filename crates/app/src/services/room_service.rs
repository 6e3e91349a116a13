//! Room service — use-cases for managing rooms.
//!
//! Room creation checks the referenced house against the house collection;
//! the check is not repeated on update, and deleting a house later leaves
//! its rooms dangling. Both behaviors are deliberate.

use casita_domain::error::{CasitaError, NotFoundError};
use casita_domain::id::RoomId;
use casita_domain::room::{NewRoom, Room, RoomPatch};

use crate::ports::{HouseRepository, RoomRepository};

/// Application service for room CRUD operations.
pub struct RoomService<R, H> {
    rooms: R,
    houses: H,
}

impl<R: RoomRepository, H: HouseRepository> RoomService<R, H> {
    /// Create a new service backed by the room repository and the house
    /// repository used for reference checks.
    pub fn new(rooms: R, houses: H) -> Self {
        Self { rooms, houses }
    }

    /// Create a new room after checking that the referenced house exists.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when `house_id` does not match an
    /// existing house.
    pub async fn create_room(&self, room: NewRoom) -> Result<Room, CasitaError> {
        if self.houses.get_by_id(room.house_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "House",
                id: room.house_id.as_u64(),
            }
            .into());
        }
        let created = self.rooms.create(room).await?;
        tracing::debug!(id = %created.id, house = %created.house_id, "created room");
        Ok(created)
    }

    /// Look up a room by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no room with `id` exists.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, CasitaError> {
        self.rooms.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.as_u64(),
            }
            .into()
        })
    }

    /// List all rooms in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates a repository failure.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, CasitaError> {
        self.rooms.get_all().await
    }

    /// Apply a partial update to an existing room.
    ///
    /// A patched `house_id` is not checked against the house collection.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the room does not exist.
    pub async fn update_room(&self, id: RoomId, patch: RoomPatch) -> Result<Room, CasitaError> {
        let mut room = self.get_room(id).await?;
        patch.apply(&mut room);
        let updated = self.rooms.update(room).await?;
        tracing::debug!(id = %updated.id, "updated room");
        Ok(updated)
    }

    /// Delete a room by id.
    ///
    /// Devices referencing the room are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no room with `id` exists.
    pub async fn delete_room(&self, id: RoomId) -> Result<(), CasitaError> {
        if !self.rooms.delete(id).await? {
            return Err(NotFoundError {
                entity: "Room",
                id: id.as_u64(),
            }
            .into());
        }
        tracing::debug!(%id, "deleted room");
        Ok(())
    }
}
