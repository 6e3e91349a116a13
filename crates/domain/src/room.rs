//! Room — belongs to a house; rooms contain devices.
//!
//! The `house_id` reference is checked against the house collection at
//! creation time only. Deleting a house does not cascade, so a stored room
//! may point at a house that no longer exists.

use serde::{Deserialize, Serialize};

use crate::id::{HouseId, RoomId};

/// A registered room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "houseId")]
    pub house_id: HouseId,
}

/// Field set for a room that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub house_id: HouseId,
}

impl NewRoom {
    /// Attach a store-assigned id, producing a full [`Room`].
    #[must_use]
    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            house_id: self.house_id,
        }
    }
}

/// Partial update for a [`Room`]; only present fields change.
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub house_id: Option<HouseId>,
}

impl RoomPatch {
    /// Apply the present fields to `room`, leaving the rest untouched.
    pub fn apply(self, room: &mut Room) {
        if let Some(name) = self.name {
            room.name = name;
        }
        if let Some(house_id) = self.house_id {
            room.house_id = house_id;
        }
    }
}
