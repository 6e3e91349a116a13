//! Device — belongs to a room; the leaf of the ownership hierarchy.
//!
//! The wire field `type` is a Rust keyword, so the struct field is named
//! `kind` and renamed in serde.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, RoomId};

/// A registered device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
}

/// Field set for a device that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewDevice {
    pub name: String,
    pub kind: String,
    pub room_id: RoomId,
}

impl NewDevice {
    /// Attach a store-assigned id, producing a full [`Device`].
    #[must_use]
    pub fn into_device(self, id: DeviceId) -> Device {
        Device {
            id,
            name: self.name,
            kind: self.kind,
            room_id: self.room_id,
        }
    }
}

/// Partial update for a [`Device`]; only present fields change.
#[derive(Debug, Clone, Default)]
pub struct DevicePatch {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub room_id: Option<RoomId>,
}

impl DevicePatch {
    /// Apply the present fields to `device`, leaving the rest untouched.
    pub fn apply(self, device: &mut Device) {
        if let Some(name) = self.name {
            device.name = name;
        }
        if let Some(kind) = self.kind {
            device.kind = kind;
        }
        if let Some(room_id) = self.room_id {
            device.room_id = room_id;
        }
    }
}
