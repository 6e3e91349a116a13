//! Device service — use-cases for managing devices.

use casita_domain::device::{Device, DevicePatch, NewDevice};
use casita_domain::error::{CasitaError, NotFoundError};
use casita_domain::id::DeviceId;

use crate::ports::{DeviceRepository, RoomRepository};

/// Application service for device CRUD operations.
pub struct DeviceService<D, R> {
    devices: D,
    rooms: R,
}

impl<D: DeviceRepository, R: RoomRepository> DeviceService<D, R> {
    /// Create a new service backed by the device repository and the room
    /// repository used for reference checks.
    pub fn new(devices: D, rooms: R) -> Self {
        Self { devices, rooms }
    }

    /// Create a new device after checking that the referenced room exists.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when `room_id` does not match an
    /// existing room.
    pub async fn create_device(&self, device: NewDevice) -> Result<Device, CasitaError> {
        if self.rooms.get_by_id(device.room_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Room",
                id: device.room_id.as_u64(),
            }
            .into());
        }
        let created = self.devices.create(device).await?;
        tracing::debug!(id = %created.id, room = %created.room_id, "created device");
        Ok(created)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no device with `id` exists.
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, CasitaError> {
        self.devices.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.as_u64(),
            }
            .into()
        })
    }

    /// List all devices in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates a repository failure.
    pub async fn list_devices(&self) -> Result<Vec<Device>, CasitaError> {
        self.devices.get_all().await
    }

    /// Apply a partial update to an existing device.
    ///
    /// A patched `room_id` is not checked against the room collection.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when the device does not exist.
    pub async fn update_device(
        &self,
        id: DeviceId,
        patch: DevicePatch,
    ) -> Result<Device, CasitaError> {
        let mut device = self.get_device(id).await?;
        patch.apply(&mut device);
        let updated = self.devices.update(device).await?;
        tracing::debug!(id = %updated.id, "updated device");
        Ok(updated)
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`CasitaError::NotFound`] when no device with `id` exists.
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), CasitaError> {
        if !self.devices.delete(id).await? {
            return Err(NotFoundError {
                entity: "Device",
                id: id.as_u64(),
            }
            .into());
        }
        tracing::debug!(%id, "deleted device");
        Ok(())
    }
}
