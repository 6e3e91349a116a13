//! In-memory implementation of [`DeviceRepository`].

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casita_app::ports::DeviceRepository;
use casita_domain::device::{Device, NewDevice};
use casita_domain::error::CasitaError;
use casita_domain::id::DeviceId;

/// In-memory device repository.
///
/// Ids are assigned as `collection length + 1`, so an id is reused after a
/// deletion.
#[derive(Debug, Default, Clone)]
pub struct MemoryDeviceRepository {
    devices: Arc<Mutex<Vec<Device>>>,
}

impl MemoryDeviceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Device>> {
        self.devices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceRepository for MemoryDeviceRepository {
    fn create(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<Device, CasitaError>> + Send {
        let mut devices = self.lock();
        let device = device.into_device(DeviceId::from_raw(devices.len() as u64 + 1));
        devices.push(device.clone());
        async { Ok(device) }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, CasitaError>> + Send {
        let devices = self.lock();
        let result = devices.iter().find(|device| device.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, CasitaError>> + Send {
        let devices = self.lock();
        let result = devices.clone();
        async { Ok(result) }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, CasitaError>> + Send {
        let mut devices = self.lock();
        if let Some(slot) = devices.iter_mut().find(|stored| stored.id == device.id) {
            *slot = device.clone();
        }
        async { Ok(device) }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<bool, CasitaError>> + Send {
        let mut devices = self.lock();
        let before = devices.len();
        devices.retain(|device| device.id != id);
        let removed = devices.len() < before;
        async move { Ok(removed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casita_domain::id::RoomId;

    fn test_device(name: &str) -> NewDevice {
        NewDevice {
            name: name.to_string(),
            kind: "light".to_string(),
            room_id: RoomId::from_raw(1),
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_from_one() {
        let repo = MemoryDeviceRepository::new();

        let first = repo.create(test_device("Smart Light")).await.unwrap();
        let second = repo.create(test_device("Thermostat")).await.unwrap();

        assert_eq!(first.id, DeviceId::from_raw(1));
        assert_eq!(second.id, DeviceId::from_raw(2));
    }

    #[tokio::test]
    async fn should_keep_kind_and_room_reference_through_roundtrip() {
        let repo = MemoryDeviceRepository::new();
        let created = repo.create(test_device("Smart Light")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.kind, "light");
        assert_eq!(fetched.room_id, RoomId::from_raw(1));
    }

    #[tokio::test]
    async fn should_return_none_when_device_not_found() {
        let repo = MemoryDeviceRepository::new();
        let result = repo.get_by_id(DeviceId::from_raw(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_update_device_in_place() {
        let repo = MemoryDeviceRepository::new();
        let mut first = repo.create(test_device("Smart Light")).await.unwrap();
        repo.create(test_device("Thermostat")).await.unwrap();

        first.kind = "LED".to_string();
        repo.update(first).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].kind, "LED");
    }

    #[tokio::test]
    async fn should_delete_device_and_report_result() {
        let repo = MemoryDeviceRepository::new();
        let created = repo.create(test_device("Smart Light")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
