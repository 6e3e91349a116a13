//! Shared application state for axum handlers.

use std::sync::Arc;

use casita_app::ports::{DeviceRepository, HouseRepository, RoomRepository, UserRepository};
use casita_app::services::device_service::DeviceService;
use casita_app::services::house_service::HouseService;
use casita_app::services::room_service::RoomService;
use casita_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned. The room and device
/// services carry their parent collection's repository type for the
/// reference check at creation time.
pub struct AppState<UR, HR, RR, DR> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// House CRUD service.
    pub house_service: Arc<HouseService<HR>>,
    /// Room CRUD service.
    pub room_service: Arc<RoomService<RR, HR>>,
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<DR, RR>>,
}

impl<UR, HR, RR, DR> Clone for AppState<UR, HR, RR, DR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            house_service: Arc::clone(&self.house_service),
            room_service: Arc::clone(&self.room_service),
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<UR, HR, RR, DR> AppState<UR, HR, RR, DR>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        house_service: HouseService<HR>,
        room_service: RoomService<RR, HR>,
        device_service: DeviceService<DR, RR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            house_service: Arc::new(house_service),
            room_service: Arc::new(room_service),
            device_service: Arc::new(device_service),
        }
    }
}
