//! Storage port — repository traits backing the four collections.
//!
//! Each collection is an ordered sequence: `get_all` returns insertion
//! order, `update` keeps the entity's position, and `create` assigns the id
//! (the store owns id assignment, so creation takes a `New*` draft and
//! returns the full entity). `delete` reports whether anything was removed
//! so callers can distinguish a no-op from a successful delete.

use std::future::Future;

use casita_domain::device::{Device, NewDevice};
use casita_domain::error::CasitaError;
use casita_domain::house::{House, NewHouse};
use casita_domain::id::{DeviceId, HouseId, RoomId, UserId};
use casita_domain::room::{NewRoom, Room};
use casita_domain::user::{NewUser, User};

/// CRUD access to the user collection.
pub trait UserRepository {
    /// Append a new user, assigning its id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, CasitaError>> + Send;

    /// Look up a user by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, CasitaError>> + Send;

    /// All users, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, CasitaError>> + Send;

    /// Replace a stored user in place.
    fn update(&self, user: User) -> impl Future<Output = Result<User, CasitaError>> + Send;

    /// Remove a user, reporting whether it existed.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool, CasitaError>> + Send;
}

/// CRUD access to the house collection.
pub trait HouseRepository {
    /// Append a new house, assigning its id.
    fn create(&self, house: NewHouse) -> impl Future<Output = Result<House, CasitaError>> + Send;

    /// Look up a house by id.
    fn get_by_id(
        &self,
        id: HouseId,
    ) -> impl Future<Output = Result<Option<House>, CasitaError>> + Send;

    /// All houses, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<House>, CasitaError>> + Send;

    /// Replace a stored house in place.
    fn update(&self, house: House) -> impl Future<Output = Result<House, CasitaError>> + Send;

    /// Remove a house, reporting whether it existed.
    fn delete(&self, id: HouseId) -> impl Future<Output = Result<bool, CasitaError>> + Send;
}

/// CRUD access to the room collection.
pub trait RoomRepository {
    /// Append a new room, assigning its id.
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, CasitaError>> + Send;

    /// Look up a room by id.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, CasitaError>> + Send;

    /// All rooms, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, CasitaError>> + Send;

    /// Replace a stored room in place.
    fn update(&self, room: Room) -> impl Future<Output = Result<Room, CasitaError>> + Send;

    /// Remove a room, reporting whether it existed.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<bool, CasitaError>> + Send;
}

/// CRUD access to the device collection.
pub trait DeviceRepository {
    /// Append a new device, assigning its id.
    fn create(&self, device: NewDevice)
    -> impl Future<Output = Result<Device, CasitaError>> + Send;

    /// Look up a device by id.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, CasitaError>> + Send;

    /// All devices, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, CasitaError>> + Send;

    /// Replace a stored device in place.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, CasitaError>> + Send;

    /// Remove a device, reporting whether it existed.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<bool, CasitaError>> + Send;
}
