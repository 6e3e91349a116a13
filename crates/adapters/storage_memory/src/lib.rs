//! # casita-adapter-storage-memory
//!
//! In-memory implementation of the storage ports.
//!
//! ## Responsibilities
//! - Hold the four collections (users, houses, rooms, devices) as ordered
//!   sequences with process lifetime — state resets to empty on restart
//! - Assign ids as `collection length + 1` at creation time
//! - Preserve insertion order for listing and an entity's position on update
//!
//! Each repository is a cheap handle: clones share the same underlying
//! collection, so one instance can serve both its own service and another
//! service's reference checks. Every operation takes the collection's mutex
//! for its full duration and never holds it across an await.

mod device_repo;
mod house_repo;
mod room_repo;
mod user_repo;

pub use device_repo::MemoryDeviceRepository;
pub use house_repo::MemoryHouseRepository;
pub use room_repo::MemoryRoomRepository;
pub use user_repo::MemoryUserRepository;
