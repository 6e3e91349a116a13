//! In-memory implementation of [`RoomRepository`].

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casita_app::ports::RoomRepository;
use casita_domain::error::CasitaError;
use casita_domain::id::RoomId;
use casita_domain::room::{NewRoom, Room};

/// In-memory room repository.
///
/// Ids are assigned as `collection length + 1`, so an id is reused after a
/// deletion.
#[derive(Debug, Default, Clone)]
pub struct MemoryRoomRepository {
    rooms: Arc<Mutex<Vec<Room>>>,
}

impl MemoryRoomRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Room>> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoomRepository for MemoryRoomRepository {
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, CasitaError>> + Send {
        let mut rooms = self.lock();
        let room = room.into_room(RoomId::from_raw(rooms.len() as u64 + 1));
        rooms.push(room.clone());
        async { Ok(room) }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, CasitaError>> + Send {
        let rooms = self.lock();
        let result = rooms.iter().find(|room| room.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, CasitaError>> + Send {
        let rooms = self.lock();
        let result = rooms.clone();
        async { Ok(result) }
    }

    fn update(&self, room: Room) -> impl Future<Output = Result<Room, CasitaError>> + Send {
        let mut rooms = self.lock();
        if let Some(slot) = rooms.iter_mut().find(|stored| stored.id == room.id) {
            *slot = room.clone();
        }
        async { Ok(room) }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<bool, CasitaError>> + Send {
        let mut rooms = self.lock();
        let before = rooms.len();
        rooms.retain(|room| room.id != id);
        let removed = rooms.len() < before;
        async move { Ok(removed) }
    }
}
