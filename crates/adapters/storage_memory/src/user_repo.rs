//! In-memory implementation of [`UserRepository`].

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casita_app::ports::UserRepository;
use casita_domain::error::CasitaError;
use casita_domain::id::UserId;
use casita_domain::user::{NewUser, User};

/// In-memory user repository.
///
/// Ids are assigned as `collection length + 1`, so an id is reused after a
/// deletion. Observed ids are part of the API's contract, which is why this
/// is not a monotonic counter.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for MemoryUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, CasitaError>> + Send {
        let mut users = self.lock();
        let user = user.into_user(UserId::from_raw(users.len() as u64 + 1));
        users.push(user.clone());
        async { Ok(user) }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, CasitaError>> + Send {
        let users = self.lock();
        let result = users.iter().find(|user| user.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, CasitaError>> + Send {
        let users = self.lock();
        let result = users.clone();
        async { Ok(result) }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, CasitaError>> + Send {
        let mut users = self.lock();
        if let Some(slot) = users.iter_mut().find(|stored| stored.id == user.id) {
            *slot = user.clone();
        }
        async { Ok(user) }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool, CasitaError>> + Send {
        let mut users = self.lock();
        let before = users.len();
        users.retain(|user| user.id != id);
        let removed = users.len() < before;
        async move { Ok(removed) }
    }
}
