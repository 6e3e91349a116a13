//! In-memory implementation of [`HouseRepository`].

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casita_app::ports::HouseRepository;
use casita_domain::error::CasitaError;
use casita_domain::house::{House, NewHouse};
use casita_domain::id::HouseId;

/// In-memory house repository.
///
/// Ids are assigned as `collection length + 1`, so an id is reused after a
/// deletion.
#[derive(Debug, Default, Clone)]
pub struct MemoryHouseRepository {
    houses: Arc<Mutex<Vec<House>>>,
}

impl MemoryHouseRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<House>> {
        self.houses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HouseRepository for MemoryHouseRepository {
    fn create(&self, house: NewHouse) -> impl Future<Output = Result<House, CasitaError>> + Send {
        let mut houses = self.lock();
        let house = house.into_house(HouseId::from_raw(houses.len() as u64 + 1));
        houses.push(house.clone());
        async { Ok(house) }
    }

    fn get_by_id(
        &self,
        id: HouseId,
    ) -> impl Future<Output = Result<Option<House>, CasitaError>> + Send {
        let houses = self.lock();
        let result = houses.iter().find(|house| house.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<House>, CasitaError>> + Send {
        let houses = self.lock();
        let result = houses.clone();
        async { Ok(result) }
    }

    fn update(&self, house: House) -> impl Future<Output = Result<House, CasitaError>> + Send {
        let mut houses = self.lock();
        if let Some(slot) = houses.iter_mut().find(|stored| stored.id == house.id) {
            *slot = house.clone();
        }
        async { Ok(house) }
    }

    fn delete(&self, id: HouseId) -> impl Future<Output = Result<bool, CasitaError>> + Send {
        let mut houses = self.lock();
        let before = houses.len();
        houses.retain(|house| house.id != id);
        let removed = houses.len() < before;
        async move { Ok(removed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_house(name: &str) -> NewHouse {
        NewHouse {
            name: name.to_string(),
            address: "123 Main St".to_string(),
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_from_one() {
        let repo = MemoryHouseRepository::new();

        let first = repo.create(test_house("My House")).await.unwrap();
        let second = repo.create(test_house("Beach House")).await.unwrap();

        assert_eq!(first.id, HouseId::from_raw(1));
        assert_eq!(second.id, HouseId::from_raw(2));
    }

    #[tokio::test]
    async fn should_retrieve_created_house() {
        let repo = MemoryHouseRepository::new();
        let created = repo.create(test_house("My House")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.address, "123 Main St");
    }

    #[tokio::test]
    async fn should_return_none_when_house_not_found() {
        let repo = MemoryHouseRepository::new();
        let result = repo.get_by_id(HouseId::from_raw(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_update_house_in_place() {
        let repo = MemoryHouseRepository::new();
        let mut first = repo.create(test_house("My House")).await.unwrap();
        repo.create(test_house("Beach House")).await.unwrap();

        first.name = "Updated House".to_string();
        repo.update(first).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].name, "Updated House");
        assert_eq!(all[1].name, "Beach House");
    }

    #[tokio::test]
    async fn should_delete_house_and_report_result() {
        let repo = MemoryHouseRepository::new();
        let created = repo.create(test_house("My House")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
