//! House — the top of the ownership hierarchy; houses contain rooms.

use serde::{Deserialize, Serialize};

use crate::id::HouseId;

/// A registered house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub name: String,
    pub address: String,
}

/// Field set for a house that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewHouse {
    pub name: String,
    pub address: String,
}

impl NewHouse {
    /// Attach a store-assigned id, producing a full [`House`].
    #[must_use]
    pub fn into_house(self, id: HouseId) -> House {
        House {
            id,
            name: self.name,
            address: self.address,
        }
    }
}

/// Partial update for a [`House`]; only present fields change.
#[derive(Debug, Clone, Default)]
pub struct HousePatch {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl HousePatch {
    /// Apply the present fields to `house`, leaving the rest untouched.
    pub fn apply(self, house: &mut House) {
        if let Some(name) = self.name {
            house.name = name;
        }
        if let Some(address) = self.address {
            house.address = address;
        }
    }
}
