//! Typed identifier newtypes backed by sequential integers.
//!
//! Ids are assigned by the store as `collection length + 1`, so they are
//! small integers on the wire and an id can be reused after a deletion.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub fn from_raw(value: u64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Unique identifier for a [`House`](crate::house::House).
    HouseId
);

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = UserId::from_raw(42);
        let text = id.to_string();
        let parsed: UserId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = HouseId::from_raw(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_deserialize_from_bare_integer() {
        let id: RoomId = serde_json::from_str("3").unwrap();
        assert_eq!(id, RoomId::from_raw(3));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        let result = DeviceId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_expose_inner_value() {
        let id = UserId::from_raw(1);
        assert_eq!(id.as_u64(), 1);
    }
}
