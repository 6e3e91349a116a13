//! # casita-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): `UserRepository`, `HouseRepository`, `RoomRepository`,
//!   `DeviceRepository` — CRUD over the four collections
//! - Define **driving/inbound ports** as use-case structs:
//!   `UserService`, `HouseService`, `RoomService`, `DeviceService`
//! - Enforce cross-collection rules: a room must reference an existing
//!   house at creation time, a device an existing room
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `casita-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
