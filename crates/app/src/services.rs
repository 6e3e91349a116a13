//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters. The room and device services additionally hold their
//! parent collection's repository for the reference check at creation time.

pub mod device_service;
pub mod house_service;
pub mod room_service;
pub mod user_service;
