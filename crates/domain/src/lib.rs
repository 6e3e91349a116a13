//! # casita-domain
//!
//! Pure domain model for the casita home-registry service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (account holders, independent of the hierarchy)
//! - Define **Houses**, **Rooms**, and **Devices** (houses contain rooms,
//!   rooms contain devices)
//! - Field validation: email shape, password length
//! - Draft (`New*`) and patch (`*Patch`) types for creation and partial
//!   update of each entity
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod validate;

pub mod device;
pub mod house;
pub mod room;
pub mod user;
