//! # casita-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the REST JSON API for the four collections
//!   (`/users`, `/houses`, `/rooms`, `/devices`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into HTTP responses, keeping the
//!   exact `{"error": …}` bodies callers depend on
//!
//! ## Dependency rule
//! Depends on `casita-app` (for port traits and services) and `casita-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
