//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod houses;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use casita_app::ports::{DeviceRepository, HouseRepository, RoomRepository, UserRepository};

use crate::state::AppState;

/// Build the resource routes.
pub fn routes<UR, HR, RR, DR>() -> Router<AppState<UR, HR, RR, DR>>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/users",
            get(users::list::<UR, HR, RR, DR>).post(users::create::<UR, HR, RR, DR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<UR, HR, RR, DR>)
                .put(users::update::<UR, HR, RR, DR>)
                .delete(users::delete::<UR, HR, RR, DR>),
        )
        // Houses
        .route(
            "/houses",
            get(houses::list::<UR, HR, RR, DR>).post(houses::create::<UR, HR, RR, DR>),
        )
        .route(
            "/houses/{id}",
            get(houses::get::<UR, HR, RR, DR>)
                .put(houses::update::<UR, HR, RR, DR>)
                .delete(houses::delete::<UR, HR, RR, DR>),
        )
        // Rooms
        .route(
            "/rooms",
            get(rooms::list::<UR, HR, RR, DR>).post(rooms::create::<UR, HR, RR, DR>),
        )
        .route(
            "/rooms/{id}",
            get(rooms::get::<UR, HR, RR, DR>)
                .put(rooms::update::<UR, HR, RR, DR>)
                .delete(rooms::delete::<UR, HR, RR, DR>),
        )
        // Devices
        .route(
            "/devices",
            get(devices::list::<UR, HR, RR, DR>).post(devices::create::<UR, HR, RR, DR>),
        )
        .route(
            "/devices/{id}",
            get(devices::get::<UR, HR, RR, DR>)
                .put(devices::update::<UR, HR, RR, DR>)
                .delete(devices::delete::<UR, HR, RR, DR>),
        )
}
