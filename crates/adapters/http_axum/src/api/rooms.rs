//! JSON REST handlers for rooms.
//!
//! Creation answers 404 `House not found` when the referenced house does
//! not exist; the reference is not re-checked on update.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use casita_app::ports::{DeviceRepository, HouseRepository, RoomRepository, UserRepository};
use casita_domain::id::{HouseId, RoomId};
use casita_domain::room::{NewRoom, Room, RoomPatch};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a room.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(rename = "houseId")]
    pub house_id: HouseId,
}

/// Request body for updating a room; absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    #[serde(rename = "houseId")]
    pub house_id: Option<HouseId>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<RoomId, ApiError> {
    RoomId::from_str(raw).map_err(|_| ApiError::RouteNotFound)
}

/// `GET /rooms`
pub async fn list<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let rooms = state.room_service.list_rooms().await?;
    Ok(ListResponse::Ok(Json(rooms)))
}

/// `GET /rooms/{id}`
pub async fn get<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let room = state.room_service.get_room(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /rooms`
pub async fn create<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    ApiJson(req): ApiJson<CreateRoomRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let room = NewRoom {
        name: req.name,
        house_id: req.house_id,
    };
    let created = state.room_service.create_room(room).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /rooms/{id}`
pub async fn update<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateRoomRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let patch = RoomPatch {
        name: req.name,
        house_id: req.house_id,
    };
    let updated = state.room_service.update_room(parse_id(&id)?, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /rooms/{id}`
pub async fn delete<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    state.room_service.delete_room(parse_id(&id)?).await?;
    Ok(DeleteResponse::NoContent)
}
