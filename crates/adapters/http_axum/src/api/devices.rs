//! JSON REST handlers for devices.
//!
//! Creation answers 404 `Room not found` when the referenced room does not
//! exist; the reference is not re-checked on update. The wire field `type`
//! maps to the domain field `kind`.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use casita_app::ports::{DeviceRepository, HouseRepository, RoomRepository, UserRepository};
use casita_domain::device::{Device, DevicePatch, NewDevice};
use casita_domain::id::{DeviceId, RoomId};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a device.
#[derive(Deserialize)]
pub struct CreateDeviceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
}

/// Request body for updating a device; absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "roomId")]
    pub room_id: Option<RoomId>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
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
    Ok(Json<Device>),
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
    Created(Json<Device>),
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

fn parse_id(raw: &str) -> Result<DeviceId, ApiError> {
    DeviceId::from_str(raw).map_err(|_| ApiError::RouteNotFound)
}

/// `GET /devices`
pub async fn list<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /devices/{id}`
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
    let device = state.device_service.get_device(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /devices`
pub async fn create<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    ApiJson(req): ApiJson<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = NewDevice {
        name: req.name,
        kind: req.kind,
        room_id: req.room_id,
    };
    let created = state.device_service.create_device(device).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /devices/{id}`
pub async fn update<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateDeviceRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let patch = DevicePatch {
        name: req.name,
        kind: req.kind,
        room_id: req.room_id,
    };
    let updated = state
        .device_service
        .update_device(parse_id(&id)?, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /devices/{id}`
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
    state.device_service.delete_device(parse_id(&id)?).await?;
    Ok(DeleteResponse::NoContent)
}
