//! JSON REST handlers for houses.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use casita_app::ports::{DeviceRepository, HouseRepository, RoomRepository, UserRepository};
use casita_domain::house::{House, HousePatch, NewHouse};
use casita_domain::id::HouseId;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a house.
#[derive(Deserialize)]
pub struct CreateHouseRequest {
    pub name: String,
    pub address: String,
}

/// Request body for updating a house; absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateHouseRequest {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<House>>),
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
    Ok(Json<House>),
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
    Created(Json<House>),
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

fn parse_id(raw: &str) -> Result<HouseId, ApiError> {
    HouseId::from_str(raw).map_err(|_| ApiError::RouteNotFound)
}

/// `GET /houses`
pub async fn list<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let houses = state.house_service.list_houses().await?;
    Ok(ListResponse::Ok(Json(houses)))
}

/// `GET /houses/{id}`
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
    let house = state.house_service.get_house(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(house)))
}

/// `POST /houses`
pub async fn create<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    ApiJson(req): ApiJson<CreateHouseRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let house = NewHouse {
        name: req.name,
        address: req.address,
    };
    let created = state.house_service.create_house(house).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /houses/{id}`
pub async fn update<UR, HR, RR, DR>(
    State(state): State<AppState<UR, HR, RR, DR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateHouseRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HouseRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
{
    let patch = HousePatch {
        name: req.name,
        address: req.address,
    };
    let updated = state
        .house_service
        .update_house(parse_id(&id)?, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /houses/{id}`
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
    state.house_service.delete_house(parse_id(&id)?).await?;
    Ok(DeleteResponse::NoContent)
}
