//! Handlers for the `/vehicles` resource.
//!
//! The registry is managed entirely through this surface; the ingestion
//! path only reads it. Plates are normalized before storage so registry
//! entries and detections always compare equal on canonical form.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plategate_core::error::CoreError;
use plategate_core::plate::validate_plate;
use plategate_core::types::DbId;
use plategate_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery};
use plategate_db::repositories::VehicleRepo;
use plategate_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/vehicles
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    input.plate_number = validate_plate(Some(input.plate_number.as_str())).map_err(AppError::Core)?;

    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::new("vehicles").with_entity(vehicle.id));

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/v1/vehicles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VehicleQuery>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = VehicleRepo::list(&state.pool, &params).await?;
    Ok(Json(vehicles))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// PUT /api/v1/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    if let Some(ref plate) = input.plate_number {
        input.plate_number = Some(validate_plate(Some(plate.as_str())).map_err(AppError::Core)?);
    }

    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;

    state
        .change_bus
        .publish(ChangeEvent::new("vehicles").with_entity(vehicle.id));

    Ok(Json(vehicle))
}

/// DELETE /api/v1/vehicles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = VehicleRepo::delete(&state.pool, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::new("vehicles").with_entity(id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
    }
}
