//! Vehicle registry entity model and DTOs.
//!
//! One row per known plate, resident or not. Managed by the dashboard;
//! the ingestion path only reads this table.

use plategate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Vehicle entity
// ---------------------------------------------------------------------------

/// A registry entry for a known plate.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    /// Unique lookup key, always stored uppercase.
    pub plate_number: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub flat_number: Option<String>,
    pub phone: Option<String>,
    pub is_resident: bool,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create / update DTOs
// ---------------------------------------------------------------------------

/// DTO for registering a vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub plate_number: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub flat_number: Option<String>,
    pub phone: Option<String>,
    /// Defaults to `true` — the registry UI manages resident vehicles.
    pub is_resident: Option<bool>,
}

/// DTO for updating a vehicle. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicle {
    pub plate_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub owner_name: Option<String>,
    pub flat_number: Option<String>,
    pub phone: Option<String>,
    pub is_resident: Option<bool>,
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filter parameters for listing vehicles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleQuery {
    pub is_resident: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
