//! Repository for the `vehicles` table.

use plategate_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, plate_number, vehicle_type, owner_name, flat_number, \
    phone, is_resident, created_at";

/// Provides CRUD operations for the vehicle registry.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    ///
    /// If `is_resident` is `None` in the input, defaults to `true`.
    /// A duplicate plate violates `uq_vehicles_plate_number`.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles \
                (plate_number, vehicle_type, owner_name, flat_number, phone, is_resident)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.plate_number)
            .bind(&input.vehicle_type)
            .bind(&input.owner_name)
            .bind(&input.flat_number)
            .bind(&input.phone)
            .bind(input.is_resident)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the registry entry for an exact (normalized) plate.
    ///
    /// At most one row can match thanks to the unique plate index; absence
    /// means "not a known vehicle" and is not an error.
    pub async fn find_by_plate(
        pool: &PgPool,
        plate_number: &str,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE plate_number = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(plate_number)
            .fetch_optional(pool)
            .await
    }

    /// List vehicles, newest first, optionally filtered by residency.
    pub async fn list(pool: &PgPool, params: &VehicleQuery) -> Result<Vec<Vehicle>, sqlx::Error> {
        let limit = params.limit.unwrap_or(100).min(500);
        let offset = params.offset.unwrap_or(0);

        let query = match params.is_resident {
            Some(_) => format!(
                "SELECT {COLUMNS} FROM vehicles WHERE is_resident = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
            ),
            None => format!(
                "SELECT {COLUMNS} FROM vehicles \
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            ),
        };

        match params.is_resident {
            Some(flag) => {
                sqlx::query_as::<_, Vehicle>(&query)
                    .bind(flag)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, Vehicle>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                plate_number = COALESCE($2, plate_number),
                vehicle_type = COALESCE($3, vehicle_type),
                owner_name = COALESCE($4, owner_name),
                flat_number = COALESCE($5, flat_number),
                phone = COALESCE($6, phone),
                is_resident = COALESCE($7, is_resident)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.plate_number)
            .bind(&input.vehicle_type)
            .bind(&input.owner_name)
            .bind(&input.flat_number)
            .bind(&input.phone)
            .bind(input.is_resident)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle by ID. Returns `true` if a row was removed.
    ///
    /// Registry rows are not audit data, so this is a hard delete.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of registered resident vehicles.
    pub async fn count_residents(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles WHERE is_resident = TRUE")
            .fetch_one(pool)
            .await
    }
}
