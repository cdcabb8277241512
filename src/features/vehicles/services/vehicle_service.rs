use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::vehicles::dtos::{
    VehicleDto, VehicleFeeDto, VehicleFeeSearchQuery, VehicleSearchQuery, VehicleTypeDto,
    VehicleTypeSearchQuery,
};
use crate::features::vehicles::models::{Vehicle, VehicleFee, VehicleType};
use crate::shared::search::{push_eq, push_location, row_exists, search_page};
use crate::shared::types::SearchResult;

/// Vehicle types, registered vehicles and per-company fees
pub struct VehicleService {
    pool: PgPool,
}

impl VehicleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_company(&self, company_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "vehicle_companies", company_id).await? {
            return Err(AppError::NotFound(ErrorCode::VehicleCompanyNotExist));
        }
        Ok(())
    }

    async fn ensure_type(&self, vehicle_type_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "vehicle_types", vehicle_type_id).await? {
            return Err(AppError::NotFound(ErrorCode::VehicleTypeNotExist));
        }
        Ok(())
    }

    // ==================== Vehicle Types ====================

    pub async fn search_types(
        &self,
        query: &VehicleTypeSearchQuery,
    ) -> Result<SearchResult<VehicleType>> {
        search_page(&self.pool, "vehicle_types", query, |qb| {
            push_eq(qb, "vehicle_type", query.vehicle_type);
        })
        .await
    }

    pub async fn create_type(&self, dto: &VehicleTypeDto) -> Result<VehicleType> {
        let vehicle_type = sqlx::query_as::<_, VehicleType>(
            r#"
            INSERT INTO vehicle_types
                (vehicle_type, brand, seat, available_seat, passenger_count, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(dto.vehicle_type)
        .bind(&dto.brand)
        .bind(dto.seat)
        .bind(dto.available_seat)
        .bind(dto.passenger_count)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create vehicle type: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created vehicle type {} ({})", vehicle_type.id, vehicle_type.brand);
        Ok(vehicle_type)
    }

    pub async fn get_type(&self, id: i32) -> Result<VehicleType> {
        sqlx::query_as::<_, VehicleType>("SELECT * FROM vehicle_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get vehicle type: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::VehicleTypeNotExist))
    }

    pub async fn update_type(&self, id: i32, dto: &VehicleTypeDto) -> Result<VehicleType> {
        let vehicle_type = sqlx::query_as::<_, VehicleType>(
            r#"
            UPDATE vehicle_types
            SET vehicle_type = $2, brand = $3, seat = $4, available_seat = $5,
                passenger_count = $6, note = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.vehicle_type)
        .bind(&dto.brand)
        .bind(dto.seat)
        .bind(dto.available_seat)
        .bind(dto.passenger_count)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update vehicle type: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or(AppError::NotFound(ErrorCode::VehicleTypeNotExist))?;

        tracing::info!("Updated vehicle type {}", id);
        Ok(vehicle_type)
    }

    /// Fails with a parameter error while vehicles or fees still use the type
    pub async fn delete_type(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM vehicle_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::VehicleTypeNotExist))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::VehicleTypeNotExist));
        }

        tracing::info!("Deleted vehicle type {}", id);
        Ok(())
    }

    // ==================== Vehicles ====================

    /// An exact license wins; otherwise location, company and type filters combine
    pub async fn search_vehicles(&self, query: &VehicleSearchQuery) -> Result<SearchResult<Vehicle>> {
        search_page(&self.pool, "vehicles", query, |qb| {
            if let Some(license) = &query.license {
                push_eq(qb, "license", Some(license.clone()));
            } else {
                push_location(qb, query.country_id, query.city_id);
                push_eq(qb, "company_id", query.company_id);
                push_eq(qb, "vehicle_type_id", query.vehicle_type_id);
            }
        })
        .await
    }

    pub async fn create_vehicle(&self, dto: &VehicleDto) -> Result<Vehicle> {
        ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        self.ensure_company(dto.company_id).await?;
        self.ensure_type(dto.vehicle_type_id).await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (country_id, city_id, company_id, vehicle_type_id, license, insurance_number,
                 start_use, register_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(dto.company_id)
        .bind(dto.vehicle_type_id)
        .bind(&dto.license)
        .bind(&dto.insurance_number)
        .bind(&dto.start_use)
        .bind(&dto.register_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::VehicleLicenseDuplicated))?;

        tracing::info!("Created vehicle {} ({})", vehicle.id, vehicle.license);
        Ok(vehicle)
    }

    pub async fn get_vehicle(&self, id: i32) -> Result<Vehicle> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get vehicle: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::VehicleNotExist))
    }

    pub async fn update_vehicle(&self, id: i32, dto: &VehicleDto) -> Result<Vehicle> {
        let current = self.get_vehicle(id).await?;
        if current.country_id != dto.country_id || current.city_id != dto.city_id {
            ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        }
        if current.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }
        if current.vehicle_type_id != dto.vehicle_type_id {
            self.ensure_type(dto.vehicle_type_id).await?;
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET country_id = $2, city_id = $3, company_id = $4, vehicle_type_id = $5,
                license = $6, insurance_number = $7, start_use = $8, register_number = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(dto.company_id)
        .bind(dto.vehicle_type_id)
        .bind(&dto.license)
        .bind(&dto.insurance_number)
        .bind(&dto.start_use)
        .bind(&dto.register_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::VehicleLicenseDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::VehicleNotExist))?;

        tracing::info!("Updated vehicle {}", id);
        Ok(vehicle)
    }

    pub async fn delete_vehicle(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete vehicle: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::VehicleNotExist));
        }

        tracing::info!("Deleted vehicle {}", id);
        Ok(())
    }

    // ==================== Fees ====================

    pub async fn search_fees(
        &self,
        query: &VehicleFeeSearchQuery,
    ) -> Result<SearchResult<VehicleFee>> {
        search_page(&self.pool, "vehicle_fees", query, |qb| {
            push_eq(qb, "vehicle_type_id", query.vehicle_type_id);
            push_eq(qb, "company_id", query.company_id);
            push_eq(qb, "unit_price", query.unit_price);
            push_eq(qb, "confirm_person", query.confirm_person.clone());
            if let Some(start_time) = query.start_time {
                qb.push(" AND start_time >= ").push_bind(start_time);
            }
            if let Some(end_time) = query.end_time {
                qb.push(" AND end_time <= ").push_bind(end_time);
            }
        })
        .await
    }

    pub async fn create_fee(&self, dto: &VehicleFeeDto) -> Result<VehicleFee> {
        self.ensure_company(dto.company_id).await?;
        self.ensure_type(dto.vehicle_type_id).await?;

        let fee = sqlx::query_as::<_, VehicleFee>(
            r#"
            INSERT INTO vehicle_fees
                (company_id, vehicle_type_id, unit_price, start_time, end_time,
                 confirm_person, attachment_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(dto.company_id)
        .bind(dto.vehicle_type_id)
        .bind(dto.unit_price)
        .bind(dto.start_time)
        .bind(dto.end_time)
        .bind(&dto.confirm_person)
        .bind(&dto.attachment_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create vehicle fee: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created vehicle fee {} for company {}",
            fee.id,
            fee.company_id
        );
        Ok(fee)
    }

    pub async fn get_fee(&self, id: i32) -> Result<VehicleFee> {
        sqlx::query_as::<_, VehicleFee>("SELECT * FROM vehicle_fees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get vehicle fee: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::VehicleFeeNotExist))
    }

    pub async fn update_fee(&self, id: i32, dto: &VehicleFeeDto) -> Result<VehicleFee> {
        let current = self.get_fee(id).await?;
        if current.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }
        if current.vehicle_type_id != dto.vehicle_type_id {
            self.ensure_type(dto.vehicle_type_id).await?;
        }

        let fee = sqlx::query_as::<_, VehicleFee>(
            r#"
            UPDATE vehicle_fees
            SET company_id = $2, vehicle_type_id = $3, unit_price = $4, start_time = $5,
                end_time = $6, confirm_person = $7, attachment_hash = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.company_id)
        .bind(dto.vehicle_type_id)
        .bind(dto.unit_price)
        .bind(dto.start_time)
        .bind(dto.end_time)
        .bind(&dto.confirm_person)
        .bind(&dto.attachment_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update vehicle fee: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or(AppError::NotFound(ErrorCode::VehicleFeeNotExist))?;

        tracing::info!("Updated vehicle fee {}", id);
        Ok(fee)
    }

    pub async fn delete_fee(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM vehicle_fees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete vehicle fee: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::VehicleFeeNotExist));
        }

        tracing::info!("Deleted vehicle fee {}", id);
        Ok(())
    }
}
