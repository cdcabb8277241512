use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::restaurants::dtos::{RestaurantCompanyDto, RestaurantCompanySearchQuery};
use crate::features::restaurants::models::RestaurantCompany;
use crate::shared::search::{push_location, search_page};
use crate::shared::types::SearchResult;

pub struct RestaurantCompanyService {
    pool: PgPool,
}

impl RestaurantCompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(
        &self,
        query: &RestaurantCompanySearchQuery,
    ) -> Result<SearchResult<RestaurantCompany>> {
        search_page(&self.pool, "restaurant_companies", query, |qb| {
            push_location(qb, query.country_id, query.city_id);
        })
        .await
    }

    pub async fn create(&self, dto: &RestaurantCompanyDto) -> Result<RestaurantCompany> {
        ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;

        let company = sqlx::query_as::<_, RestaurantCompany>(
            r#"
            INSERT INTO restaurant_companies
                (country_id, city_id, name, name_en, nickname_en, register_number, intro, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(dto.company.country_id)
        .bind(dto.company.city_id)
        .bind(&dto.company.name)
        .bind(&dto.company.name_en)
        .bind(&dto.company.nickname_en)
        .bind(&dto.company.register_number)
        .bind(&dto.intro)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::RestaurantCompanyDuplicated))?;

        tracing::info!(
            "Created restaurant company {} ({})",
            company.id,
            company.company.name_en
        );
        Ok(company)
    }

    pub async fn get(&self, id: i32) -> Result<RestaurantCompany> {
        sqlx::query_as::<_, RestaurantCompany>("SELECT * FROM restaurant_companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get restaurant company: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::RestaurantCompanyNotExist))
    }

    pub async fn update(&self, id: i32, dto: &RestaurantCompanyDto) -> Result<RestaurantCompany> {
        let current = self.get(id).await?;
        if current.company.location_changed(&dto.company) {
            ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;
        }

        let company = sqlx::query_as::<_, RestaurantCompany>(
            r#"
            UPDATE restaurant_companies
            SET country_id = $2, city_id = $3, name = $4, name_en = $5, nickname_en = $6,
                register_number = $7, intro = $8, note = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.company.country_id)
        .bind(dto.company.city_id)
        .bind(&dto.company.name)
        .bind(&dto.company.name_en)
        .bind(&dto.company.nickname_en)
        .bind(&dto.company.register_number)
        .bind(&dto.intro)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::RestaurantCompanyDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::RestaurantCompanyNotExist))?;

        tracing::info!("Updated restaurant company {}", id);
        Ok(company)
    }

    /// Delete a company; its restaurants stay and lose their company
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query(
            "UPDATE restaurants SET company_id = NULL, updated_at = NOW() WHERE company_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to detach restaurants: {:?}", e);
            AppError::Database(e)
        })?;

        let result = sqlx::query("DELETE FROM restaurant_companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::RestaurantCompanyDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::RestaurantCompanyNotExist));
        }

        tx.commit().await?;
        tracing::info!(
            "Deleted restaurant company {}, detached {} restaurants",
            id,
            detached.rows_affected()
        );
        Ok(())
    }
}
