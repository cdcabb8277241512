use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::dtos::{CityDetailDto, CityDto, CountryDetailDto, CountryDto};
use crate::features::countries::models::{City, Country};
use crate::shared::search::search_page;
use crate::shared::types::{PaginationQuery, SearchResult};

/// Check that `city_id` exists and belongs to `country_id`.
///
/// A missing city is `CityNotExist`; a city of another country is `CountryNotExist`.
pub async fn ensure_location(pool: &PgPool, country_id: i32, city_id: i32) -> Result<()> {
    let city_country: Option<i32> =
        sqlx::query_scalar("SELECT country_id FROM cities WHERE id = $1")
            .bind(city_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check location: {:?}", e);
                AppError::Database(e)
            })?;

    match city_country {
        None => Err(AppError::NotFound(ErrorCode::CityNotExist)),
        Some(owner) if owner != country_id => Err(AppError::NotFound(ErrorCode::CountryNotExist)),
        Some(_) => Ok(()),
    }
}

/// Service for countries and their cities
pub struct CountryService {
    pool: PgPool,
}

impl CountryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ==================== Countries ====================

    pub async fn list(&self, query: &PaginationQuery) -> Result<SearchResult<Country>> {
        search_page(&self.pool, "countries", query, |_| {}).await
    }

    pub async fn create(&self, dto: &CountryDto) -> Result<Country> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            INSERT INTO countries (name, name_en, nationality, language, area_code, country_code, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nationality)
        .bind(&dto.language)
        .bind(&dto.area_code)
        .bind(&dto.country_code)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::CountryNameDuplicated))?;

        tracing::info!("Created country {} ({})", country.id, country.name_en);
        Ok(country)
    }

    pub async fn find(&self, id: i32) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>("SELECT * FROM countries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get country: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get(&self, id: i32) -> Result<CountryDetailDto> {
        let country = self
            .find(id)
            .await?
            .ok_or(AppError::NotFound(ErrorCode::CountryNotExist))?;
        let city_list = self.cities_of(id).await?;

        Ok(CountryDetailDto { country, city_list })
    }

    pub async fn update(&self, id: i32, dto: &CountryDto) -> Result<Country> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            UPDATE countries
            SET name = $2, name_en = $3, nationality = $4, language = $5,
                area_code = $6, country_code = $7, note = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nationality)
        .bind(&dto.language)
        .bind(&dto.area_code)
        .bind(&dto.country_code)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::CountryNameDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::CountryNotExist))?;

        tracing::info!("Updated country {}", id);
        Ok(country)
    }

    /// Delete a country and its cities.
    ///
    /// Rows of other entities that still reference them make the delete fail.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let cities = sqlx::query("DELETE FROM cities WHERE country_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::CityNameDuplicated))?;

        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::CountryNameDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::CountryNotExist));
        }

        tx.commit().await?;
        tracing::info!(
            "Deleted country {} with {} cities",
            id,
            cities.rows_affected()
        );
        Ok(())
    }

    // ==================== Cities ====================

    pub async fn list_cities(&self, country_id: i32) -> Result<Vec<City>> {
        if self.find(country_id).await?.is_none() {
            return Err(AppError::NotFound(ErrorCode::CountryNotExist));
        }
        self.cities_of(country_id).await
    }

    async fn cities_of(&self, country_id: i32) -> Result<Vec<City>> {
        sqlx::query_as::<_, City>("SELECT * FROM cities WHERE country_id = $1 ORDER BY id")
            .bind(country_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list cities: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn create_city(&self, dto: &CityDto) -> Result<City> {
        if self.find(dto.country_id).await?.is_none() {
            return Err(AppError::NotFound(ErrorCode::CountryNotExist));
        }

        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (country_id, name, name_en, abbreviation, note)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(dto.country_id)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.abbreviation)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::CityNameDuplicated))?;

        tracing::info!("Created city {} ({})", city.id, city.name_en);
        Ok(city)
    }

    async fn find_city(&self, id: i32) -> Result<City> {
        sqlx::query_as::<_, City>("SELECT * FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get city: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::CityNotExist))
    }

    pub async fn get_city(&self, id: i32) -> Result<CityDetailDto> {
        let city = self.find_city(id).await?;
        let country = self
            .find(city.country_id)
            .await?
            .ok_or(AppError::NotFound(ErrorCode::CountryNotExist))?;

        Ok(CityDetailDto { city, country })
    }

    pub async fn update_city(&self, id: i32, dto: &CityDto) -> Result<City> {
        let current = self.find_city(id).await?;
        if current.country_id != dto.country_id && self.find(dto.country_id).await?.is_none() {
            return Err(AppError::NotFound(ErrorCode::CountryNotExist));
        }

        let city = sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET country_id = $2, name = $3, name_en = $4, abbreviation = $5, note = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.country_id)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.abbreviation)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::CityNameDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::CityNotExist))?;

        tracing::info!("Updated city {}", id);
        Ok(city)
    }

    pub async fn delete_city(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::CityNameDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::CityNotExist));
        }

        tracing::info!("Deleted city {}", id);
        Ok(())
    }
}
