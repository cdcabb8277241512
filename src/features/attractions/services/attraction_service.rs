use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::attractions::dtos::{AttractionDto, AttractionFeeDto, AttractionSearchQuery};
use crate::features::attractions::models::{Attraction, AttractionFee};
use crate::features::countries::ensure_location;
use crate::shared::search::{push_eq, push_location, row_exists, search_page};
use crate::shared::types::SearchResult;

pub struct AttractionService {
    pool: PgPool,
}

impl AttractionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &AttractionSearchQuery) -> Result<SearchResult<Attraction>> {
        search_page(&self.pool, "attractions", query, |qb| {
            push_location(qb, query.country_id, query.city_id);
            push_eq(qb, "name", query.name.clone());
        })
        .await
    }

    pub async fn create(&self, dto: &AttractionDto) -> Result<Attraction> {
        ensure_location(&self.pool, dto.country_id, dto.city_id).await?;

        let attraction = sqlx::query_as::<_, Attraction>(
            r#"
            INSERT INTO attractions
                (country_id, city_id, address, name, name_en, nickname_en, intro_cn, intro_en, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(&dto.address)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::AttractionDuplicated))?;

        tracing::info!("Created attraction {} ({})", attraction.id, attraction.name_en);
        Ok(attraction)
    }

    pub async fn get(&self, id: i32) -> Result<Attraction> {
        sqlx::query_as::<_, Attraction>("SELECT * FROM attractions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get attraction: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::AttractionNotExist))
    }

    pub async fn update(&self, id: i32, dto: &AttractionDto) -> Result<Attraction> {
        let current = self.get(id).await?;
        if current.country_id != dto.country_id || current.city_id != dto.city_id {
            ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        }

        let attraction = sqlx::query_as::<_, Attraction>(
            r#"
            UPDATE attractions
            SET country_id = $2, city_id = $3, address = $4, name = $5, name_en = $6,
                nickname_en = $7, intro_cn = $8, intro_en = $9, note = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(&dto.address)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::AttractionDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::AttractionNotExist))?;

        tracing::info!("Updated attraction {}", id);
        Ok(attraction)
    }

    /// Delete an attraction with its fee
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM attraction_fees WHERE attraction_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete attraction fee: {:?}", e);
                AppError::Database(e)
            })?;

        let result = sqlx::query("DELETE FROM attractions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::AttractionDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::AttractionNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted attraction {}", id);
        Ok(())
    }

    // ==================== Fee ====================

    pub async fn get_fee(&self, attraction_id: i32) -> Result<AttractionFee> {
        sqlx::query_as::<_, AttractionFee>("SELECT * FROM attraction_fees WHERE attraction_id = $1")
            .bind(attraction_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get attraction fee: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::AttractionFeeNotExist))
    }

    /// An attraction has at most one fee
    pub async fn create_fee(&self, attraction_id: i32, dto: &AttractionFeeDto) -> Result<AttractionFee> {
        if !row_exists(&self.pool, "attractions", attraction_id).await? {
            return Err(AppError::NotFound(ErrorCode::AttractionNotExist));
        }

        let fee = sqlx::query_as::<_, AttractionFee>(
            r#"
            INSERT INTO attraction_fees
                (attraction_id, public_price, company_price, tour_guide_price, translator_price,
                 free_policy, child_discount, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(attraction_id)
        .bind(dto.public_price)
        .bind(dto.company_price)
        .bind(dto.tour_guide_price)
        .bind(dto.translator_price)
        .bind(dto.free_policy)
        .bind(dto.child_discount)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::AttractionFeeDuplicated))?;

        tracing::info!("Created fee {} for attraction {}", fee.id, attraction_id);
        Ok(fee)
    }

    pub async fn update_fee(&self, id: i32, dto: &AttractionFeeDto) -> Result<AttractionFee> {
        let fee = sqlx::query_as::<_, AttractionFee>(
            r#"
            UPDATE attraction_fees
            SET public_price = $2, company_price = $3, tour_guide_price = $4,
                translator_price = $5, free_policy = $6, child_discount = $7, note = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.public_price)
        .bind(dto.company_price)
        .bind(dto.tour_guide_price)
        .bind(dto.translator_price)
        .bind(dto.free_policy)
        .bind(dto.child_discount)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::AttractionFeeDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::AttractionFeeNotExist))?;

        tracing::info!("Updated attraction fee {}", id);
        Ok(fee)
    }

    pub async fn delete_fee(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM attraction_fees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete attraction fee: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::AttractionFeeNotExist));
        }
        tracing::info!("Deleted attraction fee {}", id);
        Ok(())
    }
}
