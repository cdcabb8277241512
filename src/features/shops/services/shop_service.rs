use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::shops::dtos::{ShopDto, ShopFeeDto, ShopSearchQuery};
use crate::features::shops::models::{Shop, ShopFee};
use crate::shared::search::{push_eq, push_location, row_exists, search_page};
use crate::shared::types::SearchResult;

pub struct ShopService {
    pool: PgPool,
}

impl ShopService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &ShopSearchQuery) -> Result<SearchResult<Shop>> {
        search_page(&self.pool, "shops", query, |qb| {
            push_location(qb, query.country_id, query.city_id);
            push_eq(qb, "company_id", query.company_id);
            push_eq(qb, "shop_type", query.shop_type);
        })
        .await
    }

    async fn ensure_company(&self, company_id: Option<i32>) -> Result<()> {
        if let Some(company_id) = company_id {
            if !row_exists(&self.pool, "shop_companies", company_id).await? {
                return Err(AppError::NotFound(ErrorCode::ShopCompanyNotExist));
            }
        }
        Ok(())
    }

    pub async fn create(&self, dto: &ShopDto) -> Result<Shop> {
        ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        self.ensure_company(dto.company_id).await?;

        let shop = sqlx::query_as::<_, Shop>(
            r#"
            INSERT INTO shops (
                country_id, city_id, company_id, address, shop_type, name, name_en,
                nickname_en, intro_cn, intro_en, note
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(dto.company_id)
        .bind(&dto.address)
        .bind(dto.shop_type)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::ShopDuplicated))?;

        tracing::info!("Created shop {} ({})", shop.id, shop.name_en);
        Ok(shop)
    }

    pub async fn get(&self, id: i32) -> Result<Shop> {
        sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get shop: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::ShopNotExist))
    }

    pub async fn update(&self, id: i32, dto: &ShopDto) -> Result<Shop> {
        let current = self.get(id).await?;
        if current.country_id != dto.country_id || current.city_id != dto.city_id {
            ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        }
        if current.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }

        let shop = sqlx::query_as::<_, Shop>(
            r#"
            UPDATE shops
            SET country_id = $2, city_id = $3, company_id = $4, address = $5, shop_type = $6,
                name = $7, name_en = $8, nickname_en = $9, intro_cn = $10, intro_en = $11,
                note = $12, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(dto.company_id)
        .bind(&dto.address)
        .bind(dto.shop_type)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::ShopDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::ShopNotExist))?;

        tracing::info!("Updated shop {}", id);
        Ok(shop)
    }

    /// Delete a shop with its fee agreement
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM shop_fees WHERE shop_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete shop fee: {:?}", e);
                AppError::Database(e)
            })?;

        let result = sqlx::query("DELETE FROM shops WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::ShopDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::ShopNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted shop {}", id);
        Ok(())
    }

    // ==================== Fee ====================

    pub async fn get_fee(&self, shop_id: i32) -> Result<ShopFee> {
        sqlx::query_as::<_, ShopFee>("SELECT * FROM shop_fees WHERE shop_id = $1")
            .bind(shop_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get shop fee: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::ShopFeeNotExist))
    }

    /// A shop has at most one fee agreement
    pub async fn create_fee(&self, shop_id: i32, dto: &ShopFeeDto) -> Result<ShopFee> {
        if !row_exists(&self.pool, "shops", shop_id).await? {
            return Err(AppError::NotFound(ErrorCode::ShopNotExist));
        }

        let fee = sqlx::query_as::<_, ShopFee>(
            r#"
            INSERT INTO shop_fees
                (shop_id, fee_person, company_ratio, tour_guide_ratio, account_period, account_way, note)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(shop_id)
        .bind(dto.fee_person)
        .bind(dto.company_ratio)
        .bind(dto.tour_guide_ratio)
        .bind(dto.account_period)
        .bind(dto.account_way)
        .bind(&dto.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::ShopFeeDuplicated))?;

        tracing::info!("Created fee {} for shop {}", fee.id, shop_id);
        Ok(fee)
    }

    pub async fn update_fee(&self, id: i32, dto: &ShopFeeDto) -> Result<ShopFee> {
        let fee = sqlx::query_as::<_, ShopFee>(
            r#"
            UPDATE shop_fees
            SET fee_person = $2, company_ratio = $3, tour_guide_ratio = $4,
                account_period = $5, account_way = $6, note = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.fee_person)
        .bind(dto.company_ratio)
        .bind(dto.tour_guide_ratio)
        .bind(dto.account_period)
        .bind(dto.account_way)
        .bind(&dto.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::ShopFeeDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::ShopFeeNotExist))?;

        tracing::info!("Updated shop fee {}", id);
        Ok(fee)
    }

    pub async fn delete_fee(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM shop_fees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete shop fee: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::ShopFeeNotExist));
        }
        tracing::info!("Deleted shop fee {}", id);
        Ok(())
    }
}
