use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::tour_guides::dtos::{TourGuideDto, TourGuideFeeDto, TourGuideSearchQuery};
use crate::features::tour_guides::models::{TourGuide, TourGuideAccount, TourGuideFee};
use crate::shared::account::{AccountTable, BankAccountDto};
use crate::shared::batch::BatchEditDto;
use crate::shared::search::{push_eq, row_exists, search_page};
use crate::shared::types::SearchResult;

const GUIDE_ACCOUNTS: AccountTable = AccountTable {
    table: "tour_guide_accounts",
    owner_column: "tour_guide_id",
    duplicated: ErrorCode::TourGuideAccountDuplicated,
    not_found: ErrorCode::TourGuideAccountNotExist,
};

pub struct TourGuideService {
    pool: PgPool,
}

impl TourGuideService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &TourGuideSearchQuery) -> Result<SearchResult<TourGuide>> {
        search_page(&self.pool, "tour_guides", query, |qb| {
            push_eq(qb, "country_id", query.country_id);
            push_eq(qb, "gender", query.gender);
            push_eq(qb, "guide_type", query.guide_type);
        })
        .await
    }

    async fn ensure_country(&self, country_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "countries", country_id).await? {
            return Err(AppError::NotFound(ErrorCode::CountryNotExist));
        }
        Ok(())
    }

    async fn ensure_guide(&self, id: i32) -> Result<()> {
        if !row_exists(&self.pool, "tour_guides", id).await? {
            return Err(AppError::NotFound(ErrorCode::TourGuideNotExist));
        }
        Ok(())
    }

    pub async fn create(&self, dto: &TourGuideDto) -> Result<TourGuide> {
        self.ensure_country(dto.country_id).await?;

        let guide = sqlx::query_as::<_, TourGuide>(
            r#"
            INSERT INTO tour_guides (
                guide_type, country_id, name, name_en, gender, birthday, start_work, language,
                certificate_type, certificate_number, tour_guide_number, passport_country,
                telephone, intro, image_hash
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(dto.guide_type)
        .bind(dto.country_id)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(dto.gender)
        .bind(dto.birthday)
        .bind(dto.start_work)
        .bind(&dto.language)
        .bind(dto.certificate_type)
        .bind(&dto.certificate_number)
        .bind(&dto.tour_guide_number)
        .bind(&dto.passport_country)
        .bind(&dto.telephone)
        .bind(&dto.intro)
        .bind(&dto.image_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create tour guide: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created tour guide {}", guide.id);
        Ok(guide)
    }

    pub async fn get(&self, id: i32) -> Result<TourGuide> {
        sqlx::query_as::<_, TourGuide>("SELECT * FROM tour_guides WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get tour guide: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::TourGuideNotExist))
    }

    pub async fn update(&self, id: i32, dto: &TourGuideDto) -> Result<TourGuide> {
        let current = self.get(id).await?;
        if current.country_id != dto.country_id {
            self.ensure_country(dto.country_id).await?;
        }

        let guide = sqlx::query_as::<_, TourGuide>(
            r#"
            UPDATE tour_guides
            SET guide_type = $2, country_id = $3, name = $4, name_en = $5, gender = $6,
                birthday = $7, start_work = $8, language = $9, certificate_type = $10,
                certificate_number = $11, tour_guide_number = $12, passport_country = $13,
                telephone = $14, intro = $15, image_hash = $16, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.guide_type)
        .bind(dto.country_id)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(dto.gender)
        .bind(dto.birthday)
        .bind(dto.start_work)
        .bind(&dto.language)
        .bind(dto.certificate_type)
        .bind(&dto.certificate_number)
        .bind(&dto.tour_guide_number)
        .bind(&dto.passport_country)
        .bind(&dto.telephone)
        .bind(&dto.intro)
        .bind(&dto.image_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update tour guide: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or(AppError::NotFound(ErrorCode::TourGuideNotExist))?;

        tracing::info!("Updated tour guide {}", id);
        Ok(guide)
    }

    /// Delete a guide with its fee and bank accounts
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM tour_guide_fees WHERE tour_guide_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete tour guide fee: {:?}", e);
                AppError::Database(e)
            })?;
        GUIDE_ACCOUNTS.delete_by_owner(&mut *tx, id).await?;

        let result = sqlx::query("DELETE FROM tour_guides WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete tour guide: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::TourGuideNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted tour guide {}", id);
        Ok(())
    }

    // ==================== Fee ====================

    pub async fn get_fee(&self, tour_guide_id: i32) -> Result<TourGuideFee> {
        sqlx::query_as::<_, TourGuideFee>("SELECT * FROM tour_guide_fees WHERE tour_guide_id = $1")
            .bind(tour_guide_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get tour guide fee: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::TourGuideFeeNotExist))
    }

    /// A guide has at most one fee
    pub async fn create_fee(&self, tour_guide_id: i32, dto: &TourGuideFeeDto) -> Result<TourGuideFee> {
        self.ensure_guide(tour_guide_id).await?;

        let fee = sqlx::query_as::<_, TourGuideFee>(
            r#"
            INSERT INTO tour_guide_fees
                (tour_guide_id, currency, base_fee, service_type, service_fee)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(tour_guide_id)
        .bind(dto.currency)
        .bind(dto.base_fee)
        .bind(dto.service_type)
        .bind(dto.service_fee)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::TourGuideFeeDuplicated))?;

        tracing::info!("Created fee {} for tour guide {}", fee.id, tour_guide_id);
        Ok(fee)
    }

    pub async fn update_fee(&self, id: i32, dto: &TourGuideFeeDto) -> Result<TourGuideFee> {
        let fee = sqlx::query_as::<_, TourGuideFee>(
            r#"
            UPDATE tour_guide_fees
            SET currency = $2, base_fee = $3, service_type = $4, service_fee = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.currency)
        .bind(dto.base_fee)
        .bind(dto.service_type)
        .bind(dto.service_fee)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::TourGuideFeeDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::TourGuideFeeNotExist))?;

        tracing::info!("Updated tour guide fee {}", id);
        Ok(fee)
    }

    pub async fn delete_fee(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM tour_guide_fees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete tour guide fee: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::TourGuideFeeNotExist));
        }
        tracing::info!("Deleted tour guide fee {}", id);
        Ok(())
    }

    // ==================== Accounts ====================

    pub async fn list_accounts(&self, tour_guide_id: i32) -> Result<Vec<TourGuideAccount>> {
        self.ensure_guide(tour_guide_id).await?;
        GUIDE_ACCOUNTS.list_by_owner(&self.pool, tour_guide_id).await
    }

    pub async fn create_account(
        &self,
        tour_guide_id: i32,
        dto: &BankAccountDto,
    ) -> Result<TourGuideAccount> {
        self.ensure_guide(tour_guide_id).await?;
        let account: TourGuideAccount = GUIDE_ACCOUNTS.create(&self.pool, tour_guide_id, dto).await?;
        tracing::info!("Added account {} to tour guide {}", account.id, tour_guide_id);
        Ok(account)
    }

    pub async fn edit_accounts(
        &self,
        tour_guide_id: i32,
        batch: &BatchEditDto<BankAccountDto>,
    ) -> Result<Vec<TourGuideAccount>> {
        self.ensure_guide(tour_guide_id).await?;
        GUIDE_ACCOUNTS.edit_batch(&self.pool, tour_guide_id, batch).await
    }

    pub async fn update_account(&self, id: i32, dto: &BankAccountDto) -> Result<TourGuideAccount> {
        GUIDE_ACCOUNTS.update(&self.pool, id, None, dto).await
    }

    pub async fn delete_account(&self, id: i32) -> Result<()> {
        GUIDE_ACCOUNTS.delete(&self.pool, id, None).await
    }
}
