use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::shops::dtos::{ShopCompanyDetailDto, ShopCompanyDto, ShopCompanySearchQuery};
use crate::features::shops::models::{ShopCompany, ShopCompanyContact};
use crate::shared::contact::{ContactDto, ContactTable};
use crate::shared::search::{push_eq, search_page};
use crate::shared::types::SearchResult;

const COMPANY_CONTACTS: ContactTable = ContactTable {
    table: "shop_company_contacts",
    owner_column: "company_id",
    not_found: ErrorCode::ShopContactNotExist,
    owner_not_found: ErrorCode::ShopCompanyNotExist,
};

pub struct ShopCompanyService {
    pool: PgPool,
}

impl ShopCompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &ShopCompanySearchQuery) -> Result<SearchResult<ShopCompany>> {
        search_page(&self.pool, "shop_companies", query, |qb| {
            if let Some(name) = &query.name {
                push_eq(qb, "name", Some(name.clone()));
            } else if let Some(name_en) = &query.name_en {
                push_eq(qb, "name_en", Some(name_en.clone()));
            }
        })
        .await
    }

    pub async fn create(&self, dto: &ShopCompanyDto) -> Result<ShopCompany> {
        ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;

        let company = sqlx::query_as::<_, ShopCompany>(
            r#"
            INSERT INTO shop_companies
                (country_id, city_id, name, name_en, nickname_en, register_number, intro)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
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
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::ShopCompanyDuplicated))?;

        tracing::info!("Created shop company {} ({})", company.id, company.company.name_en);
        Ok(company)
    }

    async fn find(&self, id: i32) -> Result<ShopCompany> {
        sqlx::query_as::<_, ShopCompany>("SELECT * FROM shop_companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get shop company: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::ShopCompanyNotExist))
    }

    pub async fn get(&self, id: i32) -> Result<ShopCompanyDetailDto> {
        let company = self.find(id).await?;
        let contact_list = COMPANY_CONTACTS.list_by_owner(&self.pool, id).await?;

        Ok(ShopCompanyDetailDto {
            company,
            contact_list,
        })
    }

    pub async fn update(&self, id: i32, dto: &ShopCompanyDto) -> Result<ShopCompany> {
        let current = self.find(id).await?;
        if current.company.location_changed(&dto.company) {
            ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;
        }

        let company = sqlx::query_as::<_, ShopCompany>(
            r#"
            UPDATE shop_companies
            SET country_id = $2, city_id = $3, name = $4, name_en = $5, nickname_en = $6,
                register_number = $7, intro = $8, updated_at = NOW()
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
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::ShopCompanyDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::ShopCompanyNotExist))?;

        tracing::info!("Updated shop company {}", id);
        Ok(company)
    }

    /// Delete a company with its contacts; its shops are kept without a company
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        COMPANY_CONTACTS.delete_by_owner(&mut *tx, id).await?;
        let detached = sqlx::query(
            "UPDATE shops SET company_id = NULL, updated_at = NOW() WHERE company_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to detach shops: {:?}", e);
            AppError::Database(e)
        })?;

        let result = sqlx::query("DELETE FROM shop_companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::ShopCompanyDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::ShopCompanyNotExist));
        }

        tx.commit().await?;
        tracing::info!(
            "Deleted shop company {}, detached {} shops",
            id,
            detached.rows_affected()
        );
        Ok(())
    }

    // ==================== Contacts ====================

    pub async fn create_contact(&self, company_id: i32, dto: &ContactDto) -> Result<ShopCompanyContact> {
        COMPANY_CONTACTS.create(&self.pool, company_id, dto).await
    }

    pub async fn update_contact(&self, id: i32, dto: &ContactDto) -> Result<ShopCompanyContact> {
        COMPANY_CONTACTS.update(&self.pool, id, dto).await
    }

    pub async fn delete_contact(&self, id: i32) -> Result<()> {
        COMPANY_CONTACTS.delete(&self.pool, id).await
    }
}
