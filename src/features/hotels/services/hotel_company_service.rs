use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::hotels::dtos::{
    HotelCompanyDetailDto, HotelCompanyDto, HotelCompanySearchQuery,
};
use crate::features::hotels::models::{HotelCompany, HotelCompanyContact};
use crate::features::hotels::services::hotel_service::delete_hotel_rows;
use crate::shared::contact::{ContactDto, ContactTable};
use crate::shared::search::{push_location, search_page};
use crate::shared::types::SearchResult;

const COMPANY_CONTACTS: ContactTable = ContactTable {
    table: "hotel_company_contacts",
    owner_column: "company_id",
    not_found: ErrorCode::HotelContactNotExist,
    owner_not_found: ErrorCode::HotelCompanyNotExist,
};

pub struct HotelCompanyService {
    pool: PgPool,
}

impl HotelCompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(
        &self,
        query: &HotelCompanySearchQuery,
    ) -> Result<SearchResult<HotelCompany>> {
        search_page(&self.pool, "hotel_companies", query, |qb| {
            push_location(qb, query.country_id, query.city_id);
        })
        .await
    }

    pub async fn create(&self, dto: &HotelCompanyDto) -> Result<HotelCompany> {
        ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;

        let company = sqlx::query_as::<_, HotelCompany>(
            r#"
            INSERT INTO hotel_companies
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
        .map_err(|e| handle_db_error(e, ErrorCode::HotelCompanyDuplicated))?;

        tracing::info!("Created hotel company {} ({})", company.id, company.company.name_en);
        Ok(company)
    }

    async fn find(&self, id: i32) -> Result<HotelCompany> {
        sqlx::query_as::<_, HotelCompany>("SELECT * FROM hotel_companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hotel company: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::HotelCompanyNotExist))
    }

    pub async fn get(&self, id: i32) -> Result<HotelCompanyDetailDto> {
        let company = self.find(id).await?;
        let contact_list = COMPANY_CONTACTS.list_by_owner(&self.pool, id).await?;

        Ok(HotelCompanyDetailDto {
            company,
            contact_list,
        })
    }

    pub async fn update(&self, id: i32, dto: &HotelCompanyDto) -> Result<HotelCompany> {
        let current = self.find(id).await?;
        if current.company.location_changed(&dto.company) {
            ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;
        }

        let company = sqlx::query_as::<_, HotelCompany>(
            r#"
            UPDATE hotel_companies
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
        .map_err(|e| handle_db_error(e, ErrorCode::HotelCompanyDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::HotelCompanyNotExist))?;

        tracing::info!("Updated hotel company {}", id);
        Ok(company)
    }

    /// Delete a company, its contacts and every hotel it owns
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        COMPANY_CONTACTS.delete_by_owner(&mut *tx, id).await?;

        let hotel_ids: Vec<i32> =
            sqlx::query_scalar("SELECT id FROM hotels WHERE company_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list hotels of company: {:?}", e);
                    AppError::Database(e)
                })?;
        for hotel_id in &hotel_ids {
            delete_hotel_rows(&mut *tx, *hotel_id).await?;
        }

        let result = sqlx::query("DELETE FROM hotel_companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::HotelCompanyDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::HotelCompanyNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted hotel company {} with {} hotels", id, hotel_ids.len());
        Ok(())
    }

    // ==================== Contacts ====================

    pub async fn create_contact(&self, company_id: i32, dto: &ContactDto) -> Result<HotelCompanyContact> {
        let contact: HotelCompanyContact = COMPANY_CONTACTS.create(&self.pool, company_id, dto).await?;
        tracing::info!("Added contact {} to hotel company {}", contact.id, company_id);
        Ok(contact)
    }

    pub async fn update_contact(&self, id: i32, dto: &ContactDto) -> Result<HotelCompanyContact> {
        COMPANY_CONTACTS.update(&self.pool, id, dto).await
    }

    pub async fn delete_contact(&self, id: i32) -> Result<()> {
        COMPANY_CONTACTS.delete(&self.pool, id).await
    }
}
