use sqlx::{PgConnection, PgPool};

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::hotels::dtos::{HotelDetailDto, HotelDto, HotelSearchQuery};
use crate::features::hotels::models::{Hotel, HotelAccount, HotelContact};
use crate::features::hotels::services::hotel_fee_service::delete_fee_rows;
use crate::shared::account::{AccountTable, BankAccountDto};
use crate::shared::batch::BatchEditDto;
use crate::shared::contact::{ContactDto, ContactTable};
use crate::shared::search::{push_eq, push_location, row_exists, search_page};
use crate::shared::types::SearchResult;

pub(crate) const HOTEL_CONTACTS: ContactTable = ContactTable {
    table: "hotel_contacts",
    owner_column: "hotel_id",
    not_found: ErrorCode::HotelContactNotExist,
    owner_not_found: ErrorCode::HotelNotExist,
};

pub(crate) const HOTEL_ACCOUNTS: AccountTable = AccountTable {
    table: "hotel_accounts",
    owner_column: "hotel_id",
    duplicated: ErrorCode::HotelAccountDuplicated,
    not_found: ErrorCode::HotelAccountNotExist,
};

/// Delete a hotel with its contacts, accounts and fees on an open transaction.
///
/// Returns the number of hotel rows removed.
pub(crate) async fn delete_hotel_rows(conn: &mut PgConnection, hotel_id: i32) -> Result<u64> {
    HOTEL_CONTACTS.delete_by_owner(&mut *conn, hotel_id).await?;
    HOTEL_ACCOUNTS.delete_by_owner(&mut *conn, hotel_id).await?;

    let fee_ids: Vec<i32> = sqlx::query_scalar("SELECT id FROM hotel_fees WHERE hotel_id = $1")
        .bind(hotel_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list fees of hotel {}: {:?}", hotel_id, e);
            AppError::Database(e)
        })?;
    for fee_id in fee_ids {
        delete_fee_rows(&mut *conn, fee_id).await?;
    }

    let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
        .bind(hotel_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::HotelDuplicated))?;
    Ok(result.rows_affected())
}

pub struct HotelService {
    pool: PgPool,
}

impl HotelService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Location, company and name filters; the first name field given wins
    pub async fn search(&self, query: &HotelSearchQuery) -> Result<SearchResult<Hotel>> {
        search_page(&self.pool, "hotels", query, |qb| {
            push_location(qb, query.country_id, query.city_id);
            push_eq(qb, "company_id", query.company_id);
            if let Some(name) = &query.name {
                push_eq(qb, "name", Some(name.clone()));
            } else if let Some(name_en) = &query.name_en {
                push_eq(qb, "name_en", Some(name_en.clone()));
            } else if let Some(nickname_en) = &query.nickname_en {
                push_eq(qb, "nickname_en", Some(nickname_en.clone()));
            }
            push_eq(qb, "star_level", query.star_level);
        })
        .await
    }

    async fn ensure_company(&self, company_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "hotel_companies", company_id).await? {
            return Err(AppError::NotFound(ErrorCode::HotelCompanyNotExist));
        }
        Ok(())
    }

    async fn ensure_hotel(&self, hotel_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "hotels", hotel_id).await? {
            return Err(AppError::NotFound(ErrorCode::HotelNotExist));
        }
        Ok(())
    }

    pub async fn create(&self, dto: &HotelDto) -> Result<Hotel> {
        ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        self.ensure_company(dto.company_id).await?;

        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (
                country_id, city_id, company_id, address, name, name_en, nickname_en,
                star_level, comment_level, standard_room_number, standard_double_room_number,
                triple_room_number, suite_room_number, tour_guide_room_number, start_year,
                telephone, email, intro_cn, intro_en
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(dto.company_id)
        .bind(&dto.address)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(dto.star_level)
        .bind(dto.comment_level)
        .bind(dto.standard_room_number)
        .bind(dto.standard_double_room_number)
        .bind(dto.triple_room_number)
        .bind(dto.suite_room_number)
        .bind(dto.tour_guide_room_number)
        .bind(dto.start_year)
        .bind(&dto.telephone)
        .bind(&dto.email)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::HotelDuplicated))?;

        tracing::info!("Created hotel {} ({})", hotel.id, hotel.name_en);
        Ok(hotel)
    }

    async fn find(&self, id: i32) -> Result<Hotel> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hotel: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::HotelNotExist))
    }

    pub async fn get(&self, id: i32) -> Result<HotelDetailDto> {
        let hotel = self.find(id).await?;
        let contact_list = HOTEL_CONTACTS.list_by_owner(&self.pool, id).await?;

        Ok(HotelDetailDto {
            hotel,
            contact_list,
        })
    }

    pub async fn update(&self, id: i32, dto: &HotelDto) -> Result<Hotel> {
        let current = self.find(id).await?;
        if current.country_id != dto.country_id || current.city_id != dto.city_id {
            ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        }
        if current.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }

        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            UPDATE hotels
            SET country_id = $2, city_id = $3, company_id = $4, address = $5, name = $6,
                name_en = $7, nickname_en = $8, star_level = $9, comment_level = $10,
                standard_room_number = $11, standard_double_room_number = $12,
                triple_room_number = $13, suite_room_number = $14,
                tour_guide_room_number = $15, start_year = $16, telephone = $17,
                email = $18, intro_cn = $19, intro_en = $20, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(dto.company_id)
        .bind(&dto.address)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(dto.star_level)
        .bind(dto.comment_level)
        .bind(dto.standard_room_number)
        .bind(dto.standard_double_room_number)
        .bind(dto.triple_room_number)
        .bind(dto.suite_room_number)
        .bind(dto.tour_guide_room_number)
        .bind(dto.start_year)
        .bind(&dto.telephone)
        .bind(&dto.email)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::HotelDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::HotelNotExist))?;

        tracing::info!("Updated hotel {}", id);
        Ok(hotel)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        if delete_hotel_rows(&mut *tx, id).await? == 0 {
            return Err(AppError::NotFound(ErrorCode::HotelNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted hotel {}", id);
        Ok(())
    }

    // ==================== Contacts ====================

    pub async fn create_contact(&self, hotel_id: i32, dto: &ContactDto) -> Result<HotelContact> {
        let contact: HotelContact = HOTEL_CONTACTS.create(&self.pool, hotel_id, dto).await?;
        tracing::info!("Added contact {} to hotel {}", contact.id, hotel_id);
        Ok(contact)
    }

    pub async fn update_contact(&self, id: i32, dto: &ContactDto) -> Result<HotelContact> {
        HOTEL_CONTACTS.update(&self.pool, id, dto).await
    }

    pub async fn delete_contact(&self, id: i32) -> Result<()> {
        HOTEL_CONTACTS.delete(&self.pool, id).await
    }

    // ==================== Accounts ====================

    pub async fn list_accounts(&self, hotel_id: i32) -> Result<Vec<HotelAccount>> {
        self.ensure_hotel(hotel_id).await?;
        HOTEL_ACCOUNTS.list_by_owner(&self.pool, hotel_id).await
    }

    pub async fn create_account(&self, hotel_id: i32, dto: &BankAccountDto) -> Result<HotelAccount> {
        self.ensure_hotel(hotel_id).await?;
        let account: HotelAccount = HOTEL_ACCOUNTS.create(&self.pool, hotel_id, dto).await?;
        tracing::info!("Added account {} to hotel {}", account.id, hotel_id);
        Ok(account)
    }

    pub async fn edit_accounts(
        &self,
        hotel_id: i32,
        batch: &BatchEditDto<BankAccountDto>,
    ) -> Result<Vec<HotelAccount>> {
        self.ensure_hotel(hotel_id).await?;
        HOTEL_ACCOUNTS.edit_batch(&self.pool, hotel_id, batch).await
    }

    pub async fn update_account(&self, id: i32, dto: &BankAccountDto) -> Result<HotelAccount> {
        HOTEL_ACCOUNTS.update(&self.pool, id, None, dto).await
    }

    pub async fn delete_account(&self, id: i32) -> Result<()> {
        HOTEL_ACCOUNTS.delete(&self.pool, id, None).await
    }
}
