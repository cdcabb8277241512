use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::vehicles::dtos::{
    VehicleCompanyDetailDto, VehicleCompanyDto, VehicleCompanySearchQuery,
};
use crate::features::vehicles::models::{VehicleAccount, VehicleCompany, VehicleCompanyContact};
use crate::shared::account::{AccountTable, BankAccountDto};
use crate::shared::batch::BatchEditDto;
use crate::shared::contact::{ContactDto, ContactTable};
use crate::shared::search::{push_eq, push_location, row_exists, search_page};
use crate::shared::types::SearchResult;

const COMPANY_CONTACTS: ContactTable = ContactTable {
    table: "vehicle_company_contacts",
    owner_column: "company_id",
    not_found: ErrorCode::VehicleContactNotExist,
    owner_not_found: ErrorCode::VehicleCompanyNotExist,
};

const COMPANY_ACCOUNTS: AccountTable = AccountTable {
    table: "vehicle_accounts",
    owner_column: "company_id",
    duplicated: ErrorCode::VehicleAccountDuplicated,
    not_found: ErrorCode::VehicleAccountNotExist,
};

pub struct VehicleCompanyService {
    pool: PgPool,
}

impl VehicleCompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(
        &self,
        query: &VehicleCompanySearchQuery,
    ) -> Result<SearchResult<VehicleCompany>> {
        search_page(&self.pool, "vehicle_companies", query, |qb| {
            if let Some(name) = &query.name {
                push_eq(qb, "name", Some(name.clone()));
            } else if let Some(name_en) = &query.name_en {
                push_eq(qb, "name_en", Some(name_en.clone()));
            } else {
                push_location(qb, query.country_id, query.city_id);
                push_eq(qb, "company_type", query.company_type);
            }
        })
        .await
    }

    async fn ensure_company(&self, company_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "vehicle_companies", company_id).await? {
            return Err(AppError::NotFound(ErrorCode::VehicleCompanyNotExist));
        }
        Ok(())
    }

    pub async fn create(&self, dto: &VehicleCompanyDto) -> Result<VehicleCompany> {
        ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;

        let company = sqlx::query_as::<_, VehicleCompany>(
            r#"
            INSERT INTO vehicle_companies
                (country_id, city_id, name, name_en, nickname_en, register_number,
                 company_type, vehicle_number)
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
        .bind(dto.company_type)
        .bind(dto.vehicle_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::VehicleCompanyDuplicated))?;

        tracing::info!("Created vehicle company {} ({})", company.id, company.company.name_en);
        Ok(company)
    }

    async fn find(&self, id: i32) -> Result<VehicleCompany> {
        sqlx::query_as::<_, VehicleCompany>("SELECT * FROM vehicle_companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get vehicle company: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::VehicleCompanyNotExist))
    }

    pub async fn get(&self, id: i32) -> Result<VehicleCompanyDetailDto> {
        let company = self.find(id).await?;
        let contact_list = COMPANY_CONTACTS.list_by_owner(&self.pool, id).await?;

        Ok(VehicleCompanyDetailDto {
            company,
            contact_list,
        })
    }

    pub async fn update(&self, id: i32, dto: &VehicleCompanyDto) -> Result<VehicleCompany> {
        let current = self.find(id).await?;
        if current.company.location_changed(&dto.company) {
            ensure_location(&self.pool, dto.company.country_id, dto.company.city_id).await?;
        }

        let company = sqlx::query_as::<_, VehicleCompany>(
            r#"
            UPDATE vehicle_companies
            SET country_id = $2, city_id = $3, name = $4, name_en = $5, nickname_en = $6,
                register_number = $7, company_type = $8, vehicle_number = $9,
                updated_at = NOW()
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
        .bind(dto.company_type)
        .bind(dto.vehicle_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::VehicleCompanyDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::VehicleCompanyNotExist))?;

        tracing::info!("Updated vehicle company {}", id);
        Ok(company)
    }

    /// Delete a company with its contacts, accounts, vehicles and fees
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        COMPANY_CONTACTS.delete_by_owner(&mut *tx, id).await?;
        COMPANY_ACCOUNTS.delete_by_owner(&mut *tx, id).await?;
        for table in ["vehicles", "vehicle_fees"] {
            sqlx::query(&format!("DELETE FROM {} WHERE company_id = $1", table))
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete {} of company {}: {:?}", table, id, e);
                    AppError::Database(e)
                })?;
        }

        let result = sqlx::query("DELETE FROM vehicle_companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::VehicleCompanyDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::VehicleCompanyNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted vehicle company {}", id);
        Ok(())
    }

    // ==================== Contacts ====================

    pub async fn create_contact(
        &self,
        company_id: i32,
        dto: &ContactDto,
    ) -> Result<VehicleCompanyContact> {
        COMPANY_CONTACTS.create(&self.pool, company_id, dto).await
    }

    pub async fn update_contact(&self, id: i32, dto: &ContactDto) -> Result<VehicleCompanyContact> {
        COMPANY_CONTACTS.update(&self.pool, id, dto).await
    }

    pub async fn delete_contact(&self, id: i32) -> Result<()> {
        COMPANY_CONTACTS.delete(&self.pool, id).await
    }

    // ==================== Accounts ====================

    pub async fn list_accounts(&self, company_id: i32) -> Result<Vec<VehicleAccount>> {
        self.ensure_company(company_id).await?;
        COMPANY_ACCOUNTS.list_by_owner(&self.pool, company_id).await
    }

    pub async fn create_account(
        &self,
        company_id: i32,
        dto: &BankAccountDto,
    ) -> Result<VehicleAccount> {
        self.ensure_company(company_id).await?;
        let account: VehicleAccount = COMPANY_ACCOUNTS.create(&self.pool, company_id, dto).await?;
        tracing::info!("Added account {} to vehicle company {}", account.id, company_id);
        Ok(account)
    }

    pub async fn edit_accounts(
        &self,
        company_id: i32,
        batch: &BatchEditDto<BankAccountDto>,
    ) -> Result<Vec<VehicleAccount>> {
        self.ensure_company(company_id).await?;
        COMPANY_ACCOUNTS.edit_batch(&self.pool, company_id, batch).await
    }

    pub async fn update_account(&self, id: i32, dto: &BankAccountDto) -> Result<VehicleAccount> {
        COMPANY_ACCOUNTS.update(&self.pool, id, None, dto).await
    }

    pub async fn delete_account(&self, id: i32) -> Result<()> {
        COMPANY_ACCOUNTS.delete(&self.pool, id, None).await
    }
}
