//! Bank accounts attached to hotels, restaurants, vehicle companies and tour guides.
//!
//! The four account tables share their columns and differ only in the name of the
//! owner column, so one [`AccountTable`] descriptor drives all of them.

use serde::Deserialize;
use sqlx::{postgres::PgRow, FromRow, PgExecutor, PgPool};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::shared::batch::BatchEditDto;
use crate::shared::enums::Currency;
use crate::shared::validation::SWIFT_CODE_REGEX;

/// Bank account fields, used for create, full update and batch rows
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BankAccountDto {
    /// 1 = USD, 2 = CNY, 3 = LKR
    #[schema(value_type = i16)]
    pub currency: Currency,

    #[validate(length(min = 1, max = 30))]
    pub bank_name: String,

    #[validate(length(min = 1, max = 30))]
    pub deposit_bank: String,

    #[validate(length(min = 1, max = 20))]
    pub payee: String,

    #[validate(length(min = 1, max = 20))]
    pub account: String,

    #[validate(length(max = 20), regex(path = *SWIFT_CODE_REGEX))]
    pub swift_code: Option<String>,

    #[validate(length(max = 40))]
    pub note: Option<String>,
}

const ACCOUNT_COLUMNS: &str = "currency, bank_name, deposit_bank, payee, account, swift_code, note";

/// Descriptor of one bank account table
#[derive(Debug, Clone, Copy)]
pub struct AccountTable {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub duplicated: ErrorCode,
    pub not_found: ErrorCode,
}

impl AccountTable {
    pub async fn list_by_owner<'e, T, E>(&self, executor: E, owner_id: i32) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1 ORDER BY id",
            self.table, self.owner_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(owner_id)
            .fetch_all(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {}: {:?}", self.table, e);
                AppError::Database(e)
            })
    }

    pub async fn create<'e, T, E>(&self, executor: E, owner_id: i32, dto: &BankAccountDto) -> Result<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
            self.table, self.owner_column, ACCOUNT_COLUMNS
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(owner_id)
            .bind(dto.currency)
            .bind(&dto.bank_name)
            .bind(&dto.deposit_bank)
            .bind(&dto.payee)
            .bind(&dto.account)
            .bind(&dto.swift_code)
            .bind(&dto.note)
            .fetch_one(executor)
            .await
            .map_err(|e| handle_db_error(e, self.duplicated))
    }

    /// Replace every field of an account; `owner_id` restricts the update to one owner
    pub async fn update<'e, T, E>(
        &self,
        executor: E,
        id: i32,
        owner_id: Option<i32>,
        dto: &BankAccountDto,
    ) -> Result<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: PgExecutor<'e>,
    {
        let sql = format!(
            r#"
            UPDATE {table}
            SET currency = $3, bank_name = $4, deposit_bank = $5, payee = $6,
                account = $7, swift_code = $8, note = $9, updated_at = NOW()
            WHERE id = $1 AND ($2::INT IS NULL OR {owner} = $2)
            RETURNING *
            "#,
            table = self.table,
            owner = self.owner_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(owner_id)
            .bind(dto.currency)
            .bind(&dto.bank_name)
            .bind(&dto.deposit_bank)
            .bind(&dto.payee)
            .bind(&dto.account)
            .bind(&dto.swift_code)
            .bind(&dto.note)
            .fetch_optional(executor)
            .await
            .map_err(|e| handle_db_error(e, self.duplicated))?
            .ok_or(AppError::NotFound(self.not_found))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32, owner_id: Option<i32>) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 AND ($2::INT IS NULL OR {} = $2)",
            self.table, self.owner_column
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete from {}: {:?}", self.table, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(self.not_found));
        }
        Ok(())
    }

    /// Remove every account of an owner, used by cascading deletes
    pub async fn delete_by_owner<'e, E>(&self, executor: E, owner_id: i32) -> Result<u64>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!("DELETE FROM {} WHERE {} = $1", self.table, self.owner_column);
        let result = sqlx::query(&sql)
            .bind(owner_id)
            .execute(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete from {}: {:?}", self.table, e);
                AppError::Database(e)
            })?;
        Ok(result.rows_affected())
    }

    /// Apply a batch to one owner's accounts and return the resulting list.
    ///
    /// Deletes run first so that an account number can move between rows.
    pub async fn edit_batch<T>(
        &self,
        pool: &PgPool,
        owner_id: i32,
        batch: &BatchEditDto<BankAccountDto>,
    ) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut tx = pool.begin().await?;

        for id in &batch.delete_id_list {
            self.delete(&mut *tx, *id, Some(owner_id)).await?;
        }
        for item in &batch.update_list {
            self.update::<T, _>(&mut *tx, item.id, Some(owner_id), &item.data)
                .await?;
        }
        for dto in &batch.create_list {
            self.create::<T, _>(&mut *tx, owner_id, dto).await?;
        }

        let accounts = self.list_by_owner(&mut *tx, owner_id).await?;
        tx.commit().await?;

        tracing::info!(
            "Batch edited {} for {} {}: {} created, {} updated, {} deleted",
            self.table,
            self.owner_column,
            owner_id,
            batch.create_list.len(),
            batch.update_list.len(),
            batch.delete_id_list.len()
        );
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account_json() -> serde_json::Value {
        json!({
            "currency": 3,
            "bank_name": "Bank of Ceylon",
            "deposit_bank": "Colombo Fort",
            "payee": "Galle Face Hotel",
            "account": "0001234567",
            "swift_code": "BCEYLKLX",
            "note": null
        })
    }

    #[test]
    fn test_valid_account() {
        let dto: BankAccountDto = serde_json::from_value(account_json()).unwrap();
        assert_eq!(dto.currency, Currency::Lkr);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let mut value = account_json();
        value["currency"] = json!(7);
        assert!(serde_json::from_value::<BankAccountDto>(value).is_err());
    }

    #[test]
    fn test_field_limits() {
        let mut value = account_json();
        value["payee"] = json!("x".repeat(21));
        let dto: BankAccountDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("payee"));

        let mut value = account_json();
        value["swift_code"] = json!("bad swift");
        let dto: BankAccountDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());
    }
}
