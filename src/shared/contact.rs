//! Contact people of companies and hotels.

use serde::Deserialize;
use sqlx::{postgres::PgRow, FromRow, PgExecutor};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactDto {
    #[validate(length(min = 1, max = 20))]
    pub contact: String,

    #[validate(length(min = 1, max = 20))]
    pub position: String,

    #[validate(length(min = 1, max = 20))]
    pub telephone: String,

    #[validate(email, length(max = 30))]
    pub email: String,
}

/// Descriptor of one contact table
#[derive(Debug, Clone, Copy)]
pub struct ContactTable {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub not_found: ErrorCode,
    /// Reported when the owner row referenced by a new contact is missing
    pub owner_not_found: ErrorCode,
}

impl ContactTable {
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

    pub async fn create<'e, T, E>(&self, executor: E, owner_id: i32, dto: &ContactDto) -> Result<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO {} ({}, contact, position, telephone, email) VALUES ($1, $2, $3, $4, $5) RETURNING *",
            self.table, self.owner_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(owner_id)
            .bind(&dto.contact)
            .bind(&dto.position)
            .bind(&dto.telephone)
            .bind(&dto.email)
            .fetch_one(executor)
            .await
            .map_err(|e| match handle_db_error(e, self.not_found) {
                // The only foreign key on a contact row is its owner
                AppError::BadRequest(_) => AppError::NotFound(self.owner_not_found),
                other => other,
            })
    }

    pub async fn update<'e, T, E>(&self, executor: E, id: i32, dto: &ContactDto) -> Result<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: PgExecutor<'e>,
    {
        let sql = format!(
            r#"
            UPDATE {}
            SET contact = $2, position = $3, telephone = $4, email = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
            self.table
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(&dto.contact)
            .bind(&dto.position)
            .bind(&dto.telephone)
            .bind(&dto.email)
            .fetch_optional(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update {}: {:?}", self.table, e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(self.not_found))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn contact(email: String) -> ContactDto {
        ContactDto {
            contact: Name().fake::<String>().chars().take(20).collect(),
            position: "Sales manager".to_string(),
            telephone: "+94 11 2345678".to_string(),
            email,
        }
    }

    #[test]
    fn test_valid_contact() {
        assert!(contact("sales@galleface.lk".to_string()).validate().is_ok());
    }

    #[test]
    fn test_email_must_be_valid() {
        let errors = contact("not-an-email".to_string()).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_contact_rejected() {
        let mut dto = contact("sales@galleface.lk".to_string());
        dto.contact = String::new();
        assert!(dto.validate().is_err());
    }
}
