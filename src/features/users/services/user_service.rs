use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto};
use crate::features::users::models::{User, UserKeyType, ADMIN_DEFAULT_ROLE, CUSTOMER_ROLE};
use crate::features::users::services::hash_password;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Admins keep the requested role, customers always get [`CUSTOMER_ROLE`]
    pub async fn create(&self, dto: &CreateUserDto) -> Result<User> {
        let role = if dto.is_admin {
            dto.role.unwrap_or(ADMIN_DEFAULT_ROLE)
        } else {
            CUSTOMER_ROLE
        };
        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users
                (uuid, user_name, password_hash, role, is_admin, customer_name, address, telephone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&dto.user_name)
        .bind(&password_hash)
        .bind(role)
        .bind(dto.is_admin)
        .bind(&dto.customer_name)
        .bind(&dto.address)
        .bind(&dto.telephone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::UserNameDuplicated))?;

        tracing::info!("Created user {} ({}), role {}", user.id, user.user_name, user.role);
        Ok(user)
    }

    async fn find_by<V>(&self, column: &str, value: V) -> Result<User>
    where
        V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
    {
        let sql = format!("SELECT * FROM users WHERE {} = $1 ORDER BY id LIMIT 1", column);
        sqlx::query_as::<_, User>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by {}: {:?}", column, e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::UserNotExist))
    }

    /// Look a user up by uuid, id, user name or customer name
    pub async fn get_by_key(&self, key: &str, key_type: UserKeyType) -> Result<User> {
        match key_type {
            UserKeyType::Uuid => {
                let uuid = Uuid::parse_str(key)
                    .map_err(|_| AppError::BadRequest(format!("'{}' is not a uuid", key)))?;
                self.find_by("uuid", uuid).await
            }
            UserKeyType::Id => {
                let id: i32 = key
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("'{}' is not a user id", key)))?;
                self.find_by("id", id).await
            }
            UserKeyType::UserName => self.find_by("user_name", key.to_string()).await,
            UserKeyType::CustomerName => self.find_by("customer_name", key.to_string()).await,
        }
    }

    /// Apply the fields present in `dto`; a new password is hashed again
    pub async fn update(&self, id: i32, dto: &UpdateUserDto) -> Result<User> {
        let current = self.find_by("id", id).await?;
        let role = if current.is_admin { dto.role } else { None };
        let password_hash = dto.password.as_deref().map(hash_password).transpose()?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET user_name = COALESCE($2, user_name),
                password_hash = COALESCE($3, password_hash),
                role = COALESCE($4, role),
                customer_name = COALESCE($5, customer_name),
                address = COALESCE($6, address),
                telephone = COALESCE($7, telephone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.user_name)
        .bind(&password_hash)
        .bind(role)
        .bind(&dto.customer_name)
        .bind(&dto.address)
        .bind(&dto.telephone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::UserNameDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::UserNotExist))?;

        tracing::info!("Updated user {}", id);
        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete user: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::UserNotExist));
        }

        tracing::info!("Deleted user {}", id);
        Ok(())
    }
}
