use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::coded_enum;

/// Role every customer account gets
pub const CUSTOMER_ROLE: i16 = 1;

/// Role of an admin created without an explicit one
pub const ADMIN_DEFAULT_ROLE: i16 = 99;

coded_enum! {
    /// Column a `GET /users/{key}` lookup matches on
    pub enum UserKeyType {
        Uuid = 0,
        Id = 1,
        UserName = 2,
        CustomerName = 3,
    }
}

impl Default for UserKeyType {
    fn default() -> Self {
        UserKeyType::Id
    }
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub uuid: Uuid,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: i16,
    pub is_admin: bool,
    pub customer_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    #[serde(skip_serializing)]
    pub session_id: Option<String>,
    pub session_created_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
