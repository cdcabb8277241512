use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::shared::company::CompanyInfo;

/// Shopping group that owns one or more shops
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct ShopCompany {
    pub id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub company: CompanyInfo,
    pub intro: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct ShopCompanyContact {
    pub id: i32,
    pub company_id: i32,
    pub contact: String,
    pub position: String,
    pub telephone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
