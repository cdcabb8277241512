use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::shared::company::CompanyInfo;

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct HotelCompany {
    pub id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub company: CompanyInfo,
    pub intro: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct HotelCompanyContact {
    pub id: i32,
    pub company_id: i32,
    pub contact: String,
    pub position: String,
    pub telephone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
