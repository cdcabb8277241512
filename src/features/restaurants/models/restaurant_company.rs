use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::shared::company::CompanyInfo;

/// Company that runs one or more restaurants
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct RestaurantCompany {
    pub id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub company: CompanyInfo,
    pub intro: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
