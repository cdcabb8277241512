use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for country
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub name_en: String,
    pub nationality: String,
    pub language: String,
    pub area_code: String,
    pub country_code: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
