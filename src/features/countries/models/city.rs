use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for city
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct City {
    pub id: i32,
    pub country_id: i32,
    pub name: String,
    pub name_en: String,
    pub abbreviation: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
