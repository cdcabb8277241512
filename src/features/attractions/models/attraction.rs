use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Attraction {
    pub id: i32,
    pub country_id: i32,
    pub city_id: i32,
    pub address: String,
    pub name: String,
    pub name_en: String,
    pub nickname_en: String,
    pub intro_cn: Option<String>,
    pub intro_en: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ticket prices of an attraction
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct AttractionFee {
    pub id: i32,
    pub attraction_id: i32,
    pub public_price: Decimal,
    pub company_price: Decimal,
    pub tour_guide_price: Decimal,
    pub translator_price: Decimal,
    /// Number of free tickets per group
    pub free_policy: i32,
    /// Fraction of the price children pay
    pub child_discount: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
