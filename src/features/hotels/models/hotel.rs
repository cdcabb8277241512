use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::shared::enums::{Currency, Level};

/// Database model for hotel
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Hotel {
    pub id: i32,
    pub country_id: i32,
    pub city_id: i32,
    pub company_id: i32,
    pub address: String,
    pub name: String,
    pub name_en: String,
    pub nickname_en: String,
    #[schema(value_type = i16)]
    pub star_level: Level,
    /// Rating on review sites
    #[schema(value_type = i16)]
    pub comment_level: Level,
    pub standard_room_number: i16,
    pub standard_double_room_number: i16,
    pub triple_room_number: i16,
    pub suite_room_number: i16,
    pub tour_guide_room_number: i16,
    pub start_year: i16,
    pub telephone: String,
    pub email: String,
    pub intro_cn: Option<String>,
    pub intro_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct HotelContact {
    pub id: i32,
    pub hotel_id: i32,
    pub contact: String,
    pub position: String,
    pub telephone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct HotelAccount {
    pub id: i32,
    pub hotel_id: i32,
    #[schema(value_type = i16)]
    pub currency: Currency,
    pub bank_name: String,
    pub deposit_bank: String,
    pub payee: String,
    pub account: String,
    pub swift_code: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
