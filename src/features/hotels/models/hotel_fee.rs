use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::coded_enum;

coded_enum! {
    /// How free rooms are granted to a group
    pub enum FreePolicy {
        People = 1,
        Room = 2,
    }
}

coded_enum! {
    pub enum RoomType {
        Single = 1,
        Double = 2,
        Triple = 3,
        Suite = 4,
        TourGuide = 5,
    }
}

coded_enum! {
    pub enum MealType {
        Breakfast = 1,
        Lunch = 2,
        Dinner = 3,
    }
}

coded_enum! {
    pub enum RoomLevel {
        Standard = 1,
        Deluxe = 2,
        Suite = 3,
    }
}

coded_enum! {
    pub enum FestivalType {
        ChristmasEve = 1,
        Christmas = 2,
        NewYear = 3,
        ChineseNewYear = 4,
    }
}

/// Fee agreement of a hotel; prices live in the four price tables
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct HotelFee {
    pub id: i32,
    pub hotel_id: i32,
    #[schema(value_type = Option<i16>)]
    pub free_policy: Option<FreePolicy>,
    /// One free unit for every `free` people or rooms
    pub free: Option<i32>,
    pub note: Option<String>,
    pub confirm_person: String,
    pub attachment_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct RoomPrice {
    pub id: i32,
    pub hotel_fee_id: i32,
    #[schema(value_type = i16)]
    pub room_type: RoomType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct MealPrice {
    pub id: i32,
    pub hotel_fee_id: i32,
    #[schema(value_type = i16)]
    pub meal_type: MealType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct RoomAdditionalCharge {
    pub id: i32,
    pub hotel_fee_id: i32,
    #[schema(value_type = i16)]
    pub room_level: RoomLevel,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct FestivalAdditionalCharge {
    pub id: i32,
    pub hotel_fee_id: i32,
    #[schema(value_type = i16)]
    pub festival_type: FestivalType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub price: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
