use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::coded_enum;
use crate::shared::enums::{Currency, Level};

coded_enum! {
    pub enum RestaurantType {
        Chinese = 1,
        SriLankan = 2,
        Western = 3,
        Special = 4,
        General = 5,
    }
}

coded_enum! {
    pub enum CostLevel {
        Luxury = 1,
        Normal = 2,
        Budget = 3,
    }
}

coded_enum! {
    pub enum CooperationLevel {
        Key = 1,
        Normal = 2,
    }
}

coded_enum! {
    /// Set menu tier; a restaurant has at most one meal of each tier
    pub enum MealType {
        Standard = 1,
        Upgrade = 2,
        Luxury = 3,
    }
}

/// Database model for restaurant
///
/// The two mandatory contacts and the optional third one are stored inline.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Restaurant {
    pub id: i32,
    pub company_id: Option<i32>,
    pub country_id: i32,
    pub city_id: i32,
    pub address: String,
    pub name: String,
    pub name_en: String,
    pub nickname_en: String,
    #[schema(value_type = i16)]
    pub restaurant_type: RestaurantType,
    pub intro_cn: Option<String>,
    pub intro_en: Option<String>,
    #[schema(value_type = i16)]
    pub environ_level: Level,
    #[schema(value_type = i16)]
    pub taste_level: Level,
    #[schema(value_type = i16)]
    pub service_level: Level,
    #[schema(value_type = i16)]
    pub recommend_level: Level,
    #[schema(value_type = i16)]
    pub cost_level: CostLevel,
    #[schema(value_type = i16)]
    pub cooperation_level: CooperationLevel,
    pub contact_one: String,
    pub position_one: String,
    pub telephone_one: String,
    pub email_one: String,
    pub contact_two: String,
    pub position_two: String,
    pub telephone_two: String,
    pub email_two: String,
    pub contact_three: Option<String>,
    pub position_three: Option<String>,
    pub telephone_three: Option<String>,
    pub email_three: Option<String>,
    pub standard_meal_intro_cn: Option<String>,
    pub standard_meal_intro_en: Option<String>,
    pub upgrade_meal_intro_cn: Option<String>,
    pub upgrade_meal_intro_en: Option<String>,
    pub luxury_meal_intro_cn: Option<String>,
    pub luxury_meal_intro_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct RestaurantMeal {
    pub id: i32,
    pub restaurant_id: i32,
    #[schema(value_type = i16)]
    pub meal_type: MealType,
    pub adult_fee: Decimal,
    pub adult_cost: Decimal,
    pub child_fee: Decimal,
    pub child_cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct RestaurantAccount {
    pub id: i32,
    pub restaurant_id: i32,
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
