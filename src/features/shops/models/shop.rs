use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::coded_enum;

coded_enum! {
    pub enum ShopType {
        Jewelry = 1,
        Tea = 2,
        Other = 3,
    }
}

coded_enum! {
    /// When commissions are settled
    pub enum AccountPeriod {
        Now = 1,
        Month = 2,
    }
}

coded_enum! {
    pub enum AccountWay {
        Cash = 1,
        Check = 2,
        Transfer = 3,
    }
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Shop {
    pub id: i32,
    pub country_id: i32,
    pub city_id: i32,
    /// Detached shops keep running without a company
    pub company_id: Option<i32>,
    pub address: String,
    #[schema(value_type = i16)]
    pub shop_type: ShopType,
    pub name: String,
    pub name_en: String,
    pub nickname_en: String,
    pub intro_cn: Option<String>,
    pub intro_en: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Commission agreement of a shop, at most one per shop
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct ShopFee {
    pub id: i32,
    pub shop_id: i32,
    /// Fixed fee paid per visitor
    pub fee_person: Decimal,
    pub company_ratio: Decimal,
    pub tour_guide_ratio: Decimal,
    #[schema(value_type = i16)]
    pub account_period: AccountPeriod,
    #[schema(value_type = i16)]
    pub account_way: AccountWay,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
