use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::coded_enum;
use crate::shared::enums::Currency;

coded_enum! {
    pub enum GuideType {
        International = 0,
        Driver = 1,
        Attraction = 2,
        Translator = 3,
    }
}

coded_enum! {
    pub enum Gender {
        Male = 1,
        Female = 2,
    }
}

coded_enum! {
    /// Document the certificate number belongs to
    pub enum CertificateType {
        Id = 1,
        Passport = 2,
    }
}

coded_enum! {
    /// Fixed service fee, or a fee per head
    pub enum ServiceType {
        Fixed = 1,
        Count = 2,
    }
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct TourGuide {
    pub id: i32,
    #[schema(value_type = i16)]
    pub guide_type: GuideType,
    pub country_id: i32,
    pub name: Option<String>,
    pub name_en: Option<String>,
    #[schema(value_type = i16)]
    pub gender: Gender,
    pub birthday: NaiveDate,
    /// Year the guide started working
    pub start_work: i16,
    pub language: String,
    #[schema(value_type = i16)]
    pub certificate_type: CertificateType,
    pub certificate_number: String,
    pub tour_guide_number: String,
    /// Country issuing the visa, for foreign guides
    pub passport_country: Option<String>,
    pub telephone: String,
    pub intro: String,
    /// Hash of the scanned passport or ID card
    pub image_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct TourGuideFee {
    pub id: i32,
    pub tour_guide_id: i32,
    #[schema(value_type = i16)]
    pub currency: Currency,
    pub base_fee: Decimal,
    #[schema(value_type = i16)]
    pub service_type: ServiceType,
    pub service_fee: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct TourGuideAccount {
    pub id: i32,
    pub tour_guide_id: i32,
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
