use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::tour_guides::models::{CertificateType, Gender, GuideType, ServiceType};
use crate::shared::enums::Currency;
use crate::shared::types::{default_number, default_page};
use crate::shared::validation::{validate_amount, validate_start_work};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TourGuideDto {
    /// 0 = international, 1 = driver, 2 = attraction, 3 = translator
    #[schema(value_type = i16)]
    pub guide_type: GuideType,

    pub country_id: i32,

    #[validate(length(min = 1, max = 10))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub name_en: Option<String>,

    /// 1 = male, 2 = female
    #[schema(value_type = i16)]
    pub gender: Gender,

    pub birthday: NaiveDate,

    #[validate(custom(function = "validate_start_work"))]
    pub start_work: i16,

    #[validate(length(min = 1, max = 20))]
    pub language: String,

    /// 1 = ID card, 2 = passport
    #[schema(value_type = i16)]
    pub certificate_type: CertificateType,

    #[validate(length(min = 1, max = 20))]
    pub certificate_number: String,

    #[validate(length(min = 1, max = 20))]
    pub tour_guide_number: String,

    #[validate(length(max = 30))]
    pub passport_country: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub telephone: String,

    #[validate(length(min = 1, max = 256))]
    pub intro: String,

    #[validate(length(min = 1, max = 128))]
    pub image_hash: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TourGuideSearchQuery {
    pub country_id: Option<i32>,
    #[param(value_type = Option<i16>)]
    pub gender: Option<Gender>,
    #[param(value_type = Option<i16>)]
    pub guide_type: Option<GuideType>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(TourGuideSearchQuery);

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TourGuideFeeDto {
    #[schema(value_type = i16)]
    pub currency: Currency,

    #[validate(custom(function = "validate_amount"))]
    pub base_fee: Decimal,

    /// 1 = fixed, 2 = per head
    #[schema(value_type = i16)]
    pub service_type: ServiceType,

    #[validate(custom(function = "validate_amount"))]
    pub service_fee: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guide_json() -> serde_json::Value {
        json!({
            "guide_type": 0,
            "country_id": 1,
            "name": "陈明",
            "name_en": "Chen Ming",
            "gender": 1,
            "birthday": "1986-04-12",
            "start_work": 2010,
            "language": "zh,en",
            "certificate_type": 2,
            "certificate_number": "E12345678",
            "tour_guide_number": "SLTDA-G-221",
            "telephone": "+94 77 123 4567",
            "intro": "Chinese speaking guide for the cultural triangle",
            "image_hash": "5d41402abc4b2a76b9719d911017c592"
        })
    }

    #[test]
    fn test_tour_guide_dto_valid() {
        let dto: TourGuideDto = serde_json::from_value(guide_json()).unwrap();
        assert_eq!(dto.guide_type, GuideType::International);
        assert_eq!(dto.birthday, NaiveDate::from_ymd_opt(1986, 4, 12).unwrap());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_start_work_before_1900_rejected() {
        let mut value = guide_json();
        value["start_work"] = json!(1899);
        let dto: TourGuideDto = serde_json::from_value(value).unwrap();
        assert!(dto
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("start_work"));
    }

    #[test]
    fn test_unknown_gender_rejected_by_serde() {
        let mut value = guide_json();
        value["gender"] = json!(3);
        assert!(serde_json::from_value::<TourGuideDto>(value).is_err());
    }

    #[test]
    fn test_fee_amounts_not_negative() {
        let dto: TourGuideFeeDto = serde_json::from_value(json!({
            "currency": 3,
            "base_fee": "4500",
            "service_type": 2,
            "service_fee": "-10"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("service_fee"));
        assert!(!errors.field_errors().contains_key("base_fee"));
    }
}
