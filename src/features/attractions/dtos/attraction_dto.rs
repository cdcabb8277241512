use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::shared::types::{default_number, default_page};
use crate::shared::validation::{validate_amount, validate_ratio};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AttractionDto {
    pub country_id: i32,
    pub city_id: i32,

    #[validate(length(min = 1, max = 80))]
    pub address: String,

    #[validate(length(min = 1, max = 30))]
    pub name: String,

    #[validate(length(min = 1, max = 30))]
    pub name_en: String,

    #[validate(length(min = 1, max = 30))]
    pub nickname_en: String,

    #[validate(length(max = 128))]
    pub intro_cn: Option<String>,

    #[validate(length(max = 128))]
    pub intro_en: Option<String>,

    #[validate(length(max = 100))]
    pub note: Option<String>,
}

/// Search attractions by location and exact name
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttractionSearchQuery {
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    pub name: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(AttractionSearchQuery);

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AttractionFeeDto {
    #[validate(custom(function = "validate_amount"))]
    pub public_price: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub company_price: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub tour_guide_price: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub translator_price: Decimal,

    #[validate(range(min = 0))]
    pub free_policy: i32,

    /// Between 0 and 1
    #[validate(custom(function = "validate_ratio"))]
    pub child_discount: Decimal,

    #[validate(length(max = 100))]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fee_json() -> serde_json::Value {
        json!({
            "public_price": "30",
            "company_price": "25",
            "tour_guide_price": "0",
            "translator_price": "12.5",
            "free_policy": 1,
            "child_discount": "0.5"
        })
    }

    #[test]
    fn test_fee_dto_valid() {
        let dto: AttractionFeeDto = serde_json::from_value(fee_json()).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_child_discount_above_one_rejected() {
        let mut value = fee_json();
        value["child_discount"] = json!("1.2");
        let dto: AttractionFeeDto = serde_json::from_value(value).unwrap();
        assert!(dto
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("child_discount"));
    }

    #[test]
    fn test_attraction_name_length() {
        let dto: AttractionDto = serde_json::from_value(json!({
            "country_id": 1,
            "city_id": 2,
            "address": "Sigiriya, Matale District",
            "name": "狮子岩",
            "name_en": "Sigiriya Rock Fortress and Water Gardens",
            "nickname_en": "Sigiriya"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name_en"));
        assert_eq!(errors.field_errors().len(), 1);
    }
}
