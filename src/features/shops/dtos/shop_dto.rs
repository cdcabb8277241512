use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::shops::models::{AccountPeriod, AccountWay, ShopType};
use crate::shared::types::{default_number, default_page};
use crate::shared::validation::{validate_amount, validate_ratio};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ShopDto {
    pub country_id: i32,
    pub city_id: i32,
    pub company_id: Option<i32>,

    #[validate(length(min = 1, max = 100))]
    pub address: String,

    /// 1 = jewelry, 2 = tea, 3 = other
    #[schema(value_type = i16)]
    pub shop_type: ShopType,

    #[validate(length(min = 1, max = 40))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    pub name_en: String,

    #[validate(length(min = 1, max = 20))]
    pub nickname_en: String,

    #[validate(length(max = 500))]
    pub intro_cn: Option<String>,

    #[validate(length(max = 500))]
    pub intro_en: Option<String>,

    #[validate(length(max = 100))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ShopSearchQuery {
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    pub company_id: Option<i32>,
    #[param(value_type = Option<i16>)]
    pub shop_type: Option<ShopType>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(ShopSearchQuery);

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ShopFeeDto {
    #[validate(custom(function = "validate_amount"))]
    pub fee_person: Decimal,

    /// Share of sales paid to the company, in [0, 1]
    #[validate(custom(function = "validate_ratio"))]
    pub company_ratio: Decimal,

    /// Share of sales paid to the tour guide, in [0, 1]
    #[validate(custom(function = "validate_ratio"))]
    pub tour_guide_ratio: Decimal,

    /// 1 = settled immediately, 2 = monthly
    #[schema(value_type = i16)]
    pub account_period: AccountPeriod,

    /// 1 = cash, 2 = check, 3 = transfer
    #[schema(value_type = i16)]
    pub account_way: AccountWay,

    #[validate(length(max = 100))]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fee_json() -> serde_json::Value {
        json!({
            "fee_person": "5",
            "company_ratio": "0.15",
            "tour_guide_ratio": "0.05",
            "account_period": 2,
            "account_way": 3
        })
    }

    #[test]
    fn test_fee_within_bounds() {
        let dto: ShopFeeDto = serde_json::from_value(fee_json()).unwrap();
        assert_eq!(dto.account_way, AccountWay::Transfer);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_ratio_above_one_rejected() {
        let mut value = fee_json();
        value["company_ratio"] = json!("1.2");
        let dto: ShopFeeDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company_ratio"));
    }

    #[test]
    fn test_ratio_bounds_are_inclusive() {
        let mut value = fee_json();
        value["company_ratio"] = json!("1");
        value["tour_guide_ratio"] = json!("0");
        let dto: ShopFeeDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_unknown_account_period_rejected() {
        let mut value = fee_json();
        value["account_period"] = json!(3);
        assert!(serde_json::from_value::<ShopFeeDto>(value).is_err());
    }

    #[test]
    fn test_shop_name_length() {
        let dto: ShopDto = serde_json::from_value(json!({
            "country_id": 1,
            "city_id": 3,
            "address": "Kandy Road, Peradeniya",
            "shop_type": 2,
            "name": "",
            "name_en": "Ceylon Tea Factory",
            "nickname_en": "CTF"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
