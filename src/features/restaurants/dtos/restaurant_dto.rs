use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::restaurants::models::{CooperationLevel, CostLevel, MealType, RestaurantType};
use crate::shared::enums::Level;
use crate::shared::types::{default_number, default_page};
use crate::shared::validation::validate_amount;

/// Request DTO for creating or replacing a restaurant
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RestaurantDto {
    pub company_id: Option<i32>,
    pub country_id: i32,
    pub city_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub address: String,

    #[validate(length(min = 1, max = 30))]
    pub name: String,

    #[validate(length(min = 1, max = 30))]
    pub name_en: String,

    #[validate(length(min = 1, max = 20))]
    pub nickname_en: String,

    /// 1 = Chinese, 2 = Sri Lankan, 3 = Western, 4 = special, 5 = general
    #[schema(value_type = i16)]
    pub restaurant_type: RestaurantType,

    #[validate(length(max = 128))]
    pub intro_cn: Option<String>,

    #[validate(length(max = 128))]
    pub intro_en: Option<String>,

    #[schema(value_type = i16)]
    pub environ_level: Level,
    #[schema(value_type = i16)]
    pub taste_level: Level,
    #[schema(value_type = i16)]
    pub service_level: Level,
    #[schema(value_type = i16)]
    pub recommend_level: Level,
    /// 1 = luxury, 2 = normal, 3 = budget
    #[schema(value_type = i16)]
    pub cost_level: CostLevel,
    /// 1 = key partner, 2 = normal
    #[schema(value_type = i16)]
    pub cooperation_level: CooperationLevel,

    #[validate(length(min = 1, max = 20))]
    pub contact_one: String,
    #[validate(length(min = 1, max = 20))]
    pub position_one: String,
    #[validate(length(min = 1, max = 20))]
    pub telephone_one: String,
    #[validate(email, length(max = 30))]
    pub email_one: String,

    #[validate(length(min = 1, max = 20))]
    pub contact_two: String,
    #[validate(length(min = 1, max = 20))]
    pub position_two: String,
    #[validate(length(min = 1, max = 20))]
    pub telephone_two: String,
    #[validate(email, length(max = 30))]
    pub email_two: String,

    #[validate(length(max = 20))]
    pub contact_three: Option<String>,
    #[validate(length(max = 20))]
    pub position_three: Option<String>,
    #[validate(length(max = 20))]
    pub telephone_three: Option<String>,
    #[validate(email, length(max = 30))]
    pub email_three: Option<String>,

    #[validate(length(max = 500))]
    pub standard_meal_intro_cn: Option<String>,
    #[validate(length(max = 800))]
    pub standard_meal_intro_en: Option<String>,
    #[validate(length(max = 500))]
    pub upgrade_meal_intro_cn: Option<String>,
    #[validate(length(max = 800))]
    pub upgrade_meal_intro_en: Option<String>,
    #[validate(length(max = 500))]
    pub luxury_meal_intro_cn: Option<String>,
    #[validate(length(max = 800))]
    pub luxury_meal_intro_en: Option<String>,
}

/// Search restaurants by location, company and type
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RestaurantSearchQuery {
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    pub company_id: Option<i32>,
    #[param(value_type = Option<i16>)]
    pub restaurant_type: Option<RestaurantType>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(RestaurantSearchQuery);

/// Quote and cost of one set menu tier
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RestaurantMealDto {
    /// 1 = standard, 2 = upgrade, 3 = luxury
    #[schema(value_type = i16)]
    pub meal_type: MealType,

    #[validate(custom(function = "validate_amount"))]
    pub adult_fee: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub adult_cost: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub child_fee: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub child_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn restaurant_json() -> serde_json::Value {
        json!({
            "country_id": 1,
            "city_id": 2,
            "address": "29 Alexandra Place, Colombo 07",
            "name": "明园",
            "name_en": "Ming Court",
            "nickname_en": "MC",
            "restaurant_type": 1,
            "environ_level": 2,
            "taste_level": 1,
            "service_level": 2,
            "recommend_level": 1,
            "cost_level": 2,
            "cooperation_level": 1,
            "contact_one": "Nimal Perera",
            "position_one": "Manager",
            "telephone_one": "+94 11 2686543",
            "email_one": "nimal@mingcourt.lk",
            "contact_two": "Wei Zhang",
            "position_two": "Chef",
            "telephone_two": "+94 77 1234567",
            "email_two": "wei@mingcourt.lk"
        })
    }

    #[test]
    fn test_restaurant_without_third_contact_is_valid() {
        let dto: RestaurantDto = serde_json::from_value(restaurant_json()).unwrap();
        assert!(dto.company_id.is_none());
        assert!(dto.contact_three.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_third_contact_email_checked_when_present() {
        let mut value = restaurant_json();
        value["email_three"] = json!("nobody");
        let dto: RestaurantDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email_three"));
    }

    #[test]
    fn test_cooperation_level_is_one_or_two() {
        let mut value = restaurant_json();
        value["cooperation_level"] = json!(3);
        assert!(serde_json::from_value::<RestaurantDto>(value).is_err());
    }

    #[test]
    fn test_meal_cost_cannot_be_negative() {
        let dto: RestaurantMealDto = serde_json::from_value(json!({
            "meal_type": 3,
            "adult_fee": "25.000",
            "adult_cost": "-1",
            "child_fee": "12.500",
            "child_cost": "8"
        }))
        .unwrap();
        assert_eq!(dto.meal_type, MealType::Luxury);
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("adult_cost"));
    }
}
