use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::hotels::models::{Hotel, HotelContact};
use crate::shared::enums::Level;
use crate::shared::types::{default_number, default_page};

/// Request DTO for creating or replacing a hotel
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HotelDto {
    pub country_id: i32,
    pub city_id: i32,
    pub company_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub address: String,

    #[validate(length(min = 1, max = 30))]
    pub name: String,

    #[validate(length(min = 1, max = 30))]
    pub name_en: String,

    #[validate(length(min = 1, max = 20))]
    pub nickname_en: String,

    /// 1..=5
    #[schema(value_type = i16)]
    pub star_level: Level,

    /// 1..=5
    #[schema(value_type = i16)]
    pub comment_level: Level,

    #[validate(range(min = 0))]
    pub standard_room_number: i16,
    #[validate(range(min = 0))]
    pub standard_double_room_number: i16,
    #[validate(range(min = 0))]
    pub triple_room_number: i16,
    #[validate(range(min = 0))]
    pub suite_room_number: i16,
    #[validate(range(min = 0))]
    pub tour_guide_room_number: i16,

    #[validate(range(min = 1800, max = 2100))]
    pub start_year: i16,

    #[validate(length(min = 1, max = 20))]
    pub telephone: String,

    #[validate(email, length(max = 30))]
    pub email: String,

    #[validate(length(max = 500))]
    pub intro_cn: Option<String>,

    #[validate(length(max = 800))]
    pub intro_en: Option<String>,
}

/// Hotel with its contact people
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelDetailDto {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub contact_list: Vec<HotelContact>,
}

/// Search hotels.
///
/// Location: `city_id`, else `country_id`. Name: `name`, else `name_en`, else `nickname_en`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct HotelSearchQuery {
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    pub company_id: Option<i32>,
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub nickname_en: Option<String>,
    #[param(value_type = Option<i16>)]
    pub star_level: Option<Level>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(HotelSearchQuery);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hotel_json() -> serde_json::Value {
        json!({
            "country_id": 1,
            "city_id": 1,
            "company_id": 1,
            "address": "2 Galle Road, Colombo 03",
            "name": "加勒菲斯酒店",
            "name_en": "Galle Face Hotel",
            "nickname_en": "GFH",
            "star_level": 5,
            "comment_level": 4,
            "standard_room_number": 60,
            "standard_double_room_number": 40,
            "triple_room_number": 10,
            "suite_room_number": 12,
            "tour_guide_room_number": 4,
            "start_year": 1864,
            "telephone": "+94 11 2541010",
            "email": "info@gallefacehotel.com"
        })
    }

    #[test]
    fn test_hotel_dto_valid() {
        let dto: HotelDto = serde_json::from_value(hotel_json()).unwrap();
        assert_eq!(dto.star_level, Level::Five);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_star_level_outside_range_rejected() {
        let mut value = hotel_json();
        value["star_level"] = json!(6);
        assert!(serde_json::from_value::<HotelDto>(value).is_err());
    }

    #[test]
    fn test_negative_room_number_rejected() {
        let mut value = hotel_json();
        value["suite_room_number"] = json!(-1);
        let dto: HotelDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("suite_room_number"));
    }
}
