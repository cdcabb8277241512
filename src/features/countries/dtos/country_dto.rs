use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::countries::models::{City, Country};
use crate::shared::validation::{ABBREVIATION_REGEX, AREA_CODE_REGEX};

/// Request DTO for creating or replacing a country
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CountryDto {
    #[validate(length(min = 1, max = 20))]
    pub name: String,

    #[validate(length(min = 1, max = 40))]
    pub name_en: String,

    #[validate(length(min = 1, max = 30))]
    pub nationality: String,

    #[validate(length(min = 1, max = 20))]
    pub language: String,

    /// International dialling prefix, e.g. "+94"
    #[validate(length(max = 8), regex(path = *AREA_CODE_REGEX))]
    pub area_code: String,

    #[validate(length(min = 1, max = 10))]
    pub country_code: String,

    #[validate(length(max = 50))]
    pub note: Option<String>,
}

/// Request DTO for creating or replacing a city
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CityDto {
    pub country_id: i32,

    #[validate(length(min = 1, max = 20))]
    pub name: String,

    #[validate(length(min = 1, max = 40))]
    pub name_en: String,

    #[validate(regex(path = *ABBREVIATION_REGEX))]
    pub abbreviation: String,

    #[validate(length(max = 50))]
    pub note: Option<String>,
}

/// Country together with its cities
#[derive(Debug, Serialize, ToSchema)]
pub struct CountryDetailDto {
    #[serde(flatten)]
    pub country: Country,
    pub city_list: Vec<City>,
}

/// City together with the country it belongs to
#[derive(Debug, Serialize, ToSchema)]
pub struct CityDetailDto {
    #[serde(flatten)]
    pub city: City,
    pub country: Country,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country_json() -> serde_json::Value {
        json!({
            "name": "斯里兰卡",
            "name_en": "Sri Lanka",
            "nationality": "Sri Lankan",
            "language": "Sinhala",
            "area_code": "+94",
            "country_code": "LK"
        })
    }

    #[test]
    fn test_country_dto_valid() {
        let dto: CountryDto = serde_json::from_value(country_json()).unwrap();
        assert!(dto.note.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_country_dto_rejects_bad_area_code() {
        let mut value = country_json();
        value["area_code"] = json!("94 11");
        let dto: CountryDto = serde_json::from_value(value).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("area_code"));
    }

    #[test]
    fn test_country_dto_requires_fields() {
        let mut value = country_json();
        value.as_object_mut().unwrap().remove("nationality");
        assert!(serde_json::from_value::<CountryDto>(value).is_err());
    }

    #[test]
    fn test_city_abbreviation_is_at_most_three_letters() {
        let dto: CityDto = serde_json::from_value(json!({
            "country_id": 1,
            "name": "科伦坡",
            "name_en": "Colombo",
            "abbreviation": "CMBO"
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
