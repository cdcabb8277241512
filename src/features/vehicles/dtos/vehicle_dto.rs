use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::features::vehicles::models::VehicleKind;
use crate::shared::types::{default_number, default_page};
use crate::shared::validation::{validate_amount, validate_period, LICENSE_REGEX, YEAR_REGEX};

// ==================== Vehicle types ====================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VehicleTypeDto {
    /// 1 = car, 2 = van, 3 = big van, 4 = mini coach, 5 = coach, 6 = long coach, 7 = other
    #[schema(value_type = i16)]
    pub vehicle_type: VehicleKind,

    #[validate(length(min = 1, max = 20))]
    pub brand: String,

    #[validate(range(min = 1, max = 127))]
    pub seat: i16,

    #[validate(range(min = 1, max = 127))]
    pub available_seat: i16,

    #[validate(range(min = 1, max = 127))]
    pub passenger_count: i16,

    #[validate(length(max = 100))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct VehicleTypeSearchQuery {
    #[param(value_type = Option<i16>)]
    pub vehicle_type: Option<VehicleKind>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(VehicleTypeSearchQuery);

// ==================== Vehicles ====================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VehicleDto {
    pub country_id: i32,
    pub city_id: i32,
    pub company_id: i32,
    pub vehicle_type_id: i32,

    #[validate(length(min = 1, max = 10), regex(path = *LICENSE_REGEX))]
    pub license: String,

    #[validate(length(min = 1, max = 30))]
    pub insurance_number: String,

    /// Four digit year
    #[validate(regex(path = *YEAR_REGEX))]
    pub start_use: String,

    #[validate(length(min = 1, max = 20))]
    pub register_number: String,
}

/// Search vehicles: an exact `license`, else location, company and type
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct VehicleSearchQuery {
    pub license: Option<String>,
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    pub company_id: Option<i32>,
    pub vehicle_type_id: Option<i32>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(VehicleSearchQuery);

// ==================== Fees ====================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_fee_period"))]
pub struct VehicleFeeDto {
    pub company_id: i32,
    pub vehicle_type_id: i32,

    #[validate(custom(function = "validate_amount"))]
    pub unit_price: Decimal,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    #[validate(length(max = 30))]
    pub confirm_person: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub attachment_hash: String,
}

fn validate_fee_period(fee: &VehicleFeeDto) -> Result<(), ValidationError> {
    validate_period(&fee.start_time, &fee.end_time)
}

/// Search vehicle fees; `start_time`/`end_time` bound the validity period
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct VehicleFeeSearchQuery {
    pub vehicle_type_id: Option<i32>,
    pub company_id: Option<i32>,
    #[param(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
    pub confirm_person: Option<String>,
    /// Fees starting at or after this instant
    pub start_time: Option<DateTime<Utc>>,
    /// Fees ending at or before this instant
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(VehicleFeeSearchQuery);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle_json() -> serde_json::Value {
        json!({
            "country_id": 1,
            "city_id": 1,
            "company_id": 2,
            "vehicle_type_id": 3,
            "license": "WP KA-4521",
            "insurance_number": "SLIC-2024-009912",
            "start_use": "2019",
            "register_number": "SLTDA/V/0457"
        })
    }

    #[test]
    fn test_vehicle_dto_valid() {
        let dto: VehicleDto = serde_json::from_value(vehicle_json()).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_license_format_and_length() {
        let mut value = vehicle_json();
        value["license"] = json!("wp ka-4521");
        let dto: VehicleDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().unwrap_err().field_errors().contains_key("license"));

        let mut value = vehicle_json();
        value["license"] = json!("WP KA-452199");
        let dto: VehicleDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_start_use_must_be_a_year() {
        let mut value = vehicle_json();
        value["start_use"] = json!("19");
        let dto: VehicleDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().unwrap_err().field_errors().contains_key("start_use"));
    }

    #[test]
    fn test_fee_period_checked() {
        let dto: VehicleFeeDto = serde_json::from_value(json!({
            "company_id": 1,
            "vehicle_type_id": 1,
            "unit_price": "0.850",
            "start_time": "2025-06-01T00:00:00Z",
            "end_time": "2025-01-01T00:00:00Z",
            "attachment_hash": "9f86d081884c7d659a2feaa0c55ad015"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.field_errors()["__all__"][0].code, "period");
    }

    #[test]
    fn test_vehicle_type_seat_range() {
        let dto: VehicleTypeDto = serde_json::from_value(json!({
            "vehicle_type": 5,
            "brand": "Ashok Leyland",
            "seat": 0,
            "available_seat": 40,
            "passenger_count": 35
        }))
        .unwrap();
        assert_eq!(dto.vehicle_type, VehicleKind::Coach);
        assert!(dto.validate().unwrap_err().field_errors().contains_key("seat"));
    }
}
