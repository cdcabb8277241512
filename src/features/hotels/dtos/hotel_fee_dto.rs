use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::hotels::models::{
    FestivalAdditionalCharge, FestivalType, FreePolicy, HotelFee, MealPrice, MealType,
    RoomAdditionalCharge, RoomLevel, RoomPrice, RoomType,
};
use crate::shared::validation::{validate_amount, validate_period};

/// Request DTO for creating or replacing a hotel fee agreement
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HotelFeeDto {
    /// 1 = per people, 2 = per room
    #[schema(value_type = Option<i16>)]
    pub free_policy: Option<FreePolicy>,

    #[validate(range(min = 1))]
    pub free: Option<i32>,

    #[validate(length(max = 100))]
    pub note: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub confirm_person: String,

    #[validate(length(max = 128))]
    pub attachment_hash: Option<String>,
}

/// Fee agreement with every price row
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelFeeDetailDto {
    #[serde(flatten)]
    pub fee: HotelFee,
    pub room_price_list: Vec<RoomPrice>,
    pub meal_price_list: Vec<MealPrice>,
    pub room_additional_charge_list: Vec<RoomAdditionalCharge>,
    pub festival_additional_charge_list: Vec<FestivalAdditionalCharge>,
}

/// A dated price row of a hotel fee, keyed by a per-table kind code
pub trait PriceRowDto: Validate {
    fn kind(&self) -> i16;
    fn start_time(&self) -> DateTime<Utc>;
    fn end_time(&self) -> DateTime<Utc>;
    fn price(&self) -> Decimal;
    fn note(&self) -> Option<&str>;
}

macro_rules! price_row_dto {
    ($(#[$meta:meta])* $name:ident, $kind:ident: $kind_ty:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
        #[validate(schema(function = "validate_price_period::<Self>"))]
        pub struct $name {
            #[schema(value_type = i16)]
            pub $kind: $kind_ty,
            pub start_time: DateTime<Utc>,
            pub end_time: DateTime<Utc>,
            #[validate(custom(function = "validate_amount"))]
            pub price: Decimal,
            #[validate(length(max = 100))]
            pub note: Option<String>,
        }

        impl PriceRowDto for $name {
            fn kind(&self) -> i16 {
                self.$kind.code()
            }

            fn start_time(&self) -> DateTime<Utc> {
                self.start_time
            }

            fn end_time(&self) -> DateTime<Utc> {
                self.end_time
            }

            fn price(&self) -> Decimal {
                self.price
            }

            fn note(&self) -> Option<&str> {
                self.note.as_deref()
            }
        }
    };
}

fn validate_price_period<T: PriceRowDto>(row: &T) -> Result<(), ValidationError> {
    validate_period(&row.start_time(), &row.end_time())
}

price_row_dto!(
    /// Room price for one room type over a period
    RoomPriceDto, room_type: RoomType
);
price_row_dto!(
    /// Meal price for one meal over a period
    MealPriceDto, meal_type: MealType
);
price_row_dto!(
    /// Surcharge for a room level over a period
    RoomAdditionalChargeDto, room_level: RoomLevel
);
price_row_dto!(
    /// Surcharge during a festival
    FestivalAdditionalChargeDto, festival_type: FestivalType
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_price_row_valid() {
        let dto: RoomPriceDto = serde_json::from_value(json!({
            "room_type": 2,
            "start_time": "2024-05-01T00:00:00Z",
            "end_time": "2024-10-31T23:59:59Z",
            "price": "85.500"
        }))
        .unwrap();
        assert_eq!(dto.kind(), 2);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_period_must_not_end_before_start() {
        let dto: MealPriceDto = serde_json::from_value(json!({
            "meal_type": 1,
            "start_time": "2024-10-31T00:00:00Z",
            "end_time": "2024-05-01T00:00:00Z",
            "price": 12
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        let schema_errors = errors.field_errors();
        assert_eq!(schema_errors["__all__"][0].code, "period");
    }

    #[test]
    fn test_negative_price_rejected() {
        let dto: FestivalAdditionalChargeDto = serde_json::from_value(json!({
            "festival_type": 4,
            "start_time": "2025-01-28T00:00:00Z",
            "end_time": "2025-02-05T00:00:00Z",
            "price": -10
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = serde_json::from_value::<RoomAdditionalChargeDto>(json!({
            "room_level": 4,
            "start_time": "2024-05-01T00:00:00Z",
            "end_time": "2024-05-02T00:00:00Z",
            "price": 1
        }));
        assert!(result.is_err());
    }
}
