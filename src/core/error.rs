use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

/// Postgres SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Flat business error taxonomy carried in the `code` field of every error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ==================== System ====================
    UnknownSystemError,
    DatabaseError,

    // ==================== Request ====================
    ValidationError,
    ParameterError,

    // ==================== Users ====================
    UserNameDuplicated,
    UserNotExist,

    // ==================== Countries & Cities ====================
    CountryNameDuplicated,
    CityNameDuplicated,
    CountryNotExist,
    CityNotExist,

    // ==================== Shops ====================
    ShopNotExist,
    ShopCompanyDuplicated,
    ShopCompanyNotExist,
    ShopDuplicated,
    ShopFeeDuplicated,
    ShopFeeNotExist,
    ShopContactNotExist,

    // ==================== Vehicles ====================
    VehicleCompanyDuplicated,
    VehicleCompanyNotExist,
    VehicleNotExist,
    VehicleLicenseDuplicated,
    VehicleTypeNotExist,
    VehicleAccountDuplicated,
    VehicleAccountNotExist,
    VehicleContactNotExist,
    VehicleFeeNotExist,

    // ==================== Hotels ====================
    HotelCompanyDuplicated,
    HotelCompanyNotExist,
    HotelDuplicated,
    HotelNotExist,
    HotelAccountDuplicated,
    HotelAccountNotExist,
    HotelContactNotExist,
    HotelFeeNotExist,
    RoomPriceNotExist,
    MealPriceNotExist,
    RoomAdditionalPriceNotExist,
    FestivalPriceNotExist,

    // ==================== Restaurants ====================
    RestaurantDuplicated,
    RestaurantNotExist,
    RestaurantMealNotExist,
    RestaurantMealDuplicated,
    RestaurantAccountDuplicated,
    RestaurantAccountNotExist,
    RestaurantCompanyDuplicated,
    RestaurantCompanyNotExist,

    // ==================== Tour Guides ====================
    TourGuideNotExist,
    TourGuideFeeDuplicated,
    TourGuideFeeNotExist,
    TourGuideAccountDuplicated,
    TourGuideAccountNotExist,

    // ==================== Attractions ====================
    AttractionDuplicated,
    AttractionNotExist,
    AttractionFeeDuplicated,
    AttractionFeeNotExist,
}

impl ErrorCode {
    /// Code returned with every successful response
    pub const SUCCESS: i32 = 200;

    pub fn code(self) -> i32 {
        use ErrorCode::*;
        match self {
            UnknownSystemError => 1001,
            DatabaseError => 1101,
            ValidationError => 2001,
            ParameterError => 2002,
            UserNameDuplicated => 3001,
            UserNotExist => 3002,
            CountryNameDuplicated => 3010,
            CityNameDuplicated => 3011,
            CountryNotExist => 3012,
            CityNotExist => 3013,
            ShopNotExist => 3020,
            ShopCompanyDuplicated => 3021,
            ShopCompanyNotExist => 3022,
            ShopDuplicated => 3023,
            ShopFeeDuplicated => 3024,
            ShopFeeNotExist => 3025,
            ShopContactNotExist => 3026,
            VehicleCompanyDuplicated => 3030,
            VehicleCompanyNotExist => 3031,
            VehicleNotExist => 3032,
            VehicleLicenseDuplicated => 3033,
            VehicleTypeNotExist => 3034,
            VehicleAccountDuplicated => 3035,
            VehicleAccountNotExist => 3036,
            VehicleContactNotExist => 3037,
            VehicleFeeNotExist => 3038,
            HotelCompanyDuplicated => 3040,
            HotelCompanyNotExist => 3041,
            HotelDuplicated => 3042,
            HotelNotExist => 3043,
            HotelAccountDuplicated => 3044,
            HotelAccountNotExist => 3045,
            HotelContactNotExist => 3046,
            HotelFeeNotExist => 3047,
            RoomPriceNotExist => 3048,
            MealPriceNotExist => 3049,
            RoomAdditionalPriceNotExist => 3050,
            FestivalPriceNotExist => 3051,
            RestaurantDuplicated => 3060,
            RestaurantNotExist => 3061,
            RestaurantMealNotExist => 3062,
            RestaurantMealDuplicated => 3063,
            RestaurantAccountDuplicated => 3064,
            RestaurantAccountNotExist => 3065,
            RestaurantCompanyDuplicated => 3066,
            RestaurantCompanyNotExist => 3067,
            TourGuideNotExist => 3070,
            TourGuideFeeDuplicated => 3071,
            TourGuideFeeNotExist => 3072,
            TourGuideAccountDuplicated => 3073,
            TourGuideAccountNotExist => 3074,
            AttractionDuplicated => 3080,
            AttractionNotExist => 3081,
            AttractionFeeDuplicated => 3082,
            AttractionFeeNotExist => 3083,
        }
    }

    pub fn message(self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnknownSystemError => "unknown system error",
            DatabaseError => "database error",
            ValidationError => "validation error",
            ParameterError => "parameter error",
            UserNameDuplicated => "user name duplicated",
            UserNotExist => "user not exist",
            CountryNameDuplicated => "country name or name_en duplicated",
            CityNameDuplicated => "city name or name_en duplicated",
            CountryNotExist => "country do not exist",
            CityNotExist => "city do not exist",
            ShopNotExist => "shop do not exist",
            ShopCompanyDuplicated => "shop company name or name_en duplicated",
            ShopCompanyNotExist => "shop company do not exist",
            ShopDuplicated => "shop name or name_en duplicated",
            ShopFeeDuplicated => "shop fee already exists",
            ShopFeeNotExist => "shop fee do not exist",
            ShopContactNotExist => "shop contact do not exist",
            VehicleCompanyDuplicated => "vehicle company name or name_en duplicated",
            VehicleCompanyNotExist => "vehicle company do not exist",
            VehicleNotExist => "vehicle do not exist",
            VehicleLicenseDuplicated => "vehicle license duplicated",
            VehicleTypeNotExist => "vehicle type do not exist",
            VehicleAccountDuplicated => "vehicle account duplicated",
            VehicleAccountNotExist => "vehicle account do not exist",
            VehicleContactNotExist => "vehicle contact do not exist",
            VehicleFeeNotExist => "vehicle fee do not exist",
            HotelCompanyDuplicated => "hotel company name or name_en duplicated",
            HotelCompanyNotExist => "hotel company do not exist",
            HotelDuplicated => "hotel name, name_en or nickname_en duplicated",
            HotelNotExist => "hotel do not exist",
            HotelAccountDuplicated => "hotel account duplicated",
            HotelAccountNotExist => "hotel account do not exist",
            HotelContactNotExist => "hotel contact do not exist",
            HotelFeeNotExist => "hotel fee do not exist",
            RoomPriceNotExist => "room price do not exist",
            MealPriceNotExist => "meal price do not exist",
            RoomAdditionalPriceNotExist => "room additional charge do not exist",
            FestivalPriceNotExist => "festival additional charge do not exist",
            RestaurantDuplicated => "restaurant name, name_en or nickname_en duplicated",
            RestaurantNotExist => "restaurant do not exist",
            RestaurantMealNotExist => "restaurant meal do not exist",
            RestaurantMealDuplicated => "restaurant meal type duplicated",
            RestaurantAccountDuplicated => "restaurant account duplicated",
            RestaurantAccountNotExist => "restaurant account do not exist",
            RestaurantCompanyDuplicated => "restaurant company name or name_en duplicated",
            RestaurantCompanyNotExist => "restaurant company do not exist",
            TourGuideNotExist => "tour guide do not exist",
            TourGuideFeeDuplicated => "tour guide fee already exists",
            TourGuideFeeNotExist => "tour guide fee do not exist",
            TourGuideAccountDuplicated => "tour guide account duplicated",
            TourGuideAccountNotExist => "tour guide account do not exist",
            AttractionDuplicated => "attraction name, name_en or nickname_en duplicated",
            AttractionNotExist => "attraction do not exist",
            AttractionFeeDuplicated => "attraction fee already exists",
            AttractionFeeNotExist => "attraction fee do not exist",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(ErrorCode),

    #[error("Conflict: {0}")]
    Conflict(ErrorCode),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Business code and message that go into the envelope
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            AppError::Database(_) => (
                ErrorCode::DatabaseError.code(),
                ErrorCode::DatabaseError.message().to_string(),
            ),
            AppError::NotFound(code) | AppError::Conflict(code) => {
                (code.code(), code.message().to_string())
            }
            AppError::Validation(msg) => (
                ErrorCode::ValidationError.code(),
                format!("invalidate argument: {}", msg),
            ),
            AppError::BadRequest(msg) => (
                ErrorCode::ParameterError.code(),
                format!("parameter error: {}", msg),
            ),
            AppError::Internal(_) => (
                ErrorCode::UnknownSystemError.code(),
                ErrorCode::UnknownSystemError.message().to_string(),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            _ => {}
        }

        let status = self.status();
        let (code, message) = self.code_and_message();
        let body = Json(ApiResponse::<()>::error(code, message));

        (status, body).into_response()
    }
}

/// Convert a database error into the domain error for the entity being written.
///
/// Unique violations become `Conflict(duplicated)`, foreign key violations become a
/// parameter error, everything else stays a database error.
pub fn handle_db_error(e: sqlx::Error, duplicated: ErrorCode) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return AppError::Conflict(duplicated),
            Some(FOREIGN_KEY_VIOLATION) => {
                let target = db_err.constraint().unwrap_or("foreign key");
                return AppError::BadRequest(format!("referenced record violates {}", target));
            }
            _ => {}
        }
    }

    tracing::error!("Database error: {:?}", e);
    AppError::Database(e)
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_keep_legacy_numbers() {
        assert_eq!(ErrorCode::UnknownSystemError.code(), 1001);
        assert_eq!(ErrorCode::DatabaseError.code(), 1101);
        assert_eq!(ErrorCode::ValidationError.code(), 2001);
        assert_eq!(ErrorCode::ParameterError.code(), 2002);
        assert_eq!(ErrorCode::CountryNameDuplicated.code(), 3010);
        assert_eq!(ErrorCode::CityNotExist.code(), 3013);
        assert_eq!(ErrorCode::VehicleNotExist.code(), 3032);
    }

    #[test]
    fn test_not_found_maps_to_404_with_code() {
        let err = AppError::NotFound(ErrorCode::HotelNotExist);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let (code, message) = err.code_and_message();
        assert_eq!(code, 3043);
        assert_eq!(message, "hotel do not exist");
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = AppError::Conflict(ErrorCode::CountryNameDuplicated);
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(
            err.code_and_message(),
            (3010, "country name or name_en duplicated".to_string())
        );
    }

    #[test]
    fn test_validation_and_parameter_messages() {
        let err = AppError::Validation("star_level: 9".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.code_and_message(),
            (2001, "invalidate argument: star_level: 9".to_string())
        );

        let err = AppError::BadRequest("'abc'".to_string());
        assert_eq!(
            err.code_and_message(),
            (2002, "parameter error: 'abc'".to_string())
        );
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::Internal("hash failure".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.code_and_message(),
            (1001, "unknown system error".to_string())
        );

        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(
            err.code_and_message(),
            (1101, "database error".to_string())
        );
    }

    #[test]
    fn test_handle_db_error_keeps_non_constraint_errors() {
        let err = handle_db_error(sqlx::Error::RowNotFound, ErrorCode::ShopDuplicated);
        assert!(matches!(err, AppError::Database(_)));
    }
}
