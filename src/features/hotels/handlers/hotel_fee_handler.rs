use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::hotels::dtos::{
    FestivalAdditionalChargeDto, HotelFeeDetailDto, HotelFeeDto, MealPriceDto,
    RoomAdditionalChargeDto, RoomPriceDto,
};
use crate::features::hotels::models::{
    FestivalAdditionalCharge, HotelFee, MealPrice, RoomAdditionalCharge, RoomPrice,
};
use crate::features::hotels::services::HotelFeeService;
use crate::shared::batch::BatchEditDto;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/ota/api/v1/hotels/{id}/fees",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Fee agreements of the hotel", body = ApiResponse<Vec<HotelFee>>),
        (status = 404, description = "Hotel not found")
    ),
    tag = "hotels"
)]
pub async fn list_hotel_fees(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<HotelFee>>>> {
    let fees = service.list(id).await?;
    Ok(Json(ApiResponse::success(fees)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotels/{id}/fees",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = HotelFeeDto,
    responses(
        (status = 200, description = "Fee agreement created", body = ApiResponse<HotelFee>),
        (status = 404, description = "Hotel not found")
    ),
    tag = "hotels"
)]
pub async fn create_hotel_fee(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<HotelFeeDto>,
) -> Result<Json<ApiResponse<HotelFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.create(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

/// Get a fee agreement with all of its price rows
#[utoipa::path(
    get,
    path = "/ota/api/v1/hotel-fees/{id}",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    responses(
        (status = 200, description = "Fee with price lists", body = ApiResponse<HotelFeeDetailDto>),
        (status = 404, description = "Hotel fee not found")
    ),
    tag = "hotels"
)]
pub async fn get_hotel_fee(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<HotelFeeDetailDto>>> {
    let fee = service.get(id).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/hotel-fees/{id}",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    request_body = HotelFeeDto,
    responses(
        (status = 200, description = "Fee agreement updated", body = ApiResponse<HotelFee>),
        (status = 404, description = "Hotel fee not found")
    ),
    tag = "hotels"
)]
pub async fn update_hotel_fee(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<HotelFeeDto>,
) -> Result<Json<ApiResponse<HotelFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

/// Delete a fee agreement with its price rows
#[utoipa::path(
    delete,
    path = "/ota/api/v1/hotel-fees/{id}",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    responses(
        (status = 200, description = "Fee agreement deleted"),
        (status = 404, description = "Hotel fee not found")
    ),
    tag = "hotels"
)]
pub async fn delete_hotel_fee(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Price Row Batches ====================

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotel-fees/{id}/room-prices/batch",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    request_body = BatchEditDto<RoomPriceDto>,
    responses(
        (status = 200, description = "Room prices after the batch", body = ApiResponse<Vec<RoomPrice>>),
        (status = 404, description = "Hotel fee or room price not found")
    ),
    tag = "hotels"
)]
pub async fn edit_room_prices(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<RoomPriceDto>>,
) -> Result<Json<ApiResponse<Vec<RoomPrice>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let rows = service.edit_room_prices(id, &batch).await?;
    Ok(Json(ApiResponse::success(rows)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotel-fees/{id}/meal-prices/batch",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    request_body = BatchEditDto<MealPriceDto>,
    responses(
        (status = 200, description = "Meal prices after the batch", body = ApiResponse<Vec<MealPrice>>),
        (status = 404, description = "Hotel fee or meal price not found")
    ),
    tag = "hotels"
)]
pub async fn edit_meal_prices(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<MealPriceDto>>,
) -> Result<Json<ApiResponse<Vec<MealPrice>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let rows = service.edit_meal_prices(id, &batch).await?;
    Ok(Json(ApiResponse::success(rows)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotel-fees/{id}/room-additional-charges/batch",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    request_body = BatchEditDto<RoomAdditionalChargeDto>,
    responses(
        (status = 200, description = "Room surcharges after the batch", body = ApiResponse<Vec<RoomAdditionalCharge>>),
        (status = 404, description = "Hotel fee or surcharge not found")
    ),
    tag = "hotels"
)]
pub async fn edit_room_additional_charges(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<RoomAdditionalChargeDto>>,
) -> Result<Json<ApiResponse<Vec<RoomAdditionalCharge>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let rows = service.edit_room_additional_charges(id, &batch).await?;
    Ok(Json(ApiResponse::success(rows)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotel-fees/{id}/festival-additional-charges/batch",
    params(("id" = i32, Path, description = "Hotel fee ID")),
    request_body = BatchEditDto<FestivalAdditionalChargeDto>,
    responses(
        (status = 200, description = "Festival surcharges after the batch", body = ApiResponse<Vec<FestivalAdditionalCharge>>),
        (status = 404, description = "Hotel fee or surcharge not found")
    ),
    tag = "hotels"
)]
pub async fn edit_festival_additional_charges(
    State(service): State<Arc<HotelFeeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<FestivalAdditionalChargeDto>>,
) -> Result<Json<ApiResponse<Vec<FestivalAdditionalCharge>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let rows = service.edit_festival_additional_charges(id, &batch).await?;
    Ok(Json(ApiResponse::success(rows)))
}
