use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::attractions::dtos::{AttractionDto, AttractionFeeDto, AttractionSearchQuery};
use crate::features::attractions::models::{Attraction, AttractionFee};
use crate::features::attractions::services::AttractionService;
use crate::shared::types::{ApiResponse, SearchResult};

#[utoipa::path(
    get,
    path = "/ota/api/v1/attractions",
    params(AttractionSearchQuery),
    responses(
        (status = 200, description = "Page of attractions", body = ApiResponse<SearchResult<Attraction>>),
    ),
    tag = "attractions"
)]
pub async fn search_attractions(
    State(service): State<Arc<AttractionService>>,
    AppQuery(query): AppQuery<AttractionSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<Attraction>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/attractions",
    request_body = AttractionDto,
    responses(
        (status = 200, description = "Attraction created", body = ApiResponse<Attraction>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country or city not found"),
        (status = 409, description = "Attraction name, name_en or nickname_en duplicated")
    ),
    tag = "attractions"
)]
pub async fn create_attraction(
    State(service): State<Arc<AttractionService>>,
    AppJson(dto): AppJson<AttractionDto>,
) -> Result<Json<ApiResponse<Attraction>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let attraction = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(attraction)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/attractions/{id}",
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Attraction", body = ApiResponse<Attraction>),
        (status = 404, description = "Attraction not found")
    ),
    tag = "attractions"
)]
pub async fn get_attraction(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Attraction>>> {
    let attraction = service.get(id).await?;
    Ok(Json(ApiResponse::success(attraction)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/attractions/{id}",
    params(("id" = i32, Path, description = "Attraction ID")),
    request_body = AttractionDto,
    responses(
        (status = 200, description = "Attraction updated", body = ApiResponse<Attraction>),
        (status = 404, description = "Attraction, country or city not found"),
        (status = 409, description = "Attraction name, name_en or nickname_en duplicated")
    ),
    tag = "attractions"
)]
pub async fn update_attraction(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<AttractionDto>,
) -> Result<Json<ApiResponse<Attraction>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let attraction = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(attraction)))
}

/// Delete an attraction with its fee
#[utoipa::path(
    delete,
    path = "/ota/api/v1/attractions/{id}",
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Attraction deleted"),
        (status = 404, description = "Attraction not found")
    ),
    tag = "attractions"
)]
pub async fn delete_attraction(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/attractions/{id}/fee",
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Ticket prices of the attraction", body = ApiResponse<AttractionFee>),
        (status = 404, description = "Attraction fee not found")
    ),
    tag = "attractions"
)]
pub async fn get_attraction_fee(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<AttractionFee>>> {
    let fee = service.get_fee(id).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/attractions/{id}/fee",
    params(("id" = i32, Path, description = "Attraction ID")),
    request_body = AttractionFeeDto,
    responses(
        (status = 200, description = "Fee created", body = ApiResponse<AttractionFee>),
        (status = 404, description = "Attraction not found"),
        (status = 409, description = "Attraction already has a fee")
    ),
    tag = "attractions"
)]
pub async fn create_attraction_fee(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<AttractionFeeDto>,
) -> Result<Json<ApiResponse<AttractionFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.create_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/attraction-fees/{id}",
    params(("id" = i32, Path, description = "Attraction fee ID")),
    request_body = AttractionFeeDto,
    responses(
        (status = 200, description = "Fee updated", body = ApiResponse<AttractionFee>),
        (status = 404, description = "Attraction fee not found")
    ),
    tag = "attractions"
)]
pub async fn update_attraction_fee(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<AttractionFeeDto>,
) -> Result<Json<ApiResponse<AttractionFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.update_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/attraction-fees/{id}",
    params(("id" = i32, Path, description = "Attraction fee ID")),
    responses(
        (status = 200, description = "Fee deleted"),
        (status = 404, description = "Attraction fee not found")
    ),
    tag = "attractions"
)]
pub async fn delete_attraction_fee(
    State(service): State<Arc<AttractionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_fee(id).await?;
    Ok(Json(ApiResponse::ok()))
}
